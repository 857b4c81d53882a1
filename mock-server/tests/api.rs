use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- departamentos (flat list shape) ---

#[tokio::test]
async fn departamentos_list_is_enveloped_flat_array() {
    let app = app();
    let resp = app.oneshot(get("/cat/departamentos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn departamentos_create_then_filtered_list() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cat/departamentos", r#"{"nombre":"La Paz"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["nombre"], "La Paz");

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cat/departamentos", r#"{"nombre":"Oruro"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get("/cat/departamentos?q=oru"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["nombre"], "Oruro");
}

#[tokio::test]
async fn departamentos_create_rejects_empty_nombre() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/cat/departamentos", r#"{"nombre":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert!(body["errors"]["nombre"][0]
        .as_str()
        .unwrap()
        .contains("obligatorio"));
}

#[tokio::test]
async fn departamentos_delete_returns_envelope_without_data() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cat/departamentos", r#"{"nombre":"Tarija"}"#))
        .await
        .unwrap();
    let created = body_json(resp).await;
    let id = created["data"]["departamento_id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request("DELETE", &format!("/cat/departamentos/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body.get("data").is_none());

    let resp = app
        .oneshot(json_request("DELETE", &format!("/cat/departamentos/{id}"), ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn departamentos_update_missing_id_is_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/cat/departamentos/42",
            r#"{"nombre":"Beni"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- municipios (paginated list shape) ---

#[tokio::test]
async fn municipios_list_is_paginated() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cat/departamentos", r#"{"nombre":"La Paz"}"#))
        .await
        .unwrap();
    let dep_id = body_json(resp).await["data"]["departamento_id"]
        .as_i64()
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/cat/municipios",
            &format!(r#"{{"departamento_id":{dep_id},"nombre":"El Alto"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(get("/cat/municipios")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["nombre"], "El Alto");
}

#[tokio::test]
async fn municipios_create_requires_existing_departamento() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/cat/municipios",
            r#"{"departamento_id":99,"nombre":"Sacaba"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert!(body["errors"]["departamento_id"].is_array());
}

// --- transactions ---

#[tokio::test]
async fn lote_planta_ack_counts_entradas() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/tx/planta/lote-planta",
            r#"{"codigo_lote_planta":"LP-1","planta_id":2,"fecha_inicio":"2026-01-10","entradas":[{"lote_campo_id":1,"peso_entrada_t":3.0}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["entradas_count"], 1);
    assert_eq!(body["data"]["planta_id"], 2);
}

#[tokio::test]
async fn lote_planta_without_entradas_is_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/tx/planta/lote-planta",
            r#"{"codigo_lote_planta":"LP-2","planta_id":2,"fecha_inicio":"2026-01-10"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn recepcion_response_has_message_but_no_data() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/tx/almacen/recepcionar-envio",
            r#"{"codigo_envio":"ENV-7","almacen_id":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().unwrap().contains("ENV-7"));
    assert!(body.get("data").is_none());
}

// --- fixtures ---

#[tokio::test]
async fn debug_error_body_is_not_json() {
    let app = app();
    let resp = app.oneshot(get("/debug/error")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}
