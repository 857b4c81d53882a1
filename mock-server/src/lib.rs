//! In-memory double of the centralHub backend for integration tests.
//!
//! Mirrors the real backend's conventions: every success is wrapped in
//! `{ status: "ok", message?, data }`, validation failures return 422 with a
//! Laravel-style `{ message, errors }` body, and list endpoints come in both
//! flavors — departamentos returns the items directly, municipios returns a
//! paginator — so clients exercise both normalization paths.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Departamento {
    pub departamento_id: i64,
    pub nombre: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Municipio {
    pub municipio_id: i64,
    pub departamento_id: i64,
    pub nombre: String,
}

#[derive(Deserialize)]
pub struct DepartamentoInput {
    #[serde(default)]
    pub nombre: String,
}

#[derive(Deserialize)]
pub struct MunicipioInput {
    pub departamento_id: i64,
    #[serde(default)]
    pub nombre: String,
}

#[derive(Deserialize)]
pub struct LotePlantaInput {
    pub codigo_lote_planta: String,
    pub planta_id: i64,
    #[allow(dead_code)]
    pub fecha_inicio: String,
    #[serde(default)]
    pub entradas: Vec<EntradaInput>,
}

#[derive(Deserialize)]
pub struct EntradaInput {
    #[allow(dead_code)]
    pub lote_campo_id: i64,
    #[allow(dead_code)]
    pub peso_entrada_t: f64,
}

#[derive(Deserialize)]
pub struct RecepcionInput {
    pub codigo_envio: String,
    #[allow(dead_code)]
    pub almacen_id: i64,
}

#[derive(Default)]
pub struct Db {
    pub departamentos: HashMap<i64, Departamento>,
    pub municipios: HashMap<i64, Municipio>,
    next_id: i64,
}

impl Db {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub departamento_id: Option<i64>,
}

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db::default()));
    Router::new()
        .route(
            "/cat/departamentos",
            get(list_departamentos).post(create_departamento),
        )
        .route(
            "/cat/departamentos/{id}",
            axum::routing::put(update_departamento).delete(delete_departamento),
        )
        .route("/cat/municipios", get(list_municipios).post(create_municipio))
        .route("/tx/planta/lote-planta", post(registrar_lote_planta))
        .route("/tx/almacen/recepcionar-envio", post(recepcionar_envio))
        .route("/debug/error", get(debug_error))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `{ status: "ok", data }` envelope.
fn ok(data: Value) -> Json<Value> {
    Json(json!({ "status": "ok", "data": data }))
}

/// Laravel-style validation failure: 422 with `{ message, errors }`.
fn validation_error(field: &str, detail: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "message": "Los datos proporcionados no son válidos.",
            "errors": { field: [detail] },
        })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "error", "message": "Recurso no encontrado" })),
    )
        .into_response()
}

// --- /cat/departamentos --------------------------------------------------

/// Flat list shape: `data` is the array itself. Supports `?q=`.
async fn list_departamentos(
    State(db): State<SharedDb>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let db = db.read().await;
    let mut items: Vec<Departamento> = db
        .departamentos
        .values()
        .filter(|d| matches_q(&d.nombre, &params.q))
        .cloned()
        .collect();
    items.sort_by_key(|d| d.departamento_id);
    ok(json!(items))
}

async fn create_departamento(
    State(db): State<SharedDb>,
    Json(input): Json<DepartamentoInput>,
) -> Response {
    if input.nombre.trim().is_empty() {
        return validation_error("nombre", "El campo nombre es obligatorio.");
    }
    let mut db = db.write().await;
    let id = db.next_id();
    let dep = Departamento {
        departamento_id: id,
        nombre: input.nombre,
    };
    db.departamentos.insert(id, dep.clone());
    (StatusCode::CREATED, ok(json!(dep))).into_response()
}

async fn update_departamento(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    Json(input): Json<DepartamentoInput>,
) -> Response {
    if input.nombre.trim().is_empty() {
        return validation_error("nombre", "El campo nombre es obligatorio.");
    }
    let mut db = db.write().await;
    match db.departamentos.get_mut(&id) {
        Some(dep) => {
            dep.nombre = input.nombre;
            ok(json!(dep.clone())).into_response()
        }
        None => not_found(),
    }
}

async fn delete_departamento(State(db): State<SharedDb>, Path(id): Path<i64>) -> Response {
    let mut db = db.write().await;
    match db.departamentos.remove(&id) {
        // Delete responses carry no `data`, matching the real backend.
        Some(_) => Json(json!({ "status": "ok", "message": "Registro eliminado" })).into_response(),
        None => not_found(),
    }
}

// --- /cat/municipios -----------------------------------------------------

/// Paginated list shape: `data` is a paginator whose own `data` holds the
/// items. Supports `?q=` and `?departamento_id=`.
async fn list_municipios(
    State(db): State<SharedDb>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let db = db.read().await;
    let mut items: Vec<Municipio> = db
        .municipios
        .values()
        .filter(|m| matches_q(&m.nombre, &params.q))
        .filter(|m| params.departamento_id.map_or(true, |id| m.departamento_id == id))
        .cloned()
        .collect();
    items.sort_by_key(|m| m.municipio_id);
    let total = items.len();
    ok(json!({
        "data": items,
        "current_page": 1,
        "per_page": 50,
        "total": total,
    }))
}

async fn create_municipio(
    State(db): State<SharedDb>,
    Json(input): Json<MunicipioInput>,
) -> Response {
    if input.nombre.trim().is_empty() {
        return validation_error("nombre", "El campo nombre es obligatorio.");
    }
    let mut db = db.write().await;
    if !db.departamentos.contains_key(&input.departamento_id) {
        return validation_error("departamento_id", "El departamento seleccionado no existe.");
    }
    let id = db.next_id();
    let mun = Municipio {
        municipio_id: id,
        departamento_id: input.departamento_id,
        nombre: input.nombre,
    };
    db.municipios.insert(id, mun.clone());
    (StatusCode::CREATED, ok(json!(mun))).into_response()
}

// --- transactions --------------------------------------------------------

async fn registrar_lote_planta(Json(input): Json<LotePlantaInput>) -> Response {
    if input.entradas.is_empty() {
        return validation_error("entradas", "Debe registrar al menos una entrada.");
    }
    Json(json!({
        "status": "ok",
        "message": "Lote de planta registrado",
        "data": {
            "codigo_lote_planta": input.codigo_lote_planta,
            "planta_id": input.planta_id,
            "entradas_count": input.entradas.len(),
        },
    }))
    .into_response()
}

/// Acknowledgment with no `data` field at all — only `message`.
async fn recepcionar_envio(Json(input): Json<RecepcionInput>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": format!("Envío {} recepcionado", input.codigo_envio),
    }))
}

// --- fixtures ------------------------------------------------------------

/// A 5xx whose body is not JSON, like a crashed upstream would produce.
async fn debug_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Whoops, looks like something went wrong.",
    )
        .into_response()
}

fn matches_q(nombre: &str, q: &Option<String>) -> bool {
    match q {
        Some(q) => nombre.to_lowercase().contains(&q.to_lowercase()),
        None => true,
    }
}
