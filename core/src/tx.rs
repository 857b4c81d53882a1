//! Logistics transactions under `/tx/*`.
//!
//! Unlike the CRUD resources, a transaction is a single POST to a fixed
//! action path: an operation header plus (for the dispatch operations) a list
//! of line items, acknowledged with an operation-specific payload inside the
//! usual envelope. The payload type itself implements [`Transaction`].

use serde::{Deserialize, Serialize};

use crate::client::Transaction;

// --- Registrar lote de planta -------------------------------------------

/// Raw-material intake line for a plant lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntradaLotePlanta {
    pub lote_campo_id: i64,
    pub peso_entrada_t: f64,
}

/// `POST /tx/planta/lote-planta` — open a plant lot from one or more field
///-lot intakes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarLotePlanta {
    pub codigo_lote_planta: String,
    pub planta_id: i64,
    pub fecha_inicio: String,
    pub entradas: Vec<EntradaLotePlanta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotePlantaAck {
    pub codigo_lote_planta: String,
    pub planta_id: i64,
    pub entradas_count: u32,
}

impl Transaction for RegistrarLotePlanta {
    const PATH: &'static str = "/tx/planta/lote-planta";
    type Ack = LotePlantaAck;
}

// --- Registrar lote de salida (y envío opcional) -------------------------

/// `POST /tx/planta/lote-salida-envio` — register a packed output lot,
/// optionally creating its outbound shipment in the same call (the
/// `crear_envio` flag plus the shipment fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarLoteSalidaEnvio {
    pub codigo_lote_salida: String,
    pub lote_planta_id: i64,
    pub sku: String,
    pub peso_t: f64,
    pub fecha_empaque: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crear_envio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_envio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruta_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportista_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_salida: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoteSalidaEnvioAck {
    pub codigo_lote_salida: String,
    #[serde(default)]
    pub codigo_envio: Option<String>,
    pub crear_envio: bool,
}

impl Transaction for RegistrarLoteSalidaEnvio {
    const PATH: &'static str = "/tx/planta/lote-salida-envio";
    type Ack = LoteSalidaEnvioAck;
}

// --- Despachos y recepción ----------------------------------------------

/// One output lot inside a dispatch manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetalleEnvio {
    pub codigo_lote_salida: String,
    pub cantidad_t: f64,
}

/// `POST /tx/almacen/despachar-al-almacen` — dispatch output lots from a
/// plant to a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DespacharAlmacen {
    pub codigo_envio: String,
    pub transportista_id: i64,
    pub almacen_destino_id: i64,
    pub fecha_salida: String,
    pub detalle: Vec<DetalleEnvio>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvioAck {
    pub codigo_envio: String,
}

impl Transaction for DespacharAlmacen {
    const PATH: &'static str = "/tx/almacen/despachar-al-almacen";
    type Ack = EnvioAck;
}

/// `POST /tx/almacen/recepcionar-envio` — confirm arrival of a shipment at a
/// warehouse. The acknowledgment envelope may carry no `data` at all; the
/// backend's `message` is the interesting part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecepcionarEnvio {
    pub codigo_envio: String,
    pub almacen_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecepcionAck {
    pub ok: bool,
}

impl Transaction for RecepcionarEnvio {
    const PATH: &'static str = "/tx/almacen/recepcionar-envio";
    type Ack = RecepcionAck;
}

/// `POST /tx/almacen/despachar-al-cliente` — dispatch output lots from a
/// warehouse to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DespacharCliente {
    pub codigo_envio: String,
    pub almacen_origen_id: i64,
    pub cliente_id: i64,
    pub transportista_id: i64,
    pub fecha_salida: String,
    pub detalle: Vec<DetalleEnvio>,
}

impl Transaction for DespacharCliente {
    const PATH: &'static str = "/tx/almacen/despachar-al-cliente";
    type Ack = EnvioAck;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lote_planta_serializes_header_and_lines() {
        let tx = RegistrarLotePlanta {
            codigo_lote_planta: "LP-2026-001".to_string(),
            planta_id: 1,
            fecha_inicio: "2026-01-10".to_string(),
            entradas: vec![
                EntradaLotePlanta {
                    lote_campo_id: 10,
                    peso_entrada_t: 4.2,
                },
                EntradaLotePlanta {
                    lote_campo_id: 11,
                    peso_entrada_t: 1.8,
                },
            ],
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["codigo_lote_planta"], "LP-2026-001");
        assert_eq!(json["entradas"].as_array().unwrap().len(), 2);
        assert_eq!(json["entradas"][0]["lote_campo_id"], 10);
    }

    #[test]
    fn lote_salida_without_envio_omits_shipment_fields() {
        let tx = RegistrarLoteSalidaEnvio {
            codigo_lote_salida: "LS-0001".to_string(),
            lote_planta_id: 5,
            sku: "PAPA-PREMIUM-10KG".to_string(),
            peso_t: 12.0,
            fecha_empaque: "2026-02-01".to_string(),
            crear_envio: None,
            codigo_envio: None,
            ruta_id: None,
            transportista_id: None,
            fecha_salida: None,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("crear_envio").is_none());
        assert!(json.get("codigo_envio").is_none());
        assert_eq!(json["sku"], "PAPA-PREMIUM-10KG");
    }

    #[test]
    fn lote_salida_ack_tolerates_null_codigo_envio() {
        let ack: LoteSalidaEnvioAck = serde_json::from_str(
            r#"{"codigo_lote_salida":"LS-0001","codigo_envio":null,"crear_envio":false}"#,
        )
        .unwrap();
        assert!(ack.codigo_envio.is_none());
        assert!(!ack.crear_envio);
    }

    #[test]
    fn despacho_paths_are_fixed_action_paths() {
        assert_eq!(DespacharAlmacen::PATH, "/tx/almacen/despachar-al-almacen");
        assert_eq!(DespacharCliente::PATH, "/tx/almacen/despachar-al-cliente");
        assert_eq!(RecepcionarEnvio::PATH, "/tx/almacen/recepcionar-envio");
    }
}
