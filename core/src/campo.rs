//! Field-side resources under `/campo/*`: producers, field lots, and sensor
//! readings. Same conventions as [`crate::catalog`].

use serde::{Deserialize, Serialize};

use crate::client::Resource;

// --- Productores ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Productor {
    pub productor_id: i64,
    pub codigo_productor: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductorPayload {
    pub codigo_productor: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

pub enum Productores {}

impl Resource for Productores {
    const COLLECTION: &'static str = "/campo/productores";
    type Record = Productor;
    type Payload = ProductorPayload;
}

// --- Lotes de campo ------------------------------------------------------

/// A sowing/harvest lot. Dates are ISO strings owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoteCampo {
    pub lote_campo_id: i64,
    pub codigo_lote_campo: String,
    pub productor_id: i64,
    pub variedad_id: i64,
    pub superficie_ha: f64,
    pub fecha_siembra: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_cosecha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humedad_suelo_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteCampoPayload {
    pub codigo_lote_campo: String,
    pub productor_id: i64,
    pub variedad_id: i64,
    pub superficie_ha: f64,
    pub fecha_siembra: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_cosecha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humedad_suelo_pct: Option<f64>,
}

pub enum LotesCampo {}

impl Resource for LotesCampo {
    const COLLECTION: &'static str = "/campo/lotes";
    type Record = LoteCampo;
    type Payload = LoteCampoPayload;
}

// --- Lecturas de sensor --------------------------------------------------

/// Sensor reading attached to a field lot. List filters: `lote_campo_id`,
/// `tipo`, `desde`, `hasta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorLectura {
    pub sensor_lectura_id: i64,
    pub lote_campo_id: i64,
    pub fecha_hora: String,
    /// Reading kind, e.g. `"HUMEDAD"` or `"TEMP"`.
    pub tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_num: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_texto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LecturaPayload {
    pub lote_campo_id: i64,
    pub fecha_hora: String,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_num: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_texto: Option<String>,
}

pub enum Lecturas {}

impl Resource for Lecturas {
    const COLLECTION: &'static str = "/campo/lecturas";
    type Record = SensorLectura;
    type Payload = LecturaPayload;
}
