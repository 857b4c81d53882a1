//! Catalog resources under `/cat/*`.
//!
//! Records mirror the backend's wire fields exactly (Spanish names, Laravel
//! integer ids, optional `created_at`/`updated_at` timestamps); the client
//! never interprets them beyond (de)serialization. Each resource gets a unit
//! marker type implementing [`Resource`] with its collection path and DTOs.

use serde::{Deserialize, Serialize};

use crate::client::Resource;

// --- Departamentos -------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departamento {
    pub departamento_id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartamentoPayload {
    pub nombre: String,
}

pub enum Departamentos {}

impl Resource for Departamentos {
    const COLLECTION: &'static str = "/cat/departamentos";
    type Record = Departamento;
    type Payload = DepartamentoPayload;
}

// --- Municipios ----------------------------------------------------------

/// List filters: `q` (free text) and `departamento_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    pub municipio_id: i64,
    pub departamento_id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MunicipioPayload {
    pub departamento_id: i64,
    pub nombre: String,
}

pub enum Municipios {}

impl Resource for Municipios {
    const COLLECTION: &'static str = "/cat/municipios";
    type Record = Municipio;
    type Payload = MunicipioPayload;
}

// --- Variedades ----------------------------------------------------------

/// Potato variety with its crop-cycle day range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariedadPapa {
    pub variedad_id: i64,
    pub codigo_variedad: String,
    pub nombre_comercial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aptitud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciclo_dias_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciclo_dias_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariedadPayload {
    pub codigo_variedad: String,
    pub nombre_comercial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aptitud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_dias_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_dias_max: Option<i64>,
}

pub enum Variedades {}

impl Resource for Variedades {
    const COLLECTION: &'static str = "/cat/variedades";
    type Record = VariedadPapa;
    type Payload = VariedadPayload;
}

// --- Plantas -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planta {
    pub planta_id: i64,
    pub codigo_planta: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantaPayload {
    pub codigo_planta: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

pub enum Plantas {}

impl Resource for Plantas {
    const COLLECTION: &'static str = "/cat/plantas";
    type Record = Planta;
    type Payload = PlantaPayload;
}

// --- Clientes ------------------------------------------------------------

/// `tipo` is a backend-owned tag such as `"MAYORISTA"` or `"RETAIL"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub cliente_id: i64,
    pub codigo_cliente: String,
    pub nombre: String,
    pub tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipio_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientePayload {
    pub codigo_cliente: String,
    pub nombre: String,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipio_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

pub enum Clientes {}

impl Resource for Clientes {
    const COLLECTION: &'static str = "/cat/clientes";
    type Record = Cliente;
    type Payload = ClientePayload;
}

// --- Transportistas ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportista {
    pub transportista_id: i64,
    pub codigo_transp: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nro_licencia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportistaPayload {
    pub codigo_transp: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nro_licencia: Option<String>,
}

pub enum Transportistas {}

impl Resource for Transportistas {
    const COLLECTION: &'static str = "/cat/transportistas";
    type Record = Transportista;
    type Payload = TransportistaPayload;
}

// --- Almacenes -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Almacen {
    pub almacen_id: i64,
    pub codigo_almacen: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlmacenPayload {
    pub codigo_almacen: String,
    pub nombre: String,
    pub municipio_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

pub enum Almacenes {}

impl Resource for Almacenes {
    const COLLECTION: &'static str = "/cat/almacenes";
    type Record = Almacen;
    type Payload = AlmacenPayload;
}
