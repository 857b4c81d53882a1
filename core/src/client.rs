//! Stateless HTTP request builder and response parser for the centralHub API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Every resource follows the same four-operation contract, so the
//! build/parse pairs are written once, generic over the [`Resource`] trait;
//! a resource module contributes nothing but its paths and DTOs. Transaction
//! endpoints (multi-record logistics actions) get the same treatment through
//! the [`Transaction`] trait.
//!
//! The client never touches the network: `build_*` methods produce
//! [`HttpRequest`] values and `parse_*` methods consume [`HttpResponse`]
//! values, with `Transport` (or a test) doing the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{Envelope, ListEnvelope};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// A CRUD-style backend resource: a collection path plus its wire DTOs.
///
/// Implementors are unit marker types (`Departamentos`, `Municipios`, ...);
/// the records themselves stay plain serde structs.
pub trait Resource {
    /// Collection path relative to the base URL, e.g. `/cat/departamentos`.
    const COLLECTION: &'static str;
    /// Record shape the backend returns for this resource.
    type Record: DeserializeOwned;
    /// Payload accepted by create and update.
    type Payload: Serialize;
}

/// A transaction endpoint: one POST to a fixed action path, acknowledged
/// with an operation-specific payload inside the usual envelope.
pub trait Transaction: Serialize {
    /// Action path relative to the base URL, e.g. `/tx/planta/lote-planta`.
    const PATH: &'static str;
    /// Acknowledgment shape inside the response envelope's `data`.
    type Ack: DeserializeOwned;
}

/// Zero or more `key=value` query filters for a list operation.
///
/// Values are percent-encoded; the whole query string is omitted when no
/// filters are set. The common single free-text filter is `ListFilter::q(..)`.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    params: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The free-text `?q=` filter most catalogs support.
    pub fn q(text: &str) -> Self {
        Self::new().param("q", text)
    }

    /// Append a named filter, e.g. a foreign-key restriction.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Render as `?k1=v1&k2=v2`, or an empty string with no filters.
    pub fn to_query(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("?{}", parts.join("&"))
    }
}

/// Stateless request builder / response parser for the centralHub backend.
///
/// The base URL is fixed at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Default JSON headers applied to every request. Per-call additions are
    /// pushed after these, and executors apply entries in order, so a later
    /// duplicate overrides the default.
    fn default_headers() -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), "application/json".to_string()),
            ("content-type".to_string(), "application/json".to_string()),
        ]
    }

    fn build(&self, method: HttpMethod, path_and_query: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{}", self.base_url, path_and_query),
            headers: Self::default_headers(),
            body,
        }
    }

    fn to_body<P: Serialize>(payload: &P) -> Result<String, ApiError> {
        serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
    }

    // --- build side ---

    pub fn build_list<R: Resource>(&self, filter: &ListFilter) -> HttpRequest {
        let target = format!("{}{}", R::COLLECTION, filter.to_query());
        self.build(HttpMethod::Get, &target, None)
    }

    pub fn build_create<R: Resource>(&self, payload: &R::Payload) -> Result<HttpRequest, ApiError> {
        let body = Self::to_body(payload)?;
        Ok(self.build(HttpMethod::Post, R::COLLECTION, Some(body)))
    }

    pub fn build_update<R: Resource>(
        &self,
        id: i64,
        payload: &R::Payload,
    ) -> Result<HttpRequest, ApiError> {
        let body = Self::to_body(payload)?;
        let target = format!("{}/{id}", R::COLLECTION);
        Ok(self.build(HttpMethod::Put, &target, Some(body)))
    }

    pub fn build_delete<R: Resource>(&self, id: i64) -> HttpRequest {
        let target = format!("{}/{id}", R::COLLECTION);
        self.build(HttpMethod::Delete, &target, None)
    }

    pub fn build_transaction<T: Transaction>(&self, tx: &T) -> Result<HttpRequest, ApiError> {
        let body = Self::to_body(tx)?;
        Ok(self.build(HttpMethod::Post, T::PATH, Some(body)))
    }

    // --- parse side ---

    /// Check the status and decode the body as `T`. The generic pass-through
    /// every typed parser below is built on.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Decode a list response and normalize it to a plain item vector.
    /// Never yields `None`-like results: an unrecognized `data` shape
    /// degrades to an empty vector (see [`crate::envelope::ListData`]).
    pub fn parse_list<R: Resource>(&self, response: HttpResponse) -> Result<Vec<R::Record>, ApiError> {
        let envelope: ListEnvelope<R::Record> = self.parse(response)?;
        Ok(envelope.into_items())
    }

    /// Decode a create/update response down to the record in `data`.
    pub fn parse_record<R: Resource>(&self, response: HttpResponse) -> Result<R::Record, ApiError> {
        let envelope: Envelope<R::Record> = self.parse(response)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Deserialization("response envelope has no data".to_string()))
    }

    /// Check the status of a delete response; the body is discarded.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Decode a transaction acknowledgment. The whole envelope is returned
    /// because callers read `message`, and some acks carry no `data` at all.
    pub fn parse_transaction<T: Transaction>(
        &self,
        response: HttpResponse,
    ) -> Result<Envelope<T::Ack>, ApiError> {
        self.parse(response)
    }
}

/// Map a non-2xx status to `ApiError::Http`, with the error body parsed for
/// detail when it is JSON.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::from_status(response.status, &response.body))
}
