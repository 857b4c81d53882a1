//! Typed API client for the centralHub logistics backend.
//!
//! # Overview
//! centralHub exposes REST-style catalog, field, and transaction endpoints,
//! every success wrapped in a `{ status, message?, data }` envelope. This
//! crate gives each resource the same four typed operations (list with
//! optional filters, create, update, delete) plus a submit call for the
//! multi-record logistics transactions, all reporting failures through one
//! [`ApiError`] type.
//!
//! # Design
//! - [`ApiClient`] is stateless — it holds only the base URL, fixed at
//!   construction. Request building and response parsing are split from I/O,
//!   so the interesting logic runs in tests without a network.
//! - [`Transport`] executes one blocking HTTP exchange per call; no retries,
//!   caching, or timeouts beyond the transport's defaults.
//! - [`CentralHub`] composes the two for callers that just want the
//!   round-trip.
//! - List payloads come back flat or wrapped in a server-side paginator;
//!   [`envelope::ListData`] decodes both (plus a never-failing fallback) and
//!   normalizes to a plain `Vec`.
//! - Resources and transactions are described by the [`Resource`] and
//!   [`Transaction`] traits; adding an endpoint means adding DTOs and a
//!   marker impl, not another hand-written CRUD module.

pub mod campo;
pub mod catalog;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod hub;
pub mod transport;
pub mod tx;

pub use client::{ApiClient, ListFilter, Resource, Transaction};
pub use envelope::{Envelope, ListData, ListEnvelope, Page};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use hub::{join_all, CentralHub};
pub use transport::Transport;
