//! HTTP transport types for the build/parse split.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The client
//! builds `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — executing the actual round-trip is the job of
//! [`crate::transport::Transport`] (or any other executor the caller plugs
//! in). This separation keeps request construction and response
//! interpretation deterministic and testable offline.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! between the builder, the executor, and the parser.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods. `path` is the full request target
/// (base URL + collection path + query string). `headers` always starts with
/// the JSON defaults (`accept`, `content-type`); when a header name repeats,
/// the later entry wins.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an executor after performing an `HttpRequest`, then handed to
/// `ApiClient::parse_*` methods for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
