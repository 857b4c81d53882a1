//! Blocking HTTP executor backed by ureq.
//!
//! # Design
//! One network call per `execute`; no retries, no caching, no timeout beyond
//! ureq's defaults. The agent is configured with `http_status_as_error(false)`
//! so 4xx/5xx responses come back as data for `ApiClient` to interpret —
//! status handling is the client's contract, not the transport's. Only a
//! failed exchange (connect, DNS, broken read) produces an error here, and it
//! is always `ApiError::Transport`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Blocking executor turning an [`HttpRequest`] into an [`HttpResponse`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform the request. Headers are applied in order, so later entries
    /// override earlier ones with the same name.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (&req.method, &req.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Delete, _) => {
                let mut builder = self.agent.delete(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
