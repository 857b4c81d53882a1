//! High-level facade: build, execute, parse in one call.
//!
//! # Design
//! `CentralHub` pairs the stateless [`ApiClient`] with a [`Transport`] so
//! callers get each operation (`list`/`create`/`update`/`delete` plus
//! `submit` for transactions) as a single blocking call. Each operation
//! is one request/response exchange; there is no retry, batching, or
//! cross-call state. Callers that fan out several independent calls combine
//! the outcomes with [`join_all`].

use crate::client::{ApiClient, ListFilter, Resource, Transaction};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;

/// Blocking client for the centralHub backend.
#[derive(Clone)]
pub struct CentralHub {
    client: ApiClient,
    transport: Transport,
}

impl CentralHub {
    /// Build a client for the given base URL. The URL is fixed for the
    /// lifetime of the value; construct a new `CentralHub` to point
    /// elsewhere.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// List a resource's records, optionally filtered. Returns an empty
    /// vector on no match or on an unrecognized list payload shape.
    pub fn list<R: Resource>(&self, filter: &ListFilter) -> Result<Vec<R::Record>, ApiError> {
        let req = self.client.build_list::<R>(filter);
        let resp = self.transport.execute(&req)?;
        self.client.parse_list::<R>(resp)
    }

    /// Create a record, returning the backend's stored copy.
    pub fn create<R: Resource>(&self, payload: &R::Payload) -> Result<R::Record, ApiError> {
        let req = self.client.build_create::<R>(payload)?;
        let resp = self.transport.execute(&req)?;
        self.client.parse_record::<R>(resp)
    }

    /// Replace a record's fields, returning the updated copy.
    pub fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> Result<R::Record, ApiError> {
        let req = self.client.build_update::<R>(id, payload)?;
        let resp = self.transport.execute(&req)?;
        self.client.parse_record::<R>(resp)
    }

    /// Delete a record. The response body is discarded.
    pub fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError> {
        let req = self.client.build_delete::<R>(id);
        let resp = self.transport.execute(&req)?;
        self.client.parse_delete(resp)
    }

    /// Submit a logistics transaction, returning the full acknowledgment
    /// envelope (callers read `message`, and some acks carry no `data`).
    pub fn submit<T: Transaction>(&self, tx: &T) -> Result<Envelope<T::Ack>, ApiError> {
        let req = self.client.build_transaction(tx)?;
        let resp = self.transport.execute(&req)?;
        self.client.parse_transaction::<T>(resp)
    }
}

/// All-or-nothing join over the outcomes of independent calls: the first
/// error wins and any completed partial results are discarded. Issuing the
/// calls concurrently (threads) is the caller's business; this only defines
/// the combination policy.
pub fn join_all<T>(
    results: impl IntoIterator<Item = Result<T, ApiError>>,
) -> Result<Vec<T>, ApiError> {
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_all_collects_successes_in_order() {
        let results: [Result<i32, ApiError>; 3] = [Ok(1), Ok(2), Ok(3)];
        let joined = join_all(results).unwrap();
        assert_eq!(joined, vec![1, 2, 3]);
    }

    #[test]
    fn join_all_discards_partial_results_on_failure() {
        let results = [
            Ok(vec!["La Paz"]),
            Err(ApiError::from_status(500, "")),
            Ok(vec!["Sacaba"]),
        ];
        let err = join_all(results).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }
}
