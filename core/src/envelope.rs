//! Response envelopes and list normalization.
//!
//! # Design
//! Every successful centralHub response wraps its payload in
//! `{ status, message?, data }`. List endpoints are inconsistent about the
//! shape of `data`: some return the items directly, others return a Laravel
//! paginator whose own `data` field holds the items. [`ListData`] models the
//! possibilities as an explicit sum type decoded with `#[serde(untagged)]`,
//! and [`ListData::into_items`] collapses them into a plain `Vec` — never
//! failing, degrading to empty when the shape is unrecognized.

use serde::{Deserialize, Serialize};

/// Generic wrapper for a successful backend response.
///
/// `data` is `Option` because delete-style operations and some transaction
/// acknowledgments legitimately omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope specialization for list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: ListData<T>,
}

impl<T> ListEnvelope<T> {
    /// Normalize the payload into a plain item list. See
    /// [`ListData::into_items`].
    pub fn into_items(self) -> Vec<T> {
        self.data.into_items()
    }
}

/// The recognized shapes of a list endpoint's `data` field, tried in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    /// The items directly: `data: [ ... ]`.
    Flat(Vec<T>),
    /// A paginator: `data: { data: [ ... ], current_page, total, ... }`.
    Paged(Page<T>),
    /// Anything else, kept verbatim for the diagnostic log.
    Unrecognized(serde_json::Value),
}

/// A server-side paginator. Only the nested items matter to the client;
/// sibling metadata (`current_page`, `total`, links) is dropped on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
}

impl<T> Default for ListData<T> {
    fn default() -> Self {
        ListData::Unrecognized(serde_json::Value::Null)
    }
}

impl<T> ListData<T> {
    /// Extract the item list, whichever shape the backend chose.
    ///
    /// An unrecognized shape yields an empty list instead of an error so a
    /// misbehaving backend cannot take the caller down with it; the offending
    /// payload is logged at `warn` so the mismatch is still visible.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListData::Flat(items) => items,
            ListData::Paged(page) => page.data,
            ListData::Unrecognized(raw) => {
                log::warn!("unrecognized list payload shape, returning empty list: {raw}");
                Vec::new()
            }
        }
    }
}
