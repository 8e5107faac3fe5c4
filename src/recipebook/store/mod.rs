//! # Remote Store Layer
//!
//! The [`RemoteStore`] trait is the whole contract the engine relies on: four calls
//! mirroring the REST endpoint.
//!
//! | Call | HTTP | Returns |
//! |------|------|---------|
//! | `list` | `GET <base>` | every record, in store order |
//! | `create` | `POST <base>` | the stored record with its new `_id` |
//! | `update` | `PUT <base>/<id>` | the stored record |
//! | `delete` | `DELETE <base>/<id>` | nothing; status only |
//!
//! ## Implementations
//!
//! - [`http::HttpStore`]: the real thing, JSON over HTTP(S) via `reqwest`.
//! - [`memory::InMemoryStore`]: keeps records in a `Vec`, with switches to make
//!   calls fail. Used to test the engine without a network.

use crate::error::Result;
use crate::model::{Record, RecordId, RecordPayload};
use async_trait::async_trait;

pub mod http;
pub mod memory;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<Record>>;

    /// Create a record; the store assigns the id
    async fn create(&self, payload: &RecordPayload) -> Result<Record>;

    /// Overwrite the editable fields of the record with `id`
    async fn update(&self, id: &RecordId, payload: &RecordPayload) -> Result<Record>;

    /// Remove the record with `id`
    async fn delete(&self, id: &RecordId) -> Result<()>;
}
