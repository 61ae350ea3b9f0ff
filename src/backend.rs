//! Remote key-value backend abstraction.
//!
//! The store adapter does not talk to any particular remote store; it talks
//! to a [`KvBackend`], which is the minimal surface it consumes: fetch one
//! opaque record, overwrite one opaque record. Anything that can do that
//! (Redis, an HTTP blob service, a local file, a test double) can carry the
//! cookie snapshot.
//!
//! ## Design notes
//! - Implementations must be `Send + Sync` and internally synchronized; trait
//!   methods take `&self`. Connection pooling, reconnects, and auth live
//!   entirely inside the implementation.
//! - Every call is attempted exactly once. The adapter performs no retries
//!   and passes failures through verbatim, so implementations should not
//!   retry either unless that is their documented policy.
//! - An absent record is `Ok(None)`, never an error.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;

pub use memory::InMemoryKvBackend;

/// Object-safe handle to a key-value backend.
pub type KvBackendHandle = Arc<dyn KvBackend>;

/// Minimal remote key-value surface consumed by the store adapter.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Retrieves the record stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>>;

    /// Overwrites the record stored under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> anyhow::Result<()>;
}
