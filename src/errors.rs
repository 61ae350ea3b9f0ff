#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The remote key-value store failed to answer a get/set.
    #[error("backend error: {0}")]
    Backend(anyhow::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
