use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::KvBackend;

/// In-memory key-value backend (no persistence). Used as the reference
/// implementation in tests and wherever jar semantics are wanted without a
/// remote store.
#[derive(Debug, Default)]
pub struct InMemoryKvBackend {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryKvBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, bypassing the trait. Handy for tests that need a
    /// pre-existing snapshot before a store is opened.
    pub fn seed(&self, key: impl Into<String>, value: Vec<u8>) {
        self.records.lock().unwrap().insert(key.into(), value);
    }
}

#[async_trait]
impl KvBackend for InMemoryKvBackend {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> anyhow::Result<()> {
        self.records.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}
