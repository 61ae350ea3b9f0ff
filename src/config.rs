#[derive(Debug, Clone)]
pub struct KvStoreConfig {
    /// Key under which the full cookie snapshot lives in the remote store.
    pub key: String,
    /// Write snapshots pretty-printed. Compact JSON is the default; pretty
    /// output is handy when inspecting the remote record by hand.
    pub pretty: bool,
}

impl Default for KvStoreConfig {
    fn default() -> Self {
        Self {
            key: "cookie".to_string(),      // Default record key
            pretty: false,
        }
    }
}

impl KvStoreConfig {
    /// Config with a custom record key and compact snapshots.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}
