//! Remote-backed cookie store.
//!
//! `KvCookieStore` keeps the cookie index in memory and mirrors it to a
//! remote key-value store as a single JSON snapshot:
//!
//! - **Open**: one `get` fetches any existing snapshot before the store is
//!   handed out. An absent record starts an empty index; a record that fails
//!   to decode, or a transport failure, fails [`KvCookieStore::open`]
//!   outright. The store never silently starts empty on error.
//! - **Reads** are answered entirely from the in-memory index. The backend is
//!   never read again after open.
//! - **Writes** mutate the index first, then rewrite the whole snapshot with
//!   one `set`. There is no diffing and no versioning.
//!
//! ## Concurrency
//! The index sits behind a `std::sync::RwLock`; the lock is released before
//! the snapshot write is awaited. Two back-to-back mutations therefore see
//! each other's in-memory effects immediately, while their snapshot writes
//! race: whichever `set` completes last wins at the blob level. Instances of
//! this store in different processes sharing one record key clobber each
//! other the same way.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::backend::KvBackendHandle;
use crate::config::KvStoreConfig;
use crate::cookie::{observe_creation_index, Cookie};
use crate::errors::StoreError;
use crate::index::CookieIndex;
use crate::matching::{canonical_domain, permute_domain};
use crate::store::CookieStore;

/// Cookie store persisting to a remote key-value backend.
pub struct KvCookieStore {
    /// Remote store carrying the snapshot record.
    backend: KvBackendHandle,
    /// Key of the snapshot record.
    key: String,
    /// Pretty-print snapshots.
    pretty: bool,
    /// In-memory index answering all lookups.
    index: RwLock<CookieIndex>,
}

impl std::fmt::Debug for KvCookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvCookieStore")
            .field("key", &self.key)
            .field("pretty", &self.pretty)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl KvCookieStore {
    /// Opens a store over `backend`, loading any existing snapshot under the
    /// configured key. The returned store is ready: every subsequent read is
    /// served from the loaded index.
    ///
    /// Fails on backend transport errors and on snapshots that do not decode.
    /// An absent snapshot is not an error and yields an empty store.
    pub async fn open(
        backend: KvBackendHandle,
        config: KvStoreConfig,
    ) -> Result<Arc<Self>, StoreError> {
        let index = match backend.get(&config.key).await.map_err(StoreError::Backend)? {
            Some(bytes) => {
                let index: CookieIndex = serde_json::from_slice(&bytes)?;
                debug!(
                    "loaded snapshot '{}': {} cookie(s)",
                    config.key,
                    index.len()
                );
                index
            }
            None => {
                debug!("no snapshot under '{}', starting empty", config.key);
                CookieIndex::new()
            }
        };

        // New cookies must enumerate after everything we just restored.
        observe_creation_index(index.max_creation_index());

        Ok(Arc::new(Self {
            backend,
            key: config.key,
            pretty: config.pretty,
            index: RwLock::new(index),
        }))
    }

    /// [`open`](Self::open) with the default config (record key `"cookie"`).
    pub async fn open_default(backend: KvBackendHandle) -> Result<Arc<Self>, StoreError> {
        Self::open(backend, KvStoreConfig::default()).await
    }

    /// Every cookie applicable to a request for `url`, derived from its host
    /// and path. URLs without a host (e.g. `data:`) have no cookies.
    pub async fn cookies_for_url(&self, url: &Url) -> Result<Vec<Cookie>, StoreError> {
        let Some(host) = url.host_str() else {
            return Ok(Vec::new());
        };
        let domain = canonical_domain(host);
        self.find_cookies(&domain, Some(url.path())).await
    }

    fn encode(&self, index: &CookieIndex) -> Result<Vec<u8>, StoreError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(index)?
        } else {
            serde_json::to_vec(index)?
        };
        Ok(bytes)
    }

    /// Writes one full snapshot to the backend.
    async fn persist(&self, snapshot: Vec<u8>) -> Result<(), StoreError> {
        debug!("persisting snapshot '{}' ({} bytes)", self.key, snapshot.len());
        self.backend
            .set(&self.key, snapshot)
            .await
            .map_err(StoreError::Backend)
    }
}

#[async_trait]
impl CookieStore for KvCookieStore {
    async fn find_cookie(
        &self,
        domain: &str,
        path: &str,
        name: &str,
    ) -> Result<Option<Cookie>, StoreError> {
        let index = self.index.read().unwrap();
        Ok(index.get(domain, path, name).cloned())
    }

    async fn find_cookies(
        &self,
        domain: &str,
        path: Option<&str>,
    ) -> Result<Vec<Cookie>, StoreError> {
        if domain.is_empty() {
            return Ok(Vec::new());
        }

        let domains = permute_domain(domain).unwrap_or_else(|| vec![domain.to_string()]);
        debug!("find_cookies {domain:?} {path:?} -> permutations {domains:?}");

        let index = self.index.read().unwrap();
        let mut results = Vec::new();
        for cur_domain in &domains {
            if !index.has_domain(cur_domain) {
                continue;
            }
            // Each permutation with entries replaces the previous results
            // rather than extending them: only the last suffix that has
            // entries contributes to the answer.
            results = match path {
                None | Some("") => index.cookies_for_domain(cur_domain),
                Some(path) => index.cookies_matching_path(cur_domain, path),
            };
        }
        Ok(results)
    }

    async fn put_cookie(&self, cookie: Cookie) -> Result<(), StoreError> {
        let snapshot = {
            let mut index = self.index.write().unwrap();
            index.insert(cookie);
            self.encode(&index)?
        };
        self.persist(snapshot).await
    }

    async fn update_cookie(&self, _old: &Cookie, new: Cookie) -> Result<(), StoreError> {
        // No equality shortcut here: the new record is always written, even
        // when it only differs in access-time bookkeeping.
        self.put_cookie(new).await
    }

    async fn remove_cookie(
        &self,
        domain: &str,
        path: &str,
        name: &str,
    ) -> Result<(), StoreError> {
        let snapshot = {
            let mut index = self.index.write().unwrap();
            index.remove(domain, path, name);
            self.encode(&index)?
        };
        self.persist(snapshot).await
    }

    async fn remove_cookies(&self, domain: &str, path: Option<&str>) -> Result<(), StoreError> {
        let snapshot = {
            let mut index = self.index.write().unwrap();
            index.remove_many(domain, path);
            self.encode(&index)?
        };
        self.persist(snapshot).await
    }

    async fn get_all_cookies(&self) -> Result<Vec<Cookie>, StoreError> {
        let index = self.index.read().unwrap();
        Ok(index.all_cookies())
    }
}
