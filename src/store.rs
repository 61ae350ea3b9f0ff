//! Cookie store contract and the remote-backed implementation.
//!
//! A **cookie store** is the pluggable persistence provider behind a cookie
//! jar: the jar decides *whether* a cookie should be set or sent, the store
//! decides *where it lives*. This module defines the [`CookieStore`] trait,
//! the full storage-provider contract (find one/many, put, update, remove
//! one/many, get all), and exports [`KvCookieStore`], which keeps the
//! cookies in a remote key-value store.
//!
//! ## Design notes
//! - Stores are `Send + Sync` and internally synchronized; all methods take
//!   `&self` behind a [`CookieStoreHandle`].
//! - "Not found" is never an error: a missing cookie is `Ok(None)`, a query
//!   with no matches is `Ok(vec![])`. Errors are reserved for the backend
//!   transport and snapshot codec.
//! - Removal operations are idempotent and succeed whether or not the
//!   targeted entries existed.

mod kv;

use std::sync::Arc;

use async_trait::async_trait;

use crate::cookie::Cookie;
use crate::errors::StoreError;

pub use kv::KvCookieStore;

/// Object-safe handle to a cookie store.
pub type CookieStoreHandle = Arc<dyn CookieStore>;

/// Storage-provider contract a cookie jar programs against.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Returns the cookie at the exact `(domain, path, name)` triple, or
    /// `None` if any level is absent.
    async fn find_cookie(
        &self,
        domain: &str,
        path: &str,
        name: &str,
    ) -> Result<Option<Cookie>, StoreError>;

    /// Returns every cookie applicable to `domain` and `path`.
    ///
    /// The domain is expanded into its suffix chain; `None` (or empty) `path`
    /// means "all paths", otherwise stored paths are filtered through
    /// [`path_match`](crate::matching::path_match). An empty `domain` yields
    /// an empty result.
    async fn find_cookies(
        &self,
        domain: &str,
        path: Option<&str>,
    ) -> Result<Vec<Cookie>, StoreError>;

    /// Inserts (or overwrites) `cookie` at its triple and persists.
    async fn put_cookie(&self, cookie: Cookie) -> Result<(), StoreError>;

    /// Replaces `old` with `new`.
    ///
    /// Stores may skip writes when the two differ only in access-time
    /// bookkeeping; this contract leaves that choice to the implementation,
    /// and `old` is otherwise informational.
    async fn update_cookie(&self, old: &Cookie, new: Cookie) -> Result<(), StoreError>;

    /// Deletes the cookie at the triple, if present, and persists.
    async fn remove_cookie(&self, domain: &str, path: &str, name: &str)
        -> Result<(), StoreError>;

    /// Deletes a whole path level (`path` given) or a whole domain (`path`
    /// is `None`), and persists.
    async fn remove_cookies(&self, domain: &str, path: Option<&str>) -> Result<(), StoreError>;

    /// Returns every stored cookie, sorted ascending by creation index so a
    /// jar rebuilding itself retains creation order.
    async fn get_all_cookies(&self) -> Result<Vec<Cookie>, StoreError>;
}
