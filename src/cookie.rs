//! Cookie record type.
//!
//! This module defines the serializable [`Cookie`] structure that the store
//! persists and hands back to the jar. Its serde form is the crate's
//! canonical wire shape: a snapshot written by one store instance must
//! deserialize in another with every field intact.
//!
//! ```rust
//! use kv_cookie_store::cookie::Cookie;
//!
//! let c = Cookie::new("example.com", "/", "session", "abc123");
//! assert_eq!(c.domain, "example.com");
//! assert!(c.expires.is_none()); // session cookie
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide source of creation indexes. Starts at 1 so that a record
/// whose snapshot predates the field (deserialized as 0) sorts first.
static NEXT_CREATION_INDEX: AtomicU64 = AtomicU64::new(1);

/// A cookie as stored/serialized by the store.
///
/// A record is uniquely identified by the `(domain, path, name)` triple;
/// inserting a second record at the same triple overwrites the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,

    /// Raw cookie value (not URL-decoded).
    pub value: String,

    /// Domain the cookie belongs to (e.g., `"example.com"`). Stored exactly
    /// as given; callers canonicalize before querying.
    pub domain: String,

    /// Path scoping (e.g., `"/"`).
    pub path: String,

    /// If `true`, cookie is sent only over HTTPS.
    #[serde(default)]
    pub secure: bool,

    /// If `true`, cookie is blocked from access by client-side scripts.
    #[serde(default)]
    pub http_only: bool,

    /// Expiration timestamp, if any.
    ///
    /// Prefer **ISO 8601** (`YYYY-MM-DDThh:mm:ssZ`) for portability.
    /// Session cookies have `None`. Preserved verbatim across snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,

    /// SameSite policy (`"Strict"`, `"Lax"`, or `"None"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,

    /// Monotonically increasing sequence number assigned at creation.
    ///
    /// Used only to keep enumeration stable: full listings sort ascending on
    /// it. Snapshots written before this field existed deserialize as 0.
    #[serde(default)]
    pub creation_index: u64,
}

impl Cookie {
    /// Creates a session cookie for the given triple and assigns it the next
    /// creation index.
    pub fn new(
        domain: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            secure: false,
            http_only: false,
            expires: None,
            same_site: None,
            creation_index: NEXT_CREATION_INDEX.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// Advances the creation-index counter so that the next [`Cookie::new`]
/// returns an index strictly greater than `seen`.
///
/// Called after a snapshot load: restored records keep their stored indexes,
/// and without this bump a freshly created cookie could enumerate in between
/// them.
pub(crate) fn observe_creation_index(seen: u64) {
    NEXT_CREATION_INDEX.fetch_max(seen.saturating_add(1), Ordering::Relaxed);
}
