//! In-memory cookie index.
//!
//! [`CookieIndex`] is the read cache behind the store adapter: a three-level
//! insertion-ordered mapping `domain → path → name → Cookie`. All lookups are
//! answered from it; the remote store only ever sees its full serialization.
//!
//! ## Serialized form
//! The index serializes transparently as nested JSON objects,
//! `{ domain: { path: { name: CookieRecord } } }`, which is exactly the
//! snapshot blob written to the remote store.
//!
//! ## Ordering
//! Every level keeps first-insertion order (overwriting a record does not
//! move its key), so matcher output and enumeration tie-breaks are stable
//! across the life of the index and across snapshot round-trips.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cookie::Cookie;
use crate::matching::path_match;

/// Innermost level: cookie name → record.
type NameIndex = IndexMap<String, Cookie>;
/// Middle level: cookie path → names.
type PathIndex = IndexMap<String, NameIndex>;

/// Three-level mapping from domain through path to the cookie record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieIndex {
    domains: IndexMap<String, PathIndex>,
}

impl CookieIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `cookie` at its `(domain, path, name)` triple, creating the
    /// domain and path levels as needed. A record already present at the
    /// triple is silently overwritten.
    pub fn insert(&mut self, cookie: Cookie) {
        self.domains
            .entry(cookie.domain.clone())
            .or_default()
            .entry(cookie.path.clone())
            .or_default()
            .insert(cookie.name.clone(), cookie);
    }

    /// Exact-triple lookup. Absence of any level is `None`, not an error.
    pub fn get(&self, domain: &str, path: &str, name: &str) -> Option<&Cookie> {
        self.domains.get(domain)?.get(path)?.get(name)
    }

    /// Deletes the record at the triple if present. Empty path/domain levels
    /// left behind are retained; they serialize as empty objects and are
    /// harmless to lookups.
    pub fn remove(&mut self, domain: &str, path: &str, name: &str) {
        if let Some(paths) = self.domains.get_mut(domain) {
            if let Some(names) = paths.get_mut(path) {
                names.shift_remove(name);
            }
        }
    }

    /// Deletes a whole path level (`path` given) or a whole domain level
    /// (`path` is `None`). Sibling entries are untouched; a missing domain or
    /// path is a no-op.
    pub fn remove_many(&mut self, domain: &str, path: Option<&str>) {
        match path {
            Some(path) => {
                if let Some(paths) = self.domains.get_mut(domain) {
                    paths.shift_remove(path);
                }
            }
            None => {
                self.domains.shift_remove(domain);
            }
        }
    }

    /// Flattens every record into one sequence, sorted ascending by creation
    /// index. The sort is stable, so records with equal indexes (e.g. 0 from
    /// snapshots predating the field) keep domain → path → name insertion
    /// order.
    pub fn all_cookies(&self) -> Vec<Cookie> {
        let mut cookies: Vec<Cookie> = self
            .domains
            .values()
            .flat_map(|paths| paths.values())
            .flat_map(|names| names.values())
            .cloned()
            .collect();
        cookies.sort_by_key(|c| c.creation_index);
        cookies
    }

    /// Every record under every path of `domain`, in path/name insertion
    /// order. This is the matcher behind a query with no path ("all paths").
    pub fn cookies_for_domain(&self, domain: &str) -> Vec<Cookie> {
        self.domains
            .get(domain)
            .map(|paths| {
                paths
                    .values()
                    .flat_map(|names| names.values())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every record of `domain` whose stored path applies to `request_path`
    /// under [`path_match`], in path/name insertion order.
    pub fn cookies_matching_path(&self, domain: &str, request_path: &str) -> Vec<Cookie> {
        self.domains
            .get(domain)
            .map(|paths| {
                paths
                    .iter()
                    .filter(|(cookie_path, _)| path_match(request_path, cookie_path.as_str()))
                    .flat_map(|(_, names)| names.values())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `true` when the given domain has at least one path level.
    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// Number of records across all levels.
    pub fn len(&self) -> usize {
        self.domains
            .values()
            .flat_map(|paths| paths.values())
            .map(|names| names.len())
            .sum()
    }

    /// `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest creation index present, or 0 for an empty index.
    pub(crate) fn max_creation_index(&self) -> u64 {
        self.domains
            .values()
            .flat_map(|paths| paths.values())
            .flat_map(|names| names.values())
            .map(|c| c.creation_index)
            .max()
            .unwrap_or(0)
    }
}
