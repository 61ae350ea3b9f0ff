//! Domain and path matching primitives.
//!
//! These free functions decide which stored cookies apply to a lookup. They
//! reproduce the textual rules common cookie-jar libraries use rather than
//! the full RFC 6265 algorithms:
//!
//! - [`path_match`] is the prefix-plus-boundary approximation of the S5.1.4
//!   path-match. Edge cases around trailing slashes and sibling paths that
//!   share a prefix may be imprecise.
//! - [`permute_domain`] expands a hostname into its suffix chain without a
//!   public-suffix dataset; the registrable domain is approximated as the
//!   final two labels.

/// Decides whether a cookie stored under `cookie_path` applies to a request
/// for `request_path`.
///
/// Matches when the paths are equal, or when `cookie_path` is a prefix of
/// `request_path` ending in `/` or followed by `/` in the request path. So a
/// cookie at `/foo` is sent for `/foo/bar` but not for `/foobar`.
///
/// This is an approximation of RFC 6265 S5.1.4, kept byte-for-byte compatible
/// with the jar it serves rather than corrected.
pub fn path_match(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    if let Some(rest) = request_path.strip_prefix(cookie_path) {
        if cookie_path.ends_with('/') {
            return true;
        }
        if rest.starts_with('/') {
            return true;
        }
    }
    false
}

/// Expands `domain` into the chain of suffixes hierarchical cookie-domain
/// matching considers, most-specific first:
///
/// `a.b.example.com` → `["a.b.example.com", "b.example.com", "example.com"]`
///
/// The chain stops at the registrable domain, approximated as the final two
/// labels; no public-suffix list is consulted. Returns `None` when the input
/// has no expansion (empty, a lone label such as `localhost`, or a bare
/// suffix); callers fall back to the literal domain.
pub fn permute_domain(domain: &str) -> Option<Vec<String>> {
    let domain = domain.trim_end_matches('.');
    if domain.is_empty() {
        return None;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return None;
    }

    // Walk from the full hostname down to the two-label registrable domain.
    let mut permutations = Vec::with_capacity(labels.len() - 1);
    for start in 0..=labels.len() - 2 {
        permutations.push(labels[start..].join("."));
    }
    Some(permutations)
}

/// Canonicalizes a domain for lookups: lowercases and strips a leading dot,
/// so a `Domain=.Example.COM` attribute and the host `example.com` address
/// the same index entry.
pub fn canonical_domain(domain: &str) -> String {
    domain.trim_start_matches('.').to_ascii_lowercase()
}
