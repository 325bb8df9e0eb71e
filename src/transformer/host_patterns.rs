//! Host permission normalization
//!
//! Turns `--host` arguments into manifest match patterns. A bare host such as
//! `example.com` expands to `https://example.com/*` (plus the `http://` form
//! when insecure transport is allowed). An entry that already carries an
//! `http://` or `https://` scheme is kept, completed with a trailing `/*`.
//!
//! Hosts are not validated. Scheme detection ignores case, host casing is
//! kept verbatim, so `Example.com` and `example.com` are distinct patterns.

use std::collections::BTreeSet;

const SECURE_SCHEME: &str = "https";
const INSECURE_SCHEME: &str = "http";

/// Normalize raw hosts into a sorted, deduplicated list of match patterns
pub fn normalize_host_patterns<I, S>(hosts: I, allow_insecure: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut patterns = BTreeSet::new();

    for raw in hosts {
        let candidate = raw.as_ref().trim();
        if candidate.is_empty() {
            continue;
        }

        if is_full_pattern(candidate) {
            patterns.insert(ensure_trailing_wildcard(candidate));
            continue;
        }

        patterns.insert(host_pattern(SECURE_SCHEME, candidate));
        if allow_insecure {
            patterns.insert(host_pattern(INSECURE_SCHEME, candidate));
        }
    }

    patterns.into_iter().collect()
}

/// True when the entry starts with `http://` or `https://`, in any case
pub fn is_full_pattern(candidate: &str) -> bool {
    has_prefix_ignore_case(candidate, "http://") || has_prefix_ignore_case(candidate, "https://")
}

/// Make sure a pattern ends in `/*`
pub fn ensure_trailing_wildcard(pattern: &str) -> String {
    if pattern.ends_with("/*") {
        pattern.to_string()
    } else if pattern.ends_with('/') {
        format!("{pattern}*")
    } else {
        format!("{pattern}/*")
    }
}

fn host_pattern(scheme: &str, host: &str) -> String {
    format!("{scheme}://{host}/*")
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
