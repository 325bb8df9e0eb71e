//! Manifest transformation: host pattern normalization and field overrides

pub mod host_patterns;
pub mod manifest;

pub use host_patterns::{ensure_trailing_wildcard, is_full_pattern, normalize_host_patterns};
pub use manifest::ManifestOverrides;
