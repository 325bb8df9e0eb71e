//! Manifest parsing

pub mod manifest;

pub use manifest::{parse_manifest, parse_manifest_from_file, render_manifest, write_manifest};
