//! Validation module

pub mod structure;

pub use structure::validate_source_dir;
