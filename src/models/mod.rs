//! Core data models for extension packaging

pub mod manifest;
pub mod package;

pub use manifest::*;
pub use package::*;
