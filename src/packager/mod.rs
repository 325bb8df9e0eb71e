//! Scratch workspace and archive building

pub mod builder;
pub mod workspace;

pub use builder::create_archive;
pub use workspace::{copy_tree, ScratchWorkspace};
