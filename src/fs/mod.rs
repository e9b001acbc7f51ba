//! File System Module
//!
//! Virtual filesystem for the shell: a hierarchical in-memory tree, pure
//! path resolution, and the static seed every session starts from.

pub mod path;
pub mod seed;
pub mod tree;
pub mod types;

pub use path::resolve;
pub use seed::seeded_tree;
pub use tree::FileSystemTree;
pub use types::*;
