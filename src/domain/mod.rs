//! Domain layer: entities and tree logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod entities;
pub mod tree;

pub use entities::FileRecord;
pub use tree::{build_tree, FileTree, Node, TreeBuilder};
