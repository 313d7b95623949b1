pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod listing;
pub mod tree_display;
pub mod util;

pub use domain::{build_tree, FileRecord, FileTree, Node, TreeBuilder};
