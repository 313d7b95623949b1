//! termtree rendering of file trees

use termtree::Tree;
use tracing::instrument;

use crate::domain::{FileTree, Node};

pub trait TreeDisplayConvert {
    fn to_tree_string(&self, label: &str) -> Tree<String>;
}

impl TreeDisplayConvert for FileTree {
    /// Renders the tree with `label` as the synthetic root line.
    /// Branches get a trailing `/`, leaves show their size when present.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, label: &str) -> Tree<String> {
        let leaves: Vec<_> = self
            .iter()
            .map(|(segment, node)| node_to_tree(segment, node))
            .collect();

        Tree::new(label.to_string()).with_leaves(leaves)
    }
}

fn node_to_tree(segment: &str, node: &Node) -> Tree<String> {
    let label = match node {
        Node::Branch(_) | Node::LeafAndBranch(..) => format!("{}/", segment),
        Node::Leaf(record) => match record.size {
            Some(size) => format!("{} ({} bytes)", segment, size),
            None => segment.to_string(),
        },
    };

    let children: Vec<_> = node
        .children()
        .map(|tree| {
            tree.iter()
                .map(|(child_segment, child)| node_to_tree(child_segment, child))
                .collect()
        })
        .unwrap_or_default();

    Tree::new(label).with_leaves(children)
}
