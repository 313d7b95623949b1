//! Segment-keyed file tree: builder and flattener

use hashlink::LinkedHashMap;
use tracing::instrument;

use crate::domain::entities::FileRecord;

/// One entry of a [`FileTree`].
///
/// A segment name under a given parent is normally either a leaf or a
/// branch. Messy listings can force both roles onto one name (a record
/// `"a"` followed by `"a/b"`); that case is modelled explicitly instead
/// of mutating a leaf in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminates a path, referencing the original record
    Leaf(FileRecord),
    /// Has further nested children
    Branch(FileTree),
    /// Both at once: a record ends here and deeper paths continue below
    LeafAndBranch(FileRecord, FileTree),
}

impl Node {
    /// The record ending at this node, if any.
    pub fn record(&self) -> Option<&FileRecord> {
        match self {
            Node::Leaf(record) | Node::LeafAndBranch(record, _) => Some(record),
            Node::Branch(_) => None,
        }
    }

    /// The children below this node, if any.
    pub fn children(&self) -> Option<&FileTree> {
        match self {
            Node::Branch(children) | Node::LeafAndBranch(_, children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.record().is_some()
    }

    pub fn is_branch(&self) -> bool {
        self.children().is_some()
    }
}

/// Insertion-ordered mapping from path segment to [`Node`].
///
/// Flatten output order follows the insertion order at each level, so the
/// backing map must preserve it; a plain `HashMap` would not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    nodes: LinkedHashMap<String, Node>,
}

impl FileTree {
    pub fn new() -> Self {
        Self {
            nodes: LinkedHashMap::new(),
        }
    }

    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.nodes.get(segment)
    }

    /// Number of entries at this level only.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate entries at this level in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Longest chain of nodes from this level down. Empty tree has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes
            .values()
            .map(|node| 1 + node.children().map_or(0, FileTree::depth))
            .max()
            .unwrap_or(0)
    }

    /// Number of records reachable from this level.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| {
                usize::from(node.is_leaf()) + node.children().map_or(0, FileTree::leaf_count)
            })
            .sum()
    }

    /// Collects the full path of every reachable leaf, depth-first pre-order.
    ///
    /// For trees built from distinct, non-colliding ids this reproduces the
    /// original id set. A `LeafAndBranch` node contributes its own path
    /// before its descendants.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.flatten_into("", &mut paths);
        paths
    }

    /// Like [`flatten`](Self::flatten), prefixing every path with `base`.
    pub fn flatten_into(&self, base: &str, paths: &mut Vec<String>) {
        for (segment, node) in &self.nodes {
            let current = if base.is_empty() {
                segment.clone()
            } else {
                format!("{}/{}", base, segment)
            };

            if node.is_leaf() {
                paths.push(current.clone());
            }
            if let Some(children) = node.children() {
                children.flatten_into(&current, paths);
            }
        }
    }

    /// Returns the children mapping at `segment`, creating or upgrading the
    /// node as needed: absent becomes an empty branch, an existing leaf
    /// keeps its record and gains children.
    fn descend(&mut self, segment: &str) -> &mut FileTree {
        let node = self
            .nodes
            .entry(segment.to_string())
            .or_insert_with(|| Node::Branch(FileTree::new()));

        if let Node::Leaf(record) = node {
            let record = record.clone();
            *node = Node::LeafAndBranch(record, FileTree::new());
        }

        match node {
            Node::Branch(children) | Node::LeafAndBranch(_, children) => children,
            Node::Leaf(_) => unreachable!("leaf upgraded above"),
        }
    }
}

/// Builds a [`FileTree`] from a flat record listing.
///
/// Building never fails: records whose final segment collides with an
/// already-established branch are dropped from the tree (the branch wins)
/// and remembered in the shadow report for diagnostics.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    shadowed: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip(self, records))]
    pub fn build(&mut self, records: impl IntoIterator<Item = FileRecord>) -> FileTree {
        let mut tree = FileTree::new();

        for record in records {
            self.insert(&mut tree, record);
        }

        tree
    }

    /// Full ids of records dropped because a branch occupied their final
    /// segment, in input order.
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }

    fn insert(&mut self, tree: &mut FileTree, record: FileRecord) {
        // split("") yields one empty segment, so last always exists;
        // an empty id degenerates to an empty-string key by design
        let segments: Vec<String> = record.id.split('/').map(str::to_string).collect();
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return,
        };

        let mut cursor = tree;
        for segment in parents {
            cursor = FileTree::descend(cursor, segment);
        }

        match cursor.nodes.get_mut(last.as_str()) {
            None => {
                cursor.nodes.insert(last.clone(), Node::Leaf(record));
            }
            Some(node) => match node {
                // later records overwrite earlier leaves with the same id
                Node::Leaf(_) => *node = Node::Leaf(record),
                // an established branch wins over a colliding leaf
                Node::Branch(_) | Node::LeafAndBranch(..) => self.shadowed.push(record.id),
            },
        }
    }
}

/// Builds a tree, discarding the shadow report.
pub fn build_tree(records: impl IntoIterator<Item = FileRecord>) -> FileTree {
    TreeBuilder::new().build(records)
}
