//! Domain entities: core data structures

use serde::Deserialize;

/// A single entry of a flat catalog listing.
///
/// The `id` encodes the full slash-delimited path (`"docs/img/logo.png"`).
/// All other fields are opaque metadata carried along from the catalog;
/// the tree logic never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    /// Slash-delimited hierarchical path
    pub id: String,
    /// File size in bytes, when the listing provides it
    #[serde(default)]
    pub size: Option<u64>,
    /// Content checksum, when the listing provides it
    #[serde(default)]
    pub checksum: Option<String>,
    /// Catalog version number, when the listing provides it
    #[serde(default)]
    pub version: Option<u32>,
}

impl FileRecord {
    /// Record with a path and no metadata.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: None,
            checksum: None,
            version: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}
