//! Listing input: flat record lists from plain manifests or JSON
//!
//! The catalog API side is out of scope; the CLI reads its flat file list
//! from a local manifest, a JSON listing export, or stdin.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

use crate::domain::FileRecord;

/// Pseudo-path selecting stdin as the listing source.
pub const STDIN_PATH: &str = "-";

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("cannot read listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON listing {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ListingResult<T> = Result<T, ListingError>;

/// Input format of a listing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    /// One path per line; blank lines and `#` comments skipped
    Lines,
    /// JSON array of record objects, as exported by the catalog API
    Json,
}

impl ListingFormat {
    /// `force_json` wins; otherwise a `.json` extension selects JSON.
    pub fn detect(path: &Path, force_json: bool) -> Self {
        if force_json || path.extension() == Some(OsStr::new("json")) {
            ListingFormat::Json
        } else {
            ListingFormat::Lines
        }
    }
}

/// Reads and parses the listing at `path` (`-` for stdin).
#[instrument(level = "debug")]
pub fn load_records(path: &Path, format: ListingFormat) -> ListingResult<Vec<FileRecord>> {
    let content = read_source(path)?;
    match format {
        ListingFormat::Lines => Ok(parse_lines(&content)),
        ListingFormat::Json => parse_json(&content).map_err(|source| ListingError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_source(path: &Path) -> ListingResult<String> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| ListingError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(content)
    } else {
        fs::read_to_string(path).map_err(|source| ListingError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parses a plain manifest: one path per line.
pub fn parse_lines(content: &str) -> Vec<FileRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(FileRecord::new)
        .collect()
}

/// Parses a JSON array of record objects.
pub fn parse_json(content: &str) -> Result<Vec<FileRecord>, serde_json::Error> {
    serde_json::from_str(content)
}
