//! Tests for listing input parsing

use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use pathtree::listing::{self, ListingError, ListingFormat};

fn write_listing(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write listing file");
    path
}

// ============================================================
// Format Detection Tests
// ============================================================

#[rstest]
#[case("files.json", false, ListingFormat::Json)]
#[case("files.txt", false, ListingFormat::Lines)]
#[case("files.txt", true, ListingFormat::Json)]
#[case("-", false, ListingFormat::Lines)]
fn given_path_and_flag_when_detecting_format_then_json_flag_wins(
    #[case] path: &str,
    #[case] force_json: bool,
    #[case] expected: ListingFormat,
) {
    assert_eq!(ListingFormat::detect(Path::new(path), force_json), expected);
}

// ============================================================
// Manifest Parsing Tests
// ============================================================

#[test]
fn given_manifest_with_comments_when_parsing_then_skips_blank_and_comment_lines() {
    let content = "\
# exported listing
docs/readme.md

docs/img/logo.png
license.txt
";

    let records = listing::parse_lines(content);

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["docs/readme.md", "docs/img/logo.png", "license.txt"]);
    assert!(records.iter().all(|r| r.size.is_none()));
}

#[test]
fn given_json_listing_when_parsing_then_metadata_is_preserved() {
    let content = r#"[
        {"id": "docs/readme.md", "size": 1204, "checksum": "abc123", "version": 1},
        {"id": "license.txt"}
    ]"#;

    let records = listing::parse_json(content).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "docs/readme.md");
    assert_eq!(records[0].size, Some(1204));
    assert_eq!(records[0].checksum.as_deref(), Some("abc123"));
    assert_eq!(records[0].version, Some(1));
    assert_eq!(records[1].id, "license.txt");
    assert_eq!(records[1].size, None);
}

// ============================================================
// Load Tests
// ============================================================

#[test]
fn given_manifest_file_when_loading_then_returns_records() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_listing(&temp, "files.txt", "a/b\nc\n");

    // Act
    let records = listing::load_records(&path, ListingFormat::Lines).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "a/b");
}

#[test]
fn given_json_file_when_loading_then_returns_records() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_listing(&temp, "files.json", r#"[{"id": "a/b"}, {"id": "c"}]"#);

    // Act
    let records = listing::load_records(&path, ListingFormat::Json).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "c");
}

#[test]
fn given_malformed_json_when_loading_then_errors() {
    let temp = TempDir::new().unwrap();
    let path = write_listing(&temp, "files.json", r#"{"id": "not an array"}"#);

    let result = listing::load_records(&path, ListingFormat::Json);

    assert!(matches!(result, Err(ListingError::Json { .. })));
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let result = listing::load_records(
        Path::new("/nonexistent/listing.txt"),
        ListingFormat::Lines,
    );

    assert!(matches!(result, Err(ListingError::Io { .. })));
}
