//! Tests for termtree rendering

use pathtree::domain::{build_tree, FileRecord};
use pathtree::tree_display::TreeDisplayConvert;

#[test]
fn given_mixed_tree_when_rendering_then_branches_get_trailing_slash() {
    let records = vec![
        FileRecord::new("docs/readme.md").with_size(1204),
        FileRecord::new("docs/img/logo.png"),
        FileRecord::new("license.txt"),
    ];
    let tree = build_tree(records);

    let rendered = tree.to_tree_string(".").to_string();

    assert!(rendered.starts_with(".\n"));
    assert!(rendered.contains("docs/"));
    assert!(rendered.contains("img/"));
    assert!(rendered.contains("readme.md (1204 bytes)"));
    assert!(rendered.contains("logo.png"));
    assert!(rendered.contains("license.txt"));
}

#[test]
fn given_empty_tree_when_rendering_then_only_root_line() {
    let tree = build_tree(Vec::<FileRecord>::new());

    let rendered = tree.to_tree_string(".").to_string();

    assert_eq!(rendered.trim_end(), ".");
}
