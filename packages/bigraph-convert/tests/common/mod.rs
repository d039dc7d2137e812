//! Shared fixtures for bigraph-convert integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Render a graph file in the text notation
///
/// `labels[i]` becomes field `(i, labels[i])`; fields are written in the
/// order given by `field_order` (or index order when empty).
pub fn fixture_graph_text(
    labels: &[&str],
    rows: &[&str],
    roots: &[&str],
    field_order: &[usize],
) -> String {
    let order: Vec<usize> = if field_order.is_empty() {
        (0..labels.len()).collect()
    } else {
        field_order.to_vec()
    };
    let header: String = order
        .iter()
        .map(|&i| format!("({}, {})", i, labels[i]))
        .collect();

    let mut text = format!("{}\n{} {} 0\n", header, roots.len(), labels.len());
    for line in roots.iter().chain(rows) {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Two-vertex graph from the golden encoding example
pub fn fixture_golden_text() -> String {
    fixture_graph_text(&["x", "y"], &["01", "00"], &[], &[])
}

/// Graph with nested-parenthesis labels and a root section
pub fn fixture_nested_text() -> String {
    fixture_graph_text(
        &["Area(2):1", "Foo:0", "Link(a, (b)):2"],
        &["011", "001", "100"],
        &["0", "1"],
        &[2, 0, 1],
    )
}

/// Write `contents` to `dir/name`
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Decode little-endian u16 words
pub fn words(bytes: &[u8]) -> Vec<u16> {
    assert_eq!(bytes.len() % 2, 0, "odd byte count");
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
