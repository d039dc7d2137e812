//! End-to-end conversion tests
//!
//! Text files on disk → convert_pair → binary files on disk.

mod common;

use bigraph_convert::features::binary_format::{decode_graph_file, read_vertex_count_file};
use bigraph_convert::{
    convert_pair, parse_graph, ConversionRequest, ConvertConfig, ConvertError, ErrorKind,
};
use common::*;
use pretty_assertions::assert_eq;

fn request(dir: &std::path::Path, a: &str, b: &str) -> ConversionRequest {
    ConversionRequest::new(
        write_fixture(dir, "a.txt", a),
        write_fixture(dir, "b.txt", b),
        dir.join("a.bin"),
        dir.join("b.bin"),
    )
}

#[test]
fn test_golden_pair() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(dir.path(), &fixture_golden_text(), &fixture_golden_text());

    let report = convert_pair(&req, &ConvertConfig::default()).unwrap();
    assert_eq!(report.vertices, [2, 2]);
    assert_eq!(report.edges, [1, 1]);
    assert_eq!(report.labels, 2);
    assert_eq!(report.bytes_written, [14, 14]);

    let bytes = std::fs::read(dir.path().join("a.bin")).unwrap();
    assert_eq!(words(&bytes), vec![2, 0, 1, 1, 1, 1, 0]);
    assert_eq!(std::fs::read(dir.path().join("b.bin")).unwrap(), bytes);
}

#[test]
fn test_shared_numbering_across_graphs() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(dir.path(), &fixture_nested_text(), &fixture_golden_text());

    let report = convert_pair(&req, &ConvertConfig::default()).unwrap();
    assert_eq!(report.labels, 5);

    // Area(2):1 → 0, Foo:0 → 1, Link(a, (b)):2 → 2, x → 3, y → 4
    let a = std::fs::read(dir.path().join("a.bin")).unwrap();
    assert_eq!(
        words(&a),
        vec![3, 0, 1, 2, 2, 1, 1, 2, 1, 1, 2, 1, 1, 0, 1]
    );
    let b = std::fs::read(dir.path().join("b.bin")).unwrap();
    assert_eq!(words(&b), vec![2, 3, 4, 1, 1, 1, 0]);
}

#[test]
fn test_decoder_reads_converter_output() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(dir.path(), &fixture_nested_text(), &fixture_golden_text());
    convert_pair(&req, &ConvertConfig::default()).unwrap();

    let graph = parse_graph(&fixture_nested_text()).unwrap();
    let decoded = decode_graph_file(dir.path().join("a.bin")).unwrap();
    assert_eq!(decoded.n(), graph.n());
    assert_eq!(decoded.to_adjacency(), graph.adjacency().to_vec());
    assert!(decoded
        .edges
        .iter()
        .flatten()
        .all(|&(_, label)| label == bigraph_convert::EDGE_LABEL));

    assert_eq!(read_vertex_count_file(dir.path().join("b.bin")).unwrap(), 2);
}

#[test]
fn test_missing_index_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let bad = "(0, A)(2, C)\n0 2 0\n01\n00\n";
    let req = request(dir.path(), &fixture_golden_text(), bad);

    let err = convert_pair(&req, &ConvertConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(!dir.path().join("a.bin").exists());
    assert!(!dir.path().join("b.bin").exists());
}

#[test]
fn test_failure_keeps_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.bin"), b"previous").unwrap();
    let req = request(dir.path(), "(0, A)\n0 1 0\n", &fixture_golden_text());

    let err = convert_pair(&req, &ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, ConvertError::MissingMatrixRows { .. }));
    assert_eq!(std::fs::read(dir.path().join("a.bin")).unwrap(), b"previous");
}

#[test]
fn test_non_atomic_writes() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(dir.path(), &fixture_golden_text(), &fixture_nested_text());
    let config = ConvertConfig {
        atomic_writes: false,
        ..ConvertConfig::default()
    };

    convert_pair(&req, &config).unwrap();
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 4);
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let req = ConversionRequest::new(
        dir.path().join("nope.txt"),
        write_fixture(dir.path(), "b.txt", &fixture_golden_text()),
        dir.path().join("a.bin"),
        dir.path().join("b.bin"),
    );
    let err = convert_pair(&req, &ConvertConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_label_count_matches_declared_vertices() {
    let text = fixture_nested_text();
    let declared: usize = text
        .lines()
        .nth(1)
        .unwrap()
        .split_whitespace()
        .nth(1)
        .unwrap()
        .parse()
        .unwrap();
    let fields = bigraph_convert::tokenize_header(text.lines().next().unwrap()).unwrap();
    assert_eq!(fields.len(), declared);
}
