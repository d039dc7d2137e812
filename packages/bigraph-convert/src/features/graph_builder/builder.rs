//! Text graph file → [`Graph`]
//!
//! File layout:
//! ```text
//! (0, Area(2):1)(1, Foo:0)     header: labelled vertices
//! 1 2 0                        roots vertices sites
//! ...                          `roots` lines, skipped
//! 01                           `vertices` adjacency rows
//! 00
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::errors::{ConvertError, Result};
use crate::features::label_tokenizer::{tokenize_header, LabelField};
use crate::shared::models::Graph;

/// Counts declared on the second line of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCounts {
    pub roots: usize,
    pub vertices: usize,
    /// Accepted for completeness, not used by the converter
    pub sites: usize,
}

impl HeaderCounts {
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = || ConvertError::InvalidCountLine {
            line: line.trim().to_string(),
        };

        let counts = line
            .split_whitespace()
            .map(|token| token.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match counts.as_slice() {
            &[roots, vertices, sites] => Ok(Self {
                roots,
                vertices,
                sites,
            }),
            _ => Err(invalid()),
        }
    }
}

/// Place tokenized fields by index, rejecting gaps and duplicates
///
/// Fields may arrive in any order but must cover exactly `0..fields.len()`.
pub fn labels_by_index(fields: Vec<LabelField>) -> Result<Vec<String>> {
    let count = fields.len();
    let mut slots: Vec<Option<String>> = vec![None; count];

    for field in fields {
        let slot = slots
            .get_mut(field.index)
            .ok_or(ConvertError::IndexOutOfRange {
                index: field.index,
                count,
            })?;
        if slot.is_some() {
            return Err(ConvertError::DuplicateIndex { index: field.index });
        }
        *slot = Some(field.label);
    }

    // Every index is < count and none repeats, so every slot is filled
    Ok(slots.into_iter().flatten().collect())
}

/// Parse the full contents of a graph file
pub fn parse_graph(text: &str) -> Result<Graph> {
    let lines: Vec<&str> = text.lines().collect();

    let header = lines.first().ok_or(ConvertError::EmptyInput)?;
    let labels = labels_by_index(tokenize_header(header)?)?;

    let counts_line = lines.get(1).ok_or(ConvertError::InvalidCountLine {
        line: String::new(),
    })?;
    let counts = HeaderCounts::parse(counts_line)?;
    let n = counts.vertices;

    if labels.len() != n {
        return Err(ConvertError::VertexCountMismatch {
            declared: n,
            labelled: labels.len(),
        });
    }

    // A root count past the end of the file leaves no room for the matrix
    let start = counts
        .roots
        .checked_add(2)
        .ok_or(ConvertError::MissingMatrixRows {
            expected: n,
            found: 0,
        })?;
    let rows: Vec<&str> = lines.iter().skip(start).take(n).copied().collect();
    if rows.len() < n {
        return Err(ConvertError::MissingMatrixRows {
            expected: n,
            found: rows.len(),
        });
    }

    let adjacency = rows
        .iter()
        .enumerate()
        .map(|(row, line)| parse_matrix_row(row, line.trim(), n))
        .collect::<Result<Vec<_>>>()?;

    let graph = Graph::new(adjacency, labels)?;
    debug!(
        vertices = graph.n(),
        edges = graph.edge_count(),
        roots = counts.roots,
        sites = counts.sites,
        "parsed graph"
    );
    Ok(graph)
}

/// Read and parse a graph file
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    info!(path = %path.display(), vertices = graph.n(), "read graph");
    Ok(graph)
}

/// First `n` characters of a row; `'1'` is an edge, anything else is not
fn parse_matrix_row(row: usize, line: &str, n: usize) -> Result<Vec<bool>> {
    let cells: Vec<bool> = line.chars().take(n).map(|ch| ch == '1').collect();
    if cells.len() < n {
        return Err(ConvertError::ShortMatrixRow {
            row,
            expected: n,
            found: cells.len(),
        });
    }
    Ok(cells)
}
