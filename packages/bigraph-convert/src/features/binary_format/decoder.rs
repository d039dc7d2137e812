//! Binary words → graph structure
//!
//! Inverse of the encoder. Used by the analysis tooling to recover vertex
//! counts and by tests to inspect encoded output.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;
use std::path::Path;

use crate::errors::{ConvertError, Result};

/// Decoded contents of a binary graph file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGraph {
    /// Dictionary id per vertex
    pub label_ids: Vec<u16>,
    /// Per vertex: `(target, edge label)` in file order
    pub edges: Vec<Vec<(u16, u16)>>,
}

impl EncodedGraph {
    pub fn n(&self) -> usize {
        self.label_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Rebuild the boolean adjacency matrix
    ///
    /// Targets outside `0..n` are skipped; [`decode_graph`] never produces them.
    pub fn to_adjacency(&self) -> Vec<Vec<bool>> {
        let n = self.n();
        self.edges
            .iter()
            .map(|out| {
                let mut row = vec![false; n];
                for &(target, _) in out {
                    if let Some(cell) = row.get_mut(usize::from(target)) {
                        *cell = true;
                    }
                }
                row
            })
            .collect()
    }
}

/// Read only the leading vertex-count word
pub fn read_vertex_count<R: Read>(mut reader: R) -> Result<u16> {
    Ok(reader.read_u16::<LittleEndian>()?)
}

/// Vertex count of a binary graph file
pub fn read_vertex_count_file(path: impl AsRef<Path>) -> Result<u16> {
    let file = std::fs::File::open(path)?;
    read_vertex_count(std::io::BufReader::new(file))
}

/// Decode a full binary graph
///
/// Truncated input surfaces as an I/O `UnexpectedEof` error; bytes left
/// over after the last vertex are an `InconsistentGraph` error.
pub fn decode_graph<R: Read>(mut reader: R) -> Result<EncodedGraph> {
    let n = usize::from(reader.read_u16::<LittleEndian>()?);

    let label_ids = (0..n)
        .map(|_| reader.read_u16::<LittleEndian>())
        .collect::<std::io::Result<Vec<_>>>()?;

    let mut edges = Vec::with_capacity(n);
    for vertex in 0..n {
        let degree = usize::from(reader.read_u16::<LittleEndian>()?);
        let mut out = Vec::with_capacity(degree);
        for _ in 0..degree {
            let target = reader.read_u16::<LittleEndian>()?;
            let label = reader.read_u16::<LittleEndian>()?;
            if usize::from(target) >= n {
                return Err(ConvertError::inconsistent(format!(
                    "vertex {} has edge to {} in a {}-vertex graph",
                    vertex, target, n
                )));
            }
            out.push((target, label));
        }
        edges.push(out);
    }

    let mut rest = [0u8; 1];
    if reader.read(&mut rest)? > 0 {
        return Err(ConvertError::inconsistent(
            "trailing bytes after the last vertex",
        ));
    }

    Ok(EncodedGraph { label_ids, edges })
}

/// Decode a binary graph file
pub fn decode_graph_file(path: impl AsRef<Path>) -> Result<EncodedGraph> {
    let file = std::fs::File::open(path)?;
    decode_graph(std::io::BufReader::new(file))
}
