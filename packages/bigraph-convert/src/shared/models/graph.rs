//! Labelled directed graph
//!
//! Vertices are identified purely by position: row/column `i` of the
//! adjacency matrix and `labels[i]` describe the same vertex.

use std::fmt;

use crate::errors::{ConvertError, Result};

/// Square boolean adjacency matrix with one label per vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<bool>>,
    labels: Vec<String>,
}

impl Graph {
    /// Build a graph, checking that the matrix is square and the labels are
    /// index-aligned with it
    pub fn new(adjacency: Vec<Vec<bool>>, labels: Vec<String>) -> Result<Self> {
        let n = adjacency.len();
        if labels.len() != n {
            return Err(ConvertError::inconsistent(format!(
                "{} labels for {} adjacency rows",
                labels.len(),
                n
            )));
        }
        if let Some((row, cols)) = adjacency
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != n)
        {
            return Err(ConvertError::inconsistent(format!(
                "adjacency row {} has {} columns, expected {}",
                row,
                cols.len(),
                n
            )));
        }
        Ok(Self { adjacency, labels })
    }

    /// Vertex count
    pub fn n(&self) -> usize {
        self.adjacency.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn adjacency(&self) -> &[Vec<bool>] {
        &self.adjacency
    }

    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Targets of `vertex`'s outgoing edges, ascending
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.successors(vertex).count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|row| row.iter().filter(|&&edge| edge).count())
            .sum()
    }
}

/// Matrix rows as `0`/`1` text followed by one label per line
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.adjacency {
            let line: String = row.iter().map(|&e| if e { '1' } else { '0' }).collect();
            writeln!(f, "{}", line)?;
        }
        let mut labels = self.labels.iter().peekable();
        while let Some(label) = labels.next() {
            if labels.peek().is_some() {
                writeln!(f, "{}", label)?;
            } else {
                write!(f, "{}", label)?;
            }
        }
        Ok(())
    }
}
