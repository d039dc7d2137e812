// Graph Builder
//
// Tokenized header + count line + adjacency rows → Graph.
//
// The header fields are re-indexed by their parsed index, so fields may
// appear in any order as long as they cover 0..n-1 exactly once.

pub mod builder;

pub use builder::{labels_by_index, parse_graph, read_graph, HeaderCounts};
