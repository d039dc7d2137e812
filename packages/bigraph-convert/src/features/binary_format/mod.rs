// Binary Graph Format
//
// Fixed-width sparse encoding read by the graph-matching solver. All values
// are unsigned 16-bit little-endian words:
//
//   [n][label id × n][per vertex: out-degree, (target, edge label) × degree]
//
// Vertex and label numbering must match across the two graphs of a pair, so
// label ids always come from one shared LabelDictionary.

pub mod decoder;
pub mod encoder;
pub mod writer;

pub use decoder::{
    decode_graph, decode_graph_file, read_vertex_count, read_vertex_count_file, EncodedGraph,
};
pub use encoder::{encode_graph, encode_to_vec};
pub use writer::WordWriter;

/// Edge label written for every edge; the text notation has no edge labels
pub const EDGE_LABEL: u16 = 1;
