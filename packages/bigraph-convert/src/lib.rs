/*
 * Bigraph Convert - Labelled Graph Interchange Converter
 *
 * Text bigraph notation → fixed-width binary graphs for the matching solver.
 *
 * Feature-First Architecture:
 * - shared/      : Graph model
 * - features/    : Vertical slices (tokenizer → graph builder → label dictionary → binary format)
 * - pipeline/    : Pair conversion driver
 * - config/      : YAML configuration
 * - telemetry    : tracing subscriber setup for the binaries
 *
 * Two graphs converted together share one label dictionary, so a label
 * gets the same id in both binary outputs.
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;
pub mod telemetry;

// Re-exports
pub use config::{ConfigError, ConvertConfig};
pub use errors::{ConvertError, ErrorKind, Result};
pub use features::binary_format::{decode_graph, encode_graph, EncodedGraph, EDGE_LABEL};
pub use features::graph_builder::{parse_graph, read_graph};
pub use features::label_dictionary::LabelDictionary;
pub use features::label_tokenizer::{tokenize_header, LabelField};
pub use pipeline::{convert_pair, ConversionReport, ConversionRequest};
pub use shared::models::Graph;
