//! Vertical slices: tokenizer → graph builder → label dictionary → binary format

pub mod binary_format;
pub mod graph_builder;
pub mod label_dictionary;
pub mod label_tokenizer;
