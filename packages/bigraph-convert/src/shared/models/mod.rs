//! Shared domain models

mod graph;

pub use graph::Graph;
