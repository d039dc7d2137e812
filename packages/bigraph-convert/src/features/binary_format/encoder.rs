//! Graph → binary words
//!
//! ```text
//! [n]
//! [label id; n]                         dictionary id of labels[i]
//! n × [out-degree][(target, 1); degree] targets ascending
//! ```

use std::io::Write;

use tracing::debug;

use super::writer::WordWriter;
use super::EDGE_LABEL;
use crate::errors::{ConvertError, Result};
use crate::features::label_dictionary::LabelDictionary;
use crate::shared::models::Graph;

/// Encode `graph` into `sink`, returning the number of words written
///
/// Fails on a label missing from `dictionary` or any value outside the
/// 16-bit range. A failure part-way leaves whatever was already written in
/// the sink.
pub fn encode_graph<W: Write>(
    graph: &Graph,
    dictionary: &LabelDictionary,
    sink: W,
) -> Result<usize> {
    let mut writer = WordWriter::new(sink);

    writer.push("vertex count", graph.n())?;

    for label in graph.labels() {
        let id = dictionary
            .get(label)
            .ok_or_else(|| ConvertError::UnknownLabel(label.clone()))?;
        writer.push("label id", id)?;
    }

    for vertex in 0..graph.n() {
        writer.push("out-degree", graph.out_degree(vertex))?;
        for target in graph.successors(vertex) {
            writer.push("edge target", target)?;
            writer.push("edge label", usize::from(EDGE_LABEL))?;
        }
    }

    let words = writer.words();
    writer.finish()?;
    debug!(vertices = graph.n(), words, "encoded graph");
    Ok(words)
}

/// Encode into a fresh byte buffer
pub fn encode_to_vec(graph: &Graph, dictionary: &LabelDictionary) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_graph(graph, dictionary, &mut bytes)?;
    Ok(bytes)
}
