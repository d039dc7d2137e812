//! Pair conversion driver
//!
//! parse A, parse B → unify labels → encode A, encode B → write both.
//!
//! Both graphs are encoded into memory before any output file is opened, so
//! a malformed input or an out-of-range value never leaves output behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::errors::Result;
use crate::features::binary_format::encode_to_vec;
use crate::features::graph_builder::read_graph;
use crate::features::label_dictionary::LabelDictionary;
use crate::shared::models::Graph;

/// Input and output paths for one pair of graphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub inputs: [PathBuf; 2],
    pub outputs: [PathBuf; 2],
}

impl ConversionRequest {
    pub fn new(
        input_a: impl Into<PathBuf>,
        input_b: impl Into<PathBuf>,
        output_a: impl Into<PathBuf>,
        output_b: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inputs: [input_a.into(), input_b.into()],
            outputs: [output_a.into(), output_b.into()],
        }
    }
}

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub vertices: [usize; 2],
    pub edges: [usize; 2],
    pub labels: usize,
    pub bytes_written: [usize; 2],
}

/// Graphs and encodings for a pair, before anything touches disk
#[derive(Debug, Clone)]
pub struct EncodedPair {
    pub graphs: [Graph; 2],
    pub dictionary: LabelDictionary,
    pub payloads: [Vec<u8>; 2],
}

/// Unify the labels of two parsed graphs and encode both
pub fn encode_pair(a: Graph, b: Graph) -> Result<EncodedPair> {
    let dictionary = LabelDictionary::unify(&a, &b);
    let payloads = [encode_to_vec(&a, &dictionary)?, encode_to_vec(&b, &dictionary)?];
    Ok(EncodedPair {
        graphs: [a, b],
        dictionary,
        payloads,
    })
}

/// Run the full conversion for one pair of files
pub fn convert_pair(request: &ConversionRequest, config: &ConvertConfig) -> Result<ConversionReport> {
    let [input_a, input_b] = &request.inputs;
    let a = read_graph(input_a)?;
    let b = read_graph(input_b)?;

    if config.dump_graphs {
        println!("{}", a);
        println!("{}", b);
    }

    let pair = encode_pair(a, b)?;

    for (path, payload) in request.outputs.iter().zip(&pair.payloads) {
        write_output(path, payload, config.atomic_writes)?;
    }

    let report = ConversionReport {
        vertices: [pair.graphs[0].n(), pair.graphs[1].n()],
        edges: [pair.graphs[0].edge_count(), pair.graphs[1].edge_count()],
        labels: pair.dictionary.len(),
        bytes_written: [pair.payloads[0].len(), pair.payloads[1].len()],
    };
    info!(
        vertices = ?report.vertices,
        labels = report.labels,
        bytes = ?report.bytes_written,
        "converted graph pair"
    );
    Ok(report)
}

/// Create or replace `path` with `bytes`
///
/// With `atomic` set, the bytes go to a temp file in the same directory which
/// is then renamed over `path`; on failure the temp file is removed and any
/// previous `path` is left untouched.
pub fn write_output(path: &Path, bytes: &[u8], atomic: bool) -> Result<()> {
    if !atomic {
        std::fs::write(path, bytes)?;
    } else {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
    }
    debug!(path = %path.display(), bytes = bytes.len(), atomic, "wrote output");
    Ok(())
}
