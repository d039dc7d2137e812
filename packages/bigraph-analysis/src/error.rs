use std::path::PathBuf;

use bigraph_convert::ConvertError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No run times recorded for instance '{0}'")]
    MissingRuntime(String),

    #[error("No 'Solution size' line in {}", .0.display())]
    MissingSolutionSize(PathBuf),

    #[error("Solution sizes differ between runs for instance '{instance}': {first} vs {second}")]
    InconsistentSolutionSize {
        instance: String,
        first: u64,
        second: u64,
    },
}

impl AnalysisError {
    pub fn parse<E: std::fmt::Display>(e: E) -> Self {
        Self::Parse(e.to_string())
    }
}
