//! Tokenizer output model

use crate::errors::{ConvertError, Result};

/// One `(index, label)` field from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField {
    pub index: usize,
    pub label: String,
}

impl LabelField {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    /// Parse a field body such as `0, Area(2):1`
    ///
    /// Splits on the first comma only, so labels may themselves contain
    /// commas. Both halves are trimmed.
    pub fn parse(body: &str) -> Result<Self> {
        let (index, label) = body
            .split_once(',')
            .ok_or_else(|| ConvertError::MalformedField {
                field: body.to_string(),
            })?;

        let index = index.trim();
        let index = index.parse().map_err(|_| ConvertError::InvalidIndex {
            text: index.to_string(),
        })?;

        Ok(Self::new(index, label.trim()))
    }
}
