//! Depth-tracking header scanner
//!
//! Walks the header one character at a time. The outermost `(`/`)` pair of
//! each field is a delimiter; every parenthesis nested inside it is label
//! text and is kept verbatim. Text between fields (depth 0) is ignored.

use tracing::debug;

use super::domain::LabelField;
use crate::errors::{ConvertError, Result};

/// Extract every `(index, label)` field from a header line, in order of
/// appearance
pub fn tokenize_header(line: &str) -> Result<Vec<LabelField>> {
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0usize;

    for (column, ch) in line.chars().enumerate() {
        if ch == ')' {
            depth = depth
                .checked_sub(1)
                .ok_or(ConvertError::UnbalancedParen { column })?;
            if depth == 0 {
                fields.push(LabelField::parse(&buffer)?);
                buffer.clear();
            }
        }
        if depth >= 1 {
            buffer.push(ch);
        }
        if ch == '(' {
            depth += 1;
        }
    }

    if depth > 0 {
        return Err(ConvertError::UnterminatedField { partial: buffer });
    }

    debug!(fields = fields.len(), "tokenized header");
    Ok(fields)
}
