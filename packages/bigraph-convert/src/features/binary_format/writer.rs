//! Checked 16-bit word writer
//!
//! Every value in the binary layout goes through [`WordWriter::push`], which
//! is the only place that converts to `u16`.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::errors::{ConvertError, Result};

/// Writes little-endian `u16` words to a sink, rejecting values ≥ 65536
pub struct WordWriter<W: Write> {
    sink: W,
    words: usize,
}

impl<W: Write> WordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, words: 0 }
    }

    /// Append one word; `field` names the value in overflow errors
    pub fn push(&mut self, field: &'static str, value: usize) -> Result<()> {
        let word = u16::try_from(value).map_err(|_| ConvertError::WordOverflow { field, value })?;
        self.sink.write_u16::<LittleEndian>(word)?;
        self.words += 1;
        Ok(())
    }

    /// Words written so far
    pub fn words(&self) -> usize {
        self.words
    }

    /// Flush and return the sink
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
