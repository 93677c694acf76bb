use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Tuning for [`LineReader`](crate::reader::LineReader).
///
/// Meant to be embedded in the config of whatever pipeline drives the
/// preprocessor; every field has a default so an empty table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Initial size of the read buffer in bytes. Grows when a single line
    /// does not fit. Zero is treated as one.
    pub buffer_size: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ReaderOptions {
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}
