use thiserror::Error;

/// Failure of a conversion over a streaming source.
///
/// Splitting and tab expansion never fail on content, so the only way a
/// conversion can abort is the underlying reader refusing to produce bytes.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to parse reader options: {0}")]
    Parse(#[from] toml::de::Error),
}
