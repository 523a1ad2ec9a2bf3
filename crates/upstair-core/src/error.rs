use thiserror::Error;

/// All the ways the SearCh client can go wrong.
///
/// thiserror generates the Display and Error boilerplate. Note what is NOT
/// here: date problems. Unparseable or missing dates are normalized away
/// inside the engine and never surface as errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid profile: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
