use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV processing
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex-encoded script could not be decoded
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sensible decoder errors
    #[error("Decoder error: {0}")]
    Decoder(#[from] crate::decoder::DecoderError),

    /// Invalid UTXO record
    #[error("Invalid UTXO record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Invalid command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
