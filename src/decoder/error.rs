//! Decoder-specific error types
//!
//! Every variant is a reason a locking script was not recognised as a
//! Sensible token output. `decode_sensible_txo` collapses them all to `false`.

/// Result type for decoder operations
pub type DecoderResult<T> = Result<T, DecoderError>;

/// Decoder-specific error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoderError {
    #[error("script too short: {len} bytes (minimum {min})")]
    ScriptTooShort { len: usize, min: usize },

    #[error("unknown sensible protocol type {0}")]
    UnknownProtoType(u8),

    #[error("no FT layout version matched the pushdata probes")]
    NoFtVersion,

    #[error("unique data length {data_len} does not fit a {script_len}-byte script")]
    UniqueLengthOverflow { data_len: usize, script_len: usize },

    #[error("expected OP_RETURN at offset {offset}")]
    MissingOpReturn { offset: usize },

    #[error("no recognised sensible layout")]
    UnrecognisedLayout,

    #[error("read of {width} bytes at {offset} runs past a {len}-byte script")]
    Truncated {
        offset: usize,
        width: usize,
        len: usize,
    },
}

impl DecoderError {
    /// Short stable tag used in compact CLI output
    pub fn tag(&self) -> &'static str {
        match self {
            DecoderError::ScriptTooShort { .. } => "TOO_SHORT",
            DecoderError::UnknownProtoType(_) => "UNKNOWN_PROTO_TYPE",
            DecoderError::NoFtVersion => "NO_FT_VERSION",
            DecoderError::UniqueLengthOverflow { .. } => "UNIQUE_LENGTH_OVERFLOW",
            DecoderError::MissingOpReturn { .. } => "MISSING_OP_RETURN",
            DecoderError::UnrecognisedLayout => "UNRECOGNISED",
            DecoderError::Truncated { .. } => "TRUNCATED",
        }
    }
}
