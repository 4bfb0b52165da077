use std::io;

/// Errors produced while encoding or decoding a record value.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not well-formed for this codec.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The text is well-formed but cannot be represented as a value, or the
    /// value cannot be represented in this codec.
    #[error("data error: {0}")]
    Data(String),

    /// I/O failure surfaced by the codec.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Returns `true` for malformed input, as opposed to data or I/O failures.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof => Self::Syntax(err.to_string()),
            Category::Data => Self::Data(err.to_string()),
            Category::Io => Self::Io(err.into()),
        }
    }
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
