use miette::Diagnostic;
use thiserror::Error;

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Custom error types for the sequence extractor
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(seq_extract::io_error))]
    Io(String),

    #[error("Malformed structural literal at offset {offset}: {message}")]
    #[diagnostic(code(seq_extract::malformed_literal))]
    MalformedLiteral { offset: usize, message: String },

    #[error("Invalid block structure: {message}")]
    #[diagnostic(code(seq_extract::invalid_structure))]
    InvalidStructure { message: String },

    #[error("Handshake failed: expected {expected:?}, got {got:?}")]
    #[diagnostic(code(seq_extract::handshake))]
    Handshake { expected: String, got: String },

    #[error("Transport error: {message}")]
    #[diagnostic(code(seq_extract::transport))]
    Transport { message: String },

    #[error("Internal error: {message}")]
    #[diagnostic(code(seq_extract::internal_error))]
    Internal { message: String },
}

impl Error {
    /// Create a malformed-literal error at a byte offset
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Error::MalformedLiteral {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid-structure error
    pub fn structure(message: impl Into<String>) -> Self {
        Error::InvalidStructure {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
