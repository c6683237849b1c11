use thiserror::Error;

/// Main error type for BER-TLV operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    /// A tag, length or value extends past the available bytes
    #[error("Truncated input: {0}")]
    TruncatedInput(String),

    /// Indefinite or otherwise unusable length octets
    #[error("Malformed length: {0}")]
    MalformedLength(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

/// Result type alias for BER-TLV operations
pub type TlvResult<T> = Result<T, TlvError>;
