//! Error types for deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP container error (for the PPTX package).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML emission error (for PPTX parts).
    #[error("XML error: {0}")]
    XmlError(String),
}
