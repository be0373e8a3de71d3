//! Error types for the fallible edges of the crate.
//!
//! The protocol path itself is total: encoding never fails, and the decoder treats
//! a checksum mismatch as "no packet yet" rather than an error. What can fail is
//! configuration handling and copying received data into a caller's buffer.

use thiserror::Error;

/// Main error type for `chromapack`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromaError {
    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provided output buffer was too small.
    #[error("Buffer too small: needed {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}
