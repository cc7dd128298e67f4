//! # Error Types
//!
//! This module defines error types used throughout the pugmark library.

use thiserror::Error;

/// Main error type for pugmark operations
#[derive(Debug, Error)]
pub enum PugmarkError {
    /// Declarations, array braces or size annotation could not be located
    #[error("Structure error: {0}")]
    Structure(String),

    /// The array literal holds fewer values than its declared length
    #[error("Buffer too short: expected {expected} values, found {found}")]
    BufferTooShort { expected: usize, found: usize },

    /// A batch run found nothing to rewrite
    #[error("No {0} arrays were updated")]
    NothingUpdated(&'static str),

    /// Invalid target file pattern
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
