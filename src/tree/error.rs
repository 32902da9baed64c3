//! Error types for suffix tree construction and queries.

use thiserror::Error;

/// Errors raised by the suffix tree engine.
///
/// Queries on a built tree only fail on malformed arguments; a pattern that
/// is simply not present yields an empty result, never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// An argument was rejected before any state was touched.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Construction was stopped through the builder's cancellation flag.
    #[error("Construction cancelled after {processed} of {total} characters")]
    Cancelled { processed: usize, total: usize },
}

impl IndexError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, IndexError::InvalidInput(_))
    }
}

/// A specialized `Result` type for suffix tree operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Reject `bytes` if it contains the reserved terminator.
///
/// `what` names the argument in the error message.
pub(crate) fn ensure_terminator_free(bytes: &[u8], what: &str) -> Result<()> {
    match memchr::memchr(super::types::TERMINATOR, bytes) {
        Some(offset) => Err(IndexError::InvalidInput(format!(
            "{} contains the reserved terminator byte 0x00 at offset {}",
            what, offset
        ))),
        None => Ok(()),
    }
}
