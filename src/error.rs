//! Error types for the fallible corners of the crate.
//!
//! Synchronization itself never fails. Errors only come from index-based
//! list operations and from the explicit membership check.

/// Errors from list operations and membership validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("{value} is not one of the {candidates} candidates")]
    NotACandidate { value: String, candidates: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SelectError>;
