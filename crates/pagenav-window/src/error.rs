//! Error types for page link generation.

use thiserror::Error;

/// Errors raised when pagination inputs fail validation.
///
/// Generation is all-or-nothing: validation runs before any link is built,
/// so a failed call never yields a partial sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginateError {
    /// Current page below the first page; pages are numbered from 1.
    #[error("current page must be at least 1")]
    CurrentPageZero,

    /// Current page beyond the last page of a multi-page range.
    #[error("current page {current} out of range: {total} pages total")]
    CurrentPageOutOfRange {
        /// The rejected current page.
        current: u32,
        /// The total page count supplied with it.
        total: u32,
    },
}

/// Result type alias for page link generation.
pub type PaginateResult<T> = std::result::Result<T, PaginateError>;
