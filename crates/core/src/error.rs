//! Error types for Stowage.

use thiserror::Error;

/// Result type alias for Stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during container loading.
///
/// These cover contract violations only. A box that simply fits nowhere is a
/// normal outcome reported through [`crate::PackResult::unplaced`], not an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box provided (non-positive dimension or weight).
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),
}
