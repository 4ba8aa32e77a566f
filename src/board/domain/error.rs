//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board identifier is empty after trimming.
    #[error("board identifier must not be empty")]
    EmptyBoardId,

    /// The board identifier contains characters outside `[a-z0-9_-]`.
    #[error(
        "board identifier '{0}' contains invalid characters (only lowercase alphanumeric, hyphens and underscores allowed)"
    )]
    InvalidBoardId(String),

    /// The board identifier exceeds the 100-character limit.
    #[error("board identifier exceeds 100 character limit: {0}")]
    BoardIdTooLong(String),

    /// The message identifier is not an 8-character lowercase-hex string.
    #[error("invalid message identifier: {0}")]
    InvalidMessageId(String),
}
