//! Identifier types for the board domain.
//!
//! Board identifiers are caller-supplied slugs; message identifiers are
//! generated, fixed-length opaque strings. Both wrap `String` behind
//! validated newtypes so the two cannot be mixed up at call sites.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for a board identifier.
const MAX_BOARD_ID_LENGTH: usize = 100;

/// Validated, caller-supplied board identifier.
///
/// Board identifiers are slugs such as `my-board` or `announcements_2026`.
/// The input is trimmed and lowercased; only characters in `[a-z0-9_-]`
/// are accepted.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::BoardId;
///
/// let id = BoardId::new("My-Board").expect("valid board id");
/// assert_eq!(id.as_str(), "my-board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    /// Creates a validated board identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardId`] when the value is empty
    /// after trimming, [`BoardDomainError::InvalidBoardId`] when it contains
    /// characters outside `[a-z0-9_-]`, or
    /// [`BoardDomainError::BoardIdTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyBoardId);
        }

        if normalized.len() > MAX_BOARD_ID_LENGTH {
            return Err(BoardDomainError::BoardIdTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(BoardDomainError::InvalidBoardId(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the board identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of a message identifier, in characters.
const MESSAGE_ID_LENGTH: usize = 8;

/// Opaque, fixed-length message identifier.
///
/// Message identifiers are 8 lowercase-hex characters drawn from a freshly
/// generated UUIDv4, unique within the owning board.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::MessageId;
///
/// let id = MessageId::generate();
/// assert_eq!(id.as_str().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Generates a new random message identifier.
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex.chars().take(MESSAGE_ID_LENGTH).collect())
    }

    /// Creates a message identifier from an existing value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidMessageId`] when the value is not
    /// exactly 8 lowercase-hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();

        let is_valid = raw.chars().count() == MESSAGE_ID_LENGTH
            && raw.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());

        if !is_valid {
            return Err(BoardDomainError::InvalidMessageId(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the message identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
