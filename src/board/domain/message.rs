//! The Message entity representing a single post on a board.
//!
//! Message text is stored verbatim and is immutable after creation; the
//! vote count is the only field that changes over a message's lifetime.

use super::MessageId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Direction of a vote cast on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    /// Raises the vote count by one.
    Up,
    /// Lowers the vote count by one.
    Down,
}

/// A message posted to a board.
///
/// # Invariants
///
/// - `id` is always 8 opaque characters, unique within the owning board
/// - `created_at` is always populated from the injected clock
/// - `text` is stored verbatim and never modified after creation
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::Message;
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::new("This is a test", &clock);
///
/// assert_eq!(message.text(), "This is a test");
/// assert_eq!(message.votes(), 0);
/// assert_eq!(message.id().as_str().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within the owning board.
    id: MessageId,

    /// The message text, stored verbatim.
    text: String,

    /// When the message was created.
    created_at: DateTime<Utc>,

    /// Net vote count, starting at zero.
    votes: i64,
}

impl Message {
    /// Creates a new message with a generated identifier, the current
    /// timestamp, and a vote count of zero.
    #[must_use]
    pub fn new(text: impl Into<String>, clock: &impl Clock) -> Self {
        Self::with_id(MessageId::generate(), text, clock)
    }

    /// Creates a new message with a specified identifier.
    #[must_use]
    pub fn with_id(id: MessageId, text: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: clock.utc(),
            votes: 0,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the net vote count.
    #[must_use]
    pub const fn votes(&self) -> i64 {
        self.votes
    }

    /// Applies a vote, adjusting the count with saturating arithmetic.
    pub const fn apply(&mut self, vote: Vote) {
        self.votes = match vote {
            Vote::Up => self.votes.saturating_add(1),
            Vote::Down => self.votes.saturating_sub(1),
        };
    }
}
