//! The Board aggregate root owning an ordered collection of messages.

use super::{BoardId, Message};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named container of messages.
///
/// The board exclusively owns its messages and preserves insertion order,
/// which is also the listing order. Message identifier uniqueness within
/// the board is enforced by the storage adapters before [`Board::post`]
/// is reached.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::{Board, BoardId, Message};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let id = BoardId::new("my-board").expect("valid board id");
/// let mut board = Board::new(id, &clock);
///
/// board.post(Message::new("first", &clock));
/// assert_eq!(board.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    messages: Vec<Message>,
    created_at: DateTime<Utc>,
}

impl Board {
    /// Creates an empty board with the current timestamp.
    #[must_use]
    pub fn new(id: BoardId, clock: &impl Clock) -> Self {
        Self {
            id,
            messages: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the board, returning its messages in insertion order.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Returns the number of messages on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the board holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the message with the given identifier, if present.
    #[must_use]
    pub fn message(&self, message_id: &str) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.id().as_str() == message_id)
    }

    /// Returns a mutable handle to the message with the given identifier.
    pub fn message_mut(&mut self, message_id: &str) -> Option<&mut Message> {
        self.messages
            .iter_mut()
            .find(|m| m.id().as_str() == message_id)
    }

    /// Appends a message to the board.
    pub fn post(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Removes and returns the message with the given identifier.
    ///
    /// Returns `None` when no message has the identifier; the remaining
    /// messages keep their relative order.
    pub fn remove(&mut self, message_id: &str) -> Option<Message> {
        let position = self
            .messages
            .iter()
            .position(|m| m.id().as_str() == message_id)?;
        Some(self.messages.remove(position))
    }
}
