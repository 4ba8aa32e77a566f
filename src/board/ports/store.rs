//! Store port for board ownership and lookup.
//!
//! Defines the abstract contract for registering boards and operating on
//! their message collections. The in-memory adapter is the only backend in
//! scope, but the seam keeps alternative backends possible.

use crate::board::domain::{Board, BoardId, Message, MessageId, Vote};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Board ownership and lookup contract.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Board identifiers are unique across the store
/// - Message identifiers are unique within a board
/// - Each message-collection operation is atomic: concurrent callers
///   observe message counts that change by exactly one per mutation
///
/// Message-level operations take the message identifier as `&str`: any
/// string that does not name a stored message resolves to the absent case
/// rather than an error.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Registers a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DuplicateBoard`] when a board with the
    /// same identifier is already registered.
    async fn insert(&self, board: &Board) -> BoardStoreResult<()>;

    /// Retrieves a snapshot of a board by its identifier.
    ///
    /// Returns `None` when the board does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn find(&self, id: &BoardId) -> BoardStoreResult<Option<Board>>;

    /// Returns all boards, ordered by creation time then identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn list(&self) -> BoardStoreResult<Vec<Board>>;

    /// Appends a message to a board's collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NotFound`] when the board does not exist
    /// or [`BoardStoreError::DuplicateMessage`] when the board already
    /// holds a message with the same identifier.
    async fn append_message(&self, id: &BoardId, message: Message) -> BoardStoreResult<()>;

    /// Retrieves a snapshot of a single message.
    ///
    /// Returns `None` when the board or the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn find_message(
        &self,
        id: &BoardId,
        message_id: &str,
    ) -> BoardStoreResult<Option<Message>>;

    /// Removes a message from a board's collection, returning it with its
    /// fields unchanged.
    ///
    /// Returns `None` when the board or the message does not exist; the
    /// board is left untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn remove_message(
        &self,
        id: &BoardId,
        message_id: &str,
    ) -> BoardStoreResult<Option<Message>>;

    /// Adjusts a message's vote count, returning the updated message.
    ///
    /// Returns `None` when the board or the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn record_vote(
        &self,
        id: &BoardId,
        message_id: &str,
        vote: Vote,
    ) -> BoardStoreResult<Option<Message>>;

    /// Removes all boards. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Internal`] when the storage layer fails.
    async fn clear(&self) -> BoardStoreResult<()>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// A board with the same identifier is already registered.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// The board already holds a message with the same identifier.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(MessageId),

    /// The board was not found.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a storage-layer error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
