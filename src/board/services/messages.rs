//! Service layer for message lifecycle operations.
//!
//! Provides [`MessageService`] which coordinates message creation, lookup,
//! listing, voting, and deletion. The service owns no storage of its own:
//! it resolves the board through the shared [`BoardStore`] handle and
//! operates on that board's message collection.

use crate::board::{
    domain::{Board, BoardDomainError, BoardId, Message, Vote},
    ports::{BoardStore, BoardStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for message lifecycle operations.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Message lifecycle orchestration service.
///
/// Absence is signalled with `Ok(None)`, never an error: looking up or
/// deleting through an unregistered board identifier, or naming a message
/// the board does not hold, resolves to `None`. The one exception is
/// [`MessageService::create_message`], which requires the board to exist.
#[derive(Clone)]
pub struct MessageService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> MessageService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a new message service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new message on the given board and returns it.
    ///
    /// The message carries a freshly generated 8-character identifier, the
    /// text verbatim, the clock's current timestamp, and a vote count of
    /// zero. It is appended at the end of the board's collection.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] with
    /// [`BoardStoreError::NotFound`] when the board does not exist —
    /// messages are never posted to boards that were not explicitly
    /// created.
    pub async fn create_message(
        &self,
        board_id: &str,
        text: impl Into<String>,
    ) -> MessageServiceResult<Message> {
        let id = BoardId::new(board_id)?;
        let message = Message::new(text, &*self.clock);
        self.store.append_message(&id, message.clone()).await?;
        info!("Posted message {} to board {}", message.id(), id);
        Ok(message)
    }

    /// Returns the given board's messages in insertion order.
    ///
    /// Returns `Ok(None)` when the board does not exist — distinct from
    /// `Ok(Some(vec![]))`, an existing board with no messages.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] when the lookup
    /// fails.
    pub async fn find_messages(
        &self,
        board_id: &str,
    ) -> MessageServiceResult<Option<Vec<Message>>> {
        let id = BoardId::new(board_id)?;
        let found = self.store.find(&id).await?;
        Ok(found.map(Board::into_messages))
    }

    /// Finds a single message on the given board.
    ///
    /// Returns `Ok(None)` when the board does not exist or holds no
    /// message with the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] when the lookup
    /// fails.
    pub async fn find_message(
        &self,
        board_id: &str,
        message_id: &str,
    ) -> MessageServiceResult<Option<Message>> {
        let id = BoardId::new(board_id)?;
        Ok(self.store.find_message(&id, message_id).await?)
    }

    /// Deletes a message from the given board, returning the removed
    /// message with its fields unchanged.
    ///
    /// Returns `Ok(None)` when the board does not exist or holds no
    /// message with the identifier; nothing is removed in that case.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] when the
    /// removal fails.
    pub async fn delete_message(
        &self,
        board_id: &str,
        message_id: &str,
    ) -> MessageServiceResult<Option<Message>> {
        let id = BoardId::new(board_id)?;
        let removed = self.store.remove_message(&id, message_id).await?;
        if removed.is_some() {
            info!("Deleted message {} from board {}", message_id, id);
        }
        Ok(removed)
    }

    /// Raises a message's vote count by one, returning the updated
    /// message.
    ///
    /// Returns `Ok(None)` when the board or the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] when the update
    /// fails.
    pub async fn upvote(
        &self,
        board_id: &str,
        message_id: &str,
    ) -> MessageServiceResult<Option<Message>> {
        self.vote(board_id, message_id, Vote::Up).await
    }

    /// Lowers a message's vote count by one, returning the updated
    /// message.
    ///
    /// Returns `Ok(None)` when the board or the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Domain`] when the board identifier
    /// fails validation, or [`MessageServiceError::Store`] when the update
    /// fails.
    pub async fn downvote(
        &self,
        board_id: &str,
        message_id: &str,
    ) -> MessageServiceResult<Option<Message>> {
        self.vote(board_id, message_id, Vote::Down).await
    }

    async fn vote(
        &self,
        board_id: &str,
        message_id: &str,
        vote: Vote,
    ) -> MessageServiceResult<Option<Message>> {
        let id = BoardId::new(board_id)?;
        let updated = self.store.record_vote(&id, message_id, vote).await?;
        if let Some(message) = &updated {
            debug!(
                "Recorded {:?} vote on message {} (now {})",
                vote,
                message.id(),
                message.votes()
            );
        }
        Ok(updated)
    }
}
