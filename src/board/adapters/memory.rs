//! In-memory implementation of the [`BoardStore`] port.
//!
//! Provides a simple, thread-safe store suitable for embedding and for
//! tests. Every operation takes a single lock guard, so each mutation is
//! atomic from the caller's point of view.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::board::{
    domain::{Board, BoardId, Message, Vote},
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};

/// Thread-safe in-memory board store.
///
/// Cloning the store clones the handle, not the contents: all clones share
/// the same set of boards.
///
/// # Examples
///
/// ```
/// use corkboard::board::adapters::memory::InMemoryBoardStore;
///
/// let store = InMemoryBoardStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    boards: HashMap<BoardId, Board>,
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered boards.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store. For error-propagating access, use the
    /// store trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.boards.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no boards are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn insert(&self, board: &Board) -> BoardStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        if state.boards.contains_key(board.id()) {
            return Err(BoardStoreError::DuplicateBoard(board.id().clone()));
        }

        state.boards.insert(board.id().clone(), board.clone());
        Ok(())
    }

    async fn find(&self, id: &BoardId) -> BoardStoreResult<Option<Board>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        Ok(state.boards.get(id).cloned())
    }

    async fn list(&self) -> BoardStoreResult<Vec<Board>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        let mut boards: Vec<Board> = state.boards.values().cloned().collect();
        boards.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(boards)
    }

    async fn append_message(&self, id: &BoardId, message: Message) -> BoardStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        let board = state
            .boards
            .get_mut(id)
            .ok_or_else(|| BoardStoreError::NotFound(id.clone()))?;

        if board.message(message.id().as_str()).is_some() {
            return Err(BoardStoreError::DuplicateMessage(message.id().clone()));
        }

        board.post(message);
        Ok(())
    }

    async fn find_message(
        &self,
        id: &BoardId,
        message_id: &str,
    ) -> BoardStoreResult<Option<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        Ok(state
            .boards
            .get(id)
            .and_then(|board| board.message(message_id))
            .cloned())
    }

    async fn remove_message(
        &self,
        id: &BoardId,
        message_id: &str,
    ) -> BoardStoreResult<Option<Message>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        Ok(state
            .boards
            .get_mut(id)
            .and_then(|board| board.remove(message_id)))
    }

    async fn record_vote(
        &self,
        id: &BoardId,
        message_id: &str,
        vote: Vote,
    ) -> BoardStoreResult<Option<Message>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        let updated = state
            .boards
            .get_mut(id)
            .and_then(|board| board.message_mut(message_id))
            .map(|message| {
                message.apply(vote);
                message.clone()
            });
        Ok(updated)
    }

    async fn clear(&self) -> BoardStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStoreError::internal(io::Error::other(err.to_string())))?;

        state.boards.clear();
        Ok(())
    }
}
