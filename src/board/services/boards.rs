//! Service layer for board lifecycle operations.
//!
//! Provides [`BoardService`] which coordinates board creation, lookup,
//! listing, and full reset against a [`BoardStore`].

use crate::board::{
    domain::{Board, BoardDomainError, BoardId},
    ports::{BoardStore, BoardStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for board lifecycle operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board lifecycle orchestration service.
#[derive(Clone)]
pub struct BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates and registers an empty board under the given identifier,
    /// returning the created board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the identifier fails
    /// validation, or [`BoardServiceError::Store`] when a board with the
    /// same identifier is already registered.
    pub async fn create_board(&self, id: &str) -> BoardServiceResult<Board> {
        let board_id = BoardId::new(id)?;
        let board = Board::new(board_id, &*self.clock);
        self.store.insert(&board).await?;
        info!("Created board {}", board.id());
        Ok(board)
    }

    /// Finds a board by its identifier.
    ///
    /// Returns `Ok(None)` when no board has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the identifier fails
    /// validation, or [`BoardServiceError::Store`] when the lookup fails.
    pub async fn find_board(&self, id: &str) -> BoardServiceResult<Option<Board>> {
        let board_id = BoardId::new(id)?;
        Ok(self.store.find(&board_id).await?)
    }

    /// Returns all boards, ordered by creation time then identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the listing fails.
    pub async fn list_boards(&self) -> BoardServiceResult<Vec<Board>> {
        Ok(self.store.list().await?)
    }

    /// Removes all boards. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the reset fails.
    pub async fn clear(&self) -> BoardServiceResult<()> {
        self.store.clear().await?;
        debug!("Cleared all boards");
        Ok(())
    }
}
