//! Port-contract tests for [`InMemoryBoardStore`].
//!
//! Exercises duplicate detection, not-found semantics, and the atomicity
//! of message-collection mutations through the [`BoardStore`] trait.

use crate::in_memory::helpers::{board, clock, runtime, store};
use corkboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{Message, MessageId, Vote},
    ports::{BoardStore, BoardStoreError},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that duplicate board identifiers are rejected.
#[rstest]
fn duplicate_board_id_rejected(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let first = board("my-board", &clock).expect("board");
    let second = board("my-board", &clock).expect("board");

    rt.block_on(store.insert(&first)).expect("first insert");

    let result = rt.block_on(store.insert(&second));
    assert!(
        matches!(result, Err(BoardStoreError::DuplicateBoard(id)) if id == *first.id()),
        "Should reject duplicate board identifier"
    );
}

/// Tests that a board rejects a second message with the same identifier.
#[rstest]
fn duplicate_message_id_rejected(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let my_board = board("my-board", &clock).expect("board");
    rt.block_on(store.insert(&my_board)).expect("insert");

    let id = MessageId::new("0a1b2c3d").expect("valid id");
    let original = Message::with_id(id.clone(), "Original message", &clock);
    rt.block_on(store.append_message(my_board.id(), original))
        .expect("first append");

    let duplicate = Message::with_id(id.clone(), "Different content", &clock);
    let result = rt.block_on(store.append_message(my_board.id(), duplicate));
    assert!(
        matches!(result, Err(BoardStoreError::DuplicateMessage(dup)) if dup == id),
        "Should reject duplicate message identifier"
    );
}

/// Tests that appending to an unregistered board fails loudly.
#[rstest]
fn append_to_missing_board_is_not_found(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let ghost = board("ghost", &clock).expect("board");

    let result = rt.block_on(store.append_message(ghost.id(), Message::new("text", &clock)));
    assert!(matches!(result, Err(BoardStoreError::NotFound(id)) if id == *ghost.id()));
}

/// Tests that removal from an unregistered board is the absent case.
#[rstest]
fn remove_from_missing_board_returns_none(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let ghost = board("ghost", &clock).expect("board");

    let removed = rt
        .block_on(store.remove_message(ghost.id(), "some-id"))
        .expect("remove should succeed");
    assert!(removed.is_none());
}

/// Tests that removal returns the message and shrinks the snapshot.
#[rstest]
fn remove_returns_message_and_shrinks_board(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let my_board = board("my-board", &clock).expect("board");
    rt.block_on(store.insert(&my_board)).expect("insert");

    let message = Message::new("This is a text", &clock);
    let message_id = message.id().clone();
    rt.block_on(store.append_message(my_board.id(), message))
        .expect("append");

    let removed = rt
        .block_on(store.remove_message(my_board.id(), message_id.as_str()))
        .expect("remove should succeed")
        .expect("message should have been removed");
    assert_eq!(removed.text(), "This is a text");

    let snapshot = rt
        .block_on(store.find(my_board.id()))
        .expect("find should succeed")
        .expect("board should exist");
    assert!(snapshot.is_empty());
}

/// Tests that vote recording is reflected in later snapshots.
#[rstest]
fn recorded_vote_survives_snapshot(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let my_board = board("my-board", &clock).expect("board");
    rt.block_on(store.insert(&my_board)).expect("insert");

    let message = Message::new("votable", &clock);
    let message_id = message.id().clone();
    rt.block_on(store.append_message(my_board.id(), message))
        .expect("append");

    let updated = rt
        .block_on(store.record_vote(my_board.id(), message_id.as_str(), Vote::Up))
        .expect("vote should succeed")
        .expect("message should exist");
    assert_eq!(updated.votes(), 1);

    let found = rt
        .block_on(store.find_message(my_board.id(), message_id.as_str()))
        .expect("find should succeed")
        .expect("message should exist");
    assert_eq!(found.votes(), 1);
}

/// Tests that clearing empties the store and stays idempotent.
#[rstest]
fn clear_empties_the_store(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(store.insert(&board("one", &clock).expect("board")))
        .expect("insert");
    rt.block_on(store.insert(&board("two", &clock).expect("board")))
        .expect("insert");
    assert_eq!(store.len(), 2);

    rt.block_on(store.clear()).expect("clear should succeed");
    assert!(store.is_empty());

    rt.block_on(store.clear()).expect("second clear");
    assert!(store.is_empty());
}

/// Tests that listing orders boards by creation time then identifier.
#[rstest]
fn list_orders_boards_by_creation(
    runtime: io::Result<Runtime>,
    store: InMemoryBoardStore,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(store.insert(&board("alpha", &clock).expect("board")))
        .expect("insert");
    rt.block_on(store.insert(&board("beta", &clock).expect("board")))
        .expect("insert");

    let boards = rt.block_on(store.list()).expect("list should succeed");
    let ids: Vec<&str> = boards.iter().map(|b| b.id().as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta"]);
}
