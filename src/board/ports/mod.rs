//! Port contracts for board ownership and lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by the board and
//! message services.

pub mod store;

pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
