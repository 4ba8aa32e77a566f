//! Boards and the messages they own.
//!
//! This module implements the message-board core: board registration and
//! lookup, plus creation, listing, voting, and deletion of the messages a
//! board holds. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
