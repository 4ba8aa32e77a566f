//! Corkboard: an embeddable in-memory message-board service.
//!
//! This crate provides boards that hold ordered collections of messages,
//! with typed operations for creating, listing, looking up, voting on,
//! and deleting messages. There is no network surface and no persistence
//! backend: the service layer is the public interface, intended to be
//! wrapped by whatever outer shell embeds it.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage interactions
//! - **Adapters**: Concrete implementations of ports (in-memory)
//! - **Services**: Orchestration over the store handle
//!
//! # Example
//!
//! ```
//! use corkboard::board::domain::{BoardId, Message};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let id = BoardId::new("my-board").expect("valid board id");
//! let message = Message::new("This is a test", &clock);
//!
//! assert_eq!(message.votes(), 0);
//! assert_eq!(message.id().as_str().len(), 8);
//! assert_eq!(id.as_str(), "my-board");
//! ```

pub mod board;
