//! Domain model for boards and their messages.
//!
//! The board domain models named message containers, the messages they
//! own, and the identifier types addressing both. All infrastructure
//! concerns are kept outside the domain boundary.

mod board;
mod error;
mod ids;
mod message;

pub use board::Board;
pub use error::BoardDomainError;
pub use ids::{BoardId, MessageId};
pub use message::{Message, Vote};
