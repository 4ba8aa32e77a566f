//! Application services for board and message lifecycle operations.

mod boards;
mod messages;

pub use boards::{BoardService, BoardServiceError, BoardServiceResult};
pub use messages::{MessageService, MessageServiceError, MessageServiceResult};
