//! Line protocol for tempo: one FEN line and one time line in, one move out.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Request, parse_remaining, parse_request};
pub use error::ProtocolError;
pub use session::Session;
