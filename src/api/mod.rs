//! Request-handling boundary
//!
//! Submit, fetch-state and reset, expressed as serialisable payloads.

mod payload;
pub mod protocol;
mod service;

pub use payload::{ErrorResponse, GuessResponse, GuessView, ResetResponse, StateResponse};
pub use protocol::{DEFAULT_PLAYER, Request, Response};
pub use service::GameService;
