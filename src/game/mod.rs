//! Game sessions
//!
//! The session state machine, the per-player store that serialises access to
//! it, and the pluggable policies (target choice, guess acceptance).

mod error;
pub mod policy;
mod session;
mod store;

pub use error::GameError;
pub use policy::{AcceptAll, Dictionary, EmptyWordList, GuessPolicy, RandomSelector, TargetSelector};
pub use session::{GameConfig, GameStatus, GuessRecord, MAX_ATTEMPTS, Session, ZeroAttempts};
pub use store::{PlayerId, SessionStore};
