//! The three boundary operations over a session store.

use super::payload::{GuessResponse, ResetResponse, StateResponse};
use super::protocol::{Request, Response};
use crate::game::{GameError, SessionStore};
use tracing::{instrument, warn};

/// Request-handling facade over a [`SessionStore`].
///
/// Front-ends (terminal, JSON lines, an HTTP adapter) talk to this and never
/// see a `Session` directly.
pub struct GameService {
    store: SessionStore,
}

impl GameService {
    #[must_use]
    pub const fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Submit a guess for `player`.
    ///
    /// # Errors
    ///
    /// Returns the store's `GameError` when the guess is rejected; the session
    /// is unchanged in that case.
    #[instrument(skip(self))]
    pub fn submit(&self, player: &str, guess: &str) -> Result<GuessResponse, GameError> {
        let (record, session) = self.store.submit_guess(player, guess)?;
        Ok(GuessResponse::new(&record, &session))
    }

    /// Current board for `player`, for first load or reconnect.
    #[must_use]
    pub fn state(&self, player: &str) -> StateResponse {
        StateResponse::from(&self.store.current_state(player))
    }

    /// Throw away `player`'s game and start a new one.
    #[must_use]
    pub fn reset(&self, player: &str) -> ResetResponse {
        self.store.reset(player);
        ResetResponse::default()
    }

    /// Emoji summary of `player`'s game, e.g. for pasting into a chat.
    #[must_use]
    pub fn share_grid(&self, player: &str) -> String {
        self.store.current_state(player).share_grid()
    }

    /// Rows on the board.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.store.config().max_attempts()
    }

    /// Dispatch a decoded request.
    #[must_use]
    pub fn handle(&self, request: Request) -> Response {
        match request {
            Request::Guess { player, guess } => match self.submit(&player, &guess) {
                Ok(response) => Response::Guess(response),
                Err(err) => {
                    warn!(player = %player, error = %err, "Guess rejected");
                    Response::Error((&err).into())
                }
            },
            Request::State { player } => Response::State(self.state(&player)),
            Request::Reset { player } => Response::Reset(self.reset(&player)),
        }
    }
}
