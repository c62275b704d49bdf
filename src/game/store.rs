//! Session store: one game per player, submissions serialised per session.

use super::policy::{GuessPolicy, TargetSelector};
use super::session::{GameConfig, GuessRecord, Session};
use super::GameError;
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Identifies a player context (a browser session, a terminal, ...).
pub type PlayerId = String;

type SessionHandle = Arc<Mutex<Session>>;

/// Owns every live session.
///
/// The map lock is only held long enough to find or insert a session handle;
/// each session then has its own lock, held for the whole
/// check-score-append sequence of a submission. Two racing submissions for
/// one player therefore run one after the other, and the second sees the
/// first one's effect on status and history.
pub struct SessionStore {
    sessions: Mutex<FxHashMap<PlayerId, SessionHandle>>,
    selector: Box<dyn TargetSelector>,
    policy: Box<dyn GuessPolicy>,
    config: GameConfig,
}

impl SessionStore {
    /// Creates a store using the given collaborators.
    #[must_use]
    pub fn new(
        selector: Box<dyn TargetSelector>,
        policy: Box<dyn GuessPolicy>,
        config: GameConfig,
    ) -> Self {
        info!(max_attempts = config.max_attempts(), "Creating session store");
        Self {
            sessions: Mutex::new(FxHashMap::default()),
            selector,
            policy,
            config,
        }
    }

    /// Creates a fresh, unregistered session with a newly selected target.
    #[must_use]
    pub fn new_game(&self) -> Session {
        Session::new(self.selector.pick(), self.config)
    }

    /// Read-only snapshot of the player's session.
    ///
    /// A player without a session gets a fresh one; asking again returns the
    /// same snapshot until something is submitted or reset.
    #[instrument(skip(self))]
    pub fn current_state(&self, player: &str) -> Session {
        let handle = self.handle(player);
        let session = lock(&handle);
        session.clone()
    }

    /// Validates and scores a raw guess for `player`.
    ///
    /// The input is trimmed and upper-cased. Checks run in order: terminal
    /// session, well-formed word, guess policy. A rejected guess leaves the
    /// session untouched.
    ///
    /// Returns the new record and a snapshot of the updated session.
    ///
    /// # Errors
    ///
    /// - `GameError::SessionTerminal` if the game is already over
    /// - `GameError::InvalidLength` / `GameError::InvalidCharacters` for malformed input
    /// - `GameError::NotInWordList` if the guess policy rejects the word
    #[instrument(skip(self))]
    pub fn submit_guess(
        &self,
        player: &str,
        raw_guess: &str,
    ) -> Result<(GuessRecord, Session), GameError> {
        let handle = self.handle(player);
        let mut session = lock(&handle);

        if session.is_terminal() {
            warn!(status = ?session.status(), "Guess submitted to finished game");
            return Err(GameError::SessionTerminal);
        }

        let guess = Word::new(raw_guess.trim()).map_err(|e| {
            debug!(error = %e, "Malformed guess");
            GameError::from(e)
        })?;

        self.policy.check(&guess).inspect_err(|e| {
            debug!(error = %e, "Guess rejected by policy");
        })?;

        let record = session.submit(guess)?;

        info!(
            guess = %record.guess(),
            feedback = %record.feedback().to_emoji(),
            correct = record.feedback().count_correct(),
            present = record.feedback().count_present(),
            attempt = session.history().len(),
            status = ?session.status(),
            "Guess scored"
        );

        Ok((record, session.clone()))
    }

    /// Discards the player's session and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&self, player: &str) {
        let fresh = self.new_game();
        let handle = self.handle(player);
        *lock(&handle) = fresh;
        info!("Session reset");
    }

    /// Rules every session in this store is created with.
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of players with a session.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.sessions).is_empty()
    }

    /// Finds the player's session, creating it on first use.
    fn handle(&self, player: &str) -> SessionHandle {
        let mut sessions = lock(&self.sessions);
        if let Some(handle) = sessions.get(player) {
            return Arc::clone(handle);
        }

        info!(player, "Starting session for new player");
        let handle = Arc::new(Mutex::new(self.new_game()));
        sessions.insert(player.to_string(), Arc::clone(&handle));
        handle
    }
}

/// Locks, recovering the data if another holder panicked.
///
/// Sessions are only mutated through `Session::submit`, which cannot leave
/// them half-updated, so a poisoned lock still guards a consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
