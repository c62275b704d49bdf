//! Boundary payloads
//!
//! What a client sees of a session. Built only from `Session`'s public view,
//! so the target appears only through `Session::revealed_target`.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameStatus, GuessRecord, Session};
use serde::{Deserialize, Serialize};

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessView {
    pub word: Word,
    pub feedback: Feedback,
}

impl From<&GuessRecord> for GuessView {
    fn from(record: &GuessRecord) -> Self {
        Self {
            word: record.guess().clone(),
            feedback: *record.feedback(),
        }
    }
}

/// Answer to a successful guess submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub feedback: Feedback,
    pub guesses: Vec<GuessView>,
    pub win: bool,
    pub lose: bool,
    /// Present only when `lose` is true
    pub target: Option<Word>,
}

impl GuessResponse {
    #[must_use]
    pub fn new(record: &GuessRecord, session: &Session) -> Self {
        let state = StateResponse::from(session);
        Self {
            feedback: *record.feedback(),
            guesses: state.guesses,
            win: state.win,
            lose: state.lose,
            target: state.target,
        }
    }
}

/// Everything needed to redraw a session from scratch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    pub guesses: Vec<GuessView>,
    pub win: bool,
    pub lose: bool,
    /// Present only when `lose` is true
    pub target: Option<Word>,
}

impl StateResponse {
    /// Whether the session has ended
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.win || self.lose
    }
}

impl From<&Session> for StateResponse {
    fn from(session: &Session) -> Self {
        Self {
            guesses: session.history().iter().map(GuessView::from).collect(),
            win: session.status() == GameStatus::Won,
            lose: session.status() == GameStatus::Lost,
            target: session.revealed_target().cloned(),
        }
    }
}

/// Acknowledgment of a reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub message: String,
}

impl Default for ResetResponse {
    fn default() -> Self {
        Self {
            message: "Game reset.".to_string(),
        }
    }
}

/// Structured rejection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(err: &GameError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn in_progress_state_hides_target() {
        let mut session = Session::new(word("alloy"), GameConfig::default());
        session.submit(word("lolly")).unwrap();

        let state = StateResponse::from(&session);
        assert_eq!(state.guesses.len(), 1);
        assert!(!state.win);
        assert!(!state.lose);
        assert_eq!(state.target, None);

        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("ALLOY"), "target leaked: {json}");
    }

    #[test]
    fn lost_state_reveals_target() {
        let mut session = Session::new(word("alloy"), GameConfig::new(1).unwrap());
        let record = session.submit(word("crane")).unwrap();

        let response = GuessResponse::new(&record, &session);
        assert!(response.lose);
        assert!(!response.win);
        assert_eq!(response.target, Some(word("alloy")));
    }

    #[test]
    fn won_state_does_not_set_target() {
        let mut session = Session::new(word("alloy"), GameConfig::default());
        let record = session.submit(word("alloy")).unwrap();

        let response = GuessResponse::new(&record, &session);
        assert!(response.win);
        assert!(!response.lose);
        assert_eq!(response.target, None);
    }

    #[test]
    fn state_json_shape() {
        let mut session = Session::new(word("alloy"), GameConfig::default());
        session.submit(word("lolly")).unwrap();

        let value = serde_json::to_value(StateResponse::from(&session)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "guesses": [{
                    "word": "LOLLY",
                    "feedback": ["present", "present", "correct", "absent", "correct"]
                }],
                "win": false,
                "lose": false,
                "target": null
            })
        );
    }

    #[test]
    fn error_response_carries_message() {
        let response = ErrorResponse::from(&GameError::SessionTerminal);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({ "error": "Game is over. Reset to play again." })
        );
    }
}
