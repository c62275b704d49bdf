//! JSON request/response envelopes for line-oriented transports.

use super::payload::{ErrorResponse, GuessResponse, ResetResponse, StateResponse};
use crate::game::PlayerId;
use serde::{Deserialize, Serialize};

/// Player used when a request does not name one
pub const DEFAULT_PLAYER: &str = "local";

fn default_player() -> PlayerId {
    DEFAULT_PLAYER.to_string()
}

/// A decoded request, tagged by `op`
///
/// ```json
/// {"op": "guess", "player": "p1", "guess": "crane"}
/// {"op": "state"}
/// {"op": "reset", "player": "p1"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    Guess {
        #[serde(default = "default_player")]
        player: PlayerId,
        guess: String,
    },
    State {
        #[serde(default = "default_player")]
        player: PlayerId,
    },
    Reset {
        #[serde(default = "default_player")]
        player: PlayerId,
    },
}

impl Request {
    /// Parse one line of JSON
    ///
    /// # Errors
    ///
    /// Returns an `ErrorResponse` describing why the line is not a request.
    pub fn parse(line: &str) -> Result<Self, ErrorResponse> {
        serde_json::from_str(line).map_err(|e| ErrorResponse::new(format!("Invalid request: {e}")))
    }
}

/// Any response, serialised without an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Guess(GuessResponse),
    State(StateResponse),
    Reset(ResetResponse),
    Error(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_with_player() {
        let request = Request::parse(r#"{"op":"guess","player":"p1","guess":"crane"}"#).unwrap();
        assert_eq!(
            request,
            Request::Guess {
                player: "p1".to_string(),
                guess: "crane".to_string(),
            }
        );
    }

    #[test]
    fn player_defaults_to_local() {
        assert_eq!(
            Request::parse(r#"{"op":"state"}"#).unwrap(),
            Request::State {
                player: DEFAULT_PLAYER.to_string()
            }
        );
        assert_eq!(
            Request::parse(r#"{"op":"reset"}"#).unwrap(),
            Request::Reset {
                player: DEFAULT_PLAYER.to_string()
            }
        );
    }

    #[test]
    fn malformed_requests_are_errors() {
        assert!(Request::parse("not json").is_err());
        assert!(Request::parse(r#"{"op":"dance"}"#).is_err());
        assert!(Request::parse(r#"{"op":"guess"}"#).is_err());
    }

    #[test]
    fn responses_serialize_without_envelope() {
        let json = serde_json::to_string(&Response::Reset(ResetResponse::default())).unwrap();
        assert_eq!(json, r#"{"message":"Game reset."}"#);

        let json = serde_json::to_string(&Response::Error(ErrorResponse::new("nope"))).unwrap();
        assert_eq!(json, r#"{"error":"nope"}"#);
    }
}
