//! JSON-lines transport
//!
//! One request per input line, one response per output line. Malformed lines
//! get an error response; the loop only stops at end of input.

use crate::api::{GameService, Request, Response};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Serve requests from `reader` until it is exhausted
///
/// # Errors
///
/// Returns an error if reading a line or writing a response fails.
#[instrument(skip_all)]
pub fn run_stdio<R: BufRead, W: Write>(
    service: &GameService,
    reader: R,
    mut writer: W,
) -> Result<()> {
    info!("Serving JSON lines");
    let mut served = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match Request::parse(&line) {
            Ok(request) => {
                debug!(?request, "Request");
                service.handle(request)
            }
            Err(err) => {
                debug!(error = %err.error, "Unparseable request");
                Response::Error(err)
            }
        };

        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        served += 1;
    }

    info!(served, "Input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AcceptAll, GameConfig, RandomSelector, SessionStore};
    use crate::wordlists::loader::words_from_slice;
    use serde_json::{Value, json};

    fn service() -> GameService {
        let selector = RandomSelector::new(words_from_slice(&["alloy"]), None).unwrap();
        GameService::new(SessionStore::new(
            Box::new(selector),
            Box::new(AcceptAll),
            GameConfig::default(),
        ))
    }

    fn run(input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        run_stdio(&service(), input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn guess_then_state() {
        let responses = run(concat!(
            r#"{"op":"guess","player":"p1","guess":"lolly"}"#,
            "\n",
            r#"{"op":"state","player":"p1"}"#,
            "\n",
        ));

        assert_eq!(responses.len(), 2);
        assert_eq!(
            responses[0]["feedback"],
            json!(["present", "present", "correct", "absent", "correct"])
        );
        assert_eq!(responses[0]["guesses"], responses[1]["guesses"]);
        assert_eq!(responses[1]["win"], json!(false));
        assert_eq!(responses[1]["target"], Value::Null);
    }

    #[test]
    fn player_defaults_to_local() {
        let responses = run(concat!(
            r#"{"op":"guess","guess":"alloy"}"#,
            "\n",
            r#"{"op":"state","player":"local"}"#,
            "\n",
            r#"{"op":"reset"}"#,
            "\n",
        ));

        assert_eq!(responses[1]["win"], json!(true));
        assert_eq!(responses[2], json!({"message": "Game reset."}));
    }

    #[test]
    fn bad_lines_get_errors_and_blank_lines_are_skipped() {
        let responses = run("not json\n\n{\"op\":\"guess\",\"guess\":\"abc\"}\n");

        assert_eq!(responses.len(), 2);
        assert!(
            responses[0]["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request:")
        );
        assert_eq!(
            responses[1],
            json!({"error": "Guess must be exactly 5 letters, got 3"})
        );
    }
}
