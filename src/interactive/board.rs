//! View-model for the interactive board
//!
//! All rendering-side state lives here: scored rows, the pending row the
//! player is typing, the locked flag, and the best-known status of every
//! key. It is rebuilt from [`StateResponse`] on (re)connect and advanced from
//! [`GuessResponse`] after each submission, so both paths color the board
//! identically.

use crate::api::{GuessResponse, GuessView, StateResponse};
use crate::core::{LetterStatus, WORD_LENGTH, Word};

/// Best status seen so far for each letter A-Z
///
/// Observations only ever upgrade a letter (absent < present < correct).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: [Option<LetterStatus>; 26],
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `letter` was seen with `status`
    ///
    /// Returns true if the hint for that letter changed. Non-letters are
    /// ignored.
    pub fn observe(&mut self, letter: u8, status: LetterStatus) -> bool {
        let Some(slot) = Self::index(letter).map(|i| &mut self.best[i]) else {
            return false;
        };

        match *slot {
            Some(current) if current >= status => false,
            _ => {
                *slot = Some(status);
                true
            }
        }
    }

    /// Record every letter of a scored guess
    pub fn observe_guess(&mut self, guess: &GuessView) {
        for (&letter, &status) in guess.word.chars().iter().zip(guess.feedback.statuses()) {
            self.observe(letter, status);
        }
    }

    /// Best status for `letter`, if it has been played
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        Self::index(letter).and_then(|i| self.best[i])
    }

    pub fn clear(&mut self) {
        self.best = [None; 26];
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}

/// Everything the board widget needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    rows: Vec<GuessView>,
    max_rows: usize,
    pending: String,
    locked: bool,
    won: bool,
    target: Option<Word>,
    keyboard: KeyboardHints,
}

impl BoardView {
    /// An empty board with `max_rows` rows
    #[must_use]
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: Vec::with_capacity(max_rows),
            max_rows,
            pending: String::with_capacity(WORD_LENGTH),
            locked: false,
            won: false,
            target: None,
            keyboard: KeyboardHints::new(),
        }
    }

    /// Rebuild the board from a state snapshot
    #[must_use]
    pub fn from_state(state: &StateResponse, max_rows: usize) -> Self {
        let mut board = Self::new(max_rows);
        for guess in &state.guesses {
            board.push_row(guess.clone());
        }
        board.finish(state.win, state.lose, state.target.clone());
        board
    }

    /// Advance the board after an accepted guess
    ///
    /// Only the newly scored row (the last one in the response) is applied;
    /// earlier rows are already on the board.
    pub fn apply_guess(&mut self, response: &GuessResponse) {
        if let Some(latest) = response.guesses.last() {
            self.push_row(latest.clone());
        }
        self.pending.clear();
        self.finish(response.win, response.lose, response.target.clone());
    }

    /// Type a letter into the pending row
    ///
    /// Returns false (and changes nothing) if the board is locked, the row is
    /// full, or `letter` is not A-Z.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.locked || self.pending.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.pending.push(letter.to_ascii_uppercase());
        true
    }

    /// Delete the last pending letter
    pub fn pop_letter(&mut self) -> Option<char> {
        if self.locked {
            return None;
        }
        self.pending.pop()
    }

    /// Back to an empty, unlocked board
    pub fn reset(&mut self) {
        self.rows.clear();
        self.pending.clear();
        self.locked = false;
        self.won = false;
        self.target = None;
        self.keyboard.clear();
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessView] {
        &self.rows
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Text typed into the current row so far
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub fn is_pending_complete(&self) -> bool {
        self.pending.len() == WORD_LENGTH
    }

    /// Row the cursor is on
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    /// Column the cursor is on
    #[must_use]
    pub fn current_col(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// The answer, known only after a loss
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    fn push_row(&mut self, guess: GuessView) {
        self.keyboard.observe_guess(&guess);
        self.rows.push(guess);
    }

    fn finish(&mut self, win: bool, lose: bool, target: Option<Word>) {
        self.won = win;
        self.locked = win || lose;
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GameService;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::game::{AcceptAll, GameConfig, RandomSelector, SessionStore};
    use crate::wordlists::loader::words_from_slice;

    fn service(target: &str) -> GameService {
        let selector = RandomSelector::new(words_from_slice(&[target]), None).unwrap();
        GameService::new(SessionStore::new(
            Box::new(selector),
            Box::new(AcceptAll),
            GameConfig::default(),
        ))
    }

    #[test]
    fn hints_upgrade_but_never_downgrade() {
        let mut hints = KeyboardHints::new();

        assert!(hints.observe(b'L', Present));
        assert_eq!(hints.get(b'L'), Some(Present));

        assert!(hints.observe(b'L', Correct));
        assert_eq!(hints.get(b'L'), Some(Correct));

        assert!(!hints.observe(b'L', Absent));
        assert!(!hints.observe(b'L', Present));
        assert_eq!(hints.get(b'L'), Some(Correct));
    }

    #[test]
    fn hints_ignore_non_letters_and_fold_case() {
        let mut hints = KeyboardHints::new();
        assert!(!hints.observe(b'3', Correct));
        assert!(hints.observe(b'q', Absent));
        assert_eq!(hints.get(b'Q'), Some(Absent));
        assert_eq!(hints.get(b'Z'), None);

        hints.clear();
        assert_eq!(hints.get(b'Q'), None);
    }

    #[test]
    fn duplicate_letter_row_keeps_best_status() {
        // LOLLY vs ALLOY marks the L's present, correct, absent
        let service = service("alloy");
        let response = service.submit("p1", "lolly").unwrap();

        let mut board = BoardView::new(6);
        board.apply_guess(&response);

        assert_eq!(board.keyboard().get(b'L'), Some(Correct));
        assert_eq!(board.keyboard().get(b'O'), Some(Present));
        assert_eq!(board.keyboard().get(b'Y'), Some(Correct));
    }

    #[test]
    fn pending_row_editing() {
        let mut board = BoardView::new(6);
        for c in "cran".chars() {
            assert!(board.push_letter(c));
        }
        assert!(!board.push_letter('1'));
        assert!(board.push_letter('e'));
        assert!(!board.push_letter('s'));

        assert_eq!(board.pending(), "CRANE");
        assert!(board.is_pending_complete());
        assert_eq!(board.current_col(), 5);

        assert_eq!(board.pop_letter(), Some('E'));
        assert_eq!(board.current_col(), 4);
    }

    #[test]
    fn restored_board_matches_incremental_board() {
        let service = service("alloy");
        let mut incremental = BoardView::new(6);

        for guess in ["lolly", "crane", "floor"] {
            for c in guess.chars() {
                incremental.push_letter(c);
            }
            let response = service.submit("p1", incremental.pending()).unwrap();
            incremental.apply_guess(&response);
        }

        let restored = BoardView::from_state(&service.state("p1"), 6);
        assert_eq!(restored, incremental);
        assert_eq!(restored.current_row(), 3);
        assert_eq!(restored.current_col(), 0);
    }

    #[test]
    fn win_locks_board_without_target() {
        let service = service("alloy");
        let mut board = BoardView::new(6);
        board.apply_guess(&service.submit("p1", "alloy").unwrap());

        assert!(board.is_locked());
        assert!(board.is_won());
        assert_eq!(board.target(), None);
        assert!(!board.push_letter('a'));
    }

    #[test]
    fn loss_locks_board_with_target() {
        let service = service("alloy");
        for guess in ["crane", "slate", "robot", "floor", "speed", "erase"] {
            service.submit("p1", guess).unwrap();
        }

        let board = BoardView::from_state(&service.state("p1"), 6);
        assert!(board.is_locked());
        assert!(!board.is_won());
        assert_eq!(board.target().map(Word::text), Some("ALLOY"));
    }

    #[test]
    fn reset_clears_everything() {
        let service = service("alloy");
        let mut board = BoardView::new(6);
        board.apply_guess(&service.submit("p1", "alloy").unwrap());

        board.reset();
        assert_eq!(board, BoardView::new(6));
    }
}
