//! Guess evaluation
//!
//! Scores a guess against the target, one `LetterStatus` per position:
//! - Absent (letter not in the target, or all its occurrences already used)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Status of a single letter in a guess
///
/// The ordering `Absent < Present < Correct` is the display priority used to
/// decide whether a new observation upgrades a keyboard hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Build feedback from raw statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `target`
    ///
    /// This implements the exact feedback rules, including proper handling
    /// of duplicate letters: a letter is never marked present or correct more
    /// often than it occurs in the target.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the target's letter pool
    /// 2. Second pass: Left to right, mark remaining letters present while the pool has them
    ///
    /// # Examples
    /// ```
    /// use lexiguess::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let target = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let feedback = Feedback::score(&target, &guess);
    /// assert_eq!(feedback.statuses(), &[Present, Present, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn score(target: &Word, guess: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, drawn from what the greens left over
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The status of each position, in order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn score(target: &str, guess: &str) -> Feedback {
        Feedback::score(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn status_priority_order() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Present.max(Correct), Correct);
        assert_eq!(Correct.max(Absent), Correct);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("fghij", "abcde");
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_exact_match_is_solved() {
        let feedback = score("crane", "crane");
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn feedback_duplicate_guess_letters_bounded_by_target() {
        // ALLOY has two L's; LOLLY has three. Position 2 is an exact L, the
        // leftover L goes to position 0, and position 3 gets nothing.
        let feedback = score("alloy", "lolly");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Correct, Absent, Correct]
        );

        let marked_l = feedback
            .statuses()
            .iter()
            .zip(b"LOLLY")
            .filter(|&(s, &ch)| ch == b'L' && *s != Absent)
            .count();
        assert_eq!(marked_l, 2);
    }

    #[test]
    fn feedback_duplicate_letters_correct_takes_priority() {
        // SPEED vs ERASE: both E's are present (ERASE has two)
        let feedback = score("erase", "speed");
        assert_eq!(
            feedback.statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: first O is present, second O is correct
        let feedback = score("floor", "robot");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn feedback_later_exact_match_wins_over_earlier_misplaced() {
        // Target has one E at the end; the guess's earlier E must not steal it
        let feedback = score("crane", "eerie");
        assert_eq!(
            feedback.statuses(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = score("alloy", "lolly");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜🟩");
    }

    #[test]
    fn feedback_serializes_as_status_array() {
        let feedback = score("alloy", "lolly");
        assert_eq!(
            serde_json::to_string(&feedback).unwrap(),
            r#"["present","present","correct","absent","correct"]"#
        );
    }

    #[test]
    fn feedback_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(score(word, word).is_solved());
        }
    }
}
