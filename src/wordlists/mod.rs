//! Word lists
//!
//! Provides the embedded word list compiled into the binary, plus loading
//! of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All embedded words should be 5 letters, uppercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn words_cover_documented_examples() {
        for example in ["ALLOY", "LOLLY", "CRANE", "SLATE"] {
            assert!(WORDS.contains(&example), "missing {example}");
        }
    }
}
