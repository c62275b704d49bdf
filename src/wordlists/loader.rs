//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and entries that are not
/// valid 5-letter words are skipped; duplicates keep their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lexiguess::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());
    debug!(count = words.len(), "Loaded word list");
    Ok(words)
}

/// Convert the embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use lexiguess::wordlists::loader::words_from_slice;
/// use lexiguess::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
