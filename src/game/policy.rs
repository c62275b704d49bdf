//! Pluggable collaborators of the session store
//!
//! Target selection and guess acceptance are policies, not game rules: the
//! store only needs *a* target and *a* yes/no on each guess.

use super::GameError;
use crate::core::Word;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::sync::{Mutex, PoisonError};

/// Chooses the secret word for a new session
pub trait TargetSelector: Send + Sync {
    /// Pick a target word
    fn pick(&self) -> Word;
}

/// Decides whether a well-formed guess may be played
pub trait GuessPolicy: Send + Sync {
    /// Accept or reject a guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotInWordList` (or another rejection) when the
    /// guess may not be played.
    fn check(&self, guess: &Word) -> Result<(), GameError>;
}

/// No target can be chosen from an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Word list is empty, no target can be chosen")]
pub struct EmptyWordList;

/// Uniform random pick from a fixed word list
pub struct RandomSelector {
    words: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    /// Create a selector over `words`
    ///
    /// With a `seed` the sequence of targets is reproducible; without one the
    /// generator is seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self, EmptyWordList> {
        if words.is_empty() {
            return Err(EmptyWordList);
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            words,
            rng: Mutex::new(rng),
        })
    }

    /// Number of candidate targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl TargetSelector for RandomSelector {
    fn pick(&self) -> Word {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

/// Accept any well-formed 5-letter guess
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl GuessPolicy for AcceptAll {
    fn check(&self, _guess: &Word) -> Result<(), GameError> {
        Ok(())
    }
}

/// Accept only guesses found in a word list
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

impl GuessPolicy for Dictionary {
    fn check(&self, guess: &Word) -> Result<(), GameError> {
        if self.contains(guess) {
            Ok(())
        } else {
            Err(GameError::NotInWordList {
                word: guess.text().to_string(),
            })
        }
    }
}
