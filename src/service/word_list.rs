//! Offline word service backed by in-memory word lists.

use super::{ServiceError, WordService};
use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{ALLOWED, ANSWERS};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

/// Serves a random answer from a list and checks guesses against a dictionary.
#[derive(Debug, Clone)]
pub struct WordListService {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl WordListService {
    /// Builds a service drawing targets from `answers`.
    ///
    /// Every answer is accepted as a guess, as is every word in `extra`.
    pub fn new(answers: Vec<Word>, extra: impl IntoIterator<Item = Word>) -> Self {
        let accepted = answers.iter().cloned().chain(extra).collect();
        Self { answers, accepted }
    }

    /// Service over the word lists compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Number of words accepted as guesses.
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.accepted.len()
    }
}

#[async_trait::async_trait]
impl WordService for WordListService {
    #[instrument(skip(self), fields(answers = self.answers.len()))]
    async fn word_of_the_day(&self) -> Result<String, ServiceError> {
        let word = self
            .answers
            .choose(&mut rand::rng())
            .ok_or_else(|| ServiceError::fetch_failed("Word list has no answers"))?;
        debug!("Picked offline target");
        Ok(word.text().to_string())
    }

    #[instrument(skip(self))]
    async fn validate_word(&self, word: &str) -> Result<bool, ServiceError> {
        Ok(Word::new(word).is_ok_and(|w| self.accepted.contains(&w)))
    }
}
