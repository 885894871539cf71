//! One-shot scoring command
//!
//! Scores a single guess against a given target without playing a game.

use crate::core::{Row, Word, WordError, score};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub row: Row,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let row = score(&guess, &target);

    Ok(ScoreResult { guess, target, row })
}
