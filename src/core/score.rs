//! Guess scoring
//!
//! Maps a guess and a target to per-letter feedback, apportioning repeated
//! letters so that no letter is credited more often than it occurs in the target.

use super::letter::{Correctness, Row, ScoredLetter};
use super::{ANSWER_LENGTH, Word};

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. Count the occurrences of each letter in the target
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass, left to right: mark `Close` while the pool still holds the
///    letter, `Incorrect` otherwise
///
/// Every `Correct` is resolved before any `Close` is handed out.
///
/// # Examples
/// ```
/// use word_masters::core::{Correctness, Word, score};
///
/// let guess = Word::new("elite").unwrap();
/// let target = Word::new("crane").unwrap();
/// let row = score(&guess, &target);
///
/// // Only the final E is credited; the leading E finds the pool empty
/// assert_eq!(row[0].correctness(), Correctness::Incorrect);
/// assert_eq!(row[4].correctness(), Correctness::Correct);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Row {
    if guess == target {
        return guess
            .letters()
            .map(|b| ScoredLetter::new(char::from(b), Correctness::Correct));
    }

    let mut marks = [Correctness::Incorrect; ANSWER_LENGTH];
    let mut available = target.letter_counts();

    // First pass: exact position matches
    for (i, mark) in marks.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if letter == target.letter_at(i) {
            *mark = Correctness::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present elsewhere, drawn from what the first pass left
    for (i, mark) in marks.iter_mut().enumerate() {
        if *mark == Correctness::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            *mark = Correctness::Close;
            *count -= 1;
        }
    }

    let mut row = [ScoredLetter::BLANK; ANSWER_LENGTH];
    for (i, slot) in row.iter_mut().enumerate() {
        *slot = ScoredLetter::new(char::from(guess.letter_at(i)), marks[i]);
    }
    row
}
