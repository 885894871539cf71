//! Per-letter feedback
//!
//! A scored letter pairs a character with the feedback it received. Rows of
//! scored letters make up the board.

use super::ANSWER_LENGTH;

/// Feedback classification for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Correctness {
    /// Not scored yet (letters still being typed, empty tiles)
    #[default]
    None,
    /// Letter is at the right position
    Correct,
    /// Letter has no remaining unmatched occurrence in the target
    Incorrect,
    /// Letter occurs elsewhere in the target
    Close,
    /// Guess was rejected by the dictionary check
    Invalid,
}

impl Correctness {
    /// Whether this mark counts as a hit on a target letter
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Close)
    }
}

/// A letter with its feedback. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    letter: char,
    correctness: Correctness,
}

impl ScoredLetter {
    /// Blank tile shown for positions with no letter
    pub const BLANK: Self = Self::new(' ', Correctness::None);

    #[inline]
    #[must_use]
    pub const fn new(letter: char, correctness: Correctness) -> Self {
        Self {
            letter,
            correctness,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn correctness(self) -> Correctness {
        self.correctness
    }
}

/// One board row: a scored letter per position
pub type Row = [ScoredLetter; ANSWER_LENGTH];

/// A row of blank tiles
pub const BLANK_ROW: Row = [ScoredLetter::BLANK; ANSWER_LENGTH];

/// Build a row from typed letters, all marked with the same correctness
///
/// Missing positions are filled with blanks; extra letters are ignored.
#[must_use]
pub fn uniform_row(letters: &str, correctness: Correctness) -> Row {
    let mut row = BLANK_ROW;
    for (slot, letter) in row.iter_mut().zip(letters.chars()) {
        *slot = ScoredLetter::new(letter, correctness);
    }
    row
}
