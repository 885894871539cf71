//! In-progress guess
//!
//! Holds the letters typed for the current row before they are committed.

use super::ANSWER_LENGTH;
use super::letter::{Correctness, Row, uniform_row};

/// The guess currently being typed (0-5 letters)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter, overwriting the final slot once the buffer is full
    pub fn append_letter(&mut self, letter: char) {
        if self.len() >= ANSWER_LENGTH {
            self.letters.pop();
        }
        self.letters.push(letter);
    }

    /// Remove the last letter; no-op when empty
    pub fn delete_letter(&mut self) {
        self.letters.pop();
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == ANSWER_LENGTH
    }

    /// Placeholder row for display, padded with blanks
    #[must_use]
    pub fn row(&self, correctness: Correctness) -> Row {
        uniform_row(&self.letters, correctness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoredLetter;

    fn typed(text: &str) -> GuessBuffer {
        let mut buffer = GuessBuffer::new();
        for c in text.chars() {
            buffer.append_letter(c);
        }
        buffer
    }

    #[test]
    fn append_grows_until_full() {
        let buffer = typed("CRA");
        assert_eq!(buffer.as_str(), "CRA");
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_full());

        let buffer = typed("CRANE");
        assert!(buffer.is_full());
    }

    #[test]
    fn append_when_full_overwrites_last_slot() {
        let mut buffer = typed("CRANE");
        buffer.append_letter('K');
        assert_eq!(buffer.as_str(), "CRANK");
        buffer.append_letter('S');
        assert_eq!(buffer.as_str(), "CRANS");
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut buffer = typed("CRA");
        buffer.delete_letter();
        assert_eq!(buffer.as_str(), "CR");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buffer = GuessBuffer::new();
        buffer.delete_letter();
        assert!(buffer.is_empty());
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = typed("HELLO");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn row_shows_typed_letters_then_blanks() {
        let row = typed("HE").row(Correctness::None);
        assert_eq!(row[0], ScoredLetter::new('H', Correctness::None));
        assert_eq!(row[1], ScoredLetter::new('E', Correctness::None));
        assert_eq!(row[4], ScoredLetter::BLANK);
    }
}
