//! Core domain types for the game
//!
//! Words, scoring, the guess buffer and the game state machine. Everything
//! here is synchronous except the dictionary check inside
//! [`GameState::commit_guess`].

mod buffer;
mod game;
mod letter;
mod score;
mod word;

pub use buffer::GuessBuffer;
pub use game::{Commit, GameError, GameState, Outcome};
pub use letter::{BLANK_ROW, Correctness, Row, ScoredLetter, uniform_row};
pub use score::score;
pub use word::{Word, WordError};

/// Letters in every word
pub const ANSWER_LENGTH: usize = 5;

/// Guesses allowed per game
pub const ROUNDS: usize = 6;
