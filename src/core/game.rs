//! Game state machine
//!
//! A game starts `Pending` and moves to `Won` or `Lost`. The only mutation is
//! committing a guess, which first passes the guess through a dictionary
//! check and then appends its scored row to the history.

use super::letter::Row;
use super::score::score;
use super::word::{Word, WordError};
use super::ROUNDS;
use crate::service::{ServiceError, WordService};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Reasons a game cannot be created or a guess cannot be committed
#[derive(Debug, Clone)]
pub enum GameError {
    /// The target is not a 5-letter word
    InvalidTarget(WordError),
    /// The guess is not a 5-letter word
    MalformedGuess(WordError),
    /// The dictionary check rejected the guess
    InvalidGuess(Word),
    /// The dictionary check could not be completed
    ValidationFailed(ServiceError),
    /// The game already ended
    GameAlreadyOver(Outcome),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(e) => write!(f, "Invalid target word: {e}"),
            Self::MalformedGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidGuess(word) => write!(f, "{word} is not in the word list"),
            Self::ValidationFailed(e) => write!(f, "Could not check guess: {e}"),
            Self::GameAlreadyOver(outcome) => write!(f, "Game is already over ({outcome:?})"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget(e) | Self::MalformedGuess(e) => Some(e),
            Self::ValidationFailed(e) => Some(e),
            Self::InvalidGuess(_) | Self::GameAlreadyOver(_) => None,
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub row: Row,
    pub outcome: Outcome,
}

/// One game: the hidden target and every committed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    history: Vec<Row>,
    outcome: Outcome,
}

impl GameState {
    /// Start a game for `target`
    ///
    /// # Errors
    /// Returns `GameError::InvalidTarget` unless `target` is a 5-letter word.
    ///
    /// # Examples
    /// ```
    /// use word_masters::core::{GameState, Outcome};
    ///
    /// let game = GameState::initialize("hello").unwrap();
    /// assert_eq!(game.target().text(), "HELLO");
    /// assert_eq!(game.round(), 0);
    /// assert_eq!(game.outcome(), Outcome::Pending);
    ///
    /// assert!(GameState::initialize("hi").is_err());
    /// ```
    pub fn initialize(target: &str) -> Result<Self, GameError> {
        let target = Word::new(target).map_err(GameError::InvalidTarget)?;
        Ok(Self::with_target(target))
    }

    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            target,
            history: Vec::with_capacity(ROUNDS),
            outcome: Outcome::Pending,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of committed guesses
    #[inline]
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Commit `guess` if the dictionary accepts it
    ///
    /// Rejections (`MalformedGuess`, `InvalidGuess`, `ValidationFailed`,
    /// `GameAlreadyOver`) leave the round and history untouched.
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game has been won or lost
    /// - `MalformedGuess` unless `guess` is a 5-letter word
    /// - `InvalidGuess` when the dictionary says the word does not exist
    /// - `ValidationFailed` when the dictionary could not be asked
    #[instrument(skip(self, dictionary), fields(round = self.round()))]
    pub async fn commit_guess<D>(&mut self, guess: &str, dictionary: &D) -> Result<Commit, GameError>
    where
        D: WordService + ?Sized,
    {
        if self.is_over() || self.round() >= ROUNDS {
            warn!(outcome = ?self.outcome, "Guess submitted after game ended");
            return Err(GameError::GameAlreadyOver(self.outcome));
        }

        let guess = Word::new(guess).map_err(GameError::MalformedGuess)?;

        match dictionary.validate_word(guess.text()).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(guess = %guess, "Guess rejected by dictionary");
                return Err(GameError::InvalidGuess(guess));
            }
            Err(e) => return Err(GameError::ValidationFailed(e)),
        }

        Ok(self.record(&guess))
    }

    /// Score an already validated guess and advance the round
    fn record(&mut self, guess: &Word) -> Commit {
        let row = score(guess, &self.target);
        self.history.push(row);

        if *guess == self.target {
            self.outcome = Outcome::Won;
        } else if self.round() == ROUNDS {
            self.outcome = Outcome::Lost;
        }

        info!(guess = %guess, round = self.round(), outcome = ?self.outcome, "Guess committed");
        Commit {
            row,
            outcome: self.outcome,
        }
    }
}
