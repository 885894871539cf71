//! Word Masters
//!
//! A terminal word-guessing game: find the hidden five-letter word in six
//! guesses, with per-letter feedback after each one. The answer and the
//! dictionary check come from a word service (the public word API, or an
//! embedded word list when offline).
//!
//! # Quick Start
//!
//! ```rust
//! use word_masters::core::{Correctness, Word, score};
//!
//! let guess = Word::new("world").unwrap();
//! let target = Word::new("hello").unwrap();
//!
//! let row = score(&guess, &target);
//! assert_eq!(row[3].correctness(), Correctness::Correct);
//! ```

// Core domain types
pub mod core;

// Word service seam and implementations
pub mod service;

// Session controller
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
