//! Formatting utilities for terminal output

use crate::core::{Correctness, Row};
use colored::{ColoredString, Colorize};

/// Emoji for a single tile
#[must_use]
pub const fn correctness_emoji(correctness: Correctness) -> char {
    match correctness {
        Correctness::Correct => '🟩',
        Correctness::Close => '🟨',
        Correctness::Incorrect => '⬛',
        Correctness::Invalid => '🟥',
        Correctness::None => '⬜',
    }
}

/// Format a row as an emoji string, the way results are usually shared
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter().map(|l| correctness_emoji(l.correctness())).collect()
}

/// Format a row's letters as plain text, blanks shown as `_`
#[must_use]
pub fn row_to_text(row: &Row) -> String {
    row.iter()
        .map(|l| if l.letter() == ' ' { '_' } else { l.letter() })
        .collect()
}

/// Render one tile with a background matching its feedback
#[must_use]
pub fn colored_tile(letter: char, correctness: Correctness) -> ColoredString {
    let tile = format!(" {letter} ");
    match correctness {
        Correctness::Correct => tile.black().on_green().bold(),
        Correctness::Close => tile.black().on_yellow().bold(),
        Correctness::Incorrect => tile.white().on_bright_black(),
        Correctness::Invalid => tile.white().on_red().bold(),
        Correctness::None => tile.normal(),
    }
}

/// Render a full row of colored tiles
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.iter()
        .map(|l| colored_tile(l.letter(), l.correctness()).to_string())
        .collect()
}
