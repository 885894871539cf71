//! Display functions for command results

use super::formatters::{colored_row, row_to_emoji};
use crate::commands::ScoreResult;
use crate::core::{GameState, Outcome, ROUNDS};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} → {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("\n  {}", colored_row(&result.row));
    println!("  {}\n", row_to_emoji(&result.row));
}

/// Print every committed row with its round number
pub fn print_board(game: &GameState) {
    for (i, row) in game.history().iter().enumerate() {
        println!("  {}  {}", (i + 1).to_string().bright_black(), colored_row(row));
    }
}

/// Print the end-of-game banner and a shareable emoji summary
pub fn print_game_summary(game: &GameState) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    match game.outcome() {
        Outcome::Won => println!(
            "{}",
            format!("  🎉 You win! Solved in {}/{ROUNDS}", game.round())
                .bright_green()
                .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("  ❌ You lose, the word was {}", game.target())
                .red()
                .bold()
        ),
        Outcome::Pending => println!("  Game in progress ({}/{ROUNDS})", game.round()),
    }
    println!("{}", "═".repeat(40).bright_cyan());

    println!("\n  Word Masters {}/{ROUNDS}", share_score(game));
    for row in game.history() {
        println!("  {}", row_to_emoji(row));
    }
    println!();
}

/// Round count for the share line; `X` when the game was lost
#[must_use]
pub fn share_score(game: &GameState) -> String {
    match game.outcome() {
        Outcome::Won => game.round().to_string(),
        Outcome::Lost | Outcome::Pending => "X".to_string(),
    }
}
