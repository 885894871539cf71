//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use crate::core::{Correctness, GameError, GameState, ROUNDS, Word, uniform_row};
use crate::output::formatters::colored_row;
use crate::output::{print_board, print_game_summary};
use crate::service::WordService;
use crate::session::DEFAULT_TARGET;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{error, info, warn};

/// Run the line-mode game until the player quits
///
/// Plays `target` when given, otherwise fetches the word of the day from
/// `service` for every game.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<S>(service: &S, target: Option<Word>) -> Result<()>
where
    S: WordService + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            Word Masters - Line Mode          ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in {ROUNDS} tries.");
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        "G".black().on_green(),
        "Y".black().on_yellow(),
        "-".white().on_bright_black()
    );
    println!("Type 'quit' to exit.\n");

    loop {
        let mut game = match &target {
            Some(word) => GameState::with_target(word.clone()),
            None => load_game(service).await?,
        };

        while !game.is_over() {
            let prompt = format!("Guess {}/{ROUNDS}", game.round() + 1);
            let Some(input) = get_user_input(&prompt)? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            match game.commit_guess(&input, service).await {
                Ok(commit) => println!("         {}", colored_row(&commit.row)),
                Err(GameError::InvalidGuess(word)) => println!(
                    "         {}  {}",
                    colored_row(&uniform_row(word.text(), Correctness::Invalid)),
                    "not in word list".red()
                ),
                Err(GameError::MalformedGuess(e)) => println!("❌ {e}"),
                Err(GameError::ValidationFailed(e)) => {
                    error!(error = %e, "Guess could not be validated");
                    println!("⚠️  Could not check that word, try again");
                }
                Err(e) => return Err(e.into()),
            }
        }

        println!();
        print_board(&game);
        print_game_summary(&game);

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Fetch the word of the day, falling back to the placeholder target
async fn load_game<S>(service: &S) -> Result<GameState>
where
    S: WordService + ?Sized,
{
    print!("Loading word of the day... ");
    io::stdout().flush()?;

    let game = match service.word_of_the_day().await {
        Ok(word) => match GameState::initialize(&word) {
            Ok(game) => {
                info!("Target word loaded");
                println!("ready.\n");
                return Ok(game);
            }
            Err(e) => {
                warn!(error = %e, "Word of the day is not a playable word");
                GameState::initialize(DEFAULT_TARGET)?
            }
        },
        Err(e) => {
            error!(error = %e, "Failed to load word of the day");
            GameState::initialize(DEFAULT_TARGET)?
        }
    };

    println!("{}\n", "unavailable, playing the default word.".yellow());
    Ok(game)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
