//! Word Masters - CLI
//!
//! Word-guessing game with TUI and line modes, backed by the word-of-the-day API
//! or an embedded word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_masters::{
    commands::{run_simple, score_words},
    core::Word,
    output::print_score_result,
    service::{DEFAULT_API_URL, HttpWordService, WordListService, WordService},
    session::Session,
    wordlists::{ANSWERS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "word_masters",
    about = "Guess the five-letter word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Play against the embedded word list instead of the word API
    #[arg(long, global = true)]
    offline: bool,

    /// Word list file accepted as guesses in offline mode (implies --offline)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Play this word instead of fetching one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Log file for the TUI (line modes log to stderr)
    #[arg(long, global = true, default_value = "word_masters.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            init_file_logging(&cli.log_file)?;
            let service = build_service(&cli.api_url, cli.offline, cli.wordlist.as_deref())?;
            let target = parse_target(cli.word.as_deref())?;
            run_play_command(service.as_ref(), target).await
        }
        Commands::Simple => {
            init_stderr_logging();
            let service = build_service(&cli.api_url, cli.offline, cli.wordlist.as_deref())?;
            let target = parse_target(cli.word.as_deref())?;
            run_simple(service.as_ref(), target).await
        }
        Commands::Score { guess, target } => {
            init_stderr_logging();
            let result = score_words(&guess, &target).context("Cannot score these words")?;
            print_score_result(&result);
            Ok(())
        }
    }
}

/// Send logs to a file so they never draw over the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Pick the word service from the command line flags
fn build_service(
    api_url: &str,
    offline: bool,
    wordlist: Option<&Path>,
) -> Result<Box<dyn WordService>> {
    if let Some(path) = wordlist {
        let extra = load_from_file(path)
            .with_context(|| format!("Cannot read word list {}", path.display()))?;
        info!(path = %path.display(), words = extra.len(), "Using custom word list");
        return Ok(Box::new(WordListService::new(words_from_slice(ANSWERS), extra)));
    }

    if offline {
        info!("Using embedded word list");
        Ok(Box::new(WordListService::embedded()))
    } else {
        info!(api_url, "Using word API");
        Ok(Box::new(HttpWordService::new(api_url)))
    }
}

fn parse_target(word: Option<&str>) -> Result<Option<Word>> {
    word.map(|w| Word::new(w).with_context(|| format!("Cannot play '{w}'")))
        .transpose()
}

async fn run_play_command(service: &dyn WordService, target: Option<Word>) -> Result<()> {
    use word_masters::interactive::{App, run_tui};

    let session = match target {
        Some(word) => Session::with_target(word),
        None => Session::new()?,
    };
    let app = App::new(session, service);
    run_tui(app).await
}
