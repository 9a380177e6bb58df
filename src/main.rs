//! Wordle+ - CLI
//!
//! Play Wordle+ in a TUI or a plain line-based terminal mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_plus::{
    commands::run_simple,
    core::Word,
    engine::{GameState, Timings},
    interactive::{App, run_tui},
    wordlists::{
        ALLOWED, ANSWERS, Dictionary, WordList,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_plus",
    about = "Wordle with a power-up, locked-out letters and a live candidate count",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for reproducible solutions
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Show the solution while playing
    #[arg(long, global = true)]
    show_answer: bool,

    /// How long power-up messages stay up, in milliseconds
    #[arg(long, global = true, default_value = "3000")]
    toast_ms: u64,

    /// How long a rejected row shakes, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    shake_ms: u64,

    /// Write logs to this file (filter with `RUST_LOG`, default "info")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Logs go to a file only; the terminal belongs to the game
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_list(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Ok(words_from_slice(embedded)),
    }
}

/// Build the dictionary from --answers and --allowed, embedded lists filling the gaps
fn load_dictionary(cli: &Cli) -> Result<WordList> {
    if cli.answers.is_none() && cli.allowed.is_none() {
        return Ok(WordList::embedded());
    }

    let answers = load_list(cli.answers.as_deref(), ANSWERS)?;
    let allowed = load_list(cli.allowed.as_deref(), ALLOWED)?;
    Ok(WordList::new(answers, &allowed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let dictionary = load_dictionary(&cli)?;
    tracing::info!(
        answers = dictionary.all_answers().len(),
        valid = dictionary.valid_count(),
        "word lists loaded"
    );

    let timings = Timings::new(
        Duration::from_millis(cli.shake_ms),
        Duration::from_millis(cli.toast_ms),
    );
    let game = GameState::new(dictionary, cli.seed, timings)
        .context("failed to start game")?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game, cli.show_answer)),
        Commands::Simple => run_simple(game, cli.show_answer).context("simple mode failed"),
    }
}
