//! LexiGuess - CLI
//!
//! Word guessing game with TUI, line-based and JSON-lines modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexiguess::{
    api::{DEFAULT_PLAYER, GameService},
    commands::{run_simple, run_stdio},
    core::Word,
    game::{AcceptAll, Dictionary, GameConfig, GuessPolicy, RandomSelector, SessionStore},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::{fs::File, io, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TUI_LOG_FILE: &str = "lexiguess.log";

#[derive(Parser)]
#[command(
    name = "lexiguess",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "LEXIGUESS_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Accept any five letters as a guess, not only words from the list
    #[arg(long, global = true, env = "LEXIGUESS_ALLOW_ANY")]
    allow_any: bool,

    /// Seed for target selection (reproducible games)
    #[arg(long, global = true, env = "LEXIGUESS_SEED")]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'lexiguess=trace' (RUST_LOG takes precedence)
    #[arg(long, global = true, env = "LEXIGUESS_LOG")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Serve JSON requests on stdin, one per line, answering on stdout
    Stdio,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    init_logging(&command, cli.log_level.as_deref())?;
    let service = build_service(&cli)?;

    match command {
        Commands::Play => run_play_command(&service),
        Commands::Simple => run_simple(&service, DEFAULT_PLAYER),
        Commands::Stdio => run_stdio(&service, io::stdin().lock(), io::stdout().lock()),
    }
}

/// Set up tracing for the chosen mode
///
/// The TUI owns the terminal, so it logs to a file. The other modes log to
/// stderr because stdout carries the game or the protocol.
fn init_logging(command: &Commands, log_level: Option<&str>) -> Result<()> {
    let default_level = match command {
        Commands::Play => "info",
        Commands::Simple | Commands::Stdio => "warn",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level.unwrap_or(default_level))
            .context("Invalid log filter")?,
    };

    let installed = if matches!(command, Commands::Play) {
        let log_file = File::create(TUI_LOG_FILE)
            .with_context(|| format!("Failed to create {TUI_LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
    };

    installed
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")
}

/// Load the word list selected by `-w`
fn load_wordlist(source: &str) -> Result<Vec<Word>> {
    match source {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn build_service(cli: &Cli) -> Result<GameService> {
    let words = load_wordlist(&cli.wordlist)?;
    info!(
        source = %cli.wordlist,
        words = words.len(),
        allow_any = cli.allow_any,
        seeded = cli.seed.is_some(),
        "Word list loaded"
    );

    let policy: Box<dyn GuessPolicy> = if cli.allow_any {
        Box::new(AcceptAll)
    } else {
        Box::new(Dictionary::new(words.iter().cloned()))
    };
    let selector = RandomSelector::new(words, cli.seed)
        .with_context(|| format!("No playable words in {}", cli.wordlist))?;

    Ok(GameService::new(SessionStore::new(
        Box::new(selector),
        policy,
        GameConfig::default(),
    )))
}

fn run_play_command(service: &GameService) -> Result<()> {
    use lexiguess::interactive::{App, run_tui};

    let app = App::new(service, DEFAULT_PLAYER);
    run_tui(app)
}
