//! Wordle Assist - CLI
//!
//! Narrow a Wordle dictionary from colored guesses, in a TUI, a line-based
//! prompt, or one shot from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordle_assist::{
    commands::{FeedbackRow, apply_rows, run_simple},
    engine::{GuessSession, SessionConfig},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_session,
    wordlists::loader::{EMBEDDED, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Narrow down Wordle answers from the colors you have seen",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'n', long, global = true, default_value_t = 5)]
    word_length: usize,

    /// Number of guess rows
    #[arg(short, long, global = true, default_value_t = 6)]
    tries: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Append log output to this file (verbosity from RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without TUI
    Simple,

    /// Apply WORD=PATTERN rows and print the remaining candidates
    Filter {
        /// Rows such as crane=G-Y-- (G green, Y yellow, - gray)
        rows: Vec<FeedbackRow>,

        /// Print at most this many candidates
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let Cli {
        command,
        word_length,
        tries,
        wordlist,
        log_file,
    } = Cli::parse();

    // Default to Play mode if no command given
    let command = command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    logging::init(LogTarget::select(log_file.as_deref(), owns_terminal))?;

    let dictionary = load_dictionary(&wordlist, word_length)?;
    let config = SessionConfig {
        word_length,
        num_tries: tries,
    };
    let session = GuessSession::new(config, dictionary).context("invalid session settings")?;
    info!(
        word_length,
        tries,
        wordlist = %wordlist,
        candidates = session.candidates().len(),
        "session started"
    );

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple_command(session),
        Commands::Filter { rows, limit } => run_filter_command(session, &rows, limit),
    }
}

fn run_simple_command(mut session: GuessSession) -> Result<()> {
    let stdin = io::stdin();
    run_simple(
        &mut session,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut rand::rng(),
    )
}

fn run_filter_command(
    mut session: GuessSession,
    rows: &[FeedbackRow],
    limit: Option<usize>,
) -> Result<()> {
    apply_rows(&mut session, rows)?;
    print_session(&session, limit)?;
    if let Some(word) = session.solution() {
        println!("\nSolution: {}", word.text().bright_green().bold());
    }
    Ok(())
}
