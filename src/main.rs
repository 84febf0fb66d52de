//! Tic-tac-toe for the terminal: play, inspect, or reset a saved game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_tui::{
    game::rules, tui, Board, GameHistory, JsonFileStore, MemoryStore, StateStore, HISTORY_KEY,
    STEP_KEY,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        state_file: None,
        ephemeral: false,
    }) {
        Command::Play {
            state_file,
            ephemeral,
        } => run_play(state_file, ephemeral),
        Command::Show { state_file } => run_show(state_file),
        Command::Reset { state_file } => run_reset(state_file),
    }
}

fn state_path(state_file: Option<PathBuf>) -> Result<PathBuf> {
    Ok(match state_file {
        Some(path) => path,
        None => JsonFileStore::default_path()?,
    })
}

/// Run the TUI, with or without a backing state file.
fn run_play(state_file: Option<PathBuf>, ephemeral: bool) -> Result<()> {
    if ephemeral {
        tui::run(MemoryStore::new())
    } else {
        tui::run(JsonFileStore::open(state_path(state_file)?))
    }
}

/// Print the saved board and status to stdout.
fn run_show(state_file: Option<PathBuf>) -> Result<()> {
    init_logging();

    let store = JsonFileStore::open(state_path(state_file)?);
    let history = load_history(&store);

    println!("{}", history.current());
    println!();
    println!("{}", rules::status(history.current()));
    println!(
        "Viewing move {} of {}",
        history.step(),
        history.boards().len() - 1
    );
    Ok(())
}

/// Reset the saved game to its initial state.
fn run_reset(state_file: Option<PathBuf>) -> Result<()> {
    init_logging();

    let mut store = JsonFileStore::open(state_path(state_file)?);
    store.set(STEP_KEY, &0usize)?;
    store.set(HISTORY_KEY, &vec![Board::new()])?;

    info!(path = %store.path().display(), "Saved game cleared");
    println!("Saved game cleared.");
    Ok(())
}

fn load_history<S: StateStore>(store: &S) -> GameHistory {
    let boards = store.get(HISTORY_KEY, vec![Board::new()]);
    let step = store.get(STEP_KEY, 0usize);
    GameHistory::from_parts(boards, step)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
