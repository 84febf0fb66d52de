//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal tic-tac-toe with move history and persisted games
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// State file to load and save the game (defaults to the user data dir)
        #[arg(long)]
        state_file: Option<PathBuf>,

        /// Play without reading or writing any saved state
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the saved board and status without entering the TUI
    Show {
        /// State file to read
        #[arg(long)]
        state_file: Option<PathBuf>,
    },

    /// Clear the saved game
    Reset {
        /// State file to reset
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
}
