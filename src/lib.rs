//! Terminal tic-tac-toe with move history, time travel, and persisted games.
//!
//! # Architecture
//!
//! - **Game**: pure rules plus the `GameHistory` state machine that records
//!   every board snapshot and supports jumping to any prior move
//! - **Store**: JSON key/value persistence so a game survives across runs
//! - **Tui**: ratatui view wiring keyboard events to game transitions

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod store;
pub mod tui;

pub use game::{Board, GameHistory, GameStatus, Mark, Player, Position, Square};
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError, HISTORY_KEY, STEP_KEY};
