//! Game domain: board types, pure rules, and the move history state machine.

mod history;
mod position;
pub mod rules;
mod types;

pub use history::GameHistory;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity when talking about a placed symbol rather than a player.
pub type Mark = Player;
