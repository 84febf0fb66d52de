//! Pure rules: next player, win detection, draw detection, status.
//!
//! Every function here is deterministic over a [`Board`] value and free of
//! side effects. Boards are assumed well-formed (one mark placed per turn);
//! malformed boards are not validated.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winner;

use super::types::{Board, GameStatus, Player};
use tracing::instrument;

/// Returns the player who moves next on the given board.
///
/// X moves first, so the next player is X exactly when the number of
/// occupied squares is even.
#[instrument]
pub fn next_player(board: &Board) -> Player {
    if board.occupied_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Derives the game status from a board.
///
/// A winner takes precedence over a full board, so a board that is both
/// won and full reports the win.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::InProgress(next_player(board))
    }
}
