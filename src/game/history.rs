//! Move history state machine: the ordered board snapshots and the step cursor.

use super::rules;
use super::types::{Board, Square};
use super::Position;
use tracing::{instrument, warn};

/// Complete history of a game plus the currently viewed step.
///
/// Index 0 is always the initial empty board. Each later entry differs from
/// its predecessor in exactly one square, which was empty before the move.
/// `step` selects which snapshot the view shows; stepping back keeps the
/// later entries until a new move is made from that point, at which moment
/// they are discarded (linear history, no redo tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    boards: Vec<Board>,
    step: usize,
}

impl GameHistory {
    /// Creates a fresh history: one empty board, step 0.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            step: 0,
        }
    }

    /// Reconstitutes a history loaded from the store.
    ///
    /// The store falls back per key, so the pair can be inconsistent (e.g. a
    /// stored step pointing past a default history). Any such pair resets to
    /// the initial state rather than panicking mid-load.
    #[instrument(skip(boards), fields(len = boards.len(), step))]
    pub fn from_parts(boards: Vec<Board>, step: usize) -> Self {
        if boards.is_empty() || step >= boards.len() {
            warn!("Persisted history is inconsistent, starting fresh");
            return Self::new();
        }
        Self { boards, step }
    }

    /// The board snapshot at the current step.
    pub fn current(&self) -> &Board {
        &self.boards[self.step]
    }

    /// The currently viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// All recorded board snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Places the next player's mark at `pos` on the current board.
    ///
    /// Returns `false` without changing anything when the square is already
    /// occupied or the current board has a winner. Otherwise entries after
    /// the current step are discarded, a new snapshot is appended, and the
    /// step moves to it.
    #[instrument(skip(self), fields(step = self.step, pos = %pos))]
    pub fn select_square(&mut self, pos: Position) -> bool {
        let current = self.current();
        if !current.is_empty(pos) || rules::winner(current).is_some() {
            return false;
        }

        let mark = rules::next_player(current);
        let next = current.with(pos, Square::Occupied(mark));

        self.boards.truncate(self.step + 1);
        self.boards.push(next);
        self.step = self.boards.len() - 1;
        true
    }

    /// Resets to a fresh game, discarding all history. Always succeeds.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Moves the view to `step` without altering the recorded boards.
    ///
    /// Out-of-range steps are a no-op returning `false`. Jumping to the
    /// current step is a valid no-op returning `true`.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.boards.len() {
            return false;
        }
        self.step = step;
        true
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{GameStatus, Player};
    use super::*;

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.step(), 0);
        assert_eq!(history.boards().len(), 1);
        assert_eq!(history.current(), &Board::new());
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut history = GameHistory::new();
        assert!(history.select_square(Position::Center));
        let before = history.clone();
        assert!(!history.select_square(Position::Center));
        assert_eq!(history, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut history = GameHistory::new();
        // X: 0, 4, 8 (diagonal); O: 2, 6.
        for pos in [
            Position::TopLeft,
            Position::TopRight,
            Position::Center,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            assert!(history.select_square(pos));
        }
        assert_eq!(rules::status(history.current()), GameStatus::Won(Player::X));
        assert!(!history.select_square(Position::TopCenter));
    }

    #[test]
    fn test_jump_to_current_is_identity() {
        let mut history = GameHistory::new();
        history.select_square(Position::Center);
        let before = history.clone();
        assert!(history.jump_to(history.step()));
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = GameHistory::new();
        assert!(!history.jump_to(1));
        assert_eq!(history.step(), 0);
    }

    #[test]
    fn test_from_parts_rejects_bad_step() {
        let boards = vec![Board::new()];
        assert_eq!(GameHistory::from_parts(boards, 3), GameHistory::new());
        assert_eq!(GameHistory::from_parts(Vec::new(), 0), GameHistory::new());
    }

    #[test]
    fn test_from_parts_accepts_valid_state() {
        let mut source = GameHistory::new();
        source.select_square(Position::Center);
        source.select_square(Position::TopLeft);
        let restored = GameHistory::from_parts(source.boards().to_vec(), source.step());
        assert_eq!(restored, source);
    }
}
