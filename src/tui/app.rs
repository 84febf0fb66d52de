//! Application state and transitions.

use super::input;
use crate::game::{Board, GameHistory, Position};
use crate::store::{StateStore, HISTORY_KEY, STEP_KEY};
use crossterm::event::KeyCode;
use tracing::{debug, warn};

/// The game view's state: move history, its backing store, and the cursor.
///
/// Every transition persists the `(step, history)` pair before returning, so
/// killing the process at any point resumes from the last completed move.
pub struct App<S> {
    history: GameHistory,
    store: S,
    cursor: Position,
}

impl<S: StateStore> App<S> {
    /// Loads the game from the store, falling back to a fresh game.
    pub fn load(store: S) -> Self {
        let boards = store.get(HISTORY_KEY, vec![Board::new()]);
        let step = store.get(STEP_KEY, 0usize);
        let history = GameHistory::from_parts(boards, step);
        debug!(
            step = history.step(),
            moves = history.boards().len() - 1,
            "Loaded game state"
        );
        Self {
            history,
            store,
            cursor: Position::Center,
        }
    }

    /// The move history being displayed.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Places a mark at the cursor.
    pub fn select_cursor(&mut self) {
        self.select_square(self.cursor);
    }

    /// Places a mark at a raw board index (keys 1-9).
    pub fn select_index(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
            self.select_square(pos);
        }
    }

    /// Places the next player's mark at `pos`; occupied squares and finished
    /// games are ignored.
    pub fn select_square(&mut self, pos: Position) {
        if self.history.select_square(pos) {
            debug!(pos = %pos, step = self.history.step(), "Move recorded");
            self.persist();
        }
    }

    /// Starts a fresh game, discarding all history.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history.restart();
        self.persist();
    }

    /// Steps one move back in history.
    pub fn jump_back(&mut self) {
        let step = self.history.step();
        if step > 0 {
            self.jump_to(step - 1);
        }
    }

    /// Steps one move forward in history.
    pub fn jump_forward(&mut self) {
        self.jump_to(self.history.step() + 1);
    }

    /// Jumps the view to the given step.
    pub fn jump_to(&mut self, step: usize) {
        if self.history.jump_to(step) {
            debug!(step, "Jumped to step");
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(STEP_KEY, &self.history.step()) {
            warn!(error = %e, "Failed to persist step");
        }
        if let Err(e) = self.store.set(HISTORY_KEY, self.history.boards()) {
            warn!(error = %e, "Failed to persist history");
        }
    }
}
