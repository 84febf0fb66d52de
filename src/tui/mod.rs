//! Terminal UI: the interactive game view.
//!
//! Single-threaded and event-driven: each keypress triggers one state
//! transition followed by one redraw, and every transition persists before
//! the next event is read.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::store::StateStore;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// Runs the game view over the given store until the player quits.
pub fn run<S: StateStore>(store: S) -> Result<()> {
    // Log to a file so tracing output cannot corrupt the display.
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::load(store);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("Player quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Char('[') => app.jump_back(),
                    KeyCode::Char(']') => app.jump_forward(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        // Keys 1-9 map straight onto the grid, row-major.
                        if let Some(digit) = c.to_digit(10) {
                            if digit >= 1 {
                                app.select_index(digit as usize - 1);
                            }
                        }
                    }
                    code => app.move_cursor(code),
                }
            }
        }
    }
}
