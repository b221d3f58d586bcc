//! Terminal setup and the interactive event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::sound::player_for;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Runs the interactive game until the user quits.
///
/// File logging must already be initialized.
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    // Dropped last, so the screen is restored after errors and panics too.
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, player_for(config.sound()));
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Raw mode plus alternate screen with mouse capture, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, any early return drops the guard and restores.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = restore_screen(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
pub fn restore_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Logs to `path` so output does not corrupt the screen.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Draws when the game or the view changed, then waits for input.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        if app.needs_redraw() {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.mark_drawn();
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Skip key release events
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(mouse.column, mouse.row, area);
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                app.invalidate();
            }
            _ => {}
        }
    }
    Ok(())
}
