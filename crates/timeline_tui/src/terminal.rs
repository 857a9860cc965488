//! Terminal setup, teardown, and the event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use crate::app::{App, Transition};
use crate::ui;

/// Owns the real terminal while the UI runs and restores it on drop,
/// including when the event loop returns early with an error.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switches to raw mode and the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;

        let setup = || -> Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        };

        match setup() {
            Ok(terminal) => {
                debug!("Terminal entered alternate screen");
                Ok(Self { terminal })
            }
            Err(err) => {
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    /// The terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(err) = disable_raw_mode() {
            warn!(%err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!(%err, "Failed to leave alternate screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "Failed to show cursor");
        }
    }
}

/// Draws and handles keys until the user quits.
#[instrument(skip(terminal, app))]
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting event loop");

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(poll_interval)?
            && let Event::Key(key) = event::read()?
        {
            // Crossterm reports both press and release on some platforms.
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key) == Transition::Quit {
                info!("Leaving event loop");
                return Ok(());
            }
        }
    }
}
