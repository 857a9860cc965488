//! Timeline Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use timeline_tictactoe::GameController;
use timeline_tui::{App, Cli, TerminalGuard, TuiConfig, logging};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = TuiConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.log_file, cli.log_filter);
    logging::init(&config)?;

    info!(log_file = %config.log_file().display(), "Starting Timeline Tic-Tac-Toe");

    let mut app = App::new(GameController::new(), *config.show_cell_numbers());

    let mut guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let res = timeline_tui::run(guard.terminal_mut(), &mut app, config.poll_interval());
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    info!(moves = app.controller().history().len() - 1, "Exiting");
    res
}
