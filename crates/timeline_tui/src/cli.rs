//! Command-line interface for timeline_tui.

use std::path::PathBuf;

use clap::Parser;

/// Timeline Tic-Tac-Toe - play in the terminal and jump back to any move
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "timeline_tui")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./timeline_tui.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive such as "debug" or "timeline_tictactoe=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
