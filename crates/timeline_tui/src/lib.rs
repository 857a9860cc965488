//! Timeline Tic-Tac-Toe terminal front end.
//!
//! Renders a [`timeline_tictactoe::GameController`] with ratatui: the board
//! on the left, a move list on the right that jumps back to any recorded
//! move, and a status line underneath.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod logging;
mod terminal;
pub mod ui;

pub use app::{App, Focus, Transition};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};
pub use terminal::{TerminalGuard, run};
