//! Tic-tac-toe with a full move history and time travel.
//!
//! The game is modelled as a list of immutable board snapshots plus a
//! cursor. Whose turn it is and whether the game is won are always derived
//! from the snapshot under the cursor; nothing else is stored.
//!
//! # Architecture
//!
//! - **Rules**: pure win and full-board detection ([`rules`])
//! - **Board**: one immutable 9-cell snapshot and [`Board::apply`]
//! - **History**: snapshots plus cursor, with truncate-on-branch ([`History`])
//! - **Controller**: the operations a renderer calls ([`GameController`])
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameController, Player, StatusView};
//!
//! let mut game = GameController::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play_at(cell);
//! }
//! assert_eq!(game.status(), StatusView::Winner(Player::X));
//!
//! // Go back two moves and branch off.
//! game.jump_to(2).unwrap();
//! game.play_at(6);
//! assert_eq!(game.move_numbers().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{IllegalMove, Move};
pub use controller::{GameController, StatusView};
pub use history::{History, OutOfRange};
pub use position::Position;
pub use types::{Board, CELL_COUNT, Mark, Player, Square};
pub use view::{GameView, MoveEntry, move_label};
