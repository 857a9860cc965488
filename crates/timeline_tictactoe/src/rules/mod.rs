//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board snapshot. Rules are kept apart from
//! board storage so that history invariants and the controller share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate, winning_line};
