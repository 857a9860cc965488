//! Read-only view model handed to renderers.

use serde::Serialize;

use super::controller::StatusView;
use super::position::Position;
use super::types::Board;

/// Label for the jump target at `index`.
pub fn move_label(index: usize) -> String {
    if index > 0 {
        format!("Go to move #{}", index)
    } else {
        "Go to game start".to_string()
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Display label.
    pub label: String,
    /// Whether the cursor is on this entry.
    pub is_current: bool,
}

impl MoveEntry {
    /// Creates the entry for a history index.
    pub fn new(index: usize, is_current: bool) -> Self {
        Self {
            index,
            label: move_label(index),
            is_current,
        }
    }
}

/// Everything needed to draw one frame, borrowed from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView<'a> {
    /// Snapshot under the cursor.
    pub board: &'a Board,
    /// Status line for that snapshot.
    pub status: StatusView,
    /// Cursor position in the history.
    pub cursor: usize,
    /// Completed line to highlight, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Jump targets in history order.
    pub moves: Vec<MoveEntry>,
}
