//! Snapshot history with a movable cursor.
//!
//! The history is an ordered list of board snapshots: index 0 is the empty
//! board and index `k` is the board after `k` moves. A cursor selects the
//! snapshot currently in play. Appending from a cursor that is not at the
//! tail first discards every later snapshot, so playing from a past
//! position branches off and forgets the previously explored future.

use std::ops::Range;

use tracing::{debug, info, instrument};

use super::action::Move;
use super::position::Position;
use super::types::Board;

/// A move index outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move index {} is out of range (history has {} entries)", index, len)]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// Number of snapshots in the history at the time of the request.
    pub len: usize,
}

impl std::error::Error for OutOfRange {}

/// Ordered board snapshots plus the index of the current one.
///
/// Never empty: it always holds at least the starting board, and the
/// cursor is always a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Builds a history from raw snapshots and a cursor.
    ///
    /// Move legality between snapshots is not checked here; see
    /// [`crate::invariants`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `snapshots` is empty or `cursor` is past the end.
    pub fn from_snapshots(snapshots: Vec<Board>, cursor: usize) -> Result<Self, OutOfRange> {
        if cursor >= snapshots.len() {
            return Err(OutOfRange {
                index: cursor,
                len: snapshots.len(),
            });
        }
        Ok(Self { snapshots, cursor })
    }

    /// Drops every snapshot after the cursor, appends `board`, and moves the
    /// cursor to it.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn append(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            info!(discarded, from_move = self.cursor, "Branching history, discarding later moves");
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `index` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index` is not a recorded move.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn set_cursor(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.snapshots.len() {
            return Err(OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.cursor, to = index, "Moving history cursor");
        self.cursor = index;
        Ok(())
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All recorded snapshots in move order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// True when the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Indices of every recorded move, starting with 0 for the game start.
    pub fn move_numbers(&self) -> Range<usize> {
        0..self.snapshots.len()
    }

    /// Recovers the move that produced snapshot `index` from its predecessor.
    ///
    /// Returns `None` for index 0, for indices past the end, and when the two
    /// snapshots do not differ by a newly placed mark.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.get(index.checked_sub(1)?)?;
        let after = self.get(index)?;

        before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .find_map(|(cell, (old, new))| match (old.mark(), new.mark()) {
                (None, Some(player)) => {
                    Position::from_index(cell).map(|pos| Move::new(player, pos))
                }
                _ => None,
            })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
