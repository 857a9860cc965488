//! Game controller: turn order, move rejection, and time travel.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::action::IllegalMove;
use super::history::{History, OutOfRange};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules;
use super::types::{Board, Player};
use super::view::{GameView, MoveEntry};

/// What the status line shows for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StatusView {
    /// The current snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl StatusView {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            StatusView::Winner(player) => Some(*player),
            StatusView::NextPlayer(_) => None,
        }
    }
}

/// Owns the game history and exposes the operations a renderer calls.
///
/// There is no stored "game over" flag or current player: both are derived
/// from the snapshot under the cursor each time they are asked for.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: History,
}

impl GameController {
    /// Starts a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            history: History::new(),
        }
    }

    /// Plays the current player's mark at `cell`.
    ///
    /// Illegal moves (occupied square, finished game, cell off the board)
    /// are ignored without changing any state.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn play_at(&mut self, cell: usize) {
        if let Err(err) = self.try_play_at(cell) {
            debug!(cell, %err, "Ignoring illegal move");
        }
    }

    /// Plays the current player's mark at `cell`, reporting why it was
    /// rejected if it was.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the board refuses the move; the history
    /// is left unchanged in that case.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn try_play_at(&mut self, cell: usize) -> Result<(), IllegalMove> {
        let mark = self.next_mark();
        let next = self.history.current().apply(cell, mark)?;
        self.history.append(next);
        debug!(cell, %mark, move_number = self.history.cursor(), "Move applied");

        #[cfg(debug_assertions)]
        {
            if let Err(violations) = self.check_invariants() {
                for violation in &violations {
                    tracing::error!(%violation, "History invariant violated after move");
                }
            }
        }

        Ok(())
    }

    /// Moves the cursor to a recorded move without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index` is not in [`Self::move_numbers`].
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), OutOfRange> {
        self.history.set_cursor(index).inspect_err(|err| {
            warn!(%err, "Rejected jump to unrecorded move");
        })
    }

    /// Derives the status for the snapshot under the cursor.
    pub fn status(&self) -> StatusView {
        match rules::evaluate(self.history.current()) {
            Some(winner) => StatusView::Winner(winner),
            None => StatusView::NextPlayer(self.next_mark()),
        }
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Board {
        self.history.current()
    }

    /// Indices of every recorded move, for building jump targets.
    pub fn move_numbers(&self) -> Range<usize> {
        self.history.move_numbers()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Returns the mark the next move at the cursor would place.
    pub fn next_mark(&self) -> Player {
        Player::for_move_count(self.history.cursor())
    }

    /// Read-only access to the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// One labelled entry per recorded move.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let cursor = self.history.cursor();
        self.move_numbers()
            .map(|index| MoveEntry::new(index, index == cursor))
            .collect()
    }

    /// Bundles everything a renderer needs for one frame.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: self.history.current(),
            status: self.status(),
            cursor: self.history.cursor(),
            winning_line: rules::winning_line(self.history.current()),
            moves: self.move_entries(),
        }
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// Returns each violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(&self.history)
    }

    /// Throws the whole history away and starts over from an empty board.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history = History::new();
    }
}
