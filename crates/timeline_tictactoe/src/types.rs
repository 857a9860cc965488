//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::action::IllegalMove;
use super::position::Position;
use super::rules;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player to move once `moves_played` moves are on the board.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn for_move_count(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// Alias for the mark a player places on the board.
pub type Mark = Player;

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Immutable 3x3 board snapshot.
///
/// `Board` is a value type: [`Board::apply`] returns a new snapshot and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a board holding exactly the given squares.
    ///
    /// No legality check is made; any arrangement of marks is accepted.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at the given cell index, if it is on the board.
    pub fn square(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns the winner, if a line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Places `mark` at `cell`, returning the resulting snapshot.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::OutOfBounds`] if `cell` is not in 0-8
    /// - [`IllegalMove::GameOver`] if the board already has a winner
    /// - [`IllegalMove::SquareOccupied`] if the square is taken
    #[instrument(skip(self))]
    pub fn apply(&self, cell: usize, mark: Mark) -> Result<Board, IllegalMove> {
        let position = Position::from_index(cell).ok_or(IllegalMove::OutOfBounds(cell))?;

        if rules::evaluate(self).is_some() {
            return Err(IllegalMove::GameOver);
        }

        if !self.is_empty(position) {
            return Err(IllegalMove::SquareOccupied(position));
        }

        let mut next = *self;
        next.squares[cell] = Square::Occupied(mark);
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
