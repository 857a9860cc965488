//! Key-to-board mapping for keyboard play.

use crossterm::event::KeyCode;
use timeline_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => return cursor,
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps the digit keys 1-9 onto cells 0-8.
pub fn cell_for_digit(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|digit| (1..=9).contains(digit))
        .map(|digit| digit as usize - 1)
}
