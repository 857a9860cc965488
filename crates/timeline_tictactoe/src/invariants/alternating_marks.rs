//! Alternating marks invariant: X, O, X, O, ... down the history.

use super::super::{History, Player};
use super::Invariant;

/// Invariant: the mark added by snapshot `k` is X when `k - 1` is even
/// and O otherwise.
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len()).all(|index| {
            history
                .move_at(index)
                .is_some_and(|mov| mov.player == Player::for_move_count(index - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
