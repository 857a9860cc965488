//! Single-cell delta invariant: each move fills exactly one empty square.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: the history starts from the empty board and each snapshot
/// differs from its predecessor in exactly one cell, which was empty before.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(old, new)| old != new)
                .collect();

            matches!(changed.as_slice(), [(old, new)] if old.mark().is_none() && new.mark().is_some())
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
