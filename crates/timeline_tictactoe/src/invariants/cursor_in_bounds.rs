//! Cursor bounds invariant.

use super::super::History;
use super::Invariant;

/// Invariant: the cursor always points at a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut history = History::new();
        assert!(history.set_cursor(5).is_err());
        assert!(CursorInBoundsInvariant::holds(&history));
    }
}
