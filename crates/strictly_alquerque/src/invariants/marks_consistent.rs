//! Marks consistency invariant: highlights mirror the catalogue and selection.

use super::super::{Cell, GameEngine};
use super::Invariant;
use std::collections::BTreeSet;

/// Invariant: the marked holes are exactly the selectable pieces plus the
/// destinations of the picked-up piece.
pub struct MarksConsistentInvariant;

impl Invariant<GameEngine> for MarksConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let catalogue = engine.catalogue();

        let mut expected: BTreeSet<Cell> = catalogue.cells().collect();
        if let Some(selected) = engine.selection() {
            expected.extend(catalogue.destinations(board, engine.active_player(), selected));
        }
        let marked: BTreeSet<Cell> = board.marked_cells().into_iter().collect();

        marked == expected
    }

    fn description() -> &'static str {
        "Marked holes are the selectable pieces and the selection's destinations"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(MarksConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_selection_holds() {
        let mut engine = GameEngine::new();
        engine.select(1, 1).unwrap();
        assert!(engine.is_marked(Cell::CENTER));
        assert!(MarksConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut engine = GameEngine::new();
        engine.board.set_marked(Cell::new(4, 4).unwrap(), true);
        assert!(!MarksConsistentInvariant::holds(&engine));
    }
}
