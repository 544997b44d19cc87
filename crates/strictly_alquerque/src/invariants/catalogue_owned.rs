//! Catalogue ownership invariant: only the active player's playable pieces are selectable.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the catalogue describes the active player's playable pieces.
///
/// - While the game runs, the catalogue is non-empty, every key holds a
///   piece of the active player, and every direction set is non-empty.
/// - A picked-up piece is always a catalogue key.
/// - Once the game is over, nothing is selectable.
pub struct CatalogueOwnedInvariant;

impl Invariant<GameEngine> for CatalogueOwnedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let catalogue = engine.catalogue();
        if engine.is_game_over() {
            return catalogue.is_empty() && engine.selection().is_none();
        }

        let owned = catalogue.iter().all(|(cell, directions)| {
            !directions.is_empty() && engine.cell_state(cell).is_owned_by(engine.active_player())
        });
        let selection_listed = engine
            .selection()
            .is_none_or(|cell| catalogue.contains(cell));

        !catalogue.is_empty() && owned && selection_listed
    }

    fn description() -> &'static str {
        "Catalogue keys are the active player's pieces with legal actions"
    }
}
