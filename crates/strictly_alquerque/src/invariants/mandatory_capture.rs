//! Mandatory capture invariant: no simple moves while a capture exists.

use super::super::rules::{captures_from, moves_from};
use super::super::{GameEngine, Mode};
use super::Invariant;

/// Invariant: captures take precedence over simple moves.
///
/// If any piece of the active player can capture, the turn is played in
/// `Eating` mode. Every catalogue entry only lists directions that are
/// legal for the catalogue's mode.
pub struct MandatoryCaptureInvariant;

impl Invariant<GameEngine> for MandatoryCaptureInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.is_game_over() {
            return true;
        }
        let board = engine.board();
        let player = engine.active_player();

        let capture_exists = board
            .pieces(player)
            .any(|cell| !captures_from(board, player, cell).is_empty());
        if capture_exists && engine.mode() != Mode::Eating {
            return false;
        }

        engine.catalogue().iter().all(|(cell, directions)| {
            let legal = match engine.mode() {
                Mode::Eating => captures_from(board, player, cell),
                Mode::Moving => moves_from(board, player, cell),
            };
            directions.is_subset(&legal)
        })
    }

    fn description() -> &'static str {
        "Captures are mandatory and the catalogue matches its mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, CellState, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MandatoryCaptureInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_capture_position_holds() {
        let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....R"]).unwrap();
        let engine = GameEngine::from_board(board, Player::Red);
        assert_eq!(engine.mode(), Mode::Eating);
        assert!(MandatoryCaptureInvariant::holds(&engine));
    }

    #[test]
    fn test_ignored_capture_violates() {
        let mut engine = GameEngine::new();
        // Offer Red a capture the Moving-mode catalogue does not know about
        engine
            .board
            .set(Cell::new(2, 2).unwrap(), CellState::Occupied(Player::Blue));
        engine
            .board
            .set(Cell::new(3, 3).unwrap(), CellState::Empty);
        assert!(!MandatoryCaptureInvariant::holds(&engine));
    }
}
