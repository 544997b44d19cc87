//! Turn phases of the engine's state machine.

use super::position::Cell;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the active player stands within the current turn.
///
/// The turn-ended state is transient: it is passed through inside a single
/// `select_cell` call on the way to the next player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick up a selectable piece.
    NoSelection,
    /// A piece is picked up and its destinations are marked.
    Selected {
        /// The picked-up piece.
        cell: Cell,
        /// Set once a capture opened a forced follow-up capture; the player
        /// may neither switch pieces nor put this one down.
        sequence: bool,
    },
    /// The game has ended.
    GameOver(Outcome),
}

impl Phase {
    /// The picked-up piece, if any.
    pub fn selection(&self) -> Option<Cell> {
        match self {
            Phase::Selected { cell, .. } => Some(*cell),
            _ => None,
        }
    }

    /// Checks if a capture sequence is in progress.
    pub fn in_sequence(&self) -> bool {
        matches!(self, Phase::Selected { sequence: true, .. })
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::GameOver(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Why a player could not take a turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Exhaustion {
    /// The player has no pieces left.
    #[display("no pieces left")]
    NoPieces,
    /// The player has pieces but none can move or capture.
    #[display("no legal moves")]
    NoMoves,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The winner.
    pub winner: Player,
    /// Why the loser could not play.
    pub reason: Exhaustion,
}

impl Outcome {
    /// The player who lost.
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins: {} has {}", self.winner, self.loser(), self.reason)
    }
}
