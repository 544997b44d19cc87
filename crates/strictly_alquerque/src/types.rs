//! Core domain types for alquerque.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Red player (moves first, starts on the top rows).
    Red,
    /// Blue player (starts on the bottom rows).
    Blue,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

/// State of one hole on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Empty hole.
    #[default]
    Empty,
    /// Hole occupied by a player's piece.
    Occupied(Player),
}

impl CellState {
    /// Returns the owner of the piece in this hole, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(player) => Some(player),
        }
    }

    /// Checks if the hole is empty.
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Checks if the hole holds a piece of `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == CellState::Occupied(player)
    }
}

/// Whether the active player's legal actions this turn are moves or captures.
///
/// Captures are mandatory: as soon as one capture exists anywhere on the
/// board for the active player, the whole turn is played in `Eating` mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Mode {
    /// Only simple moves to adjacent empty holes.
    #[default]
    Moving,
    /// Only captures.
    Eating,
}
