//! First-class action types for alquerque.
//!
//! An [`Attempt`] is what a player asks for: move this piece in that
//! direction. A [`Transition`] is what the rules make of a legal attempt:
//! the full record of source, landing hole and captured piece.

use super::position::{Cell, Direction};
use super::types::{Mode, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of action a piece can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TransitionKind {
    /// Step to an adjacent empty hole.
    Move,
    /// Jump over an adjacent opposing piece into the empty hole beyond.
    Capture,
}

impl TransitionKind {
    /// The only kind of action legal in `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Moving => TransitionKind::Move,
            Mode::Eating => TransitionKind::Capture,
        }
    }
}

/// A requested action, not yet checked against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Attempt {
    /// The player acting.
    pub player: Player,
    /// Move or capture.
    pub kind: TransitionKind,
    /// Hole holding the acting piece.
    pub from: Cell,
    /// Link direction followed.
    pub direction: Direction,
}

/// A legal action, resolved against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Transition {
    kind: TransitionKind,
    player: Player,
    from: Cell,
    direction: Direction,
    to: Cell,
    captured: Option<Cell>,
}

impl Transition {
    /// Move or capture.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// The player who acted.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Hole the piece left.
    pub fn from(&self) -> Cell {
        self.from
    }

    /// Link direction followed.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Hole the piece landed on.
    pub fn to(&self) -> Cell {
        self.to
    }

    /// Hole of the captured piece, for captures.
    pub fn captured(&self) -> Option<Cell> {
        self.captured
    }

    /// The attempt this transition resolves.
    pub fn attempt(&self) -> Attempt {
        Attempt::new(self.player, self.kind, self.from, self.direction)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(captured) => write!(
                f,
                "{} {} -> {} capturing {}",
                self.player, self.from, self.to, captured
            ),
            None => write!(f, "{} {} -> {}", self.player, self.from, self.to),
        }
    }
}

/// Why an attempt is not legal on the current board.
///
/// Speculative scans produce and discard these by the dozen; they only
/// matter to callers probing a specific attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalTransition {
    /// The source hole does not hold a piece of the acting player.
    #[display("{cell} is not occupied by {player}")]
    NotOwned {
        /// Source hole.
        cell: Cell,
        /// Acting player.
        player: Player,
    },

    /// The source hole has no link in the requested direction.
    #[display("{cell} has no {direction} link")]
    NotLinked {
        /// Source hole.
        cell: Cell,
        /// Requested direction.
        direction: Direction,
    },

    /// The path leaves the board.
    #[display("No hole beyond {cell} toward {direction}")]
    OffBoard {
        /// Last hole on the path.
        cell: Cell,
        /// Requested direction.
        direction: Direction,
    },

    /// The destination hole is not empty.
    #[display("{cell} is not empty")]
    Blocked {
        /// Destination hole.
        cell: Cell,
    },

    /// The jumped hole does not hold an opposing piece.
    #[display("{cell} holds no opposing piece to capture")]
    NothingToJump {
        /// Jumped hole.
        cell: Cell,
    },
}
