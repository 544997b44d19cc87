//! Strictly Alquerque - rule engine for the alquerque board game.
//!
//! Alquerque is played on a 5x5 grid of holes joined by lines. Pieces step
//! along a line to an adjacent empty hole, or jump an adjacent opposing
//! piece into the empty hole beyond, removing it. Captures are mandatory,
//! and a capture that opens another capture for the same piece must be
//! continued before the turn passes. A player who cannot act loses.
//!
//! # Architecture
//!
//! - **Board**: hole storage, highlight flags and link geometry
//! - **Rules**: pure legality functions (transitions, scans, catalogue)
//! - **Contracts / Invariants**: preconditions for transitions and engine
//!   invariants checked in debug builds
//! - **Engine**: the turn state machine driven by `select_cell`
//!
//! # Example
//!
//! ```
//! use strictly_alquerque::{Cell, Event, GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.select_cell(Cell::new(2, 1)?);
//! let events = engine.select_cell(Cell::CENTER);
//! assert!(events.contains(&Event::PlayerSwitched(Player::Blue)));
//! # Ok::<(), strictly_alquerque::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod event;
mod phases;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{CellState, Mode, Player};

// Crate-level exports - Board geometry
pub use board::{Board, Glyphs};
pub use position::{BOARD_SIZE, BoardError, CELL_COUNT, Cell, Direction};

// Crate-level exports - Actions
pub use action::{Attempt, IllegalTransition, Transition, TransitionKind};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, DestinationOpen, DirectionLinked, JumpsOpponent, SourceOwned, TransitionContract,
    assert_invariants,
};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use event::{Event, Presenter, dispatch};
pub use phases::{Exhaustion, Outcome, Phase};
pub use rules::MoveCatalogue;
pub use snapshot::Snapshot;
