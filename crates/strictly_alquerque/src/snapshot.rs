//! Serializable view of an engine for front ends that render from data.

use super::engine::GameEngine;
use super::phases::Phase;
use super::position::{BOARD_SIZE, Cell};
use super::types::{CellState, Mode, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game, in one value.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Hole states, one row per entry.
    rows: Vec<Vec<CellState>>,
    /// Highlighted holes.
    marked: Vec<Cell>,
    /// Pieces the active player may pick up.
    selectable: Vec<Cell>,
    /// The picked-up piece.
    selected: Option<Cell>,
    /// Player to move.
    active_player: Player,
    /// Moves or captures.
    mode: Mode,
    /// Turn phase.
    phase: Phase,
    /// The winner, once the game is over.
    winner: Option<Player>,
    /// Status bar text.
    status: String,
    /// Transitions played since the last reset.
    moves_played: usize,
}

impl Snapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl From<&GameEngine> for Snapshot {
    fn from(engine: &GameEngine) -> Self {
        let board = engine.board();
        let states: Vec<CellState> = board.cells().map(|(_, state)| state).collect();
        Self {
            rows: states.chunks(BOARD_SIZE).map(<[CellState]>::to_vec).collect(),
            marked: board.marked_cells(),
            selectable: engine.catalogue().cells().collect(),
            selected: engine.selection(),
            active_player: engine.active_player(),
            mode: engine.mode(),
            phase: engine.phase(),
            winner: engine.winner(),
            status: engine.status_line(),
            moves_played: engine.history().len(),
        }
    }
}
