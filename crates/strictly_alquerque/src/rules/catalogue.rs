//! The active player's legal-move catalogue.

use super::super::action::{Transition, TransitionKind};
use super::super::board::Board;
use super::super::position::Cell;
use super::super::types::{Mode, Player};
use super::scan::{self, Directions};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Selectable holes of the active player and their legal directions.
///
/// Every entry has a non-empty direction set, and all entries share one
/// [`Mode`]: if any capture exists, the catalogue holds captures only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveCatalogue {
    mode: Mode,
    entries: BTreeMap<Cell, Directions>,
}

impl MoveCatalogue {
    /// Builds the catalogue for `player` at the start of a turn.
    ///
    /// Captures are mandatory: holes that can only move are dropped as soon
    /// as one hole anywhere can capture.
    #[instrument(skip(board))]
    pub fn build(board: &Board, player: Player) -> Self {
        let mut captures = BTreeMap::new();
        let mut moves = BTreeMap::new();
        for cell in board.pieces(player) {
            let eating = scan::captures_from(board, player, cell);
            if !eating.is_empty() {
                captures.insert(cell, eating);
                continue;
            }
            let moving = scan::moves_from(board, player, cell);
            if !moving.is_empty() {
                moves.insert(cell, moving);
            }
        }

        let catalogue = if captures.is_empty() {
            Self {
                mode: Mode::Moving,
                entries: moves,
            }
        } else {
            Self {
                mode: Mode::Eating,
                entries: captures,
            }
        };
        debug!(mode = %catalogue.mode, pieces = catalogue.len(), "Catalogue built");
        catalogue
    }

    /// A catalogue restricted to one hole, used to continue a capture sequence.
    pub fn single(mode: Mode, cell: Cell, directions: Directions) -> Self {
        Self {
            mode,
            entries: BTreeMap::from([(cell, directions)]),
        }
    }

    /// Mode shared by every entry.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Kind of transition every entry resolves to.
    pub fn kind(&self) -> TransitionKind {
        TransitionKind::for_mode(self.mode)
    }

    /// Legal directions from `cell`, if it is selectable.
    pub fn get(&self, cell: Cell) -> Option<&Directions> {
        self.entries.get(&cell)
    }

    /// Checks if `cell` is selectable.
    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    /// Selectable holes in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Directions)> + '_ {
        self.entries.iter().map(|(cell, directions)| (*cell, directions))
    }

    /// Number of selectable holes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no hole is selectable.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved transitions from `cell`.
    pub fn transitions(&self, board: &Board, player: Player, cell: Cell) -> Vec<Transition> {
        match self.get(cell) {
            Some(directions) => {
                scan::transitions(board, player, self.kind(), cell, directions).collect()
            }
            None => Vec::new(),
        }
    }

    /// Destination holes reachable from `cell`.
    pub fn destinations(&self, board: &Board, player: Player, cell: Cell) -> Vec<Cell> {
        self.transitions(board, player, cell)
            .iter()
            .map(Transition::to)
            .collect()
    }

    /// The transition from `cell` that lands on `target`.
    pub fn resolve(&self, board: &Board, player: Player, cell: Cell, target: Cell) -> Option<Transition> {
        let directions = self.get(cell)?;
        scan::find_direction(board, player, self.kind(), cell, directions, target)
    }
}
