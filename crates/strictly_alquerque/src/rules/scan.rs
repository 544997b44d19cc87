//! Speculative legality scans over a hole's links.

use super::super::action::{Attempt, Transition, TransitionKind};
use super::super::board::Board;
use super::super::position::{Cell, Direction};
use super::super::types::Player;
use super::transition::probe;
use std::collections::BTreeSet;

/// Set of legal directions from one hole.
pub type Directions = BTreeSet<Direction>;

/// Legal directions of `kind` from `cell` for `player`.
///
/// Only the hole's linked directions are tried, so the scan is total over a
/// fixed set. Holes not owned by `player` yield an empty set.
pub fn legal_directions(board: &Board, player: Player, kind: TransitionKind, cell: Cell) -> Directions {
    if !board.get(cell).is_owned_by(player) {
        return Directions::new();
    }
    board
        .directions(cell)
        .iter()
        .copied()
        .filter(|&direction| probe(board, Attempt::new(player, kind, cell, direction)).is_ok())
        .collect()
}

/// Directions in which the piece on `cell` can make a simple move.
pub fn moves_from(board: &Board, player: Player, cell: Cell) -> Directions {
    legal_directions(board, player, TransitionKind::Move, cell)
}

/// Directions in which the piece on `cell` can capture.
pub fn captures_from(board: &Board, player: Player, cell: Cell) -> Directions {
    legal_directions(board, player, TransitionKind::Capture, cell)
}

/// Resolved transitions of `kind` from `cell` along `directions`.
///
/// Directions that no longer resolve are skipped.
pub fn transitions<'a>(
    board: &'a Board,
    player: Player,
    kind: TransitionKind,
    cell: Cell,
    directions: &'a Directions,
) -> impl Iterator<Item = Transition> + 'a {
    directions
        .iter()
        .filter_map(move |&direction| probe(board, Attempt::new(player, kind, cell, direction)).ok())
}

/// Finds the direction from `cell` whose resolved landing hole is `target`.
///
/// This is how a clicked destination is mapped back to an action.
pub fn find_direction(
    board: &Board,
    player: Player,
    kind: TransitionKind,
    cell: Cell,
    directions: &Directions,
    target: Cell,
) -> Option<Transition> {
    transitions(board, player, kind, cell, directions).find(|t| t.to() == target)
}
