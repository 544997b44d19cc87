//! Move and capture legality, speculative and real.
//!
//! Both kinds of action go through one code path: [`probe`] resolves an
//! attempt against the board without touching it, [`commit`] applies a
//! resolved transition under [`TransitionContract`].

use super::super::action::{Attempt, IllegalTransition, Transition, TransitionKind};
use super::super::board::Board;
use super::super::contracts::{
    Contract, DestinationOpen, DirectionLinked, JumpsOpponent, SourceOwned, TransitionContract,
};
use super::super::position::{Cell, Direction};
use super::super::types::{CellState, Player};
use tracing::{instrument, trace};

/// Resolves an attempt against the board without mutating it.
///
/// A move is legal when the source holds the player's piece, the direction
/// is linked from the source, and the neighbour is empty. A capture is legal
/// when the neighbour holds an opposing piece and the hole one step further
/// along the same line is empty.
pub fn probe(board: &Board, attempt: Attempt) -> Result<Transition, IllegalTransition> {
    SourceOwned::check(board, &attempt)?;
    DirectionLinked::check(&attempt)?;

    let off_board = |cell: Cell| IllegalTransition::OffBoard {
        cell,
        direction: attempt.direction,
    };
    let step = board
        .neighbor(attempt.from, attempt.direction)
        .ok_or(off_board(attempt.from))?;

    let (to, captured) = match attempt.kind {
        TransitionKind::Move => (step, None),
        TransitionKind::Capture => {
            JumpsOpponent::check(board, step, attempt.player)?;
            let landing = board
                .neighbor(step, attempt.direction)
                .ok_or(off_board(step))?;
            (landing, Some(step))
        }
    };
    DestinationOpen::check(board, to)?;

    Ok(Transition::new(
        attempt.kind,
        attempt.player,
        attempt.from,
        attempt.direction,
        to,
        captured,
    ))
}

/// Applies a resolved transition to the board.
///
/// # Errors
///
/// Returns the reason the transition's attempt is no longer legal; the board
/// is left untouched in that case.
#[instrument(skip(board), fields(transition = %transition))]
pub fn commit(board: &mut Board, transition: &Transition) -> Result<(), IllegalTransition> {
    TransitionContract::pre(board, transition)?;

    #[cfg(debug_assertions)]
    let before = board.clone();

    board.set(transition.from(), CellState::Empty);
    board.set_marked(transition.from(), false);
    if let Some(captured) = transition.captured() {
        board.set(captured, CellState::Empty);
    }
    board.set(transition.to(), CellState::Occupied(transition.player()));

    #[cfg(debug_assertions)]
    {
        if let Err(violation) = TransitionContract::post(&before, transition, board) {
            panic!("Transition postcondition failed: {}", violation.description);
        }
    }

    trace!("Transition committed");
    Ok(())
}

/// Resolves an attempt and, unless `speculative`, applies it.
///
/// Speculative calls never mutate the board; they answer "where would this
/// land" for legality scans and destination lookups.
pub fn apply_transition(
    board: &mut Board,
    attempt: Attempt,
    speculative: bool,
) -> Result<Transition, IllegalTransition> {
    let transition = probe(board, attempt)?;
    if !speculative {
        commit(board, &transition)?;
    }
    Ok(transition)
}

/// Tries a simple move; returns the destination hole.
pub fn try_move(
    board: &mut Board,
    player: Player,
    from: Cell,
    direction: Direction,
    speculative: bool,
) -> Result<Cell, IllegalTransition> {
    let attempt = Attempt::new(player, TransitionKind::Move, from, direction);
    apply_transition(board, attempt, speculative).map(|t| t.to())
}

/// Tries a capture; returns the landing hole.
pub fn try_capture(
    board: &mut Board,
    player: Player,
    from: Cell,
    direction: Direction,
    speculative: bool,
) -> Result<Cell, IllegalTransition> {
    let attempt = Attempt::new(player, TransitionKind::Capture, from, direction);
    apply_transition(board, attempt, speculative).map(|t| t.to())
}
