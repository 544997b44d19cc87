//! Contract-based validation for alquerque.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Attempt, IllegalTransition, Transition, TransitionKind};
use super::board::Board;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::position::Cell;
use super::types::{CellState, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, action, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalTransition>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Transition Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source hole holds a piece of the acting player.
pub struct SourceOwned;

impl SourceOwned {
    /// Checks the precondition.
    pub fn check(board: &Board, attempt: &Attempt) -> Result<(), IllegalTransition> {
        if board.get(attempt.from).is_owned_by(attempt.player) {
            Ok(())
        } else {
            Err(IllegalTransition::NotOwned {
                cell: attempt.from,
                player: attempt.player,
            })
        }
    }
}

/// Precondition: the source hole is linked in the requested direction.
pub struct DirectionLinked;

impl DirectionLinked {
    /// Checks the precondition.
    pub fn check(attempt: &Attempt) -> Result<(), IllegalTransition> {
        if attempt.from.links(attempt.direction) {
            Ok(())
        } else {
            Err(IllegalTransition::NotLinked {
                cell: attempt.from,
                direction: attempt.direction,
            })
        }
    }
}

/// Precondition: the destination hole is empty.
pub struct DestinationOpen;

impl DestinationOpen {
    /// Checks the precondition.
    pub fn check(board: &Board, cell: Cell) -> Result<(), IllegalTransition> {
        if board.is_empty(cell) {
            Ok(())
        } else {
            Err(IllegalTransition::Blocked { cell })
        }
    }
}

/// Precondition: the jumped hole holds an opposing piece.
pub struct JumpsOpponent;

impl JumpsOpponent {
    /// Checks the precondition.
    pub fn check(board: &Board, cell: Cell, player: Player) -> Result<(), IllegalTransition> {
        if board.get(cell).is_owned_by(player.opponent()) {
            Ok(())
        } else {
            Err(IllegalTransition::NothingToJump { cell })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for committing a resolved transition to a board.
///
/// Preconditions:
/// - The transition's attempt is still legal on the board
///
/// Postconditions:
/// - The acting player keeps the same number of pieces
/// - The opponent loses exactly one piece on a capture, none on a move
/// - Source and captured holes are empty, the landing hole is the mover's
pub struct TransitionContract;

impl Contract<Board, Transition> for TransitionContract {
    fn pre(board: &Board, transition: &Transition) -> Result<(), IllegalTransition> {
        super::rules::probe(board, transition.attempt()).map(|_| ())
    }

    fn post(before: &Board, transition: &Transition, after: &Board) -> Result<(), InvariantViolation> {
        let player = transition.player();
        let opponent = player.opponent();
        let lost = match transition.kind() {
            TransitionKind::Move => 0,
            TransitionKind::Capture => 1,
        };

        if before.count(player) != after.count(player) {
            return Err(InvariantViolation::new("Acting player's piece count changed"));
        }
        if before.count(opponent) != after.count(opponent) + lost {
            return Err(InvariantViolation::new(format!(
                "Opponent should lose exactly {lost} piece(s)"
            )));
        }
        if !after.is_empty(transition.from()) {
            return Err(InvariantViolation::new("Source hole still occupied"));
        }
        if after.get(transition.to()) != CellState::Occupied(player) {
            return Err(InvariantViolation::new("Landing hole not taken by the mover"));
        }
        if let Some(captured) = transition.captured() {
            if !after.is_empty(captured) {
                return Err(InvariantViolation::new("Captured piece still on the board"));
            }
        }
        Ok(())
    }
}

/// Asserts that all engine invariants hold (panic on violation in debug builds).
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &GameEngine) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = EngineInvariants::check_all(engine) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Engine invariants violated");
        panic!("Engine invariants violated: {descriptions}");
    }
}
