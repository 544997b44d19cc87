//! First-class invariants for the alquerque engine.
//!
//! Invariants are logical properties that must hold between any two calls
//! into the engine. They are checked after every mutating call in debug
//! builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod catalogue_owned;
pub mod mandatory_capture;
pub mod marks_consistent;

pub use catalogue_owned::CatalogueOwnedInvariant;
pub use mandatory_capture::MandatoryCaptureInvariant;
pub use marks_consistent::MarksConsistentInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    CatalogueOwnedInvariant,
    MandatoryCaptureInvariant,
    MarksConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, GameEngine, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        engine.select(2, 1).unwrap();
        engine.select(2, 2).unwrap();
        engine.select(2, 3).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_game_over() {
        let board = Board::from_rows(["B....", ".....", ".....", ".....", "....."]).unwrap();
        let engine = GameEngine::from_board(board, Player::Red);
        assert!(engine.is_game_over());
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (CatalogueOwnedInvariant, MarksConsistentInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
        assert!(engine.is_selectable(Cell::new(2, 1).unwrap()));
    }
}
