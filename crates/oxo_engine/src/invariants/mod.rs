//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every mutation of a
//! [`GameSession`](crate::GameSession). The session checks them in debug
//! builds; they can also be tested independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod win_line;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use win_line::WinLineInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for tuples of three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    WinLineInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSession;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_play_and_undo() {
        let mut game = GameSession::new();
        for index in [0, 3, 1, 4, 2] {
            game.make_move(index).unwrap();
            assert!(SessionInvariants::check_all(&game).is_ok());
        }
        game.undo_moves(2);
        assert!(SessionInvariants::check_all(&game).is_ok());
    }
}
