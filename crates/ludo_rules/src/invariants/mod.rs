//! First-class invariants of the game state.
//!
//! Invariants are properties that hold between events when the engine
//! is correct; a violation is a programming error, not a runtime
//! condition, so they fail loudly in debug builds and are testable
//! independently.

use crate::game::Game;

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
pub trait InvariantSet<S> {
    /// Checks all invariants, returning every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod house_exclusive;
pub mod positions_in_range;
pub mod stone_count;

pub use house_exclusive::HouseExclusiveInvariant;
pub use positions_in_range::PositionsInRangeInvariant;
pub use stone_count::StoneCountInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    StoneCountInvariant,
    HouseExclusiveInvariant,
    PositionsInRangeInvariant,
);

/// Asserts every invariant in debug builds; a no-op in release.
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        panic!("invariant violations: {violations:?}");
    }
}
