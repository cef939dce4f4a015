//! Error types for board construction and move application.
//!
//! A stone having no legal destination is a normal outcome, not an
//! error; it surfaces as `None` from the movement resolver.

use crate::player::PlayerColor;
use crate::turn::Phase;

/// Defects found while validating a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A spot id does not match its position in the table.
    #[display("spot id {id} does not match its table index {index}")]
    IdMismatch {
        /// Position in the layout table.
        index: usize,
        /// Id the entry carries.
        id: usize,
    },

    /// A successor points outside the table.
    #[display("spot {id} has successor {successor} outside the board")]
    SuccessorOutOfRange {
        /// Spot carrying the bad successor.
        id: usize,
        /// The out-of-range successor id.
        successor: usize,
    },

    /// A color does not have exactly 4 houses, 1 start and 4 home spots.
    #[display(
        "{color} has {houses} houses, {starts} starts and {homes} home spots (want 4/1/4)"
    )]
    WrongSpotCensus {
        /// The color with the bad census.
        color: PlayerColor,
        /// House spots found.
        houses: usize,
        /// Start spots found.
        starts: usize,
        /// Home-lane spots found.
        homes: usize,
    },
}

impl std::error::Error for BoardError {}

/// Rejected engine inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A dice roll was requested outside the dice phases.
    #[display("no roll expected in the {_0:?} phase")]
    RollNotExpected(Phase),

    /// A stone selection was made outside the move phase.
    #[display("no move expected in the {_0:?} phase")]
    MoveNotExpected(Phase),

    /// The stone index is not in 0..4.
    #[display("stone index {_0} out of range")]
    BadStoneIndex(usize),

    /// The selected stone has no legal destination this turn.
    #[display("stone {_0} cannot move on this roll")]
    NoDestination(usize),
}

impl std::error::Error for MoveError {}
