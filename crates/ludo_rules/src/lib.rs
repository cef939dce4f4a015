//! Pure ludo game logic.
//!
//! This crate implements the rules engine of the four-player
//! cross-and-circle race game: stones leave their houses on a 6, race
//! around a shared loop, capture opponents by landing on them and must
//! enter their private home lane on an exact count.
//!
//! # Architecture
//!
//! - **Board**: read-only spot graph built from a layout table
//! - **Moves**: pure movement resolution and atomic move commits
//! - **Turn**: the roll/move/handoff state machine
//! - **Game**: the event-driven façade (render ticks and clicks in,
//!   state and highlight hints out)
//!
//! Rendering, animation and asset handling are presentation concerns;
//! the engine only hands out spot coordinates and highlight hints.
//!
//! # Example
//!
//! ```
//! use ludo_rules::{Game, Phase, ScriptedRolls};
//!
//! // Four opening dice throws, then red rolls a 6.
//! let rolls = ScriptedRolls::new(&[1, 1, 1, 1, 6]);
//! let mut game = Game::new(Box::new(rolls));
//!
//! game.tick(); // Start -> first roll attempt
//! game.roll().expect("dice phase");
//! assert_eq!(*game.turn().phase(), Phase::Move);
//!
//! // A 6 lets a stone leave its house onto the start spot.
//! let moves = game.legal_moves();
//! game.choose(moves[0].stone).expect("highlighted move");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod dice;
mod error;
mod game;
mod input;
mod invariants;
mod layout;
mod moves;
mod player;
mod turn;

// Crate-level exports - Board topology
pub use board::{Board, Coord, Spot, SpotId, SpotKind};

// Crate-level exports - Layout configuration
pub use layout::{SpotSpec, dice_anchor, dice_face_anchor, standard_layout};

// Crate-level exports - Players and stones
pub use player::{Player, PlayerColor, Players, Stone};

// Crate-level exports - Dice and randomness
pub use dice::{Dice, RandomSource, ScriptedRolls, ThreadRngSource};

// Crate-level exports - Movement resolution
pub use moves::{StoneMove, any_move_possible, apply_move, legal_moves, next_destination};

// Crate-level exports - Turn state machine
pub use turn::{Phase, Turn, advance_idle, after_move, after_roll};

// Crate-level exports - Engine façade and input boundary
pub use game::{Game, Highlight};
pub use input::Point;

// Crate-level exports - Errors and invariants
pub use error::{BoardError, MoveError};
pub use invariants::{
    GameInvariants, HouseExclusiveInvariant, Invariant, InvariantSet, InvariantViolation,
    PositionsInRangeInvariant, StoneCountInvariant,
};
