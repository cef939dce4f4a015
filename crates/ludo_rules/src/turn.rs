//! The turn state machine.
//!
//! A turn is a small deterministic machine driven by two inputs: the
//! idle render tick (which only advances bookkeeping states) and player
//! intent (rolling the dice, picking a destination). The roll-attempt
//! count is plain state data; the three-attempt ladder exists only to
//! give a fully parked player three chances to roll the 6 needed to
//! leave a house.

use crate::board::Board;
use crate::moves;
use crate::player::{PlayerColor, Players};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Turn bookkeeping; advances on the next idle tick.
    Start,
    /// Waiting for the player to roll; `attempt` counts 1..=3.
    Dice {
        /// Which roll attempt this is.
        attempt: u8,
    },
    /// Waiting for the player to pick one of the highlighted destinations.
    Move,
    /// Turn over; the next idle tick hands off to the next player.
    End,
}

/// The current turn: whose it is and where in the turn it stands.
///
/// Only the current state is meaningful; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    player: PlayerColor,
    phase: Phase,
}

impl Turn {
    /// Opens a game with the given player about to start.
    pub fn opening(player: PlayerColor) -> Self {
        Self {
            player,
            phase: Phase::Start,
        }
    }

    fn with(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    /// First roll attempt of the current player's turn.
    fn first_roll(self) -> Self {
        self.with(Phase::Dice { attempt: 1 })
    }

    /// Hands the turn to the next player in order.
    fn handoff(self) -> Self {
        Turn::opening(self.player.next())
    }
}

/// Advances the idle states on a render tick.
///
/// `Start` either skips straight to `End` for a player who already
/// brought every stone home, or opens the first roll attempt. `End`
/// hands off to the next player. Dice and move phases hold until the
/// player acts.
#[instrument(skip(board, players), fields(player = %turn.player, phase = ?turn.phase))]
pub fn advance_idle(turn: Turn, board: &Board, players: &Players) -> Turn {
    match turn.phase {
        Phase::Start => {
            if players.get(turn.player).all_home(board) {
                turn.with(Phase::End)
            } else {
                turn.first_roll()
            }
        }
        Phase::End => turn.handoff(),
        Phase::Dice { .. } | Phase::Move => turn,
    }
}

/// Resolves a dice phase after the player's dice has been thrown.
///
/// While every stone is parked, a non-6 on attempts 1 and 2 grants
/// another attempt. In every other case the roll either opens the move
/// phase (some stone can move) or ends the turn — a 6 with all stones
/// blocked does not re-grant rolls.
///
/// # Panics
///
/// Must only be called in a dice phase; anything else is a programming
/// error in the caller.
#[instrument(skip(board, players), fields(player = %turn.player, phase = ?turn.phase))]
pub fn after_roll(turn: Turn, board: &Board, players: &Players) -> Turn {
    let Phase::Dice { attempt } = turn.phase else {
        panic!("after_roll outside a dice phase");
    };
    let player = players.get(turn.player);
    let value = player.dice().value();

    match attempt {
        1 => {
            if player.all_parked(board) && value != 6 {
                return turn.with(Phase::Dice { attempt: 2 });
            }
        }
        2 => {
            if value != 6 {
                return turn.with(Phase::Dice { attempt: 3 });
            }
        }
        _ => {
            if value != 6 {
                return turn.with(Phase::End);
            }
        }
    }

    if moves::any_move_possible(board, players, turn.player, value) {
        turn.with(Phase::Move)
    } else {
        turn.with(Phase::End)
    }
}

/// Resolves the move phase after the chosen move has been applied.
///
/// A roll of 6 grants a bonus roll unless the player's stones are now
/// all parked; the bonus restarts the dice ladder at attempt 1.
#[instrument(skip(board, players), fields(player = %turn.player))]
pub fn after_move(turn: Turn, board: &Board, players: &Players) -> Turn {
    let player = players.get(turn.player);
    if player.dice().value() == 6 && !player.all_parked(board) {
        turn.first_roll()
    } else {
        turn.with(Phase::End)
    }
}
