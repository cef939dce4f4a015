//! Movement resolution: where a stone may go, and what landing does.
//!
//! The resolver is a pure function of the board topology, the stone
//! positions and a dice value. Committing a move is the only mutation,
//! and it is atomic from the caller's perspective: captures and the
//! mover's relocation happen in one synchronous step.

use crate::board::{Board, SpotId, SpotKind};
use crate::player::{PlayerColor, Players};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A legal move for one of the acting player's stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneMove {
    /// Index of the stone in its owner's roster (0..4).
    pub stone: usize,
    /// The spot the stone would land on.
    pub destination: SpotId,
}

/// Computes the legal destination for one stone, or `None`.
///
/// Rules, in order:
/// - From a house spot the stone leaves only on a roll of exactly 6,
///   onto the house's successor (the owner's start spot).
/// - Otherwise the stone walks `dice` successor steps. A stone on its
///   own home lane may never step past the last home-lane spot, so a
///   roll that would overshoot yields no move. House and home spots of
///   other players are hopped over without consuming a step.
/// - A destination occupied by one of the acting player's own stones is
///   not available; own stones never co-locate and never capture each
///   other.
#[instrument(skip(board, players), fields(player = %color))]
pub fn next_destination(
    board: &Board,
    players: &Players,
    color: PlayerColor,
    stone: usize,
    dice: u8,
) -> Option<SpotId> {
    let position = players.get(color).stones()[stone].position;

    let destination = match board.spot(position).kind() {
        SpotKind::House(_) => {
            if dice != 6 {
                return None;
            }
            board.successor(position)
        }
        _ => walk(board, color, position, dice)?,
    };

    let own_stone_in_the_way = players
        .get(color)
        .stones()
        .iter()
        .any(|s| s.position == destination);
    if own_stone_in_the_way {
        return None;
    }

    Some(destination)
}

/// Walks `dice` steps along the successor chain from a non-house spot.
fn walk(board: &Board, color: PlayerColor, from: SpotId, dice: u8) -> Option<SpotId> {
    let mut current = from;
    for _ in 0..dice {
        let spot = board.spot(current);
        let mut next = spot.successor();

        // A home lane is a dead-end branch, not a loop-back: once on
        // the own lane, stepping onto a non-home successor means the
        // roll overshoots the lane end and the whole move is illegal.
        if spot.kind() == SpotKind::Home(color)
            && !matches!(board.spot(next).kind(), SpotKind::Home(_))
        {
            return None;
        }

        // Hop over other players' houses and home lanes; they are not
        // part of this stone's path and consume no steps.
        while board.spot(next).kind().is_branch()
            && board.spot(next).kind().owner() != Some(color)
        {
            next = board.spot(next).successor();
        }

        current = next;
    }
    Some(current)
}

/// All legal moves for the acting player at the given dice value,
/// in stone-roster order. This doubles as the presentation hint:
/// every destination in the result gets highlighted.
#[instrument(skip(board, players), fields(player = %color))]
pub fn legal_moves(
    board: &Board,
    players: &Players,
    color: PlayerColor,
    dice: u8,
) -> Vec<StoneMove> {
    (0..players.get(color).stones().len())
        .filter_map(|stone| {
            next_destination(board, players, color, stone, dice)
                .map(|destination| StoneMove { stone, destination })
        })
        .collect()
}

/// True iff at least one of the player's stones can move.
pub fn any_move_possible(board: &Board, players: &Players, color: PlayerColor, dice: u8) -> bool {
    let count = players.get(color).stones().len();
    (0..count).any(|stone| next_destination(board, players, color, stone, dice).is_some())
}

/// Commits a move: captures every opponent stone on the destination,
/// then relocates the moving stone.
///
/// Each captured stone goes back to the first free house spot of its
/// own owner; such a spot always exists because the captured stone
/// itself is not on a house, leaving at most three of its siblings
/// parked there.
#[instrument(skip(board, players), fields(player = %color, destination = %destination))]
pub fn apply_move(
    board: &Board,
    players: &mut Players,
    color: PlayerColor,
    stone: usize,
    destination: SpotId,
) {
    for other in PlayerColor::iter().filter(|&c| c != color) {
        loop {
            let hit = players
                .get(other)
                .stones()
                .iter()
                .position(|s| s.position == destination);
            let Some(index) = hit else { break };
            let house = board
                .free_house_spot(players.get(other))
                .expect("captured player has a free house spot")
                .id();
            tracing::debug!(captured = %other, stone = index, house = %house, "capture");
            players.get_mut(other).stones_mut()[index].position = house;
        }
    }

    players.get_mut(color).stones_mut()[stone].position = destination;
}
