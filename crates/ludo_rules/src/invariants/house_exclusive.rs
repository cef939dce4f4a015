//! House occupancy invariant: one stone per house spot.

use super::Invariant;
use crate::board::SpotKind;
use crate::game::Game;

/// Invariant: no two stones of one player occupy the same house spot.
///
/// Placement at game start, captures (which relocate onto a *free*
/// house) and the own-stone destination block all preserve this.
pub struct HouseExclusiveInvariant;

impl Invariant<Game> for HouseExclusiveInvariant {
    fn holds(game: &Game) -> bool {
        game.players().iter().all(|player| {
            let mut seen = Vec::with_capacity(4);
            player.stones().iter().all(|stone| {
                let kind = game.board().spot(stone.position).kind();
                if !matches!(kind, SpotKind::House(_)) {
                    return true;
                }
                if seen.contains(&stone.position) {
                    return false;
                }
                seen.push(stone.position);
                true
            })
        })
    }

    fn description() -> &'static str {
        "no two stones of one player share a house spot"
    }
}
