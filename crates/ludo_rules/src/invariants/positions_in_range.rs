//! Position validity invariant: stones only sit on real spots.

use super::Invariant;
use crate::game::Game;

/// Invariant: every stone's position is a valid spot id of the board.
pub struct PositionsInRangeInvariant;

impl Invariant<Game> for PositionsInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.players()
            .stones()
            .all(|stone| game.board().get(stone.position).is_some())
    }

    fn description() -> &'static str {
        "every stone position is a valid spot id"
    }
}
