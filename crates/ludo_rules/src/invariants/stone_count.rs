//! Stone count invariant: every player owns exactly four stones.

use super::Invariant;
use crate::game::Game;

/// Invariant: each of the four players has four stones, each carrying
/// its owner's color.
///
/// The roster arrays make the count structural; this guards the
/// ownership tags, which capture and movement must never rewrite.
pub struct StoneCountInvariant;

impl Invariant<Game> for StoneCountInvariant {
    fn holds(game: &Game) -> bool {
        game.players()
            .iter()
            .all(|p| p.stones().iter().all(|s| s.owner == *p.color()))
    }

    fn description() -> &'static str {
        "every player has 4 stones tagged with their own color"
    }
}
