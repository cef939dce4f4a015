//! Players, stones and the four-seat roster.

use crate::board::{Board, SpotId, SpotKind};
use crate::dice::Dice;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The four fixed player identities, in turn order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PlayerColor {
    /// Red moves first in the seating order.
    Red,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
}

impl PlayerColor {
    /// Returns the player whose turn follows this one.
    pub fn next(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Yellow,
            PlayerColor::Yellow => PlayerColor::Green,
            PlayerColor::Green => PlayerColor::Red,
        }
    }

    /// Roster index of this color.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Green => "green",
        };
        write!(f, "{name}")
    }
}

/// A single movable token.
///
/// Stones are created once at game start on their owner's house spots
/// and are never destroyed; a captured stone is repositioned onto a
/// free house spot of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    /// The spot the stone currently occupies.
    pub position: SpotId,
    /// The player the stone belongs to.
    pub owner: PlayerColor,
}

/// One of the four players: a color identity, four stones and a dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Player {
    color: PlayerColor,
    stones: [Stone; 4],
    dice: Dice,
}

impl Player {
    /// Mutable access to the stones, for move application and test setup.
    pub fn stones_mut(&mut self) -> &mut [Stone; 4] {
        &mut self.stones
    }

    /// Mutable access to the dice.
    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    /// True iff every stone sits on one of this player's home-lane spots.
    ///
    /// This is the terminal condition: the player has brought all four
    /// stones home.
    pub fn all_home(&self, board: &Board) -> bool {
        self.stones
            .iter()
            .all(|s| board.spot(s.position).kind() == SpotKind::Home(self.color))
    }

    /// True iff every stone is parked on this player's house or
    /// home-lane spots.
    ///
    /// While parked, a player gets three attempts to roll the 6 needed
    /// to leave a house, and a rolled 6 no longer grants a bonus turn.
    pub fn all_parked(&self, board: &Board) -> bool {
        self.stones.iter().all(|s| {
            matches!(
                board.spot(s.position).kind(),
                SpotKind::Home(owner) | SpotKind::House(owner) if owner == self.color
            )
        })
    }
}

/// The roster of exactly four players, indexed by color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; 4],
}

impl Players {
    /// Seats the four players on their house spots, in table order.
    pub fn seated(board: &Board) -> Self {
        let seat = |color: PlayerColor| {
            let mut houses = board.house_spots(color);
            let mut stone = || Stone {
                position: houses.next().expect("board has 4 houses per color").id(),
                owner: color,
            };
            Player {
                color,
                stones: [stone(), stone(), stone(), stone()],
                dice: Dice::default(),
            }
        };
        Self {
            seats: [
                seat(PlayerColor::Red),
                seat(PlayerColor::Blue),
                seat(PlayerColor::Yellow),
                seat(PlayerColor::Green),
            ],
        }
    }

    /// Returns the player with the given color.
    pub fn get(&self, color: PlayerColor) -> &Player {
        &self.seats[color.index()]
    }

    /// Returns the player with the given color, mutably.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut Player {
        &mut self.seats[color.index()]
    }

    /// Iterates the players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter()
    }

    /// Every stone of every player, in roster order.
    pub fn stones(&self) -> impl Iterator<Item = &Stone> {
        self.seats.iter().flat_map(|p| p.stones.iter())
    }

    /// The first player whose stones are all home, if any.
    pub fn winner(&self, board: &Board) -> Option<PlayerColor> {
        PlayerColor::iter().find(|&c| self.get(c).all_home(board))
    }
}
