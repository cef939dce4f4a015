//! The standard board layout table and presentation anchors.
//!
//! Everything in this module is configuration, not algorithm: the rules
//! engine consumes the table through [`Board::from_layout`] and never
//! hardcodes spot ids.
//!
//! The shared loop runs clockwise. Each player's home lane is spliced
//! inline into the loop (foreign stones hop over it), each house points
//! at its owner's start spot, and the last home-lane spot of a color
//! chains onto that color's start spot, closing the cycle.
//!
//! [`Board::from_layout`]: crate::board::Board::from_layout

use crate::board::{Coord, SpotKind};
use crate::player::PlayerColor;
use serde::{Deserialize, Serialize};

use PlayerColor::{Blue, Green, Red, Yellow};
use SpotKind::{Home, House, Start, Track};

/// One row of the layout table: where a spot sits, its id, its single
/// successor and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSpec {
    /// Horizontal presentation coordinate.
    pub x: i32,
    /// Vertical presentation coordinate.
    pub y: i32,
    /// Spot id; must equal the table index.
    pub id: usize,
    /// Id of the next spot along the movement graph.
    pub successor: usize,
    /// Spot kind with inline ownership.
    pub kind: SpotKind,
}

const fn spot(x: i32, y: i32, id: usize, successor: usize, kind: SpotKind) -> SpotSpec {
    SpotSpec {
        x,
        y,
        id,
        successor,
        kind,
    }
}

/// The standard four-player board: 72 spots, 18 per player
/// (4 houses, 1 start, 9 shared track cells, 4 home-lane cells).
pub fn standard_layout() -> [SpotSpec; 72] {
    [
        spot(65, 15, 0, 4, House(Red)),
        spot(114, 16, 1, 4, House(Red)),
        spot(65, 65, 2, 4, House(Red)),
        spot(114, 65, 3, 4, House(Red)),
        spot(62, 270, 4, 5, Start(Red)),
        spot(125, 270, 5, 6, Track),
        spot(189, 271, 6, 7, Track),
        spot(253, 272, 7, 8, Track),
        spot(318, 273, 8, 9, Track),
        spot(319, 208, 9, 10, Track),
        spot(319, 141, 10, 11, Track),
        spot(319, 77, 11, 12, Track),
        spot(319, 11, 12, 13, Track),
        spot(382, 11, 13, 14, Track),
        spot(381, 78, 14, 15, Home(Blue)),
        spot(381, 143, 15, 16, Home(Blue)),
        spot(381, 208, 16, 17, Home(Blue)),
        spot(380, 273, 17, 18, Home(Blue)),
        spot(443, 13, 18, 23, Start(Blue)),
        spot(648, 22, 19, 18, House(Blue)),
        spot(697, 22, 20, 18, House(Blue)),
        spot(647, 71, 21, 18, House(Blue)),
        spot(697, 71, 22, 18, House(Blue)),
        spot(445, 77, 23, 24, Track),
        spot(445, 141, 24, 25, Track),
        spot(444, 208, 25, 26, Track),
        spot(443, 272, 26, 27, Track),
        spot(507, 272, 27, 28, Track),
        spot(571, 272, 28, 29, Track),
        spot(635, 272, 29, 30, Track),
        spot(699, 272, 30, 31, Track),
        spot(699, 338, 31, 32, Track),
        spot(634, 338, 32, 33, Home(Yellow)),
        spot(570, 338, 33, 34, Home(Yellow)),
        spot(506, 338, 34, 35, Home(Yellow)),
        spot(442, 338, 35, 36, Home(Yellow)),
        spot(696, 400, 36, 41, Start(Yellow)),
        spot(693, 608, 37, 36, House(Yellow)),
        spot(693, 657, 38, 36, House(Yellow)),
        spot(644, 657, 39, 36, House(Yellow)),
        spot(644, 608, 40, 36, House(Yellow)),
        spot(634, 400, 41, 42, Track),
        spot(570, 400, 42, 43, Track),
        spot(506, 400, 43, 44, Track),
        spot(443, 400, 44, 45, Track),
        spot(442, 465, 45, 46, Track),
        spot(442, 530, 46, 47, Track),
        spot(441, 595, 47, 48, Track),
        spot(441, 660, 48, 49, Track),
        spot(378, 660, 49, 50, Track),
        spot(378, 597, 50, 51, Home(Green)),
        spot(378, 531, 51, 52, Home(Green)),
        spot(379, 467, 52, 53, Home(Green)),
        spot(379, 400, 53, 54, Home(Green)),
        spot(316, 659, 54, 59, Start(Green)),
        spot(110, 655, 55, 54, House(Green)),
        spot(61, 655, 56, 54, House(Green)),
        spot(61, 605, 57, 54, House(Green)),
        spot(111, 605, 58, 54, House(Green)),
        spot(316, 595, 59, 60, Track),
        spot(316, 530, 60, 61, Track),
        spot(317, 466, 61, 62, Track),
        spot(317, 400, 62, 63, Track),
        spot(252, 400, 63, 64, Track),
        spot(188, 400, 64, 65, Track),
        spot(124, 400, 65, 66, Track),
        spot(60, 400, 66, 67, Track),
        spot(60, 334, 67, 68, Track),
        spot(124, 334, 68, 69, Home(Red)),
        spot(188, 334, 69, 70, Home(Red)),
        spot(250, 334, 70, 71, Home(Red)),
        spot(317, 334, 71, 4, Home(Red)),
    ]
}

/// Anchor of a player's dice on the board image.
///
/// The input adapter hit-tests clicks against this anchor while the
/// player is in a dice phase.
pub fn dice_anchor(color: PlayerColor) -> Coord {
    match color {
        Red => Coord::new(200, 190),
        Blue => Coord::new(530, 190),
        Yellow => Coord::new(530, 530),
        Green => Coord::new(200, 530),
    }
}

/// Source anchor of a dice face in the sprite sheet, for roll values
/// 1 through 6. Pure presentation; the engine only emits the integer.
pub fn dice_face_anchor(value: u8) -> Option<Coord> {
    match value {
        1 => Some(Coord::new(-10, 210)),
        2 => Some(Coord::new(210, 210)),
        3 => Some(Coord::new(423, 210)),
        4 => Some(Coord::new(638, 210)),
        5 => Some(Coord::new(850, 210)),
        6 => Some(Coord::new(1065, 210)),
        _ => None,
    }
}
