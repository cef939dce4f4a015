//! Board topology: a read-only directed graph of spots.
//!
//! The board is a singly-linked cycle of track spots with four private
//! home lanes spliced in and four house clusters branching onto the
//! players' start spots. It is built once from a layout table and never
//! mutated afterwards.

use crate::error::BoardError;
use crate::layout::SpotSpec;
use crate::player::{Player, PlayerColor};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A 2D point attached to a spot for presentation purposes.
///
/// The rules engine never interprets coordinates; they are carried
/// through for the renderer and the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal position in board-local pixels.
    pub x: i32,
    /// Vertical position in board-local pixels.
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Identifier of a spot on the board (its index in the layout table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotId(pub usize);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spot {}", self.0)
    }
}

/// What a spot is, with ownership stored inline.
///
/// `Start`, `House` and `Home` spots are *private*: they belong to a
/// single player. Houses and home lanes of other players are skipped
/// over during movement; start spots are part of the shared path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotKind {
    /// A shared cell of the outer loop.
    Track,
    /// The cell where a player's stones enter the shared loop.
    Start(PlayerColor),
    /// A private parking cell; stones leave it only on a roll of 6.
    House(PlayerColor),
    /// A cell of a player's private final stretch.
    Home(PlayerColor),
}

impl SpotKind {
    /// Returns the owning player for private spots.
    pub fn owner(&self) -> Option<PlayerColor> {
        match self {
            SpotKind::Track => None,
            SpotKind::Start(owner) | SpotKind::House(owner) | SpotKind::Home(owner) => {
                Some(*owner)
            }
        }
    }

    /// Returns true for house and home-lane spots.
    ///
    /// These are the spots a foreign stone hops over without consuming
    /// a step; start spots are walkable by everyone.
    pub fn is_branch(&self) -> bool {
        matches!(self, SpotKind::House(_) | SpotKind::Home(_))
    }
}

/// One cell of the board graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    id: SpotId,
    successor: SpotId,
    coord: Coord,
    kind: SpotKind,
}

impl Spot {
    /// Returns the spot's identifier.
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// Returns the single successor spot.
    pub fn successor(&self) -> SpotId {
        self.successor
    }

    /// Returns the presentation coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns the spot kind.
    pub fn kind(&self) -> SpotKind {
        self.kind
    }
}

/// Read-only board graph built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spots: Vec<Spot>,
}

impl Board {
    /// Builds a board from a layout table, validating its shape.
    ///
    /// The table is configuration: ids must be dense and match their
    /// table index, successors must stay in range, and every color must
    /// contribute exactly 4 houses, 1 start and 4 home-lane spots.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] describing the first defect found.
    #[instrument(skip(layout), fields(spots = layout.len()))]
    pub fn from_layout(layout: &[SpotSpec]) -> Result<Self, BoardError> {
        let spots: Vec<Spot> = layout
            .iter()
            .map(|spec| Spot {
                id: SpotId(spec.id),
                successor: SpotId(spec.successor),
                coord: Coord::new(spec.x, spec.y),
                kind: spec.kind,
            })
            .collect();

        for (index, spot) in spots.iter().enumerate() {
            if spot.id.0 != index {
                return Err(BoardError::IdMismatch {
                    index,
                    id: spot.id.0,
                });
            }
            if spot.successor.0 >= spots.len() {
                return Err(BoardError::SuccessorOutOfRange {
                    id: spot.id.0,
                    successor: spot.successor.0,
                });
            }
        }

        for color in PlayerColor::iter() {
            let count = |wanted: fn(PlayerColor) -> SpotKind| {
                spots.iter().filter(|s| s.kind == wanted(color)).count()
            };
            let houses = count(SpotKind::House);
            let starts = count(SpotKind::Start);
            let homes = count(SpotKind::Home);
            if houses != 4 || starts != 1 || homes != 4 {
                return Err(BoardError::WrongSpotCensus {
                    color,
                    houses,
                    starts,
                    homes,
                });
            }
        }

        Ok(Self { spots })
    }

    /// Returns the number of spots on the board.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns true if the board has no spots.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Returns the spot with the given id.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range id. Stone positions always come from
    /// the board itself, so this is a programming error, not a runtime
    /// condition.
    pub fn spot(&self, id: SpotId) -> &Spot {
        &self.spots[id.0]
    }

    /// Returns the spot with the given id, or `None` if out of range.
    pub fn get(&self, id: SpotId) -> Option<&Spot> {
        self.spots.get(id.0)
    }

    /// Returns the successor of the given spot.
    pub fn successor(&self, id: SpotId) -> SpotId {
        self.spot(id).successor
    }

    /// Returns all spots in table order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Returns the player's house spots in table order.
    pub fn house_spots(&self, color: PlayerColor) -> impl Iterator<Item = &Spot> {
        self.spots
            .iter()
            .filter(move |s| s.kind == SpotKind::House(color))
    }

    /// Returns a house spot of the player currently unoccupied by any of
    /// the player's own stones, or `None` if all four are taken.
    ///
    /// When several houses are free, the first in table order wins.
    #[instrument(skip(self, player), fields(color = ?player.color()))]
    pub fn free_house_spot(&self, player: &Player) -> Option<&Spot> {
        self.house_spots(*player.color())
            .find(|house| player.stones().iter().all(|s| s.position != house.id()))
    }
}
