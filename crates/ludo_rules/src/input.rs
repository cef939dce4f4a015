//! Pointer-input boundary.
//!
//! The engine's whole contract with the presentation layer is "is this
//! point within the hit-box of a highlighted target". The tolerance
//! matches the stone and dice sprite footprint and is observable
//! behavior: -10..+80 on each axis from the target's anchor, exclusive.

use crate::board::Coord;
use serde::{Deserialize, Serialize};

/// A pointer-down position in board-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff this point falls inside the hit-box anchored at `anchor`.
    pub fn hits(self, anchor: Coord) -> bool {
        let dx = self.x - anchor.x;
        let dy = self.y - anchor.y;
        dx > -10 && dx < 80 && dy > -10 && dy < 80
    }
}
