//! Pairwise directional adjacency constraints
//!
//! A constraint licenses `tile_b` to occupy the neighbor reached by
//! `direction` from a cell fixed to `tile_a`. A bidirectional constraint
//! additionally licenses the mirrored pair in the opposite direction.
//! Tile ids are resolved against the `TileSet` when the constraint index
//! is built; unknown ids are a validation error at that point.

use crate::spatial::direction::Direction;

/// Ordered directional compatibility between two tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    /// Source tile id
    pub tile_a: String,
    /// Licensed neighbor tile id
    pub tile_b: String,
    /// Direction from `tile_a` toward `tile_b`
    pub direction: Direction,
    /// Whether the mirrored pair in the opposite direction is also licensed
    pub bidirectional: bool,
}

impl Constraint {
    /// Create a one-way constraint
    pub fn new(tile_a: impl Into<String>, tile_b: impl Into<String>, direction: Direction) -> Self {
        Self {
            tile_a: tile_a.into(),
            tile_b: tile_b.into(),
            direction,
            bidirectional: false,
        }
    }

    /// Create a bidirectional constraint
    ///
    /// Equivalent to the pair `(tile_a, tile_b, direction)` and
    /// `(tile_b, tile_a, opposite(direction))`.
    pub fn bidirectional(
        tile_a: impl Into<String>,
        tile_b: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            tile_a: tile_a.into(),
            tile_b: tile_b.into(),
            direction,
            bidirectional: true,
        }
    }

    /// The ordered pairs this constraint licenses, after bidirectional expansion
    pub fn expanded_pairs(&self) -> Vec<(&str, &str, Direction)> {
        let mut pairs = vec![(self.tile_a.as_str(), self.tile_b.as_str(), self.direction)];
        if self.bidirectional {
            pairs.push((
                self.tile_b.as_str(),
                self.tile_a.as_str(),
                self.direction.opposite(),
            ));
        }
        pairs
    }
}
