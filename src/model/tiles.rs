//! Tile declarations and the validated tile set
//!
//! Tiles are addressed by string id at the API boundary and by dense index
//! internally; the `TileSet` owns the mapping and the per-tile weights used
//! for both entropy and the weighted collapse draw.

use crate::io::error::{GenerationError, Result, invalid_parameter};
use std::collections::HashMap;

/// A single tile type with its selection weight
///
/// The weight biases both the entropy measure and the weighted random draw;
/// it defaults to 1.0 and must be finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Unique identifier for the tile
    pub id: String,
    /// Positive selection weight
    pub weight: f64,
}

impl Tile {
    /// Create a tile with the default weight of 1.0
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: 1.0,
        }
    }

    /// Create a tile with an explicit weight
    pub fn weighted(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// Validated, immutable collection of tiles for one generation run
///
/// Construction checks weights and id uniqueness; afterwards tiles are
/// addressed by dense index everywhere inside the engine.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    index_by_id: HashMap<String, usize>,
}

impl TileSet {
    /// Build a tile set from tile declarations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile list is empty
    /// - Any tile id appears more than once
    /// - Any weight is non-positive or not finite
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(GenerationError::EmptyTileSet);
        }

        let mut index_by_id = HashMap::with_capacity(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            if !tile.weight.is_finite() || tile.weight <= 0.0 {
                return Err(invalid_parameter(
                    "weight",
                    &tile.weight,
                    &format!("tile '{}' requires a finite positive weight", tile.id),
                ));
            }
            if index_by_id.insert(tile.id.clone(), index).is_some() {
                return Err(GenerationError::DuplicateTile {
                    tile: tile.id.clone(),
                });
            }
        }

        Ok(Self { tiles, index_by_id })
    }

    /// Number of tiles in the set
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set contains no tiles
    ///
    /// Always false for a successfully constructed set; provided for
    /// completeness alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Dense index of a tile id, if present
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Tile id at a dense index
    pub fn id(&self, index: usize) -> Option<&str> {
        self.tiles.get(index).map(|tile| tile.id.as_str())
    }

    /// Tile weight at a dense index, 0.0 when out of range
    pub fn weight(&self, index: usize) -> f64 {
        self.tiles.get(index).map_or(0.0, |tile| tile.weight)
    }

    /// All weights in dense index order
    pub fn weights(&self) -> Vec<f64> {
        self.tiles.iter().map(|tile| tile.weight).collect()
    }

    /// Iterate over the tiles in dense index order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
