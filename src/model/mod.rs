//! Input model for generation runs
//!
//! Tiles and adjacency constraints are immutable once a run starts; the
//! engine is agnostic to their provenance (hand-written, pattern-learned,
//! or socket-derived).

/// Pairwise directional adjacency constraints
pub mod constraints;
/// Tile declarations and the validated tile set
pub mod tiles;

pub use constraints::Constraint;
pub use tiles::{Tile, TileSet};
