//! Wave function collapse generation engine built on constraint propagation
//!
//! The engine consumes a tile list and a pairwise adjacency-constraint list,
//! collapses cells in entropy order with a seeded weighted draw, propagates
//! domain reductions to arc consistency, and recovers from contradictions
//! through bounded snapshot backtracking.

#![forbid(unsafe_code)]

/// Core algorithm implementation including selection, collapse, propagation, and backtracking
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for entropy and seeded randomness
pub mod math;
/// Tile and adjacency-constraint input model
pub mod model;
/// Spatial grid management and direction handling
pub mod spatial;

pub use algorithm::executor::{GenerationResult, Generator, GeneratorConfig};
pub use io::error::{GenerationError, Result};
