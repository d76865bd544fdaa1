//! Mathematical utilities for the engine

/// Weighted Shannon entropy over tile domains
pub mod entropy;
/// Seeded linear-congruential random sequence
pub mod random;
