use crate::spatial::grid::Grid;

/// Strategy for choosing the next cell to collapse
///
/// The default policy is the minimum-entropy scan; alternate strategies can
/// replace the comparison key (e.g. domain size) or the whole candidate
/// procedure. Strategies are injected at generator construction.
pub trait SelectionStrategy: std::fmt::Debug {
    /// Choose the next cell to collapse
    ///
    /// Returns `None` only when no uncollapsed cell has a non-empty domain:
    /// either the grid is complete, or every remaining cell is contradictory.
    fn select_cell(&self, grid: &Grid) -> Option<[usize; 3]>;
}

/// Default policy: minimum cached weighted entropy
///
/// Ties are broken by grid scan order (first encountered). The scan order
/// is deterministic but an implementation detail, not a guaranteed
/// insertion-order semantic.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumEntropy;

impl SelectionStrategy for MinimumEntropy {
    fn select_cell(&self, grid: &Grid) -> Option<[usize; 3]> {
        let mut best: Option<([usize; 3], f64)> = None;

        for (position, cell) in grid.indexed_cells() {
            if cell.collapsed || cell.domain.is_empty() {
                continue;
            }
            // Strict comparison keeps the first-encountered cell on ties
            if best.is_none_or(|(_, entropy)| cell.entropy < entropy) {
                best = Some((position, cell.entropy));
            }
        }

        best.map(|(position, _)| position)
    }
}

/// Alternate policy: smallest remaining domain
///
/// Ignores weights entirely; useful when tile weights are heavily skewed
/// and entropy stops tracking how constrained a cell actually is.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmallestDomain;

impl SelectionStrategy for SmallestDomain {
    fn select_cell(&self, grid: &Grid) -> Option<[usize; 3]> {
        let mut best: Option<([usize; 3], usize)> = None;

        for (position, cell) in grid.indexed_cells() {
            if cell.collapsed || cell.domain.is_empty() {
                continue;
            }
            let size = cell.domain.count();
            if best.is_none_or(|(_, count)| size < count) {
                best = Some((position, size));
            }
        }

        best.map(|(position, _)| position)
    }
}
