//! Grid and cell state for a single generation run
//!
//! The grid is a fixed-size 3D array of cells (2D runs use depth 1). Each
//! cell holds a domain of still-possible tile indices, a collapsed flag, and
//! a cached weighted-entropy value maintained on every domain change. The
//! grid also keeps a copy of the tile weights so entropy recomputation does
//! not need the tile set threaded through every call.

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::math::entropy::weighted_entropy;
use crate::model::tiles::TileSet;
use crate::spatial::direction::Direction;
use ndarray::Array3;

/// One grid position: domain, collapsed flag, and cached entropy
///
/// Invariant: `collapsed` implies the domain is a singleton and the cached
/// entropy is 0. A collapsed cell's domain is never mutated again except by
/// restoring a snapshot of the whole grid.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Still-possible tile indices
    pub domain: TileBitset,
    /// Whether the cell has been fixed to a single tile
    pub collapsed: bool,
    /// Cached weighted Shannon entropy of the domain
    pub entropy: f64,
}

impl Cell {
    /// The fixed tile index of a collapsed cell
    pub fn tile(&self) -> Option<usize> {
        if self.collapsed {
            self.domain.sole_member()
        } else {
            None
        }
    }
}

/// Fixed-size 3D cell store with neighbor lookup
///
/// Owned exclusively by one generation run; snapshots for backtracking are
/// deep copies of the whole structure.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array3<Cell>,
    dimensions: (usize, usize, usize),
    weights: Vec<f64>,
    periodic: bool,
}

impl Grid {
    /// Allocate a grid with every domain holding all tiles
    ///
    /// Initial entropy is the weighted entropy of the full tile set, shared
    /// by every cell.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`.
    pub fn new(
        width: usize,
        height: usize,
        depth: usize,
        tile_set: &TileSet,
        periodic: bool,
    ) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if value == 0 {
                return Err(invalid_parameter(name, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("exceeds maximum grid dimension {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let weights = tile_set.weights();
        let template = Cell {
            domain: TileBitset::all(tile_set.len()),
            collapsed: false,
            entropy: weighted_entropy(&weights),
        };

        Ok(Self {
            cells: Array3::from_elem((width, height, depth), template),
            dimensions: (width, height, depth),
            weights,
            periodic,
        })
    }

    /// Grid width (x extent)
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Grid height (y extent)
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Grid depth (z extent, 1 for 2D runs)
    pub const fn depth(&self) -> usize {
        self.dimensions.2
    }

    /// Grid dimensions as `(width, height, depth)`
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Total number of cells
    pub const fn total_cells(&self) -> usize {
        self.dimensions.0 * self.dimensions.1 * self.dimensions.2
    }

    /// Whether neighbor lookup wraps at the edges
    pub const fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Number of tile indices each domain was sized for
    pub const fn tile_count(&self) -> usize {
        self.weights.len()
    }

    /// Weight of a tile index, 0.0 when out of range
    pub fn weight(&self, tile: usize) -> f64 {
        self.weights.get(tile).copied().unwrap_or(0.0)
    }

    /// Immutable cell access
    pub fn cell(&self, position: [usize; 3]) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutable cell access
    pub fn cell_mut(&mut self, position: [usize; 3]) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// Position of the neighbor in `direction`, if one exists
    ///
    /// Without periodic wrap, edge positions have no neighbor beyond the
    /// boundary. With periodic wrap, coordinates are taken modulo the grid
    /// extent, except along an axis of extent 1: wrapping there would make
    /// a cell its own neighbor, so no neighbor is reported instead.
    pub fn neighbor(&self, position: [usize; 3], direction: Direction) -> Option<[usize; 3]> {
        let offset = direction.offset();
        let extents = [self.dimensions.0, self.dimensions.1, self.dimensions.2];
        let mut neighbor = [0usize; 3];

        for axis in 0..3 {
            let extent = *extents.get(axis)? as i32;
            let delta = *offset.get(axis)?;
            let target = *position.get(axis)? as i32 + delta;

            let wrapped = if self.periodic {
                if extent == 1 && delta != 0 {
                    return None;
                }
                target.rem_euclid(extent)
            } else if target < 0 || target >= extent {
                return None;
            } else {
                target
            };

            if let Some(component) = neighbor.get_mut(axis) {
                *component = wrapped as usize;
            }
        }

        Some(neighbor)
    }

    /// Iterate over all cells with their positions in storage scan order
    ///
    /// The order (z fastest, then y, then x) is deterministic and doubles as
    /// the tie-break order for minimum-entropy selection.
    pub fn indexed_cells(&self) -> impl Iterator<Item = ([usize; 3], &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y, z), cell)| ([x, y, z], cell))
    }

    /// True iff every cell is collapsed
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.collapsed)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.collapsed).count()
    }

    /// Sum of cached entropy over all cells
    ///
    /// Zero exactly when every remaining domain is a singleton or collapsed.
    pub fn total_entropy(&self) -> f64 {
        self.cells.iter().map(|cell| cell.entropy).sum()
    }

    /// Weighted entropy of an arbitrary domain under this grid's tile weights
    pub fn domain_entropy(&self, domain: &TileBitset) -> f64 {
        let member_weights: Vec<f64> = domain
            .iter_members()
            .map(|tile| self.weight(tile))
            .collect();
        weighted_entropy(&member_weights)
    }

    /// Replace an uncollapsed cell's domain and refresh its cached entropy
    ///
    /// Collapsed cells are left untouched; the propagator never shrinks a
    /// fixed singleton.
    pub fn shrink_domain(&mut self, position: [usize; 3], domain: TileBitset) {
        let entropy = self.domain_entropy(&domain);
        if let Some(cell) = self.cells.get_mut(position) {
            if cell.collapsed {
                return;
            }
            cell.domain = domain;
            cell.entropy = entropy;
        }
    }

    /// Fix a cell to a single tile
    ///
    /// Sets the singleton domain, the collapsed flag, and zero entropy.
    pub fn collapse_to(&mut self, position: [usize; 3], tile: usize) {
        let tile_count = self.weights.len();
        if let Some(cell) = self.cells.get_mut(position) {
            cell.domain = TileBitset::from_indices(&[tile], tile_count);
            cell.collapsed = true;
            cell.entropy = 0.0;
        }
    }

    /// Collapsed tile index per cell, `None` for uncollapsed cells
    pub fn tile_indices(&self) -> Array3<Option<usize>> {
        self.cells.map(Cell::tile)
    }
}
