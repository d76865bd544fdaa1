use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over dense tile indices
///
/// Backs every cell domain and every constraint-index entry. Provides O(1)
/// membership testing and word-wide set operations, which keeps propagation
/// bursts cheap even for large tile sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
    tile_count: usize,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Create a bitset containing every tile index below `tile_count`
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
            tile_count,
        }
    }

    /// Create a bitset from explicit tile indices
    pub fn from_indices(indices: &[usize], tile_count: usize) -> Self {
        let mut bitset = Self::new(tile_count);
        for &index in indices {
            bitset.insert(index);
        }
        bitset
    }

    /// Insert a tile index; out-of-range indices are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.tile_count {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index; out-of-range indices are ignored
    pub fn remove(&mut self, tile: usize) {
        if tile < self.tile_count {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Merge another bitset into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every tile index is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single member of a singleton set, if the set has exactly one
    pub fn sole_member(&self) -> Option<usize> {
        if self.count() == 1 {
            self.bits.first_one()
        } else {
            None
        }
    }

    /// Number of tile indices the set was sized for
    pub const fn capacity(&self) -> usize {
        self.tile_count
    }

    /// Iterate over member tile indices in ascending order
    pub fn iter_members(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all member tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
