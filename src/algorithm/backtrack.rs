use crate::spatial::grid::Grid;
use std::collections::VecDeque;

/// Snapshot of the run taken just before a collapse decision
///
/// Restoring the grid copy also undoes every propagation effect of the
/// collapse it preceded.
#[derive(Clone, Debug)]
pub struct BacktrackState {
    /// Deep copy of the grid
    pub grid: Grid,
    /// Collapse history up to the snapshot point
    pub collapsed_positions: Vec<[usize; 3]>,
    /// Number of collapses performed when the snapshot was taken
    pub step: usize,
}

/// Bounded stack of grid snapshots for contradiction recovery
///
/// The stack holds at most `capacity` entries; pushing onto a full stack
/// evicts the oldest snapshot first. This bounds memory at
/// O(grid size × capacity) at the cost of losing the ability to backtrack
/// arbitrarily far.
#[derive(Debug, Default)]
pub struct BacktrackManager {
    stack: VecDeque<BacktrackState>,
    capacity: usize,
    evicted: usize,
}

impl BacktrackManager {
    /// Create a manager holding at most `capacity` snapshots
    ///
    /// A capacity of zero disables snapshotting entirely.
    pub const fn new(capacity: usize) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            evicted: 0,
        }
    }

    /// Deep-copy the grid and collapse history onto the stack
    pub fn save_state(&mut self, grid: &Grid, collapsed_positions: &[[usize; 3]], step: usize) {
        if self.capacity == 0 {
            return;
        }
        if self.stack.len() >= self.capacity {
            self.stack.pop_front();
            self.evicted += 1;
        }
        self.stack.push_back(BacktrackState {
            grid: grid.clone(),
            collapsed_positions: collapsed_positions.to_vec(),
            step,
        });
    }

    /// Pop and return the most recent snapshot
    ///
    /// Returns `None` when the stack is empty (search space exhausted as far
    /// as the bounded history can reach).
    pub fn restore_state(&mut self) -> Option<BacktrackState> {
        self.stack.pop_back()
    }

    /// Whether at least one snapshot is available
    pub fn can_backtrack(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Configured snapshot bound
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of snapshots evicted because the stack was full
    pub const fn evicted(&self) -> usize {
        self.evicted
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
