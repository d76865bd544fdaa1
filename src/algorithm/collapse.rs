use crate::math::random::LcgRandom;
use crate::spatial::grid::Grid;

/// Fix a cell to one tile by weighted random draw over its domain
///
/// Walks the cumulative weights of the domain members and returns the first
/// tile whose cumulative weight reaches `rng() * total`. On success the cell
/// holds the singleton domain, the collapsed flag, and zero entropy.
///
/// Returns `None` when the position is invalid, the cell is already
/// collapsed, or its domain is empty; the orchestrator never calls it in
/// those states.
pub fn collapse_cell(grid: &mut Grid, position: [usize; 3], rng: &mut LcgRandom) -> Option<usize> {
    let cell = grid.cell(position)?;
    if cell.collapsed || cell.domain.is_empty() {
        return None;
    }

    let members: Vec<usize> = cell.domain.to_vec();
    let chosen = weighted_draw(&members, grid, rng)?;
    grid.collapse_to(position, chosen);
    Some(chosen)
}

/// Cumulative-weight draw over a member list
fn weighted_draw(members: &[usize], grid: &Grid, rng: &mut LcgRandom) -> Option<usize> {
    let total: f64 = members.iter().map(|&tile| grid.weight(tile)).sum();
    if total <= 0.0 {
        return members.first().copied();
    }

    let target = rng.next_f64() * total;
    let mut cumulative = 0.0;
    for &tile in members {
        cumulative += grid.weight(tile);
        if cumulative >= target {
            return Some(tile);
        }
    }
    // Guards against accumulated floating-point shortfall on the last member
    members.last().copied()
}
