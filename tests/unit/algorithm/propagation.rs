//! Tests for worklist propagation and contradiction detection

#[cfg(test)]
mod tests {
    use wavegrid::algorithm::index::ConstraintIndex;
    use wavegrid::algorithm::propagation::{PropagationOutcome, propagate};
    use wavegrid::model::constraints::Constraint;
    use wavegrid::model::tiles::{Tile, TileSet};
    use wavegrid::spatial::direction::Direction;
    use wavegrid::spatial::grid::Grid;

    fn tile_set(ids: &[&str]) -> TileSet {
        TileSet::new(ids.iter().map(|&id| Tile::new(id)).collect()).unwrap()
    }

    #[test]
    fn test_neighbor_domain_shrinks_after_collapse() {
        let tiles = tile_set(&["a", "b"]);
        let constraints = vec![Constraint::new("a", "b", Direction::East)];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(3, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        assert!(outcome.is_consistent());

        let neighbor = grid.cell([1, 0, 0]).unwrap();
        assert_eq!(neighbor.domain.to_vec(), vec![1]);
        assert!(!neighbor.collapsed);
        assert!(neighbor.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn test_propagation_cascades_through_chain() {
        // a forces b east, b forces c east; collapsing the west end fixes
        // the whole row's domains
        let tiles = tile_set(&["a", "b", "c"]);
        let constraints = vec![
            Constraint::new("a", "b", Direction::East),
            Constraint::new("b", "c", Direction::East),
        ];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(3, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        assert!(outcome.is_consistent());

        assert_eq!(grid.cell([1, 0, 0]).unwrap().domain.to_vec(), vec![1]);
        assert_eq!(grid.cell([2, 0, 0]).unwrap().domain.to_vec(), vec![2]);
    }

    #[test]
    fn test_union_over_source_domain_filters_neighbor() {
        let tiles = tile_set(&["a", "b", "c", "d"]);
        let constraints = vec![
            Constraint::new("a", "c", Direction::East),
            Constraint::new("b", "d", Direction::East),
            Constraint::new("c", "c", Direction::East),
            Constraint::new("d", "d", Direction::East),
        ];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        // Source keeps {a, b}; the neighbor must keep the union {c, d}
        grid.shrink_domain(
            [0, 0, 0],
            wavegrid::algorithm::bitset::TileBitset::from_indices(&[0, 1], 4),
        );
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        assert!(outcome.is_consistent());
        assert_eq!(grid.cell([1, 0, 0]).unwrap().domain.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_empty_intersection_is_a_contradiction() {
        let tiles = tile_set(&["a", "b"]);
        // a licenses only a east of itself, but b licenses only b west of
        // itself, so the east neighbor of a collapsed a empties out
        let constraints = vec![
            Constraint::new("a", "a", Direction::East),
            Constraint::new("a", "b", Direction::West),
            Constraint::new("b", "b", Direction::East),
            Constraint::new("b", "a", Direction::West),
        ];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        match outcome {
            PropagationOutcome::Contradiction { position } => {
                assert_eq!(position, [0, 0, 0]);
            }
            PropagationOutcome::Consistent { .. } => {
                unreachable!("unsatisfiable pair must contradict")
            }
        }
    }

    #[test]
    fn test_no_domain_is_left_empty_after_contradiction() {
        let tiles = tile_set(&["a", "b"]);
        let constraints = vec![
            Constraint::new("a", "a", Direction::East),
            Constraint::new("a", "b", Direction::West),
            Constraint::new("b", "b", Direction::East),
            Constraint::new("b", "a", Direction::West),
        ];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(3, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        assert!(!outcome.is_consistent());

        for (_, cell) in grid.indexed_cells() {
            assert!(!cell.domain.is_empty());
        }
    }

    #[test]
    fn test_collapsed_neighbor_is_never_shrunk() {
        let tiles = tile_set(&["a", "b"]);
        let constraints = vec![Constraint::bidirectional("a", "b", Direction::East)];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([1, 0, 0], 1);
        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        assert!(outcome.is_consistent());

        let neighbor = grid.cell([1, 0, 0]).unwrap();
        assert!(neighbor.collapsed);
        assert_eq!(neighbor.domain.sole_member(), Some(1));
    }

    #[test]
    fn test_incompatible_collapsed_neighbor_is_a_contradiction() {
        let tiles = tile_set(&["a", "b"]);
        let constraints = vec![Constraint::new("a", "b", Direction::East)];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([1, 0, 0], 0);
        grid.collapse_to([0, 0, 0], 0);
        let outcome = propagate(&mut grid, &index, [0, 0, 0]);
        match outcome {
            PropagationOutcome::Contradiction { position } => {
                assert_eq!(position, [1, 0, 0]);
            }
            PropagationOutcome::Consistent { .. } => {
                unreachable!("fixed neighbor outside the allowed set must contradict")
            }
        }
    }

    #[test]
    fn test_domain_monotonicity_during_burst() {
        let tiles = tile_set(&["a", "b", "c"]);
        let constraints = vec![
            Constraint::bidirectional("a", "b", Direction::East),
            Constraint::bidirectional("b", "c", Direction::North),
        ];
        let index = ConstraintIndex::build(&tiles, &constraints).unwrap();
        let mut grid = Grid::new(4, 4, 1, &tiles, false).unwrap();

        let before: Vec<usize> = grid
            .indexed_cells()
            .map(|(_, cell)| cell.domain.count())
            .collect();

        grid.collapse_to([1, 1, 0], 1);
        let outcome = propagate(&mut grid, &index, [1, 1, 0]);
        assert!(outcome.is_consistent());

        let after: Vec<usize> = grid
            .indexed_cells()
            .map(|(_, cell)| cell.domain.count())
            .collect();
        for (count_before, count_after) in before.iter().zip(&after) {
            assert!(count_after <= count_before);
        }
    }

    #[test]
    fn test_unconstrained_tiles_do_not_shrink_anything() {
        let tiles = tile_set(&["a", "b"]);
        let index = ConstraintIndex::build(&tiles, &[]).unwrap();
        let mut grid = Grid::new(3, 3, 1, &tiles, false).unwrap();

        grid.collapse_to([1, 1, 0], 0);
        let outcome = propagate(&mut grid, &index, [1, 1, 0]);
        match outcome {
            PropagationOutcome::Consistent { cells_updated } => {
                assert_eq!(cells_updated, 0);
            }
            PropagationOutcome::Contradiction { .. } => {
                unreachable!("no constraints, no contradictions")
            }
        }
    }
}
