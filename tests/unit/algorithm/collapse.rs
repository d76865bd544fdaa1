//! Tests for the weighted seeded collapse operator

#[cfg(test)]
mod tests {
    use wavegrid::algorithm::collapse::collapse_cell;
    use wavegrid::math::random::LcgRandom;
    use wavegrid::model::tiles::{Tile, TileSet};
    use wavegrid::spatial::grid::Grid;

    fn grid_with_weights(weights: &[f64]) -> Grid {
        let tiles = weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| Tile::weighted(format!("t{index}"), weight))
            .collect();
        let tile_set = TileSet::new(tiles).unwrap();
        Grid::new(1, 1, 1, &tile_set, false).unwrap()
    }

    #[test]
    fn test_collapse_fixes_cell_state() {
        let mut grid = grid_with_weights(&[1.0, 1.0, 1.0]);
        let mut rng = LcgRandom::new(42);

        let chosen = collapse_cell(&mut grid, [0, 0, 0], &mut rng).unwrap();
        let cell = grid.cell([0, 0, 0]).unwrap();

        assert!(cell.collapsed);
        assert_eq!(cell.domain.count(), 1);
        assert_eq!(cell.domain.sole_member(), Some(chosen));
        assert!(cell.entropy.abs() < f64::EPSILON);
        assert_eq!(cell.tile(), Some(chosen));
    }

    #[test]
    fn test_collapse_matches_cumulative_walk_of_lcg_draw() {
        let mut grid = grid_with_weights(&[1.0, 2.0, 1.0]);
        let mut rng = LcgRandom::new(7);

        // Replicate the documented draw by hand: first tile whose cumulative
        // weight reaches rng() * total
        let mut reference = LcgRandom::new(7);
        let target = reference.next_f64() * 4.0;
        let expected = if target <= 1.0 {
            0
        } else if target <= 3.0 {
            1
        } else {
            2
        };

        let chosen = collapse_cell(&mut grid, [0, 0, 0], &mut rng).unwrap();
        assert_eq!(chosen, expected);
    }

    #[test]
    fn test_same_seed_draws_same_tile() {
        let mut first_grid = grid_with_weights(&[0.3, 0.3, 0.4]);
        let mut second_grid = grid_with_weights(&[0.3, 0.3, 0.4]);
        let mut first_rng = LcgRandom::new(1234);
        let mut second_rng = LcgRandom::new(1234);

        let first = collapse_cell(&mut first_grid, [0, 0, 0], &mut first_rng);
        let second = collapse_cell(&mut second_grid, [0, 0, 0], &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_collapse_refuses_collapsed_cell() {
        let mut grid = grid_with_weights(&[1.0, 1.0]);
        let mut rng = LcgRandom::new(42);

        assert!(collapse_cell(&mut grid, [0, 0, 0], &mut rng).is_some());
        assert!(collapse_cell(&mut grid, [0, 0, 0], &mut rng).is_none());
    }

    #[test]
    fn test_collapse_refuses_invalid_position() {
        let mut grid = grid_with_weights(&[1.0]);
        let mut rng = LcgRandom::new(42);
        assert!(collapse_cell(&mut grid, [5, 5, 5], &mut rng).is_none());
    }

    #[test]
    fn test_heavy_weight_dominates_draws() {
        // With one tile carrying almost all weight, every draw from a spread
        // of seeds should land on it
        for seed in 0..20 {
            let mut grid = grid_with_weights(&[0.000_001, 1000.0]);
            let mut rng = LcgRandom::new(seed);
            let chosen = collapse_cell(&mut grid, [0, 0, 0], &mut rng).unwrap();
            assert_eq!(chosen, 1, "seed {seed} drew the negligible tile");
        }
    }
}
