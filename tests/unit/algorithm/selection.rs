//! Tests for cell selection strategies

#[cfg(test)]
mod tests {
    use wavegrid::algorithm::bitset::TileBitset;
    use wavegrid::algorithm::selection::{MinimumEntropy, SelectionStrategy, SmallestDomain};
    use wavegrid::model::tiles::{Tile, TileSet};
    use wavegrid::spatial::grid::Grid;

    fn tile_set(count: usize) -> TileSet {
        let tiles = (0..count).map(|index| Tile::new(format!("t{index}"))).collect();
        TileSet::new(tiles).unwrap()
    }

    #[test]
    fn test_minimum_entropy_prefers_reduced_domain() {
        let tiles = tile_set(3);
        let mut grid = Grid::new(3, 3, 1, &tiles, false).unwrap();

        // One cell narrowed to two tiles has lower entropy than full cells
        grid.shrink_domain([2, 1, 0], TileBitset::from_indices(&[0, 1], 3));

        let selected = MinimumEntropy.select_cell(&grid).unwrap();
        assert_eq!(selected, [2, 1, 0]);
    }

    #[test]
    fn test_tie_break_is_first_in_scan_order() {
        let tiles = tile_set(2);
        let grid = Grid::new(2, 2, 1, &tiles, false).unwrap();

        // All cells share the initial entropy; the scan starts at the origin
        let selected = MinimumEntropy.select_cell(&grid).unwrap();
        assert_eq!(selected, [0, 0, 0]);
    }

    #[test]
    fn test_collapsed_cells_are_skipped() {
        let tiles = tile_set(2);
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        let selected = MinimumEntropy.select_cell(&grid).unwrap();
        assert_eq!(selected, [1, 0, 0]);
    }

    #[test]
    fn test_returns_none_when_fully_collapsed() {
        let tiles = tile_set(2);
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        grid.collapse_to([0, 0, 0], 0);
        grid.collapse_to([1, 0, 0], 1);
        assert!(MinimumEntropy.select_cell(&grid).is_none());
        assert!(SmallestDomain.select_cell(&grid).is_none());
    }

    #[test]
    fn test_smallest_domain_ignores_weights() {
        // Three equal-weight members beat two wildly skewed ones on entropy,
        // but not on domain size
        let tiles = TileSet::new(vec![
            Tile::weighted("common", 1000.0),
            Tile::weighted("rare", 0.001),
            Tile::weighted("mid_a", 1.0),
            Tile::weighted("mid_b", 1.0),
            Tile::weighted("mid_c", 1.0),
        ])
        .unwrap();
        let mut grid = Grid::new(2, 1, 1, &tiles, false).unwrap();

        // Skewed pair: near-zero entropy, domain size 2
        grid.shrink_domain([0, 0, 0], TileBitset::from_indices(&[0, 1], 5));
        // Uniform triple: higher entropy, domain size 3
        grid.shrink_domain([1, 0, 0], TileBitset::from_indices(&[2, 3, 4], 5));

        assert_eq!(MinimumEntropy.select_cell(&grid).unwrap(), [0, 0, 0]);
        assert_eq!(SmallestDomain.select_cell(&grid).unwrap(), [0, 0, 0]);

        // Narrow the triple to a pair and the strategies diverge: entropy
        // still prefers the skewed pair, domain size now ties and keeps
        // scan order
        grid.shrink_domain([1, 0, 0], TileBitset::from_indices(&[2, 3], 5));
        assert_eq!(MinimumEntropy.select_cell(&grid).unwrap(), [0, 0, 0]);
        assert_eq!(SmallestDomain.select_cell(&grid).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_strategies_are_injectable_through_the_trait() {
        let tiles = tile_set(2);
        let grid = Grid::new(2, 2, 1, &tiles, false).unwrap();

        let strategies: Vec<Box<dyn SelectionStrategy>> =
            vec![Box::new(MinimumEntropy), Box::new(SmallestDomain)];
        for strategy in &strategies {
            assert!(strategy.select_cell(&grid).is_some());
        }
    }
}
