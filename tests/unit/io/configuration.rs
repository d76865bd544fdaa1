//! Tests for configuration defaults and safety limits

#[cfg(test)]
mod tests {
    use wavegrid::io::configuration::{
        BACKTRACK_ESCALATION_THRESHOLD, CELL_PIXEL_SIZE, DEFAULT_BACKTRACK_DEPTH, DEFAULT_DEPTH,
        DEFAULT_DIMENSION, DEFAULT_MAX_BACKTRACKING_ATTEMPTS, DEFAULT_MAX_ITERATIONS,
        DEFAULT_OUTPUT, MAX_GRID_DIMENSION,
    };

    #[test]
    fn test_budgets_are_positive() {
        assert!(DEFAULT_MAX_ITERATIONS > 0);
        assert!(DEFAULT_MAX_BACKTRACKING_ATTEMPTS > 0);
        assert!(DEFAULT_BACKTRACK_DEPTH > 0);
        assert!(BACKTRACK_ESCALATION_THRESHOLD >= 1);
    }

    #[test]
    fn test_default_dimensions_fit_the_safety_limit() {
        assert!(DEFAULT_DIMENSION >= 1);
        assert_eq!(DEFAULT_DEPTH, 1);
        assert!(DEFAULT_DIMENSION <= MAX_GRID_DIMENSION);
    }

    #[test]
    fn test_default_iterations_cover_a_default_grid() {
        // The budget must at least allow one collapse per cell
        assert!(DEFAULT_MAX_ITERATIONS >= DEFAULT_DIMENSION * DEFAULT_DIMENSION * DEFAULT_DEPTH);
    }

    #[test]
    fn test_export_settings() {
        assert!(CELL_PIXEL_SIZE >= 1);
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
    }
}
