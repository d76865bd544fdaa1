//! Tests for generation progress reporting

#[cfg(test)]
mod tests {
    use wavegrid::io::progress::GenerationProgress;

    #[test]
    fn test_lifecycle_without_terminal() {
        // Bars render to nothing when no terminal is attached; the calls
        // must still be safe in that environment
        let progress = GenerationProgress::new(100);
        progress.update(0, 1, 0);
        progress.update(50, 75, 2);
        progress.update(25, 80, 3);
        progress.finish(true, "generation completed after 80 iterations");
    }

    #[test]
    fn test_failed_finish() {
        let progress = GenerationProgress::new(9);
        progress.update(3, 10, 5);
        progress.finish(false, "backtracking budget of 5 exhausted");
    }
}
