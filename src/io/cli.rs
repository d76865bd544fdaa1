//! Command-line interface for single generation runs
//!
//! The binary ships a built-in terrain tile set so the engine can be
//! exercised end to end without any input files: pick dimensions and a
//! seed, watch the run, and inspect the exported PNG.

use crate::algorithm::executor::{GenerationResult, Generator, GeneratorConfig, StepStatus};
use crate::algorithm::selection::{MinimumEntropy, SelectionStrategy, SmallestDomain};
use crate::io::configuration::{
    DEFAULT_BACKTRACK_DEPTH, DEFAULT_DEPTH, DEFAULT_DIMENSION, DEFAULT_MAX_BACKTRACKING_ATTEMPTS,
    DEFAULT_MAX_ITERATIONS, DEFAULT_OUTPUT,
};
use crate::io::error::Result;
use crate::io::image::{TilePalette, export_grid_as_png};
use crate::io::progress::GenerationProgress;
use crate::model::constraints::Constraint;
use crate::model::tiles::Tile;
use crate::spatial::direction::Direction;
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Selection strategy choices exposed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Minimum weighted entropy (default)
    Entropy,
    /// Smallest remaining domain
    Domain,
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "entropy",
            Self::Domain => "domain",
        };
        write!(f, "{name}")
    }
}

#[derive(Parser)]
#[command(name = "wavegrid")]
#[command(
    author,
    version,
    about = "Generate constraint-consistent tile grids via wave function collapse"
)]
/// Command-line arguments for the generation tool
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_DIMENSION)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_DIMENSION)]
    pub height: usize,

    /// Grid depth in layers (1 for 2D)
    #[arg(short = 'd', long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Random seed for reproducible generation; drawn fresh when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum iterations before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Maximum backtracking attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_BACKTRACKING_ATTEMPTS)]
    pub backtracks: usize,

    /// Bound on stored backtracking snapshots
    #[arg(long, default_value_t = DEFAULT_BACKTRACK_DEPTH)]
    pub snapshot_depth: usize,

    /// Wrap neighbor lookup at the grid edges
    #[arg(short, long)]
    pub periodic: bool,

    /// Cell selection strategy
    #[arg(long, value_enum, default_value_t = StrategyChoice::Entropy)]
    pub strategy: StrategyChoice,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one generation run from CLI arguments to an exported image
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run: generate, report, export
    ///
    /// # Errors
    ///
    /// Returns an error if input validation or image export fails.
    pub fn run(&self) -> Result<()> {
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let (tiles, constraints, palette) = terrain_tile_set();

        let config = GeneratorConfig {
            width: self.cli.width,
            height: self.cli.height,
            depth: self.cli.depth,
            seed,
            max_iterations: self.cli.iterations,
            max_backtracking_attempts: self.cli.backtracks,
            backtrack_depth: self.cli.snapshot_depth,
            periodic: self.cli.periodic,
        };

        let strategy: Box<dyn SelectionStrategy> = match self.cli.strategy {
            StrategyChoice::Entropy => Box::new(MinimumEntropy),
            StrategyChoice::Domain => Box::new(SmallestDomain),
        };

        let mut generator = Generator::with_strategy(tiles, &constraints, &config, strategy)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| GenerationProgress::new(generator.grid().total_cells()));

        loop {
            let status = generator.step();
            if let Some(ref bar) = progress {
                bar.update(
                    generator.grid().collapsed_count(),
                    generator.iterations(),
                    generator.backtracking_attempts(),
                );
            }
            if status != StepStatus::InProgress {
                break;
            }
        }

        let result = generator.result();
        if let Some(ref bar) = progress {
            bar.finish(result.success, &result.message);
        }

        export_grid_as_png(&result.grid, &palette, &self.cli.output)?;
        self.print_summary(&result, seed);

        Ok(())
    }

    // Allow print for the user-facing run summary
    #[allow(clippy::print_stdout)]
    fn print_summary(&self, result: &GenerationResult, seed: u64) {
        if self.cli.quiet {
            return;
        }
        println!(
            "{} | seed {seed} | {}/{} cells | {} iterations | {} backtracks | {} contradictions | wrote {}",
            if result.success { "success" } else { "failed" },
            result.stats.collapsed_cells,
            result.stats.total_cells,
            result.stats.iterations,
            result.stats.backtracking_attempts,
            result.stats.contradictions,
            self.cli.output.display()
        );
    }
}

/// Built-in terrain tile set with lateral compatibility bands
///
/// Terrain types form a gradient (deep water through rock); each type
/// neighbors itself and its band neighbors in all four lateral directions.
/// Vertical stacking is left unconstrained for multi-layer runs.
pub fn terrain_tile_set() -> (Vec<Tile>, Vec<Constraint>, TilePalette) {
    let tiles = vec![
        Tile::weighted("deep_water", 0.8),
        Tile::weighted("water", 1.0),
        Tile::weighted("sand", 0.6),
        Tile::weighted("grass", 1.2),
        Tile::weighted("forest", 0.9),
        Tile::weighted("rock", 0.4),
    ];

    let compatible_pairs = [
        ("deep_water", "deep_water"),
        ("deep_water", "water"),
        ("water", "water"),
        ("water", "sand"),
        ("sand", "sand"),
        ("sand", "grass"),
        ("grass", "grass"),
        ("grass", "forest"),
        ("forest", "forest"),
        ("forest", "rock"),
        ("rock", "rock"),
    ];

    let lateral = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    let mut constraints = Vec::with_capacity(compatible_pairs.len() * lateral.len());
    for (tile_a, tile_b) in compatible_pairs {
        for direction in lateral {
            constraints.push(Constraint::bidirectional(tile_a, tile_b, direction));
        }
    }

    let palette = TilePalette::new(HashMap::from([
        ("deep_water".to_string(), [18, 59, 115, 255]),
        ("water".to_string(), [46, 110, 180, 255]),
        ("sand".to_string(), [222, 202, 134, 255]),
        ("grass".to_string(), [104, 169, 73, 255]),
        ("forest".to_string(), [52, 105, 46, 255]),
        ("rock".to_string(), [128, 126, 120, 255]),
    ]));

    (tiles, constraints, palette)
}
