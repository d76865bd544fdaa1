use crate::{
    algorithm::backtrack::BacktrackManager,
    algorithm::collapse::collapse_cell,
    algorithm::index::ConstraintIndex,
    algorithm::propagation::{PropagationOutcome, propagate},
    algorithm::selection::{MinimumEntropy, SelectionStrategy},
    io::configuration::{
        BACKTRACK_ESCALATION_THRESHOLD, DEFAULT_BACKTRACK_DEPTH, DEFAULT_DEPTH, DEFAULT_DIMENSION,
        DEFAULT_MAX_BACKTRACKING_ATTEMPTS, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED,
    },
    math::random::LcgRandom,
    model::constraints::Constraint,
    model::tiles::{Tile, TileSet},
    spatial::grid::Grid,
};
use ndarray::Array3;

/// Run parameters controlling dimensions, budgets, and reproducibility
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Grid width (x extent)
    pub width: usize,
    /// Grid height (y extent)
    pub height: usize,
    /// Grid depth (z extent, 1 for 2D runs)
    pub depth: usize,
    /// Seed for the deterministic collapse draw sequence
    pub seed: u64,
    /// Maximum orchestrator iterations before the run fails
    pub max_iterations: usize,
    /// Maximum backtracking restore attempts before the run fails
    pub max_backtracking_attempts: usize,
    /// Bound on stored grid snapshots (oldest evicted beyond this)
    pub backtrack_depth: usize,
    /// Whether neighbor lookup wraps at the grid edges
    pub periodic: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            depth: DEFAULT_DEPTH,
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_backtracking_attempts: DEFAULT_MAX_BACKTRACKING_ATTEMPTS,
            backtrack_depth: DEFAULT_BACKTRACK_DEPTH,
            periodic: false,
        }
    }
}

/// Progress of one orchestrator step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// The run continues; call `step` again
    InProgress,
    /// Every cell collapsed; the run succeeded
    Completed,
    /// Budgets or the search space were exhausted; the run failed
    Failed,
}

/// Counters describing how far a run progressed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStats {
    /// Number of collapsed cells at termination
    pub collapsed_cells: usize,
    /// Total number of grid cells
    pub total_cells: usize,
    /// Orchestrator iterations consumed
    pub iterations: usize,
    /// Backtracking restores performed
    pub backtracking_attempts: usize,
    /// Contradictions encountered during propagation
    pub contradictions: usize,
    /// Sum of remaining cell entropy (0 on success)
    pub final_entropy: f64,
}

/// Final outcome of a generation run
///
/// The grid holds one tile id per collapsed cell; `None` marks a cell left
/// uncollapsed at termination, which only happens on failure.
#[derive(Clone, Debug)]
pub struct GenerationResult {
    /// Tile id per cell, indexed `[x, y, z]`
    pub grid: Array3<Option<String>>,
    /// Whether every cell collapsed
    pub success: bool,
    /// Progress counters
    pub stats: GenerationStats,
    /// Human-readable termination summary
    pub message: String,
}

impl GenerationResult {
    /// Tile id at a position, `None` for uncollapsed or out-of-range cells
    pub fn tile_at(&self, position: [usize; 3]) -> Option<&str> {
        self.grid.get(position).and_then(|tile| tile.as_deref())
    }
}

/// Terminal condition reached by the state machine
#[derive(Clone, Debug)]
struct Termination {
    success: bool,
    message: String,
}

/// Orchestrator tying selection, collapse, propagation, and backtracking
/// into the generation state machine
///
/// Each instance owns every piece of per-run state (grid, RNG, snapshot
/// stack), so independent runs cannot interfere. The machine moves
/// Selecting → Collapsing → Propagating and back, detours through
/// Backtracking on contradictions, and terminates in Completed or Failed.
#[derive(Debug)]
pub struct Generator {
    tile_set: TileSet,
    constraint_index: ConstraintIndex,
    grid: Grid,
    rng: LcgRandom,
    strategy: Box<dyn SelectionStrategy>,
    backtrack: BacktrackManager,
    collapse_history: Vec<[usize; 3]>,
    step: usize,
    iterations: usize,
    backtracking_attempts: usize,
    contradictions: usize,
    consecutive_contradictions: usize,
    max_iterations: usize,
    max_backtracking_attempts: usize,
    termination: Option<Termination>,
}

impl Generator {
    /// Create a generator with the default minimum-entropy strategy
    ///
    /// Validation happens here, before any generation work: tile weights and
    /// id uniqueness, constraint tile references, and grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile list is empty, has duplicate ids, or non-positive weights
    /// - Any constraint references an unknown tile id
    /// - Any grid dimension is zero or exceeds the safety limit
    pub fn new(
        tiles: Vec<Tile>,
        constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> crate::io::error::Result<Self> {
        Self::with_strategy(tiles, constraints, config, Box::new(MinimumEntropy))
    }

    /// Create a generator with a custom selection strategy
    ///
    /// # Errors
    ///
    /// Same conditions as `new`.
    pub fn with_strategy(
        tiles: Vec<Tile>,
        constraints: &[Constraint],
        config: &GeneratorConfig,
        strategy: Box<dyn SelectionStrategy>,
    ) -> crate::io::error::Result<Self> {
        let tile_set = TileSet::new(tiles)?;
        let constraint_index = ConstraintIndex::build(&tile_set, constraints)?;
        let grid = Grid::new(
            config.width,
            config.height,
            config.depth,
            &tile_set,
            config.periodic,
        )?;

        Ok(Self {
            tile_set,
            constraint_index,
            grid,
            rng: LcgRandom::new(config.seed),
            strategy,
            backtrack: BacktrackManager::new(config.backtrack_depth),
            collapse_history: Vec::new(),
            step: 0,
            iterations: 0,
            backtracking_attempts: 0,
            contradictions: 0,
            consecutive_contradictions: 0,
            max_iterations: config.max_iterations,
            max_backtracking_attempts: config.max_backtracking_attempts,
            termination: None,
        })
    }

    /// Access the current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Access the built constraint index
    pub const fn constraint_index(&self) -> &ConstraintIndex {
        &self.constraint_index
    }

    /// Access the validated tile set
    pub const fn tile_set(&self) -> &TileSet {
        &self.tile_set
    }

    /// Orchestrator iterations consumed so far
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Backtracking restores performed so far
    pub const fn backtracking_attempts(&self) -> usize {
        self.backtracking_attempts
    }

    /// Contradictions encountered so far
    pub const fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// Whether the state machine reached Completed or Failed
    pub const fn is_terminal(&self) -> bool {
        self.termination.is_some()
    }

    /// Execute one orchestrator iteration
    ///
    /// One iteration performs Selecting, and on a hit Collapsing (snapshot
    /// first) plus Propagating; contradictions detour through Backtracking.
    /// Terminal states are sticky: further calls return the same status.
    pub fn step(&mut self) -> StepStatus {
        if let Some(termination) = &self.termination {
            return if termination.success {
                StepStatus::Completed
            } else {
                StepStatus::Failed
            };
        }

        if self.iterations >= self.max_iterations {
            return self.fail(format!(
                "iteration budget of {} exhausted with {} of {} cells collapsed",
                self.max_iterations,
                self.grid.collapsed_count(),
                self.grid.total_cells()
            ));
        }
        self.iterations += 1;

        let Some(position) = self.strategy.select_cell(&self.grid) else {
            if self.grid.is_fully_collapsed() {
                return self.complete();
            }
            return self.backtrack_or_fail("no selectable cell remains");
        };

        // Snapshot before the decision so restoring undoes its propagation too
        self.backtrack
            .save_state(&self.grid, &self.collapse_history, self.step);

        if collapse_cell(&mut self.grid, position, &mut self.rng).is_none() {
            // The selector only offers uncollapsed cells with non-empty
            // domains, so a refused draw is a contradiction equivalent
            self.contradictions += 1;
            self.consecutive_contradictions += 1;
            return self.backtrack_or_fail("selected cell had no drawable tile");
        }
        self.collapse_history.push(position);
        self.step += 1;

        match propagate(&mut self.grid, &self.constraint_index, position) {
            PropagationOutcome::Consistent { .. } => {
                self.consecutive_contradictions = 0;
                if self.grid.is_fully_collapsed() {
                    self.complete()
                } else {
                    StepStatus::InProgress
                }
            }
            PropagationOutcome::Contradiction { .. } => {
                self.contradictions += 1;
                self.consecutive_contradictions += 1;
                self.backtrack_or_fail("contradiction during propagation")
            }
        }
    }

    /// Run the state machine to termination and return the result
    pub fn run(&mut self) -> GenerationResult {
        while self.step() == StepStatus::InProgress {}
        self.result()
    }

    /// Build the result snapshot for the current state
    ///
    /// Valid at any point; before termination `success` is false and the
    /// message notes the run is still in progress.
    pub fn result(&self) -> GenerationResult {
        let grid = self
            .grid
            .tile_indices()
            .map(|tile| tile.and_then(|index| self.tile_set.id(index).map(String::from)));

        let stats = GenerationStats {
            collapsed_cells: self.grid.collapsed_count(),
            total_cells: self.grid.total_cells(),
            iterations: self.iterations,
            backtracking_attempts: self.backtracking_attempts,
            contradictions: self.contradictions,
            final_entropy: self.grid.total_entropy(),
        };

        let (success, message) = self.termination.as_ref().map_or_else(
            || (false, "generation still in progress".to_string()),
            |termination| (termination.success, termination.message.clone()),
        );

        GenerationResult {
            grid,
            success,
            stats,
            message,
        }
    }

    /// Restore the most recent snapshot or terminate the run
    ///
    /// Re-rolling the most recent decision cannot help when the fault lies
    /// deeper, so after several consecutive contradictions one extra
    /// snapshot is dropped and the run resumes a decision earlier.
    fn backtrack_or_fail(&mut self, context: &str) -> StepStatus {
        if self.backtracking_attempts >= self.max_backtracking_attempts {
            return self.fail(format!(
                "backtracking budget of {} exhausted ({context})",
                self.max_backtracking_attempts
            ));
        }

        match self.backtrack.restore_state() {
            Some(mut state) => {
                if self.consecutive_contradictions >= BACKTRACK_ESCALATION_THRESHOLD {
                    if let Some(deeper) = self.backtrack.restore_state() {
                        state = deeper;
                    }
                    self.consecutive_contradictions = 0;
                }
                self.backtracking_attempts += 1;
                self.grid = state.grid;
                self.collapse_history = state.collapsed_positions;
                self.step = state.step;
                StepStatus::InProgress
            }
            None => self.fail(format!("search space exhausted ({context})")),
        }
    }

    fn complete(&mut self) -> StepStatus {
        self.backtrack.clear();
        self.termination = Some(Termination {
            success: true,
            message: format!(
                "generation completed after {} iterations",
                self.iterations
            ),
        });
        StepStatus::Completed
    }

    fn fail(&mut self, message: String) -> StepStatus {
        self.backtrack.clear();
        self.termination = Some(Termination {
            success: false,
            message,
        });
        StepStatus::Failed
    }
}
