// ===== timeforge/src/search/mod.rs =====
pub mod abc;
pub mod evolutionary;
pub mod mutation;
pub mod population;

pub use self::abc::AbcSearch;
pub use self::evolutionary::EvolutionarySearch;
pub use self::mutation::Mutator;
pub use self::population::Population;

use crate::config::Config;
use crate::timetable::Timetable;

pub struct SearchOptions {
    pub population_size: usize,
    pub iterations: usize,
    pub mutation_rate: f64,
    pub seed_rate: f64,
    pub abandonment_limit: u32,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            population_size: cfg.search.population_size,
            iterations: cfg.search.iterations,
            mutation_rate: cfg.search.mutation_rate,
            seed_rate: cfg.search.seed_rate,
            abandonment_limit: cfg.search.abandonment_limit,
        }
    }
}

pub struct SearchOutcome {
    pub best: Timetable,
    pub best_score: f64,
    /// Best score so far, entry 0 for the seeded population and one
    /// entry per completed iteration after it. Monotonically
    /// non-decreasing.
    pub history: Vec<f64>,
    pub iterations: usize,
}

/// Receives updates once per generation/iteration. Returning false
/// aborts the run; the best found so far is still reported.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, iteration: usize, best_score: f64, clashes: Option<u64>) -> bool;
}

/// No-op callback for library callers and tests.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_progress(&self, _iteration: usize, _best_score: f64, _clashes: Option<u64>) -> bool {
        true
    }
}

/// The strategy seam: both loops share the evaluator and the mutator
/// and differ only in how a generation is produced.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn run(
        &self,
        original: &Timetable,
        seed: Option<u64>,
        callback: &dyn ProgressCallback,
    ) -> SearchOutcome;
}

fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}
