// ===== timeforge/src/search/abc.rs =====
use crate::fitness::{Evaluator, MAX_SCORE};
use crate::report::clash_count;
use crate::search::mutation::Mutator;
use crate::search::{make_rng, ProgressCallback, SearchOptions, SearchOutcome, SearchStrategy};
use crate::timetable::Timetable;
use fastrand::Rng;
use std::sync::Arc;
use tracing::debug;

struct FoodSource {
    timetable: Timetable,
    score: f64,
    trials: u32,
}

/// Artificial-bee-colony loop: employed and onlooker bees refine the
/// food sources, scouts replace the stagnant ones.
pub struct AbcSearch {
    evaluator: Arc<Evaluator>,
    mutator: Mutator,
    options: SearchOptions,
}

impl AbcSearch {
    pub fn new(evaluator: Arc<Evaluator>, mutator: Mutator, options: SearchOptions) -> Self {
        Self {
            evaluator,
            mutator,
            options,
        }
    }

    fn fresh_source(&self, original: &Timetable, rng: &mut Rng) -> FoodSource {
        let timetable = self.mutator.mutate(original, self.options.seed_rate, rng);
        let score = self.evaluator.score(&timetable);
        FoodSource {
            timetable,
            score,
            trials: 0,
        }
    }

    /// One neighbor attempt. Only a strictly better neighbor replaces
    /// the source; plateaus count as failures so trial counters can
    /// still trigger abandonment.
    fn try_improve(&self, source: &mut FoodSource, rng: &mut Rng) {
        let neighbor = self
            .mutator
            .mutate(&source.timetable, self.options.mutation_rate, rng);
        let score = self.evaluator.score(&neighbor);
        if score > source.score {
            source.timetable = neighbor;
            source.score = score;
            source.trials = 0;
        } else {
            source.trials += 1;
        }
    }

    /// Sources past the abandonment limit are reseeded from the
    /// original timetable, not from the stale source.
    fn scout_phase(&self, sources: &mut [FoodSource], original: &Timetable, rng: &mut Rng) {
        for source in sources.iter_mut() {
            if source.trials > self.options.abandonment_limit {
                debug!(trials = source.trials, "scout replacing stagnant source");
                *source = self.fresh_source(original, rng);
            }
        }
    }
}

impl SearchStrategy for AbcSearch {
    fn name(&self) -> &'static str {
        "bee-colony"
    }

    fn run(
        &self,
        original: &Timetable,
        seed: Option<u64>,
        callback: &dyn ProgressCallback,
    ) -> SearchOutcome {
        let opts = &self.options;
        let mut rng = make_rng(seed);

        let mut sources: Vec<FoodSource> = (0..opts.population_size.max(1))
            .map(|_| self.fresh_source(original, &mut rng))
            .collect();

        let mut best_score = f64::MIN;
        let mut best = original.clone();
        for source in &sources {
            if source.score > best_score {
                best_score = source.score;
                best = source.timetable.clone();
            }
        }

        let mut history = vec![best_score];
        let mut completed = 0;

        for iteration in 0..opts.iterations {
            if best_score >= MAX_SCORE {
                debug!(iteration, "conflict-free timetable reached, stopping early");
                break;
            }
            if !callback.on_progress(iteration, best_score, clash_count(best_score)) {
                debug!(iteration, "search aborted by caller");
                break;
            }

            // Employed phase: one neighbor per source.
            for source in sources.iter_mut() {
                self.try_improve(source, &mut rng);
            }

            // Onlooker phase: shares are one snapshot of the
            // post-employed population.
            let total: f64 = sources.iter().map(|s| s.score).sum();
            if total > 0.0 {
                let shares: Vec<f64> = sources.iter().map(|s| s.score / total).collect();
                for (i, &share) in shares.iter().enumerate() {
                    if rng.f64() < share {
                        self.try_improve(&mut sources[i], &mut rng);
                    }
                }
            }

            // Harvest before the scouts so an improvement cannot be
            // lost to a same-iteration replacement.
            for source in &sources {
                if source.score > best_score {
                    best_score = source.score;
                    best = source.timetable.clone();
                }
            }

            self.scout_phase(&mut sources, original, &mut rng);

            history.push(best_score);
            completed = iteration + 1;
        }

        SearchOutcome {
            best,
            best_score,
            history,
            iterations: completed,
        }
    }
}
