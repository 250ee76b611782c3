use crate::fitness::{Evaluator, MAX_SCORE};
use crate::report::clash_count;
use crate::search::mutation::Mutator;
use crate::search::population::Population;
use crate::search::{make_rng, ProgressCallback, SearchOptions, SearchOutcome, SearchStrategy};
use crate::timetable::Timetable;
use std::sync::Arc;
use tracing::debug;

/// Elitist evolutionary loop: evaluate, keep the top half, refill by
/// mutating random survivors.
pub struct EvolutionarySearch {
    evaluator: Arc<Evaluator>,
    mutator: Mutator,
    options: SearchOptions,
}

impl EvolutionarySearch {
    pub fn new(evaluator: Arc<Evaluator>, mutator: Mutator, options: SearchOptions) -> Self {
        Self {
            evaluator,
            mutator,
            options,
        }
    }
}

impl SearchStrategy for EvolutionarySearch {
    fn name(&self) -> &'static str {
        "evolutionary"
    }

    fn run(
        &self,
        original: &Timetable,
        seed: Option<u64>,
        callback: &dyn ProgressCallback,
    ) -> SearchOutcome {
        let opts = &self.options;
        let mut rng = make_rng(seed);

        let mut population = Population::seed(
            original,
            opts.population_size.max(1),
            opts.seed_rate,
            &self.mutator,
            &mut rng,
        );
        let mut scores = population.evaluate(&self.evaluator);

        // The seeded population is evaluated before the loop, so zero
        // generations still reports its best member.
        let mut best_score = f64::MIN;
        let mut best = original.clone();
        for (i, &s) in scores.iter().enumerate() {
            if s > best_score {
                best_score = s;
                best = population.members[i].clone();
            }
        }

        let mut history = vec![best_score];
        let mut completed = 0;

        for generation in 0..opts.iterations {
            if best_score >= MAX_SCORE {
                debug!(generation, "conflict-free timetable reached, stopping early");
                break;
            }
            if !callback.on_progress(generation, best_score, clash_count(best_score)) {
                debug!(generation, "search aborted by caller");
                break;
            }

            population.select_elite(&mut scores);
            population.refill(
                opts.population_size.max(1),
                opts.mutation_rate,
                &self.mutator,
                &mut rng,
            );
            scores = population.evaluate(&self.evaluator);

            for (i, &s) in scores.iter().enumerate() {
                if s > best_score {
                    best_score = s;
                    best = population.members[i].clone();
                }
            }

            history.push(best_score);
            completed = generation + 1;
        }

        SearchOutcome {
            best,
            best_score,
            history,
            iterations: completed,
        }
    }
}
