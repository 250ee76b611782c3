use crate::fitness::Evaluator;
use crate::search::mutation::Mutator;
use crate::timetable::Timetable;
use fastrand::Rng;
use rayon::prelude::*;

/// Fixed-size pool of candidate timetables.
pub struct Population {
    pub members: Vec<Timetable>,
}

impl Population {
    /// Builds `size` candidates by mutating the original at a high
    /// rate, seeding the diversity the search needs.
    pub fn seed(
        original: &Timetable,
        size: usize,
        seed_rate: f64,
        mutator: &Mutator,
        rng: &mut Rng,
    ) -> Self {
        let members = (0..size)
            .map(|_| mutator.mutate(original, seed_rate, rng))
            .collect();
        Self { members }
    }

    /// Scores every member. Members are independent, so this is a pure
    /// parallel map.
    pub fn evaluate(&self, evaluator: &Evaluator) -> Vec<f64> {
        self.members
            .par_iter()
            .map(|member| evaluator.score(member))
            .collect()
    }

    /// Deterministic truncation elitism: reorders members descending by
    /// score and keeps the top half (never fewer than one). `scores` is
    /// reordered and truncated alongside.
    pub fn select_elite(&mut self, scores: &mut Vec<f64>) {
        let mut order: Vec<usize> = (0..self.members.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let keep = (self.members.len() / 2).max(1);
        let survivors: Vec<Timetable> = order[..keep]
            .iter()
            .map(|&i| self.members[i].clone())
            .collect();
        *scores = order[..keep].iter().map(|&i| scores[i]).collect();
        self.members = survivors;
    }

    /// Refills the pool to `target` by mutating uniformly random
    /// survivors at the given rate.
    pub fn refill(&mut self, target: usize, rate: f64, mutator: &Mutator, rng: &mut Rng) {
        let survivors = self.members.len();
        while self.members.len() < target {
            let parent = &self.members[rng.usize(0..survivors)];
            let child = mutator.mutate(parent, rate, rng);
            self.members.push(child);
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
