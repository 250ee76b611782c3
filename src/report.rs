use crate::search::SearchOutcome;
use crate::timetable::Timetable;
use serde::Serialize;

/// Derives the human-facing clash count from a score. A score of zero
/// has no defined count, so the division is guarded.
pub fn clash_count(score: f64) -> Option<u64> {
    if score > 0.0 {
        Some((1.0 / score - 1.0).round() as u64)
    } else {
        None
    }
}

/// Final result surfaced to collaborators: the best timetable, its
/// score, the derived clash count, and the per-iteration history.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub strategy: String,
    pub best: Timetable,
    pub score: f64,
    pub clashes: Option<u64>,
    pub history: Vec<f64>,
    pub iterations: usize,
}

impl SearchReport {
    pub fn new(strategy: &str, outcome: SearchOutcome) -> Self {
        Self {
            strategy: strategy.to_string(),
            clashes: clash_count(outcome.best_score),
            best: outcome.best,
            score: outcome.best_score,
            history: outcome.history,
            iterations: outcome.iterations,
        }
    }
}
