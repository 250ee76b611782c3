// ===== timeforge/src/fitness.rs =====
use crate::config::PenaltyWeights;
use crate::timetable::{Day, TimeSlot, Timetable};
use serde::Serialize;
use std::collections::HashMap;

/// Score of a timetable with missing required fields.
pub const MIN_SCORE: f64 = 0.0;
/// Score of a timetable with zero penalties.
pub const MAX_SCORE: f64 = 1.0;

/// Per-category counts behind a score, for the audit report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub complete: bool,
    pub clashes: u32,
    pub early_starts: u32,
    pub late_starts: u32,
    pub long_gaps: u32,
    pub penalty_total: f64,
    pub score: f64,
}

/// Scores candidate timetables. Deterministic: the same timetable
/// always yields the same score.
pub struct Evaluator {
    weights: PenaltyWeights,
}

impl Evaluator {
    pub fn new(weights: PenaltyWeights) -> Self {
        Self { weights }
    }

    /// Fast path used by the search loops. Secondary categories are
    /// only counted when their weight is non-zero.
    pub fn score(&self, timetable: &Timetable) -> f64 {
        if !timetable.is_fully_assigned() {
            return MIN_SCORE;
        }

        let w = &self.weights;
        let mut penalty = w.weight_clash * f64::from(count_clashes(timetable));

        if w.weight_early > 0.0 || w.weight_late > 0.0 {
            let (early, late) = count_hour_bound_offences(timetable, w.early_hour, w.late_hour);
            penalty += w.weight_early * f64::from(early);
            penalty += w.weight_late * f64::from(late);
        }
        if w.weight_gap > 0.0 {
            penalty += w.weight_gap * f64::from(count_long_gaps(timetable, w.max_gap_hours));
        }

        1.0 / (1.0 + penalty)
    }

    /// Rich path used by the audit report: every category is counted
    /// regardless of its weight.
    pub fn breakdown(&self, timetable: &Timetable) -> ScoreBreakdown {
        if !timetable.is_fully_assigned() {
            return ScoreBreakdown {
                complete: false,
                clashes: 0,
                early_starts: 0,
                late_starts: 0,
                long_gaps: 0,
                penalty_total: 0.0,
                score: MIN_SCORE,
            };
        }

        let w = &self.weights;
        let clashes = count_clashes(timetable);
        let (early_starts, late_starts) =
            count_hour_bound_offences(timetable, w.early_hour, w.late_hour);
        let long_gaps = count_long_gaps(timetable, w.max_gap_hours);

        let penalty_total = w.weight_clash * f64::from(clashes)
            + w.weight_early * f64::from(early_starts)
            + w.weight_late * f64::from(late_starts)
            + w.weight_gap * f64::from(long_gaps);

        ScoreBreakdown {
            complete: true,
            clashes,
            early_starts,
            late_starts,
            long_gaps,
            penalty_total,
            score: 1.0 / (1.0 + penalty_total),
        }
    }
}

/// Group-count clash policy: a (student, day, slot) group of any size
/// above one is a single clash, not a pairwise count.
fn count_clashes(timetable: &Timetable) -> u32 {
    let mut groups: HashMap<(&str, Day, TimeSlot), u32> = HashMap::new();
    for session in timetable.iter() {
        if let (Some(day), Some(slot)) = (session.day, session.slot) {
            *groups.entry((session.student.as_str(), day, slot)).or_default() += 1;
        }
    }
    groups.values().filter(|&&n| n > 1).count() as u32
}

fn count_hour_bound_offences(timetable: &Timetable, early_hour: u8, late_hour: u8) -> (u32, u32) {
    let mut early = 0;
    let mut late = 0;
    for session in timetable.iter() {
        if let Some(slot) = session.slot {
            if slot.start_hour < early_hour {
                early += 1;
            }
            if slot.start_hour > late_hour {
                late += 1;
            }
        }
    }
    (early, late)
}

/// Gaps are measured per student per day: consecutive sessions sorted
/// by start hour, one offence per gap above the threshold.
fn count_long_gaps(timetable: &Timetable, max_gap_hours: u8) -> u32 {
    let mut by_student_day: HashMap<(&str, Day), Vec<TimeSlot>> = HashMap::new();
    for session in timetable.iter() {
        if let (Some(day), Some(slot)) = (session.day, session.slot) {
            by_student_day
                .entry((session.student.as_str(), day))
                .or_default()
                .push(slot);
        }
    }

    let mut offences = 0;
    for slots in by_student_day.values_mut() {
        slots.sort();
        for pair in slots.windows(2) {
            let gap = i16::from(pair[1].start_hour) - i16::from(pair[0].end_hour);
            if gap > i16::from(max_gap_hours) {
                offences += 1;
            }
        }
    }
    offences
}
