// ===== timeforge/src/search/mutation.rs =====
use crate::timetable::{Day, TimeSlot, Timetable};
use fastrand::Rng;

/// The sole genetic operator: per-session uniform reassignment over the
/// configured day and slot sets. There is no crossover.
pub struct Mutator {
    days: Vec<Day>,
    slots: Vec<TimeSlot>,
}

impl Mutator {
    /// Both sets must be non-empty; `Config::validate` guarantees this
    /// for CLI-built mutators.
    pub fn new(days: Vec<Day>, slots: Vec<TimeSlot>) -> Self {
        debug_assert!(!days.is_empty() && !slots.is_empty());
        Self { days, slots }
    }

    /// Returns a new timetable where each session is independently
    /// reassigned with probability `rate`. The parent is never touched,
    /// and the (student, course) identities carry over unchanged.
    pub fn mutate(&self, parent: &Timetable, rate: f64, rng: &mut Rng) -> Timetable {
        let mut child = parent.clone();
        for session in &mut child.sessions {
            if rng.f64() < rate {
                session.day = Some(self.days[rng.usize(0..self.days.len())]);
                session.slot = Some(self.slots[rng.usize(0..self.slots.len())]);
            }
        }
        child
    }
}
