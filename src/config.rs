use crate::error::{TfResult, TimeForgeError};
use crate::timetable::{Day, TimeSlot};
use clap::Args;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: PenaltyWeights,
    #[command(flatten)]
    pub grid: SlotGrid,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Population / food-source count
    #[arg(long, default_value_t = 40)]
    pub population_size: usize,

    /// Generations (evolutionary) or iterations (bee colony)
    #[arg(long, default_value_t = 200)]
    pub iterations: usize,

    /// Per-session reassignment probability during reproduction
    #[arg(long, default_value_t = 0.15)]
    pub mutation_rate: f64,

    /// Reassignment probability when seeding the initial population
    #[arg(long, default_value_t = 0.55)]
    pub seed_rate: f64,

    /// Consecutive failed attempts before a food source is abandoned
    #[arg(long, default_value_t = 10)]
    pub abandonment_limit: u32,

    /// Print a progress line every N iterations
    #[arg(long, default_value_t = 10)]
    pub progress_interval: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PenaltyWeights {
    /// Weight of a (student, day, slot) clash group
    #[arg(long, default_value_t = 1.0)]
    pub weight_clash: f64,

    /// Weight of a session starting before --early-hour (0 disables)
    #[arg(long, default_value_t = 0.0)]
    pub weight_early: f64,

    /// Weight of a session starting after --late-hour (0 disables)
    #[arg(long, default_value_t = 0.0)]
    pub weight_late: f64,

    /// Weight of an over-threshold gap in a student's day (0 disables)
    #[arg(long, default_value_t = 0.0)]
    pub weight_gap: f64,

    #[arg(long, default_value_t = 8)]
    pub early_hour: u8,

    #[arg(long, default_value_t = 18)]
    pub late_hour: u8,

    /// Largest acceptable gap between consecutive sessions, in hours
    #[arg(long, default_value_t = 2)]
    pub max_gap_hours: u8,
}

#[derive(Args, Debug, Clone)]
pub struct SlotGrid {
    /// Days mutation may assign, comma separated
    #[arg(long, default_value = "Mon,Tue,Wed,Thu,Fri")]
    pub days: String,

    /// Time slots mutation may assign, comma separated
    #[arg(long, default_value = "08-10,10-12,12-14,14-16,16-18")]
    pub time_slots: String,
}

impl SlotGrid {
    pub fn get_days(&self) -> TfResult<Vec<Day>> {
        let days = parse_list(&self.days, |s| {
            Day::from_str(s)
                .map_err(|_| TimeForgeError::Config(format!("unknown day '{}' in --days", s)))
        })?;
        if days.is_empty() {
            return Err(TimeForgeError::Config("--days must not be empty".into()));
        }
        Ok(days)
    }

    pub fn get_time_slots(&self) -> TfResult<Vec<TimeSlot>> {
        let slots = parse_list(&self.time_slots, |s| {
            TimeSlot::from_str(s)
                .map_err(|e| TimeForgeError::Config(format!("bad --time-slots entry: {}", e)))
        })?;
        if slots.is_empty() {
            return Err(TimeForgeError::Config(
                "--time-slots must not be empty".into(),
            ));
        }
        Ok(slots)
    }
}

fn parse_list<T>(raw: &str, parse: impl Fn(&str) -> TfResult<T>) -> TfResult<Vec<T>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse)
        .collect()
}

impl Config {
    /// Range checks run once, before any search starts. Iteration count
    /// zero is allowed at the library boundary.
    pub fn validate(&self) -> TfResult<()> {
        let s = &self.search;
        if s.population_size < 1 {
            return Err(TimeForgeError::Config(
                "--population-size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&s.mutation_rate) {
            return Err(TimeForgeError::Config(
                "--mutation-rate must be within [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&s.seed_rate) {
            return Err(TimeForgeError::Config(
                "--seed-rate must be within [0, 1]".into(),
            ));
        }
        if s.abandonment_limit < 1 {
            return Err(TimeForgeError::Config(
                "--abandonment-limit must be at least 1".into(),
            ));
        }

        let w = &self.weights;
        for (name, value) in [
            ("--weight-clash", w.weight_clash),
            ("--weight-early", w.weight_early),
            ("--weight-late", w.weight_late),
            ("--weight-gap", w.weight_gap),
        ] {
            if value < 0.0 {
                return Err(TimeForgeError::Config(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }
        if w.early_hour > 24 || w.late_hour > 24 {
            return Err(TimeForgeError::Config(
                "hour bounds must be within [0, 24]".into(),
            ));
        }

        self.grid.get_days()?;
        self.grid.get_time_slots()?;
        Ok(())
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 40,
            iterations: 200,
            mutation_rate: 0.15,
            seed_rate: 0.55,
            abandonment_limit: 10,
            progress_interval: 10,
        }
    }
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            weight_clash: 1.0,
            weight_early: 0.0,
            weight_late: 0.0,
            weight_gap: 0.0,
            early_hour: 8,
            late_hour: 18,
            max_gap_hours: 2,
        }
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            days: "Mon,Tue,Wed,Thu,Fri".into(),
            time_slots: "08-10,10-12,12-14,14-16,16-18".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            weights: PenaltyWeights::default(),
            grid: SlotGrid::default(),
        }
    }
}
