// ===== timeforge/src/timetable.rs =====
use crate::error::{TfResult, TimeForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Weekday a session can be assigned to. Parsing accepts both the short
/// and the full form, case-insensitively. Ordering follows the week.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    #[strum(serialize = "Mon", to_string = "Monday")]
    Monday,
    #[strum(serialize = "Tue", to_string = "Tuesday")]
    Tuesday,
    #[strum(serialize = "Wed", to_string = "Wednesday")]
    Wednesday,
    #[strum(serialize = "Thu", to_string = "Thursday")]
    Thursday,
    #[strum(serialize = "Fri", to_string = "Friday")]
    Friday,
    #[strum(serialize = "Sat", to_string = "Saturday")]
    Saturday,
    #[strum(serialize = "Sun", to_string = "Sunday")]
    Sunday,
}

/// A whole-hour interval, rendered as `"08-10"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeSlot {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TimeSlot {
    pub fn new(start_hour: u8, end_hour: u8) -> TfResult<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(TimeForgeError::Validation(format!(
                "invalid time slot {:02}-{:02}",
                start_hour, end_hour
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start_hour, self.end_hour)
    }
}

impl FromStr for TimeSlot {
    type Err = TimeForgeError;

    fn from_str(s: &str) -> TfResult<Self> {
        let mut parts = s.trim().splitn(2, '-');
        let start = parts.next().unwrap_or("").trim();
        let end = parts.next().unwrap_or("").trim();

        let parse = |h: &str| {
            h.parse::<u8>().map_err(|_| {
                TimeForgeError::Validation(format!("invalid hour '{}' in slot '{}'", h, s))
            })
        };

        Self::new(parse(start)?, parse(end)?)
    }
}

/// One course meeting owned by a student. Day and slot are `None` until
/// an assignment exists; duration is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub student: String,
    pub course: Option<String>,
    pub day: Option<Day>,
    pub slot: Option<TimeSlot>,
    pub duration: Option<f64>,
}

impl Session {
    pub fn is_assigned(&self) -> bool {
        self.day.is_some() && self.slot.is_some()
    }
}

/// A candidate schedule: the session identities are fixed, only the
/// day/slot assignments vary between candidates. Value-like: population
/// members clone it, they never alias it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub sessions: Vec<Session>,
}

impl Timetable {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    /// True when every session carries a student, a day and a slot.
    pub fn is_fully_assigned(&self) -> bool {
        self.sessions
            .iter()
            .all(|s| !s.student.is_empty() && s.is_assigned())
    }

    /// The fixed identity of this timetable: its (student, course)
    /// multiset, sorted for comparison.
    pub fn identities(&self) -> Vec<(String, Option<String>)> {
        let mut pairs: Vec<_> = self
            .sessions
            .iter()
            .map(|s| (s.student.clone(), s.course.clone()))
            .collect();
        pairs.sort();
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_short_and_long_forms() {
        assert_eq!(Day::from_str("Mon").unwrap(), Day::Monday);
        assert_eq!(Day::from_str("monday").unwrap(), Day::Monday);
        assert_eq!(Day::from_str("FRI").unwrap(), Day::Friday);
        assert!(Day::from_str("Noday").is_err());
    }

    #[test]
    fn day_displays_full_name() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn every_day_round_trips_through_display() {
        use strum::IntoEnumIterator;
        for day in Day::iter() {
            assert_eq!(Day::from_str(&day.to_string()).unwrap(), day);
        }
    }

    #[test]
    fn slot_round_trips_through_label() {
        let slot = TimeSlot::from_str("08-10").unwrap();
        assert_eq!(slot.start_hour, 8);
        assert_eq!(slot.end_hour, 10);
        assert_eq!(slot.label(), "08-10");
    }

    #[test]
    fn slot_rejects_inverted_and_out_of_range_hours() {
        assert!(TimeSlot::from_str("10-08").is_err());
        assert!(TimeSlot::from_str("10-10").is_err());
        assert!(TimeSlot::from_str("22-25").is_err());
        assert!(TimeSlot::from_str("eight-ten").is_err());
    }

    #[test]
    fn identities_ignore_assignments() {
        let a = Timetable::new(vec![Session {
            student: "S1".into(),
            course: Some("Math".into()),
            day: Some(Day::Monday),
            slot: Some(TimeSlot::new(8, 10).unwrap()),
            duration: None,
        }]);
        let mut b = a.clone();
        b.sessions[0].day = Some(Day::Friday);

        assert_eq!(a.identities(), b.identities());
    }
}
