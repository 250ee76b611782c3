// ===== timeforge/src/loader.rs =====
use crate::error::{TfResult, TimeForgeError};
use crate::timetable::{Day, Session, TimeSlot, Timetable};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

struct Columns {
    student: usize,
    course: Option<usize>,
    day: Option<usize>,
    slot: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    duration: Option<usize>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace([' ', '_', '-'], "")
}

fn resolve_columns(headers: &csv::StringRecord) -> TfResult<Columns> {
    let mut student = None;
    let mut course = None;
    let mut day = None;
    let mut slot = None;
    let mut start = None;
    let mut end = None;
    let mut duration = None;

    for (idx, raw) in headers.iter().enumerate() {
        match normalize_header(raw).as_str() {
            "student" | "studentid" | "studentname" => student = Some(idx),
            "course" | "courseid" | "task" | "subject" => course = Some(idx),
            "day" => day = Some(idx),
            "timeslot" | "slot" => slot = Some(idx),
            "starttime" | "start" => start = Some(idx),
            "endtime" | "end" => end = Some(idx),
            "duration" | "hours" => duration = Some(idx),
            _ => {}
        }
    }

    let student = student.ok_or_else(|| {
        TimeForgeError::Validation("input has no student column".into())
    })?;

    Ok(Columns {
        student,
        course,
        day,
        slot,
        start,
        end,
        duration,
    })
}

/// Accepts `"8"`, `"08"` and `"08:00"`.
fn parse_hour(raw: &str) -> Option<u8> {
    let head = raw.trim().split(':').next()?;
    head.parse::<u8>().ok().filter(|&h| h <= 24)
}

fn field<'a>(record: &'a csv::StringRecord, idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Loads the session table. Malformed rows are skipped with a warning
/// count; empty day/slot cells are legitimate (an unassigned session).
/// A file with no student column or no usable rows is rejected here, so
/// the search core never sees invalid input.
pub fn load_sessions(path: impl AsRef<Path>) -> TfResult<Timetable> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let columns = resolve_columns(rdr.headers()?)?;

    let mut sessions = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(row = row_idx + 2, "csv parse error: {}", e);
                skipped += 1;
                continue;
            }
        };

        let Some(student) = field(&record, Some(columns.student)) else {
            skipped += 1;
            continue;
        };

        let day = match field(&record, columns.day) {
            Some(raw) => match Day::from_str(raw) {
                Ok(d) => Some(d),
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            },
            None => None,
        };

        let slot = match resolve_slot(&record, &columns) {
            Ok(s) => s,
            Err(()) => {
                skipped += 1;
                continue;
            }
        };

        let duration = field(&record, columns.duration).and_then(|d| d.parse::<f64>().ok());

        sessions.push(Session {
            student: student.to_string(),
            course: field(&record, columns.course).map(str::to_string),
            day,
            slot,
            duration,
        });
    }

    if skipped > 0 {
        warn!("skipped {} invalid rows in {}", skipped, path.display());
    }
    if sessions.is_empty() {
        return Err(TimeForgeError::Validation(format!(
            "no usable session rows in {}",
            path.display()
        )));
    }

    Ok(Timetable::new(sessions))
}

/// A slot column wins; otherwise the slot is derived from the raw
/// start/end times as `"{start:02}-{end:02}"`. Empty cells mean an
/// unassigned session; a present but unparseable cell fails the row.
fn resolve_slot(record: &csv::StringRecord, columns: &Columns) -> Result<Option<TimeSlot>, ()> {
    if let Some(raw) = field(record, columns.slot) {
        return TimeSlot::from_str(raw).map(Some).map_err(|_| ());
    }

    match (field(record, columns.start), field(record, columns.end)) {
        (Some(start), Some(end)) => {
            let start = parse_hour(start).ok_or(())?;
            let end = parse_hour(end).ok_or(())?;
            TimeSlot::new(start, end).map(Some).map_err(|_| ())
        }
        (None, None) => Ok(None),
        _ => Err(()),
    }
}
