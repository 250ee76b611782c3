use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use timeforge::error::TimeForgeError;
use timeforge::loader::load_sessions;
use timeforge::timetable::Day;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

#[test]
fn loads_day_and_slot_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "sessions.csv",
        "Student,Course,Day,Time Slot\n\
         S1,Math,Mon,08-10\n\
         S2,Physics,Friday,14-16\n",
    );

    let timetable = load_sessions(&path).unwrap();
    assert_eq!(timetable.len(), 2);

    let first = &timetable.sessions[0];
    assert_eq!(first.student, "S1");
    assert_eq!(first.course.as_deref(), Some("Math"));
    assert_eq!(first.day, Some(Day::Monday));
    assert_eq!(first.slot.unwrap().label(), "08-10");

    assert_eq!(timetable.sessions[1].day, Some(Day::Friday));
}

#[test]
fn derives_slot_from_start_and_end_times() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "sessions.csv",
        "Student,Course,Day,Start Time,End Time\n\
         S1,Math,Tue,08:00,10:00\n\
         S2,Math,Wed,9,11\n",
    );

    let timetable = load_sessions(&path).unwrap();
    assert_eq!(timetable.sessions[0].slot.unwrap().label(), "08-10");
    assert_eq!(timetable.sessions[1].slot.unwrap().label(), "09-11");
}

#[test]
fn empty_assignment_cells_stay_unassigned() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "sessions.csv",
        "Student,Course,Day,Time Slot\n\
         S1,Math,,\n",
    );

    let timetable = load_sessions(&path).unwrap();
    let session = &timetable.sessions[0];
    assert_eq!(session.day, None);
    assert_eq!(session.slot, None);
    assert!(!session.is_assigned());
}

#[test]
fn malformed_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "sessions.csv",
        "Student,Course,Day,Time Slot\n\
         S1,Math,Mon,08-10\n\
         ,Math,Mon,08-10\n\
         S3,Math,Noday,08-10\n\
         S4,Math,Mon,late-ish\n",
    );

    let timetable = load_sessions(&path).unwrap();
    assert_eq!(timetable.len(), 1);
    assert_eq!(timetable.sessions[0].student, "S1");
}

#[test]
fn missing_student_column_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "sessions.csv", "Course,Day,Time Slot\nMath,Mon,08-10\n");

    match load_sessions(&path) {
        Err(TimeForgeError::Validation(msg)) => assert!(msg.contains("student")),
        other => panic!("expected validation error, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn header_only_file_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "sessions.csv", "Student,Course,Day,Time Slot\n");

    assert!(matches!(
        load_sessions(&path),
        Err(TimeForgeError::Validation(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_sessions("does/not/exist.csv"),
        Err(TimeForgeError::Io(_))
    ));
}
