use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use meetings::db::*;
use meetings::error::MeetError;
use meetings::model::*;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    (dir, path)
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn meeting(name: &str) -> Meeting {
    Meeting::create(
        name.into(),
        Person::new("Alice", "Smith"),
        format!("{} description", name),
        MeetingCategory::CodeMonkey,
        MeetingType::InPerson,
        at(1, 10),
        at(1, 11),
    )
}

// ==========================================================================
// JSON FILE TESTS
// ==========================================================================

#[test]
fn open_creates_missing_file() {
    let (_dir, path) = setup();
    assert!(!path.exists());

    let repo = MeetingRepo::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(repo.path(), path.as_path());
    assert!(repo.is_empty());
    assert!(repo.load_all().unwrap().is_empty());
}

#[test]
fn open_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data.json");

    MeetingRepo::open(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn absent_file_reads_as_empty() {
    let (_dir, path) = setup();
    assert!(json_file::read_meetings(&path).unwrap().is_empty());
}

#[test]
fn blank_file_reads_as_empty() {
    let (_dir, path) = setup();
    fs::write(&path, "  \n").unwrap();

    let repo = MeetingRepo::open(&path).unwrap();
    assert_eq!(repo.len(), 0);
}

#[test]
fn corrupt_file_is_an_error() {
    let (_dir, path) = setup();
    fs::write(&path, "{ not an array").unwrap();

    let err = MeetingRepo::open(&path).unwrap_err();
    assert!(matches!(err, MeetError::CorruptData { .. }));
    assert!(!err.is_rejection());
}

#[test]
fn wrong_shape_is_an_error() {
    let (_dir, path) = setup();
    fs::write(&path, r#"[{"Name": "standup"}]"#).unwrap();

    assert!(matches!(
        json_file::read_meetings(&path),
        Err(MeetError::CorruptData { .. })
    ));
}

#[test]
fn written_file_uses_string_enums_and_iso_dates() {
    let (_dir, path) = setup();
    json_file::write_meetings(&path, &[meeting("standup")]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains(r#""Category": "CodeMonkey""#));
    assert!(raw.contains(r#""Type": "InPerson""#));
    assert!(raw.contains(r#""StartDate": "2024-03-01T10:00:00""#));
    assert!(raw.contains(r#""FirstName": "Alice""#));
}

#[test]
fn reads_file_without_attendees_field() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{
            "Name": "standup",
            "ResponsiblePerson": { "FirstName": "Alice", "LastName": "Smith" },
            "Description": "daily",
            "Category": "Short",
            "Type": "Live",
            "StartDate": "2024-03-01T09:00:00",
            "EndDate": "2024-03-01T09:15:00"
        }]"#,
    )
    .unwrap();

    let meetings = json_file::read_meetings(&path).unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].category, MeetingCategory::Short);
    assert!(meetings[0].attendees.is_empty());
}

// ==========================================================================
// MEETING REPO TESTS
// ==========================================================================

#[test]
fn insert_persists_and_roundtrips() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();

    let mut m = meeting("standup");
    m.attendees.push(Person::new("Carol", "Jones"));
    repo.insert(m).unwrap();

    let reopened = MeetingRepo::open(&path).unwrap();
    let found = reopened.find_by_name("standup").unwrap();
    assert_eq!(found.description, "standup description");
    assert_eq!(found.responsible_person, Person::new("Alice", "Smith"));
    assert_eq!(found.category, MeetingCategory::CodeMonkey);
    assert_eq!(found.meeting_type, MeetingType::InPerson);
    assert_eq!(found.start_date, at(1, 10));
    assert_eq!(found.end_date, at(1, 11));
    assert_eq!(found.attendees, vec![Person::new("Carol", "Jones")]);
}

#[test]
fn insert_preserves_order() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();

    for name in ["c", "a", "b"] {
        repo.insert(meeting(name)).unwrap();
    }

    let names: Vec<String> = repo.load_all().unwrap().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn insert_does_not_check_duplicates() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();

    repo.insert(meeting("standup")).unwrap();
    repo.insert(meeting("standup")).unwrap();
    assert_eq!(repo.len(), 2);
}

#[test]
fn contains_matches_by_name_only() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();

    assert!(repo.contains("standup"));
    assert!(!repo.contains("Standup"));
    assert!(repo.find_by_name("retro").is_none());
}

#[test]
fn remove_existing_meeting() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    repo.insert(meeting("retro")).unwrap();

    assert!(repo.remove("standup").unwrap());
    assert!(!repo.contains("standup"));

    let stored = repo.load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "retro");
}

#[test]
fn remove_missing_meeting_does_not_write() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();

    // A write would replace this marker content.
    fs::write(&path, "[]").unwrap();
    assert!(!repo.remove("retro").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn add_and_remove_attendee() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    let carol = Person::new("Carol", "Jones");

    assert!(repo.add_attendee("standup", carol.clone()).unwrap());
    assert_eq!(repo.load_all().unwrap()[0].attendees, vec![carol.clone()]);

    assert!(repo.remove_attendee("standup", &carol).unwrap());
    assert!(repo.load_all().unwrap()[0].attendees.is_empty());
}

#[test]
fn add_attendee_to_missing_meeting() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();

    assert!(!repo.add_attendee("standup", Person::new("Carol", "Jones")).unwrap());
}

#[test]
fn remove_absent_attendee() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();

    assert!(!repo.remove_attendee("standup", &Person::new("Carol", "Jones")).unwrap());
    assert!(!repo.remove_attendee("retro", &Person::new("Carol", "Jones")).unwrap());
}

#[test]
fn remove_attendee_matches_full_name() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    repo.add_attendee("standup", Person::new("Carol", "Jones")).unwrap();

    assert!(!repo.remove_attendee("standup", &Person::new("Carol", "Smith")).unwrap());
    assert_eq!(repo.find_by_name("standup").unwrap().attendees.len(), 1);
}

#[test]
fn cache_is_not_reread_after_open() {
    let (_dir, path) = setup();
    let mut first = MeetingRepo::open(&path).unwrap();
    let second = MeetingRepo::open(&path).unwrap();

    first.insert(meeting("standup")).unwrap();

    assert!(!second.contains("standup"));
    assert_eq!(second.load_all().unwrap().len(), 1);
}

#[test]
fn save_all_replaces_cache_and_file() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();

    repo.save_all(vec![meeting("retro"), meeting("planning")]).unwrap();
    assert!(repo.contains("retro"));
    assert!(!repo.contains("standup"));

    repo.insert(meeting("demo")).unwrap();
    let names: Vec<String> = repo.load_all().unwrap().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["retro", "planning", "demo"]);
}

// ==========================================================================
// WRITE FAILURE TESTS
// ==========================================================================

/// Replace the data file with a directory so every later write fails.
fn break_writes(path: &Path) {
    fs::remove_file(path).unwrap();
    fs::create_dir(path).unwrap();
}

#[test]
fn failed_insert_leaves_cache_unchanged() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    break_writes(&path);

    let err = repo.insert(meeting("retro")).unwrap_err();
    assert!(matches!(err, MeetError::Io(_)));
    assert!(!err.is_rejection());
    assert!(!repo.contains("retro"));
    assert_eq!(repo.len(), 1);
}

#[test]
fn failed_remove_leaves_cache_unchanged() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    break_writes(&path);

    assert!(repo.remove("standup").is_err());
    assert!(repo.contains("standup"));
}

#[test]
fn failed_attendee_changes_leave_cache_unchanged() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    let carol = Person::new("Carol", "Jones");
    repo.insert(meeting("standup")).unwrap();
    repo.add_attendee("standup", carol.clone()).unwrap();
    break_writes(&path);

    assert!(repo.add_attendee("standup", Person::new("Dan", "Lee")).is_err());
    assert!(repo.remove_attendee("standup", &carol).is_err());
    assert_eq!(repo.find_by_name("standup").unwrap().attendees, vec![carol]);
}

#[test]
fn failed_save_all_leaves_cache_unchanged() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    break_writes(&path);

    assert!(repo.save_all(vec![meeting("retro")]).is_err());
    assert!(repo.contains("standup"));
    assert!(!repo.contains("retro"));
}

#[test]
fn insert_succeeds_again_once_writes_recover() {
    let (_dir, path) = setup();
    let mut repo = MeetingRepo::open(&path).unwrap();
    break_writes(&path);
    assert!(repo.insert(meeting("standup")).is_err());

    fs::remove_dir(&path).unwrap();
    repo.insert(meeting("standup")).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.load_all().unwrap().len(), 1);
}
