//! Integration tests for persisting the workout log to SQLite.
//!
//! Tests the full cycle:
//! - Logging workouts into an on-disk database
//! - Reopening the database and reloading the log
//! - Reading logs saved by the browser version
//! - Recovering from an unreadable saved log

use chrono::NaiveDate;
use pumptracker::storage::{Database, KeyValueStore};
use pumptracker::workouts::{
    Intensity, ManualClock, NewWorkout, WorkoutId, WorkoutStore, DEFAULT_LOG_KEY,
};
use tempfile::TempDir;

fn clock() -> ManualClock {
    ManualClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

fn open_db(dir: &TempDir) -> Database {
    Database::open(&dir.path().join("pumptracker.db")).expect("Failed to open database")
}

#[test]
fn test_log_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let saved = {
        let mut store = WorkoutStore::open(open_db(&dir), clock(), DEFAULT_LOG_KEY).unwrap();
        store
            .add(NewWorkout::new("Squats", 40).with_intensity(Intensity::Hard))
            .unwrap();
        store
            .add(NewWorkout::new("Running", 25).with_notes("5k easy"))
            .unwrap();
        store
            .add(NewWorkout::new("Deadlift", 50).with_intensity(Intensity::Beast))
            .unwrap();
        store.log().clone()
    };

    let store = WorkoutStore::open(open_db(&dir), clock(), DEFAULT_LOG_KEY).unwrap();

    assert_eq!(store.log(), &saved);
    let types: Vec<_> = store.log().iter().map(|r| r.workout_type.as_str()).collect();
    assert_eq!(types, vec!["Deadlift", "Running", "Squats"]);
    assert_eq!(store.log().records()[1].notes(), Some("5k easy"));
}

#[test]
fn test_reload_matches_memory_after_delete() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = WorkoutStore::open(open_db(&dir), clock(), DEFAULT_LOG_KEY).unwrap();
    let keep = store.add(NewWorkout::new("Rowing", 30)).unwrap();
    let gone = store.add(NewWorkout::new("Cycling", 45)).unwrap();
    store.remove(gone.id).unwrap();

    let in_memory = store.log().clone();
    let reloaded = store.load().unwrap();

    assert_eq!(reloaded, &in_memory);
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains(keep.id));
}

#[test]
fn test_reads_browser_saved_log() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = open_db(&dir);
    db.set(
        DEFAULT_LOG_KEY,
        r#"[
            {"id":1760612345678,"type":"Bench Press","duration":45,"intensity":"hard",
             "notes":"PR today! 💪","date":"10/16/2026","timestamp":"2026-10-16T11:12:25.678Z"},
            {"id":1760525945678,"type":"Yoga","duration":20,"intensity":"light",
             "notes":"","date":"10/15/2026","timestamp":"2026-10-15T11:12:25.678Z"}
        ]"#,
    )
    .unwrap();

    let store = WorkoutStore::open(db, clock(), DEFAULT_LOG_KEY).unwrap();
    let log = store.log();

    assert_eq!(log.len(), 2);
    let first = &log.records()[0];
    assert_eq!(first.id, WorkoutId(1_760_612_345_678));
    assert_eq!(first.workout_type, "Bench Press");
    assert_eq!(first.intensity, Intensity::Hard);
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    assert_eq!(log.records()[1].notes(), None);

    let stats = store.stats();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_minutes, 65);
    assert_eq!(stats.streak, 2);
}

#[test]
fn test_new_ids_follow_loaded_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = open_db(&dir);
    // Saved far in the future relative to the test clock
    db.set(
        DEFAULT_LOG_KEY,
        r#"[{"id":4102444800000,"type":"Run","duration":10,"intensity":"medium",
             "notes":"","date":"1/1/2100","timestamp":"2100-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();

    let mut store = WorkoutStore::open(db, clock(), DEFAULT_LOG_KEY).unwrap();
    let record = store.add(NewWorkout::new("Walk", 15)).unwrap();

    assert_eq!(record.id, WorkoutId(4_102_444_800_001));
}

#[test]
fn test_corrupt_log_starts_empty_and_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = open_db(&dir);
    db.set(DEFAULT_LOG_KEY, "[{\"id\": 1, \"type\": ").unwrap();

    let mut store = WorkoutStore::open(db, clock(), DEFAULT_LOG_KEY).unwrap();
    assert!(store.log().is_empty());

    store.add(NewWorkout::new("Running", 30)).unwrap();

    let db = store.into_storage();
    assert_eq!(
        db.get("workouts.corrupt").unwrap().as_deref(),
        Some("[{\"id\": 1, \"type\": ")
    );
    let saved = db.get(DEFAULT_LOG_KEY).unwrap().unwrap();
    assert!(saved.contains("Running"));
}

#[test]
fn test_custom_key_is_isolated() {
    let dir = tempfile::tempdir().unwrap();

    let db = {
        let mut store = WorkoutStore::open(open_db(&dir), clock(), "other_log").unwrap();
        store.add(NewWorkout::new("Climbing", 90)).unwrap();
        store.into_storage()
    };

    let store = WorkoutStore::open(db, clock(), DEFAULT_LOG_KEY).unwrap();
    assert!(store.log().is_empty());
}
