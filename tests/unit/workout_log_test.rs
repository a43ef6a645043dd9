//! Unit tests for logging and deleting workouts.

use chrono::NaiveDate;
use pumptracker::storage::MemoryStore;
use pumptracker::workouts::{
    Intensity, ManualClock, NewWorkout, StoreError, ValidationError, WorkoutId, WorkoutStats,
    WorkoutStore, DEFAULT_LOG_KEY,
};

type TestStore = WorkoutStore<MemoryStore, ManualClock>;

fn open_store() -> TestStore {
    let clock = ManualClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    WorkoutStore::open(MemoryStore::new(), clock, DEFAULT_LOG_KEY).unwrap()
}

fn durations(store: &TestStore) -> u64 {
    store.log().iter().map(|r| u64::from(r.duration)).sum()
}

#[test]
fn test_empty_log_stats() {
    let store = open_store();
    assert_eq!(
        store.stats(),
        WorkoutStats {
            count: 0,
            total_minutes: 0,
            streak: 0,
        }
    );
}

#[test]
fn test_total_minutes_tracks_adds_and_removes() {
    let mut store = open_store();

    let a = store.add(NewWorkout::new("Running", 30)).unwrap();
    assert_eq!(store.stats().total_minutes, durations(&store));

    let b = store.add(NewWorkout::new("Cycling", 60)).unwrap();
    store.add(NewWorkout::new("Yoga", 15)).unwrap();
    assert_eq!(store.stats().total_minutes, 105);
    assert_eq!(store.stats().total_minutes, durations(&store));

    store.remove(b.id).unwrap();
    assert_eq!(store.stats().total_minutes, 45);

    store.remove(a.id).unwrap();
    store.remove(WorkoutId(12345)).unwrap();
    assert_eq!(store.stats().total_minutes, 15);
    assert_eq!(store.stats().total_minutes, durations(&store));
}

#[test]
fn test_add_then_remove_restores_records() {
    let mut store = open_store();
    store.add(NewWorkout::new("Squats", 40)).unwrap();
    store.add(NewWorkout::new("Rowing", 20)).unwrap();
    let before = store.log().clone();

    let added = store
        .add(
            NewWorkout::new("Bench Press", 45)
                .with_intensity(Intensity::Beast)
                .with_notes("PR today!"),
        )
        .unwrap();
    assert_eq!(store.log().len(), 3);
    assert_eq!(store.log().records()[0], added);

    assert!(store.remove(added.id).unwrap());
    assert_eq!(store.log(), &before);
}

#[test]
fn test_remove_unknown_id_twice_is_noop() {
    let mut store = open_store();
    store.add(NewWorkout::new("Running", 30)).unwrap();
    let before = store.log().clone();

    assert!(!store.remove(WorkoutId(42)).unwrap());
    assert!(!store.remove(WorkoutId(42)).unwrap());
    assert_eq!(store.log(), &before);
}

#[test]
fn test_zero_duration_is_rejected_without_write() {
    let mut store = open_store();
    store.add(NewWorkout::new("Running", 30)).unwrap();
    let writes = store.storage().write_count();

    let result = store.add(NewWorkout::new("Running", 0));

    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::NonPositiveDuration(0)))
    ));
    assert_eq!(store.log().len(), 1);
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn test_empty_type_is_rejected_without_write() {
    let mut store = open_store();

    let result = store.add(NewWorkout::new("", 30));

    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::MissingType))
    ));
    assert!(store.log().is_empty());
    assert_eq!(store.storage().write_count(), 0);
    assert_eq!(store.storage().raw(DEFAULT_LOG_KEY), None);
}

#[test]
fn test_every_mutation_rewrites_whole_log() {
    let mut store = open_store();

    store.add(NewWorkout::new("A", 10)).unwrap();
    store.add(NewWorkout::new("B", 20)).unwrap();
    let c = store.add(NewWorkout::new("C", 30)).unwrap();
    store.remove(c.id).unwrap();

    assert_eq!(store.storage().write_count(), 4);

    let saved: serde_json::Value =
        serde_json::from_str(store.storage().raw(DEFAULT_LOG_KEY).unwrap()).unwrap();
    let types: Vec<_> = saved
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, vec!["B", "A"]);
}

#[test]
fn test_ids_are_unique() {
    let mut store = open_store();
    for i in 0..20 {
        store.add(NewWorkout::new(format!("Set {i}"), 5)).unwrap();
    }

    let mut ids: Vec<_> = store.log().iter().map(|r| r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
