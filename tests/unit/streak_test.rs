//! Unit tests for the day streak.
//!
//! Workouts are logged through the store on a manual clock so the recorded
//! dates are the ones the store itself captured.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use pumptracker::storage::MemoryStore;
use pumptracker::workouts::{ManualClock, NewWorkout, WorkoutStore, DEFAULT_LOG_KEY};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn noon(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc()
}

/// Log one workout on each of the given days before `today()`, then move the
/// clock back to `today()`.
fn store_with_days_ago(days_ago: &[i64]) -> WorkoutStore<MemoryStore, Arc<ManualClock>> {
    let clock = Arc::new(ManualClock::at_date(today()));
    let mut store =
        WorkoutStore::open(MemoryStore::new(), Arc::clone(&clock), DEFAULT_LOG_KEY).unwrap();

    for &n in days_ago {
        clock.set(noon(today() - Duration::days(n)));
        store.add(NewWorkout::new("Running", 30)).unwrap();
    }

    clock.set(noon(today()));
    store
}

#[test]
fn test_three_consecutive_days() {
    let store = store_with_days_ago(&[2, 1, 0]);
    assert_eq!(store.stats().streak, 3);
}

#[test]
fn test_gap_yesterday() {
    let store = store_with_days_ago(&[2, 0]);
    assert_eq!(store.stats().streak, 1);
}

#[test]
fn test_no_workout_today() {
    let store = store_with_days_ago(&[2, 1]);
    assert_eq!(store.stats().streak, 0);
}

#[test]
fn test_several_workouts_per_day_count_once() {
    let store = store_with_days_ago(&[1, 1, 0, 0, 0]);
    let stats = store.stats();
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.count, 5);
}

#[test]
fn test_streak_recomputed_as_days_pass() {
    let clock = Arc::new(ManualClock::at_date(today()));
    let mut store =
        WorkoutStore::open(MemoryStore::new(), Arc::clone(&clock), DEFAULT_LOG_KEY).unwrap();

    store.add(NewWorkout::new("Yoga", 20)).unwrap();
    assert_eq!(store.stats().streak, 1);

    clock.advance(Duration::days(1));
    assert_eq!(store.stats().streak, 0);

    store.add(NewWorkout::new("Yoga", 20)).unwrap();
    assert_eq!(store.stats().streak, 2);
}
