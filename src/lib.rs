//! PumpTracker - Workout Log
//!
//! A local-first workout tracker built in Rust. Logs workouts (type,
//! duration, intensity, notes) to a local SQLite store and derives totals and
//! the consecutive-day streak.

pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use storage::config::AppConfig;
pub use storage::{Database, KeyValueStore, MemoryStore};
pub use workouts::{NewWorkout, WorkoutLog, WorkoutStats, WorkoutStore};
