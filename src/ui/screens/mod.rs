//! UI screens for the application.

pub mod workout_log;

pub use workout_log::{LogAction, WorkoutForm, WorkoutLogScreen};
