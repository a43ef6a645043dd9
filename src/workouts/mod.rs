//! Workout log module.
//!
//! Holds the list of logged workouts, keeps it persisted, and derives:
//! - total workouts and total minutes
//! - the consecutive-day streak ending today

pub mod clock;
pub mod error;
pub mod format;
pub mod store;
pub mod streak;
pub mod types;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{StoreError, StoreResult, ValidationError};
pub use store::{WorkoutStore, DEFAULT_LOG_KEY};
pub use streak::calculate_streak;
pub use types::{Intensity, NewWorkout, WorkoutId, WorkoutLog, WorkoutRecord, WorkoutStats};
