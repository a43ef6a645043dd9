//! Workout log error types.

use thiserror::Error;

use crate::storage::StorageError;
use crate::workouts::types::WorkoutId;

/// Reasons a new workout is rejected before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Workout type left blank.
    #[error("Workout type is required")]
    MissingType,

    /// Duration field left blank.
    #[error("Duration is required")]
    MissingDuration,

    /// Duration is not a whole number of minutes.
    #[error("Duration must be a whole number of minutes, got {0:?}")]
    InvalidDuration(String),

    /// Duration is zero or negative.
    #[error("Duration must be positive, got {0}")]
    NonPositiveDuration(i64),
}

/// Errors from workout store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid workout: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No id is left above the highest one already used.
    #[error("No workout id available after {0}")]
    IdExhausted(WorkoutId),
}

/// Result type for workout store operations.
pub type StoreResult<T> = Result<T, StoreError>;
