//! Workout log store.
//!
//! Owns the in-memory log and keeps it in sync with storage: the whole log is
//! read once when the store opens and the whole log is written back after
//! every mutation. A mutation only takes effect in memory once its write
//! succeeded.

use chrono::{DateTime, SubsecRound, Utc};

use super::clock::{Clock, SystemClock};
use super::error::{StoreError, StoreResult};
use super::types::{NewWorkout, WorkoutId, WorkoutLog, WorkoutRecord, WorkoutStats};
use crate::storage::KeyValueStore;

/// Storage key used when none is configured.
pub const DEFAULT_LOG_KEY: &str = "workouts";

/// Single owner of a workout log and its persisted copy.
pub struct WorkoutStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    log: WorkoutLog,
    last_id: Option<WorkoutId>,
}

impl<S: KeyValueStore> WorkoutStore<S, SystemClock> {
    /// Open a store on the wall clock using the default key.
    pub fn with_defaults(storage: S) -> StoreResult<Self> {
        Self::open(storage, SystemClock, DEFAULT_LOG_KEY)
    }
}

impl<S: KeyValueStore, C: Clock> WorkoutStore<S, C> {
    /// Open a store and hydrate it from `key`.
    pub fn open(storage: S, clock: C, key: impl Into<String>) -> StoreResult<Self> {
        let mut store = Self {
            storage,
            clock,
            key: key.into(),
            log: WorkoutLog::new(),
            last_id: None,
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the persisted log, replacing the in-memory copy.
    ///
    /// A missing or blank value is an empty log. A value that cannot be
    /// parsed is copied to `<key>.corrupt` and the store starts empty.
    pub fn load(&mut self) -> StoreResult<&WorkoutLog> {
        let log = match self.storage.get(&self.key)? {
            None => {
                tracing::debug!(key = %self.key, "No saved workouts, starting empty");
                WorkoutLog::new()
            }
            Some(blob) if blob.trim().is_empty() => WorkoutLog::new(),
            Some(blob) => match serde_json::from_str::<WorkoutLog>(&blob) {
                Ok(log) => {
                    tracing::info!(count = log.len(), key = %self.key, "Loaded workouts");
                    log
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        key = %self.key,
                        "Saved workouts are unreadable, starting with an empty log"
                    );
                    self.quarantine(&blob);
                    WorkoutLog::new()
                }
            },
        };

        self.last_id = match (self.last_id, log.max_id()) {
            (Some(last), Some(max)) => Some(last.max(max)),
            (last, max) => last.or(max),
        };
        self.log = log;

        Ok(&self.log)
    }

    /// Validate and log a new workout at the front of the log.
    ///
    /// Nothing is written if validation fails.
    pub fn add(&mut self, workout: NewWorkout) -> StoreResult<WorkoutRecord> {
        let (workout_type, duration) = workout
            .validate()
            .map(|(workout_type, duration)| (workout_type.to_string(), duration))?;

        let now = self.clock.now().trunc_subsecs(3);
        let record = WorkoutRecord {
            id: self.next_id(now)?,
            workout_type,
            duration,
            intensity: workout.intensity,
            notes: workout.notes,
            date: self.clock.today(),
            timestamp: now,
        };

        let updated = self.log.prepended(record.clone());
        self.persist(&updated)?;

        self.log = updated;
        self.last_id = Some(record.id);

        tracing::info!(
            id = %record.id,
            workout_type = %record.workout_type,
            duration = record.duration,
            intensity = %record.intensity,
            "Logged workout"
        );

        Ok(record)
    }

    /// Remove the workout with `id`. Returns whether one was removed.
    ///
    /// An unknown id leaves the log as it was.
    pub fn remove(&mut self, id: WorkoutId) -> StoreResult<bool> {
        let updated = self.log.without(id);
        let removed = updated.len() < self.log.len();

        self.persist(&updated)?;
        self.log = updated;

        if removed {
            tracing::info!(id = %id, "Deleted workout");
        } else {
            tracing::debug!(id = %id, "No workout with this id");
        }

        Ok(removed)
    }

    /// Count, total minutes and streak as of the clock's today.
    pub fn stats(&self) -> WorkoutStats {
        self.log.stats(self.clock.today())
    }

    /// The current log, newest first.
    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    /// Storage key of the log.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Storage backend holding the log.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Clock used for ids, dates and stats.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn next_id(&self, now: DateTime<Utc>) -> StoreResult<WorkoutId> {
        let candidate = now.timestamp_millis();
        match self.last_id {
            Some(last) if candidate <= last.as_i64() => last
                .as_i64()
                .checked_add(1)
                .map(WorkoutId)
                .ok_or(StoreError::IdExhausted(last)),
            _ => Ok(WorkoutId(candidate)),
        }
    }

    fn persist(&mut self, log: &WorkoutLog) -> StoreResult<()> {
        let blob = serde_json::to_string(log)?;

        if let Err(e) = self.storage.set(&self.key, &blob) {
            tracing::error!(error = %e, key = %self.key, "Failed to save workouts");
            return Err(e.into());
        }

        tracing::debug!(count = log.len(), bytes = blob.len(), "Saved workouts");
        Ok(())
    }

    fn quarantine(&mut self, blob: &str) {
        let backup_key = format!("{}.corrupt", self.key);
        match self.storage.set(&backup_key, blob) {
            Ok(()) => tracing::warn!(key = %backup_key, "Kept unreadable workouts aside"),
            Err(e) => tracing::error!(error = %e, key = %backup_key, "Failed to keep unreadable workouts"),
        }
    }
}
