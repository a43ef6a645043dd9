//! Workout log type definitions.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ValidationError;
use super::format::{iso_timestamp, locale_date};
use super::streak::calculate_streak;

/// Identity of a logged workout.
///
/// Derived from the creation instant in milliseconds since the Unix epoch,
/// bumped when needed so that ids within a log are strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    /// Raw integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard a session felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Easy effort
    Light,
    /// Moderate effort (default)
    #[default]
    Medium,
    /// Hard effort
    Hard,
    /// All-out effort
    Beast,
}

impl Intensity {
    /// All levels, in increasing order of effort.
    pub const ALL: [Intensity; 4] = [
        Intensity::Light,
        Intensity::Medium,
        Intensity::Hard,
        Intensity::Beast,
    ];

    /// Persisted name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Hard => "hard",
            Intensity::Beast => "beast",
        }
    }

    /// Upper-case display label.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "LIGHT",
            Intensity::Medium => "MEDIUM",
            Intensity::Hard => "HARD",
            Intensity::Beast => "BEAST",
        }
    }

    /// Emoji shown next to the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            Intensity::Light => "💚",
            Intensity::Medium => "💛",
            Intensity::Hard => "🔥",
            Intensity::Beast => "💀",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier, never reassigned
    pub id: WorkoutId,
    /// Free-text label such as "Bench Press"
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Perceived effort
    #[serde(default)]
    pub intensity: Intensity,
    /// Free-text notes, empty when none were given
    #[serde(default)]
    pub notes: String,
    /// Calendar date the workout was logged on
    #[serde(with = "locale_date")]
    pub date: NaiveDate,
    /// Instant the workout was logged
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Notes, if any were entered.
    pub fn notes(&self) -> Option<&str> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then_some(notes)
    }
}

/// Input for a new workout, as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    /// Workout label
    pub workout_type: String,
    /// Duration in minutes (must be positive)
    pub duration: i64,
    /// Perceived effort
    pub intensity: Intensity,
    /// Optional notes
    pub notes: String,
}

impl NewWorkout {
    /// Create a new workout draft with default intensity and no notes.
    pub fn new(workout_type: impl Into<String>, duration: i64) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration,
            intensity: Intensity::default(),
            notes: String::new(),
        }
    }

    /// Set the intensity.
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Build a draft from raw form input.
    ///
    /// Fails if the duration field is blank or not a whole number. The
    /// positivity and type checks happen in [`NewWorkout::validate`].
    pub fn from_form(
        workout_type: &str,
        duration: &str,
        intensity: Intensity,
        notes: &str,
    ) -> Result<Self, ValidationError> {
        let duration = parse_duration(duration)?;
        Ok(Self {
            workout_type: workout_type.to_string(),
            duration,
            intensity,
            notes: notes.to_string(),
        })
    }

    /// Check presence and positivity, returning the trimmed type and the
    /// duration in minutes.
    pub fn validate(&self) -> Result<(&str, u32), ValidationError> {
        let workout_type = self.workout_type.trim();
        if workout_type.is_empty() {
            return Err(ValidationError::MissingType);
        }

        if self.duration <= 0 {
            return Err(ValidationError::NonPositiveDuration(self.duration));
        }

        let duration = u32::try_from(self.duration)
            .map_err(|_| ValidationError::InvalidDuration(self.duration.to_string()))?;

        Ok((workout_type, duration))
    }
}

/// Parse a duration field into whole minutes.
pub fn parse_duration(input: &str) -> Result<i64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingDuration);
    }
    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidDuration(input.to_string()))
}

/// Aggregate statistics over a workout log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WorkoutStats {
    /// Number of logged workouts
    pub count: usize,
    /// Sum of all durations in minutes
    pub total_minutes: u64,
    /// Consecutive days with a workout, ending today
    pub streak: u32,
}

/// Ordered workout records, newest first.
///
/// Ids are unique within a log. Updates return a new log rather than
/// mutating in place so that a failed persist leaves the original intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutLog {
    records: Vec<WorkoutRecord>,
}

impl WorkoutLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from records in newest-first order.
    ///
    /// Records whose id was already seen are dropped.
    pub fn from_records(records: Vec<WorkoutRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let total = records.len();
        let records: Vec<_> = records.into_iter().filter(|r| seen.insert(r.id)).collect();

        if records.len() < total {
            tracing::warn!(
                dropped = total - records.len(),
                "Dropped workouts with duplicate ids"
            );
        }

        Self { records }
    }

    /// Records, newest first.
    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    /// Iterate records, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by id.
    pub fn get(&self, id: WorkoutId) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check whether a record with this id exists.
    pub fn contains(&self, id: WorkoutId) -> bool {
        self.get(id).is_some()
    }

    /// Highest id in the log.
    pub fn max_id(&self) -> Option<WorkoutId> {
        self.records.iter().map(|r| r.id).max()
    }

    /// A copy of this log with `record` at the front.
    pub fn prepended(&self, record: WorkoutRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self { records }
    }

    /// A copy of this log without the record with `id`.
    pub fn without(&self, id: WorkoutId) -> Self {
        Self {
            records: self.records.iter().filter(|r| r.id != id).cloned().collect(),
        }
    }

    /// Sum of all durations in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.duration)).sum()
    }

    /// Distinct calendar dates with at least one workout.
    pub fn distinct_dates(&self) -> BTreeSet<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Compute statistics relative to `today`.
    pub fn stats(&self, today: NaiveDate) -> WorkoutStats {
        WorkoutStats {
            count: self.len(),
            total_minutes: self.total_minutes(),
            streak: calculate_streak(self.distinct_dates(), today),
        }
    }
}

impl<'a> IntoIterator for &'a WorkoutLog {
    type Item = &'a WorkoutRecord;
    type IntoIter = std::slice::Iter<'a, WorkoutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for WorkoutLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkoutLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<WorkoutRecord>::deserialize(deserializer).map(Self::from_records)
    }
}
