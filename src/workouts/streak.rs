//! Consecutive-day streak calculation.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Count consecutive calendar days with a workout, walking back from `today`.
///
/// Duplicate dates count once. The walk stops at the first date that is not
/// the expected day, so a log with nothing today has a streak of zero even if
/// yesterday was active. Dates after `today` also end the walk immediately.
pub fn calculate_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();

    let mut cursor = today;
    let mut streak = 0;

    for date in distinct.iter().rev() {
        if *date != cursor {
            break;
        }
        streak += 1;

        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}
