//! Unit test modules.

mod streak_test;
mod workout_log_test;
