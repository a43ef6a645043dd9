//! Integration test modules.

mod persistence_test;
mod startup_test;
