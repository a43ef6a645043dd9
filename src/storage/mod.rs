//! Storage module for the database and configuration.

pub mod config;
pub mod database;
pub mod kv;
pub mod schema;

pub use config::{AppConfig, ConfigError, StorageSettings, Theme, UiSettings};
pub use database::Database;
pub use kv::{KeyValueStore, MemoryStore, StorageError};
