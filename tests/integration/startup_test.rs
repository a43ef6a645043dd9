//! Integration tests for application startup wiring.
//!
//! Config decides where the database lives and which key holds the log.

use std::path::PathBuf;

use pumptracker::storage::config::{load_config_from, save_config_to, AppConfig, Theme};
use pumptracker::storage::Database;
use pumptracker::workouts::{NewWorkout, WorkoutStore};

#[test]
fn test_default_config_opens_store_in_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml"), dir.path().to_path_buf())
        .expect("Config should load");

    let db = Database::open(&config.database_path()).unwrap();
    let mut store = WorkoutStore::with_defaults(db).unwrap();
    store.add(NewWorkout::new("Running", 30)).unwrap();

    assert!(dir.path().join("pumptracker.db").exists());
    assert_eq!(store.key(), "workouts");
}

#[test]
fn test_saved_config_controls_storage() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut config = AppConfig {
        data_dir: PathBuf::new(),
        ..Default::default()
    };
    config.storage.database_file = "gains.db".to_string();
    config.storage.log_key = "gains".to_string();
    config.ui.theme = Theme::Light;
    save_config_to(&config, &config_path).unwrap();

    let loaded = load_config_from(&config_path, dir.path().to_path_buf()).unwrap();
    assert_eq!(loaded.database_path(), dir.path().join("gains.db"));
    assert_eq!(loaded.ui.theme, Theme::Light);

    {
        let db = Database::open(&loaded.database_path()).unwrap();
        let mut store = WorkoutStore::with_defaults(db).unwrap();
        assert_eq!(store.key(), "workouts");
        store.add(NewWorkout::new("Ignored", 5)).unwrap();
    }

    let db = Database::open(&loaded.database_path()).unwrap();
    let clock = pumptracker::workouts::SystemClock;
    let store = WorkoutStore::open(db, clock, loaded.storage.log_key.clone()).unwrap();
    assert!(store.log().is_empty());
}
