//! Integration tests for config wiring
//!
//! These tests verify that config.toml settings reach the session and store
//! built from them.

use std::fs;

use serial_test::serial;
use taskpal::session::{open_session, save_config, Config, APP_DIR_ENV};

fn setup_temp_home() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    std::env::set_var(APP_DIR_ENV, temp.path());
    temp
}

#[test]
#[serial]
fn test_default_data_file_lives_in_app_dir() {
    let temp = setup_temp_home();

    let config = Config::load().unwrap();
    let mut session = open_session(None, &config).unwrap();
    session.handle("todo a");
    session.handle("bye");

    assert!(temp.path().join("tasks.txt").exists());
}

#[test]
#[serial]
fn test_configured_data_file_is_used() {
    let temp = setup_temp_home();
    let data_file = temp.path().join("elsewhere").join("mine.txt");

    let mut config = Config::default();
    config.storage.data_file = Some(data_file.to_string_lossy().into_owned());
    save_config(&config).unwrap();

    let mut session = open_session(None, &Config::load().unwrap()).unwrap();
    session.handle("todo a");
    session.handle("bye");

    assert!(data_file.exists());
    assert!(!temp.path().join("tasks.txt").exists());
}

#[test]
#[serial]
fn test_autosave_setting_saves_without_bye() {
    let temp = setup_temp_home();

    let mut config = Config::default();
    config.storage.autosave = true;
    save_config(&config).unwrap();

    let mut session = open_session(None, &Config::load().unwrap()).unwrap();
    session.handle("todo a");

    assert_eq!(
        fs::read_to_string(temp.path().join("tasks.txt")).unwrap(),
        "T | 0 | a\n"
    );
}

#[test]
#[serial]
fn test_backup_setting() {
    let temp = setup_temp_home();
    let backup = temp.path().join("tasks.txt.bak");

    let mut config = Config::default();
    config.storage.backup = false;
    save_config(&config).unwrap();

    let mut session = open_session(None, &Config::load().unwrap()).unwrap();
    session.handle("todo a");
    session.save().unwrap();
    session.save().unwrap();
    assert!(!backup.exists());

    config.storage.backup = true;
    save_config(&config).unwrap();
    let session = open_session(None, &Config::load().unwrap()).unwrap();
    session.save().unwrap();
    assert!(backup.exists());
}
