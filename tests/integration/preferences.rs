//! Config file handling and theme persistence.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc;

use folio::actors::ThemeSaverActor;
use folio::config::Config;
use folio::tea::Message;
use folio::{Theme, ThemeStore};

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.initial_theme(), Theme::Light);
    assert!(config.access_key().is_none());
}

#[test]
fn test_store_theme_keeps_other_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "access_key = \"k-123\"\ntype_speed = 9\n").unwrap();

    Config::store_theme(&path, Theme::Dark).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.initial_theme(), Theme::Dark);
    assert_eq!(config.access_key(), Some("k-123"));
    assert_eq!(config.effective_type_speed(), 9);
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "theme = [").unwrap();
    assert!(Config::load_from(&path).is_err());
}

/// Toggling through the terminal ends up on disk.
#[tokio::test]
async fn test_terminal_theme_change_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let store = ThemeStore::new(Theme::Light);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = ThemeSaverActor::new(tx, store.subscribe(), path.clone()).spawn();

    let mut interp = folio::Interpreter::new(store.clone(), false);
    interp.submit("theme dark");

    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("saver should report")
        .expect("channel open");
    assert!(matches!(msg, Message::ThemeSaved(Theme::Dark)));
    assert_eq!(
        Config::load_from(&path).unwrap().initial_theme(),
        Theme::Dark
    );

    handle.shutdown();
}
