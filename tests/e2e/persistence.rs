// End-to-end tests for configuration persistence and configurable behavior

use crate::common::harness::ClockTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use world_clock::config::{Config, MatchMode};
use world_clock::config_io::ConfigStore;

/// Every tick writes the current zones and seconds setting
#[test]
fn test_tick_saves_current_state() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();
    assert!(harness.config_path().exists());

    harness.retype("asia/tok").unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.app_mut().set_show_seconds(false);
    harness.tick().unwrap();

    let saved = ConfigStore::new(harness.config_path()).load().unwrap();
    assert_eq!(saved.zones, vec!["Asia/Tokyo", "Europe/London", "Asia/Tehran"]);
    assert!(!saved.show_seconds);
}

/// Settings with no control in the window survive a save
#[test]
fn test_extra_settings_round_trip() {
    let config = Config {
        zones: vec!["UTC".to_string()],
        theme: "high-contrast".to_string(),
        max_clocks: 6,
        match_mode: MatchMode::Prefix,
        ..Config::default()
    };
    let harness = ClockTestHarness::with_config(config.clone(), 80, 24).unwrap();
    assert_eq!(harness.app().theme().name, "high-contrast");

    let saved = ConfigStore::new(harness.config_path()).load().unwrap();
    assert_eq!(saved, config);
}

/// Prefix matching only offers zones that start with the query
#[test]
fn test_prefix_match_mode() {
    let config = Config {
        match_mode: MatchMode::Prefix,
        ..Config::default()
    };
    let mut harness = ClockTestHarness::with_config(config, 80, 24).unwrap();

    harness.retype("london").unwrap();
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());

    harness.retype("europe/l").unwrap();
    let matches = harness.app().rows()[0].entry.suggestions().matches().to_vec();
    assert!(matches.contains(&"Europe/London".to_string()));
    assert!(matches.iter().all(|zone| zone.starts_with("Europe/L")));
}

/// Regex matching treats the query as a pattern; a broken pattern offers nothing
#[test]
fn test_regex_match_mode() {
    let config = Config {
        match_mode: MatchMode::Regex,
        ..Config::default()
    };
    let mut harness = ClockTestHarness::with_config(config, 80, 24).unwrap();

    harness.retype("^asia/to").unwrap();
    let matches = harness.app().rows()[0].entry.suggestions().matches().to_vec();
    assert!(matches.contains(&"Asia/Tokyo".to_string()));
    assert!(matches.iter().all(|zone| zone.starts_with("Asia/To")));

    harness.retype("asia/(").unwrap();
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());
}

/// Commit keys come from the configuration
#[test]
fn test_configured_commit_keys() {
    let config = Config {
        commit_keys: vec!["Tab".to_string()],
        ..Config::default()
    };
    let mut harness = ClockTestHarness::with_config(config, 80, 24).unwrap();

    harness.retype("asia/tok").unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "asia/tok");

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "Asia/Tokyo");
    assert!(harness.screen_row_text(22).contains("Tab accept"));
}
