// End-to-end tests for the clock rows and the controls below them

use crate::common::harness::ClockTestHarness;
use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyModifiers};
use world_clock::app::Focus;
use world_clock::config::Config;
use world_clock::timezone::all_timezones;

fn tab(harness: &mut ClockTestHarness, times: usize) {
    for _ in 0..times {
        harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    }
}

/// Without a configuration the window shows the three default zones
#[test]
fn test_default_zones_shown_with_seconds() {
    let harness = ClockTestHarness::new(80, 24).unwrap();

    assert_eq!(
        harness.app().zones(),
        vec!["US/Eastern", "Europe/London", "Asia/Tehran"]
    );
    let screen = harness.screen_to_string();
    assert!(screen.contains(" Clock "), "window title missing:\n{screen}");

    assert!(harness.screen_row_text(1).contains("US/Eastern"));
    assert!(harness.screen_row_text(1).contains("07:34:56 AM"));
    assert!(harness.screen_row_text(2).contains("12:34:56 PM"));
    assert!(harness.screen_row_text(3).contains("04:04:56 PM"));
    assert!(harness.screen_row_text(5).contains("[x] Show Seconds"));
    assert!(harness.screen_row_text(5).contains("Clocks ◂ 3 ▸"));
}

/// A single configured zone gives exactly one row, formatted with seconds
#[test]
fn test_single_zone_config() {
    let config = Config {
        zones: vec!["Asia/Tokyo".to_string()],
        show_seconds: true,
        ..Config::default()
    };
    let harness = ClockTestHarness::with_config(config, 80, 24).unwrap();

    assert_eq!(harness.app().rows().len(), 1);
    assert_eq!(harness.app().zones(), vec!["Asia/Tokyo"]);
    assert_eq!(
        harness.app().rows()[0].display.as_deref(),
        Some("09:34:56 PM")
    );
    assert!(harness.screen_row_text(3).contains("Clocks ◂ 1 ▸"));
}

/// Turning seconds off switches every row to hours and minutes
#[test]
fn test_toggle_seconds() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    tab(&mut harness, 4);
    assert_eq!(harness.app().focus(), Focus::ShowSeconds);
    harness
        .send_key(KeyCode::Char(' '), KeyModifiers::NONE)
        .unwrap();
    assert!(!harness.app().show_seconds());
    assert!(harness.screen_row_text(5).contains("[ ] Show Seconds"));

    harness.tick().unwrap();
    assert!(harness.screen_row_text(1).contains("07:34 AM"));
    assert!(!harness.screen_row_text(1).contains("07:34:56"));
}

/// The dropdown only takes effect once Update is pressed
#[test]
fn test_update_changes_row_count() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    tab(&mut harness, 3);
    assert_eq!(harness.app().focus(), Focus::ClockCount);
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(*harness.app().clock_count().get(), 4);
    assert_eq!(harness.app().rows().len(), 3);
    assert!(harness
        .screen_row_text(22)
        .contains("Press Update to show 4 clocks"));

    tab(&mut harness, 2);
    assert_eq!(harness.app().focus(), Focus::Update);
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.app().rows().len(), 4);
    assert_eq!(harness.app().zones()[3], all_timezones()[0]);
    assert!(harness.app().pending_count().is_none());
    assert!(harness.screen_row_text(22).contains("Ctrl+Q"));

    harness.tick().unwrap();
    assert!(harness.app().rows()[3].display.is_some());
}

/// The dropdown and the Update button also work with the mouse
#[test]
fn test_mouse_on_controls() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();
    let count = harness.app().layout().clock_count;

    // Right half of the dropdown picks the next value
    harness.click(count.right() - 2, count.y).unwrap();
    assert_eq!(harness.app().focus(), Focus::ClockCount);
    assert_eq!(*harness.app().clock_count().get(), 4);

    // Left half picks the previous value, twice
    harness.click(count.x, count.y).unwrap();
    harness.click(count.x, count.y).unwrap();
    assert_eq!(*harness.app().clock_count().get(), 2);

    let update = harness.app().layout().update_button;
    harness.click(update.x + 1, update.y).unwrap();
    assert_eq!(harness.app().zones(), vec!["US/Eastern", "Europe/London"]);

    let seconds = harness.app().layout().show_seconds;
    harness.click(seconds.x, seconds.y).unwrap();
    assert!(!harness.app().show_seconds());
}

/// A row whose text is not a known zone keeps showing its last time
#[test]
fn test_unknown_zone_keeps_previous_display() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("Not/AZone").unwrap();
    harness.set_time(Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap());
    harness.tick().unwrap();

    assert_eq!(
        harness.app().rows()[0].display.as_deref(),
        Some("07:34:56 AM")
    );
    assert_eq!(
        harness.app().rows()[1].display.as_deref(),
        Some("01:00:00 PM")
    );
    assert!(harness.screen_row_text(1).contains("Not/AZone"));
}

/// Ctrl+Q and Ctrl+C both quit
#[test]
fn test_quit_keys() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().should_quit());

    let mut harness = ClockTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().should_quit());
}

/// A terminal too small for the layout still renders without panicking
#[test]
fn test_tiny_terminal() {
    let mut harness = ClockTestHarness::new(12, 4).unwrap();
    harness.retype("euro").unwrap();
    harness.tick().unwrap();
    assert_eq!(harness.app().zones()[0], "euro");
}
