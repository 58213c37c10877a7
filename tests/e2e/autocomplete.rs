// End-to-end tests for the timezone entries and their suggestion popup

use crate::common::harness::ClockTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use world_clock::timezone::all_timezones;

/// Typing a query opens the popup below the entry; clicking a row commits it
#[test]
fn test_click_on_suggestion_commits_zone() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("europe/lond").unwrap();
    let list = harness.app().rows()[0].entry.suggestions();
    assert!(list.is_visible());
    assert_eq!(list.matches(), ["Europe/London"]);

    // The popup covers the line right below the first entry
    let popup = harness.app().layout().popup.expect("popup should be drawn");
    assert_eq!(popup.row, 0);
    assert_eq!(popup.area.y, 2);
    assert!(harness.screen_row_text(2).contains("Europe/London"));

    harness.click(5, 2).unwrap();
    assert_eq!(harness.app().zones()[0], "Europe/London");
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());
    assert!(harness.app().layout().popup.is_none());
}

/// Deleting the whole query hides the popup
#[test]
fn test_empty_query_hides_popup() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("Tok").unwrap();
    assert!(harness.app().rows()[0].entry.suggestions().is_visible());

    for _ in 0..3 {
        harness
            .send_key(KeyCode::Backspace, KeyModifiers::NONE)
            .unwrap();
    }
    assert_eq!(harness.app().zones()[0], "");
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());
    assert!(harness.app().layout().popup.is_none());
}

/// Down highlights the first match; Enter accepts it
#[test]
fn test_keyboard_selection_and_commit() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("asia/tok").unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(
        harness.app().rows()[0].entry.suggestions().selected(),
        Some("Asia/Tokyo")
    );

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "Asia/Tokyo");
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());

    harness.tick().unwrap();
    assert!(harness.screen_row_text(1).contains("09:34:56 PM"));
}

/// Right accepts a highlighted suggestion, and only moves the cursor otherwise
#[test]
fn test_right_commits_only_with_selection() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("london").unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "london");
    assert!(harness.app().rows()[0].entry.suggestions().is_visible());

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "Europe/London");
}

/// Esc closes the popup and keeps the typed text
#[test]
fn test_escape_dismisses_popup() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("america").unwrap();
    assert!(harness.app().layout().popup.is_some());

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().zones()[0], "america");
    assert!(harness.app().layout().popup.is_none());
}

/// A long match list is limited to the configured number of rows and
/// scrolls with the selection
#[test]
fn test_popup_height_limited_and_scrolls() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("america/").unwrap();
    let popup = harness.app().layout().popup.unwrap();
    assert_eq!(popup.area.height, 8);

    for _ in 0..10 {
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    }
    let list = harness.app().rows()[0].entry.suggestions();
    assert_eq!(list.selection(), Some(9));
    assert_eq!(list.scroll_offset(), 2);

    // The highlighted row is the last visible one (names may be cut at the popup edge)
    let selected: String = list.selected().unwrap().chars().take(16).collect();
    assert!(harness.screen_row_text(2 + 7).contains(&selected));
}

/// Only the focused entry shows a popup
#[test]
fn test_focus_change_closes_popup() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("pacific").unwrap();
    assert!(harness.app().layout().popup.is_some());

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert!(harness.app().layout().popup.is_none());
    assert!(!harness.app().rows()[0].entry.suggestions().is_visible());
    assert_eq!(harness.app().zones()[0], "pacific");
}

/// Clicking outside the popup closes it without changing the text
#[test]
fn test_click_outside_dismisses_popup() {
    let mut harness = ClockTestHarness::new(80, 24).unwrap();

    harness.retype("pacific").unwrap();
    harness.click(60, 12).unwrap();
    assert!(harness.app().layout().popup.is_none());
    assert_eq!(harness.app().zones()[0], "pacific");
}

/// On a short terminal the popup is cut at the bottom edge; moving the
/// highlight scrolls within the rows that are actually drawn
#[test]
fn test_clipped_popup_keeps_selection_on_screen() {
    let mut harness = ClockTestHarness::new(80, 8).unwrap();

    harness.retype("america/").unwrap();
    let popup = harness.app().layout().popup.unwrap();
    assert_eq!(popup.area.y, 2);
    assert_eq!(popup.area.height, 6);

    for _ in 0..7 {
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    }
    let list = harness.app().rows()[0].entry.suggestions();
    assert_eq!(list.selection(), Some(6));
    assert_eq!(list.scroll_offset(), 1);
    assert_eq!(list.visible_rows().len(), 6);

    // The popup is one column of padding plus 23 columns of name
    let selected: String = list.selected().unwrap().chars().take(23).collect();
    assert!(
        harness.screen_row_text(7).contains(&selected),
        "highlighted suggestion should be on the last popup row:\n{}",
        harness.screen_to_string()
    );

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(
        harness.app().zones()[0],
        all_timezones()
            .iter()
            .filter(|zone| zone.to_lowercase().contains("america/"))
            .nth(6)
            .unwrap()
            .as_str()
    );
}
