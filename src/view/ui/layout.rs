//! Screen layout of the clock window
//!
//! ```text
//! ┌ Clock ──────────────────────────────────────┐
//! │US/Eastern               03:12:45 PM         │
//! │Europe/London            08:12:45 PM         │
//! │                                             │
//! │[ Update ]  Clocks ◂ 2 ▸  [x] Show Seconds   │
//! │ ...                                         │
//! │Tab next  ↑↓ choose  Right/Enter accept  ... │
//! └─────────────────────────────────────────────┘
//! ```

use ratatui::layout::Rect;

/// Width of a timezone entry
pub const ENTRY_WIDTH: u16 = 24;
/// Width of a time display ("12:00:00 PM" plus padding)
pub const DISPLAY_WIDTH: u16 = 13;
/// Gap between columns
pub const COLUMN_GAP: u16 = 1;
/// Gap between the controls on the control line
pub const CONTROL_GAP: u16 = 2;

pub const UPDATE_WIDTH: u16 = 10;
pub const CLOCK_COUNT_WIDTH: u16 = 13;
pub const SHOW_SECONDS_WIDTH: u16 = 16;

/// Areas drawn during the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppLayout {
    /// Inside of the window border
    pub inner: Rect,
    pub entries: Vec<Rect>,
    pub displays: Vec<Rect>,
    pub update_button: Rect,
    pub clock_count: Rect,
    pub show_seconds: Rect,
    pub status: Rect,
    /// The suggestion popup, if one was drawn
    pub popup: Option<PopupLayout>,
}

/// Where a suggestion popup was drawn and which row owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub row: usize,
    pub area: Rect,
}

/// Compute the areas for a window of `row_count` clocks inside `area`
///
/// Areas that do not fit are clipped to the window (possibly to zero size).
pub fn compute_layout(area: Rect, row_count: usize) -> AppLayout {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let clip = |rect: Rect| rect.intersection(inner);
    let rows = u16::try_from(row_count).unwrap_or(u16::MAX);

    let display_x = inner.x.saturating_add(ENTRY_WIDTH + COLUMN_GAP);
    let mut entries = Vec::with_capacity(row_count);
    let mut displays = Vec::with_capacity(row_count);
    for i in 0..rows {
        let y = inner.y.saturating_add(i);
        entries.push(clip(Rect::new(inner.x, y, ENTRY_WIDTH, 1)));
        displays.push(clip(Rect::new(display_x, y, DISPLAY_WIDTH, 1)));
    }

    // One blank line between the clocks and the controls
    let controls_y = inner.y.saturating_add(rows).saturating_add(1);
    let update_button = clip(Rect::new(inner.x, controls_y, UPDATE_WIDTH, 1));
    let count_x = inner.x.saturating_add(UPDATE_WIDTH + CONTROL_GAP);
    let clock_count = clip(Rect::new(count_x, controls_y, CLOCK_COUNT_WIDTH, 1));
    let seconds_x = count_x.saturating_add(CLOCK_COUNT_WIDTH + CONTROL_GAP);
    let show_seconds = clip(Rect::new(seconds_x, controls_y, SHOW_SECONDS_WIDTH, 1));

    let status = Rect {
        x: inner.x,
        y: inner.bottom().saturating_sub(1),
        width: inner.width,
        height: inner.height.min(1),
    };

    AppLayout {
        inner,
        entries,
        displays,
        update_button,
        clock_count,
        show_seconds,
        status,
        popup: None,
    }
}
