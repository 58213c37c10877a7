//! UI rendering modules
//!
//! This module contains all rendering logic for the clock window,
//! separated into focused submodules:
//! - `layout` - Screen areas of every control (also used for mouse hit-testing)
//! - `clock_rows` - Timezone entries and their time displays
//! - `controls` - Update button, clock-count dropdown, seconds checkbox
//! - `status_bar` - Key help and pending-change hint
//! - `suggestions` - Autocomplete popup

pub mod clock_rows;
pub mod controls;
pub mod layout;
pub mod status_bar;
pub mod suggestions;

pub use clock_rows::ClockRowsRenderer;
pub use controls::ControlsRenderer;
pub use layout::{compute_layout, AppLayout, PopupLayout};
pub use status_bar::StatusBarRenderer;
pub use suggestions::{popup_area, SuggestionsRenderer};

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{Focus, WorldClock};

/// Window title
pub const WINDOW_TITLE: &str = "Clock";

/// Render the whole window and return the areas that were drawn
pub fn render_app(frame: &mut Frame, app: &WorldClock) -> AppLayout {
    let theme = app.theme();
    let area = frame.area();
    let mut layout = compute_layout(area, app.rows().len());

    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg))
        .title(format!(" {} ", WINDOW_TITLE))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .style(Style::default().bg(theme.window_bg).fg(theme.window_fg));
    frame.render_widget(window, area);

    ClockRowsRenderer::render(frame, &layout, app, theme);
    ControlsRenderer::render(frame, &layout, app, theme);
    StatusBarRenderer::render(frame, layout.status, app, theme);

    // The popup is drawn last so it overlays the rows below its entry
    if let Focus::Entry(idx) = app.focus() {
        if let (Some(row), Some(entry_area)) = (app.rows().get(idx), layout.entries.get(idx)) {
            let list = row.entry.suggestions();
            if list.is_visible() && entry_area.area() > 0 {
                let popup = popup_area(*entry_area, list.visible_row_count(), area);
                SuggestionsRenderer::render(frame, popup, list, theme);
                layout.popup = Some(PopupLayout {
                    row: idx,
                    area: popup,
                });
            }
        }
    }

    layout
}
