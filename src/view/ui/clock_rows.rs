//! Timezone entries and their time displays

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::layout::AppLayout;
use crate::app::{Focus, WorldClock};
use crate::view::theme::Theme;

/// Shown until a row has been formatted once
pub const PLACEHOLDER_TIME: &str = "--:--";

/// The part of `text` that fits in `width` columns with the cursor visible
///
/// Returns the visible text and the cursor column relative to its start.
pub fn visible_text(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    // Keep one column free after the text for the cursor
    let start = (cursor_col + 1).saturating_sub(width);

    let mut col = 0;
    // A wide grapheme straddling `start` is skipped, so the text may begin later
    let mut first_col = None;
    let mut visible = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if col >= start {
            if used + w > width {
                break;
            }
            first_col.get_or_insert(col);
            visible.push_str(grapheme);
            used += w;
        }
        col += w;
    }
    (visible, cursor_col.saturating_sub(first_col.unwrap_or(col)))
}

/// Renders one line per clock: the entry on the left, its time on the right
pub struct ClockRowsRenderer;

impl ClockRowsRenderer {
    pub fn render(frame: &mut Frame, layout: &AppLayout, app: &WorldClock, theme: &Theme) {
        for (idx, row) in app.rows().iter().enumerate() {
            let focused = app.focus() == Focus::Entry(idx);
            if let Some(area) = layout.entries.get(idx) {
                Self::render_entry(
                    frame,
                    *area,
                    row.entry.get(),
                    row.entry.cursor_column(),
                    focused,
                    theme,
                );
            }
            if let Some(area) = layout.displays.get(idx) {
                let text = row.display.as_deref().unwrap_or(PLACEHOLDER_TIME);
                let display = Paragraph::new(format!(" {}", text)).style(
                    Style::default()
                        .fg(theme.display_fg)
                        .add_modifier(Modifier::BOLD),
                );
                frame.render_widget(display, *area);
            }
        }
    }

    fn render_entry(
        frame: &mut Frame,
        area: Rect,
        text: &str,
        cursor_col: usize,
        focused: bool,
        theme: &Theme,
    ) {
        if area.area() == 0 {
            return;
        }
        let style = if focused {
            Style::default()
                .fg(theme.entry_focused_fg)
                .bg(theme.entry_focused_bg)
        } else {
            Style::default().fg(theme.entry_fg).bg(theme.entry_bg)
        };

        let (visible, cursor) = visible_text(text, cursor_col, usize::from(area.width));
        frame.render_widget(Paragraph::new(visible).style(style), area);

        if focused {
            let x = area.x.saturating_add(u16::try_from(cursor).unwrap_or(u16::MAX));
            if x < area.right() {
                frame.set_cursor_position(Position::new(x, area.y));
            }
        }
    }
}
