//! Autocomplete suggestions popup rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::view::theme::Theme;
use crate::widget::SuggestionList;

/// Area for a popup of `rows` lines directly below `entry`, clipped to `screen`
pub fn popup_area(entry: Rect, rows: usize, screen: Rect) -> Rect {
    let height = u16::try_from(rows).unwrap_or(u16::MAX);
    Rect::new(entry.x, entry.bottom(), entry.width, height).intersection(screen)
}

/// Renders the autocomplete suggestions popup
pub struct SuggestionsRenderer;

impl SuggestionsRenderer {
    /// Render the visible window of `list` into `area`, highlighting the
    /// selected suggestion
    pub fn render(frame: &mut Frame, area: Rect, list: &SuggestionList, theme: &Theme) {
        if !list.is_visible() || area.area() == 0 {
            return;
        }

        let normal = Style::default().fg(theme.popup_fg).bg(theme.popup_bg);
        let selected = Style::default()
            .fg(theme.popup_selected_fg)
            .bg(theme.popup_selected_bg)
            .add_modifier(Modifier::BOLD);

        let offset = list.scroll_offset();
        let width = usize::from(area.width);
        let lines: Vec<Line> = list
            .visible_rows()
            .iter()
            .take(usize::from(area.height))
            .enumerate()
            .map(|(idx, zone)| {
                let style = if list.selection() == Some(offset + idx) {
                    selected
                } else {
                    normal
                };
                // Pad so the highlight spans the whole popup width
                Line::from(Span::styled(format!(" {:<width$}", zone, width = width), style))
            })
            .collect();

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).style(normal), area);
    }
}
