//! Key help line at the bottom of the window

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::WorldClock;
use crate::view::theme::Theme;

/// Renders the help line, or a hint while a clock count is waiting for Update
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    pub fn render(frame: &mut Frame, area: Rect, app: &WorldClock, theme: &Theme) {
        if area.area() == 0 {
            return;
        }

        let key_style = Style::default()
            .fg(theme.help_key_fg)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.help_fg);

        let line = match app.pending_count() {
            Some(count) => Line::from(vec![
                Span::styled("Press ", text_style),
                Span::styled("Update", key_style),
                Span::styled(format!(" to show {} clocks", count), text_style),
            ]),
            None => {
                let commit = app.commit_keys().describe();
                let help = [
                    ("Tab", "next"),
                    ("↑↓", "choose"),
                    (commit.as_str(), "accept"),
                    ("Esc", "close"),
                    ("Ctrl+Q", "quit"),
                ];
                let mut spans = Vec::with_capacity(help.len() * 2);
                for (key, action) in help {
                    spans.push(Span::styled(key.to_string(), key_style));
                    spans.push(Span::styled(format!(" {}  ", action), text_style));
                }
                Line::from(spans)
            }
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
