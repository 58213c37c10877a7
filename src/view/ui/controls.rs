//! Update button, clock-count dropdown and seconds checkbox

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::layout::AppLayout;
use crate::app::{Focus, WorldClock};
use crate::view::theme::Theme;

pub const UPDATE_LABEL: &str = "[ Update ]";
pub const SHOW_SECONDS_LABEL: &str = "Show Seconds";

/// Text of the clock-count dropdown, e.g. `"Clocks ◂ 3 ▸"`
pub fn dropdown_text(label: &str, value: &impl std::fmt::Display) -> String {
    format!("{} ◂ {} ▸", label, value)
}

/// Text of a checkbox, e.g. `"[x] Show Seconds"`
pub fn checkbox_text(label: &str, checked: bool) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, label)
}

/// Renders the control line below the clocks
pub struct ControlsRenderer;

impl ControlsRenderer {
    pub fn render(frame: &mut Frame, layout: &AppLayout, app: &WorldClock, theme: &Theme) {
        let focus = app.focus();

        // A pending count makes the button stand out until it is applied
        let mut update_style = Self::style(focus == Focus::Update, theme);
        if app.pending_count().is_some() {
            update_style = update_style.add_modifier(Modifier::BOLD);
        }
        Self::render_text(frame, layout.update_button, UPDATE_LABEL, update_style);

        let dropdown = app.clock_count();
        Self::render_text(
            frame,
            layout.clock_count,
            &dropdown_text(dropdown.label(), dropdown.get()),
            Self::style(focus == Focus::ClockCount, theme),
        );

        Self::render_text(
            frame,
            layout.show_seconds,
            &checkbox_text(SHOW_SECONDS_LABEL, app.show_seconds()),
            Self::style(focus == Focus::ShowSeconds, theme),
        );
    }

    fn style(focused: bool, theme: &Theme) -> Style {
        if focused {
            Style::default()
                .fg(theme.control_focused_fg)
                .bg(theme.control_focused_bg)
        } else {
            Style::default().fg(theme.control_fg)
        }
    }

    fn render_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
        if area.area() > 0 {
            frame.render_widget(Paragraph::new(text.to_string()).style(style), area);
        }
    }
}
