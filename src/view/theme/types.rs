use ratatui::style::Color;

use crate::config::DEFAULT_THEME;

/// Names of the built-in presets, in the order they are listed
pub const BUILTIN_THEMES: [&str; 4] = ["equilux", "dark", "light", "high-contrast"];

/// Colors used by the clock window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    // Window
    pub window_bg: Color,
    pub window_fg: Color,
    pub border_fg: Color,

    // Timezone entries
    pub entry_bg: Color,
    pub entry_fg: Color,
    pub entry_focused_bg: Color,
    pub entry_focused_fg: Color,

    // Time displays
    pub display_fg: Color,

    // Suggestion popup
    pub popup_bg: Color,
    pub popup_fg: Color,
    pub popup_selected_bg: Color,
    pub popup_selected_fg: Color,

    // Controls (button, dropdown, checkbox)
    pub control_fg: Color,
    pub control_focused_bg: Color,
    pub control_focused_fg: Color,

    // Help line
    pub help_fg: Color,
    pub help_key_fg: Color,
}

impl Theme {
    /// Grey-on-charcoal preset, the default look
    pub fn equilux() -> Self {
        Self {
            name: "equilux".to_string(),
            window_bg: Color::Rgb(70, 70, 70),
            window_fg: Color::Rgb(168, 168, 168),
            border_fg: Color::Rgb(110, 110, 110),
            entry_bg: Color::Rgb(56, 56, 56),
            entry_fg: Color::Rgb(200, 200, 200),
            entry_focused_bg: Color::Rgb(90, 90, 90),
            entry_focused_fg: Color::Rgb(230, 230, 230),
            display_fg: Color::Rgb(220, 220, 220),
            popup_bg: Color::Rgb(48, 48, 48),
            popup_fg: Color::Rgb(190, 190, 190),
            popup_selected_bg: Color::Rgb(120, 120, 120),
            popup_selected_fg: Color::Rgb(255, 255, 255),
            control_fg: Color::Rgb(190, 190, 190),
            control_focused_bg: Color::Rgb(110, 110, 110),
            control_focused_fg: Color::Rgb(255, 255, 255),
            help_fg: Color::Rgb(140, 140, 140),
            help_key_fg: Color::Rgb(210, 210, 210),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            window_bg: Color::Rgb(30, 30, 30),
            window_fg: Color::Rgb(212, 212, 212),
            border_fg: Color::Rgb(80, 80, 80),
            entry_bg: Color::Rgb(45, 45, 45),
            entry_fg: Color::Rgb(212, 212, 212),
            entry_focused_bg: Color::Rgb(38, 79, 120),
            entry_focused_fg: Color::Rgb(255, 255, 255),
            display_fg: Color::Rgb(156, 220, 254),
            popup_bg: Color::DarkGray,
            popup_fg: Color::White,
            popup_selected_bg: Color::Cyan,
            popup_selected_fg: Color::Black,
            control_fg: Color::Rgb(212, 212, 212),
            control_focused_bg: Color::Rgb(38, 79, 120),
            control_focused_fg: Color::White,
            help_fg: Color::Rgb(128, 128, 128),
            help_key_fg: Color::Rgb(220, 220, 170),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            window_bg: Color::Rgb(255, 255, 255),
            window_fg: Color::Rgb(30, 30, 30),
            border_fg: Color::Rgb(180, 180, 180),
            entry_bg: Color::Rgb(240, 240, 240),
            entry_fg: Color::Rgb(30, 30, 30),
            entry_focused_bg: Color::Rgb(173, 214, 255),
            entry_focused_fg: Color::Black,
            display_fg: Color::Rgb(0, 0, 128),
            popup_bg: Color::Rgb(232, 232, 232),
            popup_fg: Color::Black,
            popup_selected_bg: Color::Rgb(0, 120, 215),
            popup_selected_fg: Color::White,
            control_fg: Color::Rgb(30, 30, 30),
            control_focused_bg: Color::Rgb(173, 214, 255),
            control_focused_fg: Color::Black,
            help_fg: Color::Rgb(110, 110, 110),
            help_key_fg: Color::Rgb(0, 0, 160),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            window_bg: Color::Black,
            window_fg: Color::White,
            border_fg: Color::White,
            entry_bg: Color::Black,
            entry_fg: Color::White,
            entry_focused_bg: Color::Yellow,
            entry_focused_fg: Color::Black,
            display_fg: Color::LightGreen,
            popup_bg: Color::Black,
            popup_fg: Color::White,
            popup_selected_bg: Color::White,
            popup_selected_fg: Color::Black,
            control_fg: Color::White,
            control_focused_bg: Color::Yellow,
            control_focused_fg: Color::Black,
            help_fg: Color::White,
            help_key_fg: Color::Yellow,
        }
    }

    /// Get a theme by name, defaults to equilux if not found
    pub fn from_name(name: &str) -> Self {
        let normalized_name = name.trim().to_lowercase().replace('_', "-");
        match normalized_name.as_str() {
            "equilux" => Self::equilux(),
            "dark" => Self::dark(),
            "light" => Self::light(),
            "high-contrast" => Self::high_contrast(),
            _ => {
                tracing::warn!("Unknown theme '{}', using {}", name, DEFAULT_THEME);
                Self::equilux()
            }
        }
    }

    /// Get all available theme names
    pub fn available_themes() -> Vec<String> {
        BUILTIN_THEMES.iter().map(|name| name.to_string()).collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::equilux()
    }
}
