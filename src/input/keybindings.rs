//! Key names and the configurable commit binding
//!
//! Key names in the configuration use the same spelling as the help line
//! (`"Right"`, `"Enter"`, `"Tab"`, `"F2"`, `"'x'"` or plain `"x"`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Human-readable name of a key code
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => format!("'{}'", c),
        other => format!("{:?}", other),
    }
}

/// Parse a key name as written in the configuration
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let trimmed = name.trim();
    let code = match trimmed.to_lowercase().as_str() {
        "backspace" => KeyCode::Backspace,
        "enter" | "return" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let inner = trimmed
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .unwrap_or(trimmed);
                let mut chars = inner.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        }
    };
    Some(code)
}

/// The set of keys that accept the highlighted suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitKeys {
    codes: Vec<KeyCode>,
}

impl CommitKeys {
    /// Build from configured names; unknown names are skipped with a warning
    ///
    /// Falls back to the Right arrow when nothing usable remains.
    pub fn from_names(names: &[String]) -> Self {
        let mut codes = Vec::new();
        for name in names {
            match parse_key(name) {
                Some(code) if !codes.contains(&code) => codes.push(code),
                Some(_) => {}
                None => tracing::warn!("Ignoring unknown commit key '{}'", name),
            }
        }
        if codes.is_empty() {
            codes.push(KeyCode::Right);
        }
        Self { codes }
    }

    pub fn codes(&self) -> &[KeyCode] {
        &self.codes
    }

    /// Whether `event` is an (unmodified) commit key
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let plain = event.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        plain && self.codes.contains(&event.code)
    }

    /// Names for the help line, e.g. `"Right/Enter"`
    pub fn describe(&self) -> String {
        self.codes
            .iter()
            .map(|code| key_name(*code))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for CommitKeys {
    fn default() -> Self {
        Self {
            codes: vec![KeyCode::Right],
        }
    }
}
