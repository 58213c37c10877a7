//! Persisted clock configuration
//!
//! The document is a flat JSON object. Every field carries a serde default,
//! so a partial (or hand-edited) file still loads; missing keys take the
//! values from [`Config::default`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zones shown on first launch, before any configuration was saved
pub const DEFAULT_ZONES: [&str; 3] = ["US/Eastern", "Europe/London", "Asia/Tehran"];

/// Upper bound offered by the "number of clocks" dropdown
pub const DEFAULT_MAX_CLOCKS: usize = 20;

/// Default height of the suggestion popup, in rows
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 8;

/// Theme applied when the configuration does not name one
pub const DEFAULT_THEME: &str = "equilux";

/// How the autocomplete entry decides which zones match the typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring anywhere in the zone name
    #[default]
    Substring,
    /// Case-insensitive match at the start of the zone name
    Prefix,
    /// The typed text is a case-insensitive regular expression
    Regex,
}

/// Clock configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Timezone identifiers, one per clock row, in display order
    pub zones: Vec<String>,

    /// Show seconds in the formatted time (also refreshes every second)
    pub show_seconds: bool,

    /// Name of the color preset
    pub theme: String,

    /// Largest number of clocks the count dropdown offers
    pub max_clocks: usize,

    /// Height of the suggestion popup in rows
    pub max_visible_rows: usize,

    /// Matching policy for timezone autocomplete
    pub match_mode: MatchMode,

    /// Keys that accept the highlighted suggestion (e.g. "Right", "Enter")
    pub commit_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.iter().map(|z| z.to_string()).collect(),
            show_seconds: true,
            theme: DEFAULT_THEME.to_string(),
            max_clocks: DEFAULT_MAX_CLOCKS,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            match_mode: MatchMode::default(),
            commit_keys: vec!["Right".to_string(), "Enter".to_string()],
        }
    }
}

impl Config {
    /// Clamp out-of-range values so the application can always be built
    ///
    /// An empty zone list falls back to [`DEFAULT_ZONES`]; zones beyond
    /// `max_clocks` are dropped.
    pub fn normalized(mut self) -> Self {
        self.max_clocks = self.max_clocks.max(1);
        self.max_visible_rows = self.max_visible_rows.max(1);
        if self.zones.is_empty() {
            self.zones = DEFAULT_ZONES.iter().map(|z| z.to_string()).collect();
        }
        self.zones.truncate(self.max_clocks);
        self
    }
}
