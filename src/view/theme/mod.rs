//! Theme module - color presets for the clock window
//!
//! Themes are fixed presets selected by name at startup:
//! `equilux` (default), `dark`, `light` and `high-contrast`.
//!
//! # Usage
//!
//! ```ignore
//! use world_clock::view::theme::Theme;
//!
//! let theme = Theme::from_name("light");
//! let fallback = Theme::from_name("no-such-theme"); // equilux
//! ```

mod types;

pub use types::{Theme, BUILTIN_THEMES};
