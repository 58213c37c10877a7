//! Input handling
//!
//! Pure modules are terminal-independent. Runtime-only modules depend on crossterm.

// Pure modules
pub mod matcher;

pub use matcher::Matcher;

// Runtime-only modules (depend on crossterm)
#[cfg(feature = "runtime")]
pub mod keybindings;
