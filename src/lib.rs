// World clock library - exposes all core modules for testing

// Core types and config are always available (needed for schema generation)
pub mod config;
pub mod config_io;
pub mod error;
pub mod timezone;

// Modules with internal gating (pure types ungated, runtime code gated internally)
pub mod input;
pub mod widget;

// Runtime-only modules (require the "runtime" feature)
#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod view;
