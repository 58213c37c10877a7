//! Error types shared by the clock, the configuration store and the widgets

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving or formatting a clock row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The identifier is not part of the timezone catalog
    #[error("unknown timezone '{0}'")]
    UnknownZone(String),
}

/// Errors raised by the configuration store
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file exists yet (first launch)
    #[error("no configuration file at {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to access configuration file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_json::Error),
}

/// Errors raised when constructing or driving a widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A construction option failed validation
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// A dropdown was asked to take a value it does not offer
    #[error("'{0}' is not one of the available options")]
    UnknownOption(String),
}
