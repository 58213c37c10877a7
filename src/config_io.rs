//! Loading and saving the configuration document

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ConfigError;

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "world-clock";

/// File name of the configuration document
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes the configuration document at a fixed path
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    /// Serialized form of the last document written (or read), used to skip
    /// rewriting an unchanged file on every refresh tick
    last_written: Option<String>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_written: None,
        }
    }

    /// `<config_dir>/world-clock/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, reporting a missing file as [`ConfigError::Missing`]
    pub fn load(&mut self) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        self.last_written = Some(content);
        Ok(config)
    }

    /// Load the document, falling back to defaults on any failure
    ///
    /// A missing file is the normal first-launch case and is only logged at
    /// info level; unreadable or malformed files are logged as warnings.
    pub fn load_or_default(&mut self) -> Config {
        match self.load() {
            Ok(config) => {
                tracing::info!(
                    "Loaded configuration from {} ({} zones)",
                    self.path.display(),
                    config.zones.len()
                );
                config
            }
            Err(ConfigError::Missing(path)) => {
                tracing::info!("No configuration at {}, using defaults", path.display());
                Config::default()
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", anyhow::Error::new(e));
                Config::default()
            }
        }
    }

    /// Write the document, creating the parent directory if needed
    ///
    /// Returns `Ok(false)` when the serialized document is identical to the
    /// last one written, in which case the file is left untouched.
    pub fn save(&mut self, config: &Config) -> Result<bool, ConfigError> {
        let content = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
        if self.last_written.as_deref() == Some(content.as_str()) {
            return Ok(false);
        }

        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        // Write to a sibling file first so a crash never leaves a truncated document
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &content).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        tracing::debug!("Saved configuration to {}", self.path.display());
        self.last_written = Some(content);
        Ok(true)
    }
}
