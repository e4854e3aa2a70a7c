//! Loading, seeding, and persisting the ask configuration file.
//!
//! The first run writes the built-in template to disk; later runs
//! deserialize whatever the user (or a previous run) left there. Saves go
//! through a sibling temp file and a rename so a crash mid-write cannot
//! leave a truncated config behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Config;

/// Errors from loading or persisting the configuration record.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The persisted file exists but is not a valid configuration record.
    #[error("config at {path} is not valid TOML: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Reading or writing the persisted file failed.
    #[error("failed to {action} config at {path}: {source}")]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The in-memory record could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The platform configuration directory could not be determined.
    #[error("could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Loads the configuration from the platform config path.
    ///
    /// If no config file exists yet, writes the built-in template there
    /// and returns it.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Persists this configuration to the platform config path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path, seeding the built-in
    /// template on first run.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Persistence {
            action: "read",
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serializes this configuration to an explicit path.
    ///
    /// Writes to a sibling `.tmp` file first and renames it into place, so
    /// an interrupted save leaves either the old record or the new one,
    /// never a partial file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Persistence {
                action: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, &toml_str).map_err(|source| ConfigError::Persistence {
            action: "write",
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| ConfigError::Persistence {
            action: "rename temp file over",
            path: path.to_path_buf(),
            source,
        })
    }
}
