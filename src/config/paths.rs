//! Platform path resolution for the ask configuration file.

use std::path::PathBuf;

use super::store::ConfigError;
use super::types::Config;

impl Config {
    /// Returns the platform-specific configuration directory for ask.
    ///
    /// Returns `~/.config/ask/` on Linux (`XDG_CONFIG_HOME/ask`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the ask configuration file.
    ///
    /// Returns `~/.config/ask/config.toml` on Linux.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Config::config_dir`] fails.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }
}
