//! Pure mutation helpers for the in-memory configuration record.
//!
//! None of these touch disk; the caller decides when to persist via
//! [`Config::save`](super::Config::save). Re-applying a set-style mutation
//! with the same value is a no-op.

use super::types::Config;

impl Config {
    /// Registers (or overwrites) a short-name -> model identifier mapping.
    pub fn add_model(&mut self, name: &str, id: &str) {
        self.models.insert(name.to_string(), id.to_string());
    }

    /// Sets the default model registry key.
    ///
    /// The key is not validated here; resolution checks the registry when
    /// the default is actually consulted.
    pub fn set_default_model(&mut self, key: &str) {
        self.default_model = key.to_string();
    }

    /// Sets the default sampling temperature.
    pub fn set_default_temperature(&mut self, value: f64) {
        self.default_temperature = value;
    }

    /// Sets the default maximum completion tokens.
    pub fn set_default_max_tokens(&mut self, value: u32) {
        self.default_max_tokens = value;
    }

    /// Sets the default system message.
    pub fn set_default_system_message(&mut self, message: &str) {
        self.default_system_message = message.to_string();
    }

    /// Flips the verbose flag, returning the new value.
    pub fn toggle_verbose(&mut self) -> bool {
        self.verbose = !self.verbose;
        self.verbose
    }
}
