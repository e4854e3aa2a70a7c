//! Struct definitions and serde defaults for ask configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for ask, deserialized from `config.toml`.
///
/// Fields use serde defaults so a hand-edited config missing a field
/// still loads with the built-in template value for it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Registry key of the model used when none is selected explicitly.
    #[serde(default = "default_model_key")]
    pub default_model: String,
    /// Sampling temperature in `[0.0, 2.0]`. Providers enforce their own
    /// upper bounds; ask does not clamp.
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
    /// System message sent with every question. May be empty.
    #[serde(default = "default_system_message")]
    pub default_system_message: String,
    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,
    /// Whether to print the resolved model and parameters before the answer.
    #[serde(default)]
    pub verbose: bool,
    /// Model registry: short-name -> full provider model identifier.
    #[serde(default = "default_models")]
    pub models: BTreeMap<String, String>,
}

/// Returns the default model registry key (`"gpt4o"`).
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_model_key() -> String {
    crate::constants::DEFAULT_MODEL_KEY.to_string()
}

fn default_temperature() -> f64 {
    crate::constants::DEFAULT_TEMPERATURE
}

fn default_system_message() -> String {
    crate::constants::DEFAULT_SYSTEM_MESSAGE.to_string()
}

fn default_max_tokens() -> u32 {
    crate::constants::DEFAULT_MAX_TOKENS
}

/// Returns the seed registry: one short-name per supported provider family.
pub(super) fn default_models() -> BTreeMap<String, String> {
    crate::constants::DEFAULT_MODELS
        .iter()
        .map(|(name, id)| (name.to_string(), id.to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model_key(),
            default_temperature: default_temperature(),
            default_system_message: default_system_message(),
            default_max_tokens: default_max_tokens(),
            verbose: false,
            models: default_models(),
        }
    }
}

impl Config {
    /// Looks up a registry short-name, returning the full model identifier.
    pub fn model_id(&self, key: &str) -> Option<&str> {
        self.models.get(key).map(String::as_str)
    }
}
