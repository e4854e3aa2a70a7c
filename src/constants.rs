//! Centralized constants for ask.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "ask";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

// --- Built-in configuration template ---

/// Registry key of the default model in a fresh configuration.
pub const DEFAULT_MODEL_KEY: &str = "gpt4o";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Default maximum tokens for completions.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default system message sent with every question.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "Respond as short as possible. \
You're cmdline shell assistant. No markdown but use all quote types available.";

/// Seed model registry for a fresh configuration: one short-name per
/// supported provider family.
pub const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("gpt4o", "gpt-4o"),
    ("gpt4o-mini", "gpt-4o-mini"),
    ("claude", "claude-3-5-sonnet-20241022"),
    ("gemini", "gemini-1.5-pro"),
    ("mistral", "mistral-large-latest"),
    ("codestral", "codestral-latest"),
];

// --- Provider credentials ---

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Anthropic API key.
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Environment variable holding the Google Generative AI API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the Mistral API key.
pub const MISTRAL_API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Environment variable holding the Codestral API key (distinct from
/// the Mistral key; Codestral is served from its own endpoint).
pub const CODESTRAL_API_KEY_VAR: &str = "CODESTRAL_API_KEY";

/// Base URL for the Codestral endpoint. Wire-compatible with Mistral
/// but requires its own credential.
pub const CODESTRAL_BASE_URL: &str = "https://codestral.mistral.ai";
