//! Provider family enumeration and model-identifier routing.
//!
//! Defines [`ProviderFamily`] which identifies which LLM backend a resolved
//! model identifier belongs to, and [`route`] which classifies an identifier
//! by prefix. Routing happens once; everything downstream matches on the
//! tagged variant instead of re-inspecting the identifier string.

use std::fmt;

use thiserror::Error;

/// Identifies which LLM provider handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFamily {
    /// Anthropic (Claude models).
    Anthropic,
    /// Google Generative AI (Gemini models).
    Google,
    /// Mistral (open-mistral / mistral-* models).
    Mistral,
    /// Codestral: Mistral's wire format on a separate endpoint with its
    /// own credential.
    Codestral,
    /// OpenAI (GPT models).
    OpenAI,
}

/// A model identifier that matches no known provider prefix.
///
/// Not fatal: the boundary renders the message as the answer text,
/// consistent with the always-return-a-result contract.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported model: {0}")]
pub struct UnsupportedModel(pub String);

/// Classifies a full model identifier into a provider family.
///
/// Prefix matching in fixed priority order, first match wins:
/// `claude*`, `gemini*`, `open-mi*`/`mistral*`, `codestral*`, `gpt-*`.
/// Pure and deterministic; unknown identifiers are a normal error value,
/// never a panic.
pub fn route(model_id: &str) -> Result<ProviderFamily, UnsupportedModel> {
    if model_id.starts_with("claude") {
        Ok(ProviderFamily::Anthropic)
    } else if model_id.starts_with("gemini") {
        Ok(ProviderFamily::Google)
    } else if model_id.starts_with("open-mi") || model_id.starts_with("mistral") {
        Ok(ProviderFamily::Mistral)
    } else if model_id.starts_with("codestral") {
        Ok(ProviderFamily::Codestral)
    } else if model_id.starts_with("gpt-") {
        Ok(ProviderFamily::OpenAI)
    } else {
        Err(UnsupportedModel(model_id.to_string()))
    }
}

impl ProviderFamily {
    /// Name of the environment variable holding this family's API key.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::Anthropic => crate::constants::ANTHROPIC_API_KEY_VAR,
            Self::Google => crate::constants::GEMINI_API_KEY_VAR,
            Self::Mistral => crate::constants::MISTRAL_API_KEY_VAR,
            Self::Codestral => crate::constants::CODESTRAL_API_KEY_VAR,
            Self::OpenAI => crate::constants::OPENAI_API_KEY_VAR,
        }
    }
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Mistral => "mistral",
            Self::Codestral => "codestral",
            Self::OpenAI => "openai",
        };
        f.write_str(name)
    }
}
