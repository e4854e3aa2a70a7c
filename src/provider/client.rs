//! Provider client abstraction and its rig-core implementation.
//!
//! Contains the [`ChatClient`] trait — the narrow "send a question, get an
//! answer" capability the dispatcher consumes — and [`RigChat`], which wraps
//! rig-core provider clients behind enum dispatch so provider-specific
//! details stay out of the CLI layer.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::{anthropic, gemini, mistral, openai};

use super::family::ProviderFamily;

/// Request fields shared by every provider family.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub question: String,
    /// System message, already subject to family quirks: `None` for
    /// families that do not accept one.
    pub system: Option<String>,
    pub temperature: f64,
    pub max_tokens: u64,
}

/// A synchronous single-turn provider capability.
///
/// One implementation per process talks to the real provider; tests swap
/// in fakes to exercise the dispatch boundary.
#[async_trait]
pub trait ChatClient {
    /// Sends one question and returns the answer text.
    async fn send(&self, request: ChatRequest) -> Result<String>;
}

/// API keys read once from the process environment at startup.
///
/// Keys are never persisted in the configuration record and never printed.
/// Empty values are treated as unset.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    openai: Option<String>,
    anthropic: Option<String>,
    google: Option<String>,
    mistral: Option<String>,
    codestral: Option<String>,
}

impl Credentials {
    /// Reads all per-family API keys from the environment.
    pub fn from_env() -> Self {
        Self {
            openai: read_env(crate::constants::OPENAI_API_KEY_VAR),
            anthropic: read_env(crate::constants::ANTHROPIC_API_KEY_VAR),
            google: read_env(crate::constants::GEMINI_API_KEY_VAR),
            mistral: read_env(crate::constants::MISTRAL_API_KEY_VAR),
            codestral: read_env(crate::constants::CODESTRAL_API_KEY_VAR),
        }
    }

    /// Returns the key for a family, or an error naming the variable to set.
    pub fn require(&self, family: ProviderFamily) -> Result<&str> {
        let key = match family {
            ProviderFamily::OpenAI => &self.openai,
            ProviderFamily::Anthropic => &self.anthropic,
            ProviderFamily::Google => &self.google,
            ProviderFamily::Mistral => &self.mistral,
            ProviderFamily::Codestral => &self.codestral,
        };
        key.as_deref()
            .ok_or_else(|| anyhow!("No API key found for {family}. Set {}.", family.env_key()))
    }
}

fn read_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

/// Internal enum wrapping provider-specific clients.
enum ClientKind {
    Anthropic(anthropic::Client),
    OpenAI(openai::Client),
    Google(gemini::Client),
    Mistral(mistral::Client),
    Codestral(mistral::Client),
}

/// A configured provider client ready to answer one question.
///
/// Wraps a rig-core client and the target model identifier. Agents are
/// constructed per call since they are cheap to create and carry the
/// per-invocation parameters.
pub struct RigChat {
    client: ClientKind,
    model: String,
}

/// Dispatches an operation across provider-specific clients.
///
/// Matches on [`ClientKind`] and executes the same block for each variant,
/// letting the compiler monomorphize per provider.
macro_rules! dispatch {
    ($self:expr, |$client:ident| $body:expr) => {
        match &$self.client {
            ClientKind::Anthropic($client) => $body,
            ClientKind::OpenAI($client) => $body,
            ClientKind::Google($client) => $body,
            ClientKind::Mistral($client) => $body,
            ClientKind::Codestral($client) => $body,
        }
    };
}

impl RigChat {
    /// Builds the provider client for a family from its credential.
    ///
    /// Codestral shares Mistral's client type but is constructed against
    /// the Codestral base URL with its own key.
    ///
    /// # Errors
    ///
    /// Returns an error if the family's API key is missing from the
    /// environment or client construction fails.
    pub fn connect(family: ProviderFamily, model: &str, creds: &Credentials) -> Result<Self> {
        let api_key = creds.require(family)?;
        let client = match family {
            ProviderFamily::Anthropic => ClientKind::Anthropic(
                anthropic::Client::new(api_key).context("Failed to create Anthropic client")?,
            ),
            ProviderFamily::OpenAI => ClientKind::OpenAI(
                openai::Client::new(api_key).context("Failed to create OpenAI client")?,
            ),
            ProviderFamily::Google => ClientKind::Google(
                gemini::Client::new(api_key).context("Failed to create Gemini client")?,
            ),
            ProviderFamily::Mistral => ClientKind::Mistral(
                mistral::Client::new(api_key).context("Failed to create Mistral client")?,
            ),
            ProviderFamily::Codestral => ClientKind::Codestral(
                mistral::Client::builder()
                    .api_key(api_key)
                    .base_url(crate::constants::CODESTRAL_BASE_URL)
                    .build()
                    .context("Failed to create Codestral client")?,
            ),
        };
        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl ChatClient for RigChat {
    /// Sends one single-turn request and returns the full answer text.
    ///
    /// The system message, when present, becomes the agent preamble; each
    /// client maps it to its own wire convention (Anthropic's top-level
    /// system field, OpenAI's system message, and so on).
    async fn send(&self, request: ChatRequest) -> Result<String> {
        dispatch!(self, |client| {
            let mut builder = client
                .agent(&self.model)
                .temperature(request.temperature)
                .max_tokens(request.max_tokens);
            if let Some(system) = &request.system {
                builder = builder.preamble(system.as_str());
            }
            let agent = builder.build();
            let answer = agent.prompt(request.question.as_str()).await;
            Ok(answer?)
        })
    }
}
