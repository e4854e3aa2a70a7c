//! Request dispatch and outcome normalization.
//!
//! This is the boundary past which no provider error propagates: every
//! transport, auth, or construction failure is folded into a printable
//! [`Answer::Failure`]. A failed question should read as an answer, not a
//! tool crash.

use super::client::{ChatClient, ChatRequest, Credentials, RigChat};
use super::family::ProviderFamily;
use crate::invocation::Invocation;

/// Uniform outcome of a provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// The provider answered; the payload is the answer text.
    Reply(String),
    /// The call failed; the payload is a human-readable message embedding
    /// the underlying error.
    Failure(String),
}

impl Answer {
    /// The printable text of this outcome, success or not.
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Failure(text) => text,
        }
    }
}

/// Connects to the family's provider and dispatches one question.
///
/// Production entry point: builds the rig-backed client for `family` and
/// the invocation's model, then delegates to [`dispatch`]. Connection
/// failures (missing key, client construction) are folded into
/// [`Answer::Failure`] like any other provider failure.
pub async fn ask(family: ProviderFamily, inv: &Invocation, creds: &Credentials) -> Answer {
    match RigChat::connect(family, &inv.model_id, creds) {
        Ok(client) => dispatch(&client, family, inv).await,
        Err(err) => failure(&err),
    }
}

/// Builds the family-specific request and sends it through the client.
///
/// Family quirks applied here:
/// - Google takes no system message; one supplied is silently dropped.
/// - Everyone else receives the system message (empty treated as none);
///   how it lands on the wire (Anthropic's top-level field, OpenAI's
///   system message) is the client's concern.
///
/// Never returns an error: any fault from the client becomes
/// [`Answer::Failure`].
pub async fn dispatch(client: &dyn ChatClient, family: ProviderFamily, inv: &Invocation) -> Answer {
    let system = match family {
        ProviderFamily::Google => None,
        _ if inv.system_message.is_empty() => None,
        _ => Some(inv.system_message.clone()),
    };

    let request = ChatRequest {
        question: inv.question.clone(),
        system,
        temperature: inv.temperature,
        max_tokens: u64::from(inv.max_tokens),
    };

    match client.send(request).await {
        Ok(text) => Answer::Reply(text),
        Err(err) => failure(&err),
    }
}

fn failure(err: &anyhow::Error) -> Answer {
    Answer::Failure(format!("An error occurred: {err:#}"))
}
