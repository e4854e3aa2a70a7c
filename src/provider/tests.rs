use super::*;
use crate::invocation::Invocation;

use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::Mutex;

const ALL_FAMILIES: [ProviderFamily; 5] = [
    ProviderFamily::Anthropic,
    ProviderFamily::Google,
    ProviderFamily::Mistral,
    ProviderFamily::Codestral,
    ProviderFamily::OpenAI,
];

fn invocation() -> Invocation {
    Invocation {
        model_key: "claude".to_string(),
        model_id: "claude-3-5-sonnet-20241022".to_string(),
        question: "what is 2+2".to_string(),
        temperature: 0.2,
        system_message: "be brief".to_string(),
        max_tokens: 100,
        verbose: false,
    }
}

/// Fake client that always fails with a fixed message.
struct FailingClient(&'static str);

#[async_trait]
impl ChatClient for FailingClient {
    async fn send(&self, _request: ChatRequest) -> anyhow::Result<String> {
        Err(anyhow!(self.0))
    }
}

/// Fake client that records the request it was given.
#[derive(Default)]
struct RecordingClient(Mutex<Option<ChatRequest>>);

#[async_trait]
impl ChatClient for RecordingClient {
    async fn send(&self, request: ChatRequest) -> anyhow::Result<String> {
        *self.0.lock().unwrap() = Some(request);
        Ok("recorded".to_string())
    }
}

#[test]
fn test_route_prefixes() {
    assert_eq!(route("claude-3-opus-20240229"), Ok(ProviderFamily::Anthropic));
    assert_eq!(route("gemini-1.5-pro"), Ok(ProviderFamily::Google));
    assert_eq!(route("open-mistral-7b"), Ok(ProviderFamily::Mistral));
    assert_eq!(route("mistral-large-latest"), Ok(ProviderFamily::Mistral));
    assert_eq!(route("codestral-latest"), Ok(ProviderFamily::Codestral));
    assert_eq!(route("gpt-4o"), Ok(ProviderFamily::OpenAI));
}

#[test]
fn test_route_is_pure() {
    for id in ["gpt-4o", "claude-x", "no-such-model"] {
        assert_eq!(route(id), route(id));
    }
}

#[test]
fn test_route_priority_is_prefix_order() {
    // First match wins even when a later prefix appears inside the id.
    assert_eq!(route("gemini-gpt-4o"), Ok(ProviderFamily::Google));
    assert_eq!(route("claude-gemini"), Ok(ProviderFamily::Anthropic));
}

#[test]
fn test_route_unknown_is_a_value_not_a_crash() {
    let err = route("llama-70b").unwrap_err();
    assert_eq!(err, UnsupportedModel("llama-70b".to_string()));
    assert_eq!(err.to_string(), "Unsupported model: llama-70b");
}

#[test]
fn test_bare_gpt_without_dash_is_unsupported() {
    assert!(route("gpt4o").is_err());
}

#[tokio::test]
async fn test_dispatch_converts_client_errors_to_failure_for_every_family() {
    let client = FailingClient("quota exceeded");
    let inv = invocation();
    for family in ALL_FAMILIES {
        let answer = dispatch(&client, family, &inv).await;
        match answer {
            Answer::Failure(msg) => assert!(msg.contains("quota exceeded"), "{msg}"),
            Answer::Reply(_) => panic!("expected failure for {family}"),
        }
    }
}

#[tokio::test]
async fn test_dispatch_passes_parameters_through() {
    let client = RecordingClient::default();
    let answer = dispatch(&client, ProviderFamily::OpenAI, &invocation()).await;
    assert_eq!(answer, Answer::Reply("recorded".to_string()));

    let request = client.0.lock().unwrap().take().unwrap();
    assert_eq!(request.question, "what is 2+2");
    assert_eq!(request.system.as_deref(), Some("be brief"));
    assert_eq!(request.temperature, 0.2);
    assert_eq!(request.max_tokens, 100);
}

#[tokio::test]
async fn test_dispatch_drops_system_message_for_google() {
    let client = RecordingClient::default();
    dispatch(&client, ProviderFamily::Google, &invocation()).await;

    let request = client.0.lock().unwrap().take().unwrap();
    assert_eq!(request.system, None);
    assert_eq!(request.question, "what is 2+2");
}

#[tokio::test]
async fn test_dispatch_treats_empty_system_message_as_none() {
    let client = RecordingClient::default();
    let mut inv = invocation();
    inv.system_message = String::new();
    dispatch(&client, ProviderFamily::Anthropic, &inv).await;

    let request = client.0.lock().unwrap().take().unwrap();
    assert_eq!(request.system, None);
}

#[test]
fn test_env_keys_name_the_right_variables() {
    assert_eq!(ProviderFamily::OpenAI.env_key(), "OPENAI_API_KEY");
    assert_eq!(ProviderFamily::Codestral.env_key(), "CODESTRAL_API_KEY");
    assert_eq!(ProviderFamily::Mistral.env_key(), "MISTRAL_API_KEY");
}

#[test]
fn test_missing_credential_names_the_variable() {
    let creds = Credentials::default();
    let err = creds.require(ProviderFamily::Anthropic).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("ANTHROPIC_API_KEY"), "{msg}");
}
