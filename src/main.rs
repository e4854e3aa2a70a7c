//! Entry point for ask, a command-line assistant that routes questions to
//! LLM providers.
//!
//! This binary loads environment variables, reads the per-family API keys
//! once into an explicit [`provider::Credentials`] value, and hands the raw
//! argument vector to the [`cli`] boundary.

mod cli;
mod config;
mod constants;
mod invocation;
mod provider;

use std::process::ExitCode;

/// Runs the ask CLI.
///
/// Loads `.env` files (silently ignored if absent) before reading
/// credentials, then resolves and dispatches the invocation on a
/// current-thread runtime: one question, one provider call.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let creds = provider::Credentials::from_env();
    let cli = cli::parse();
    cli::run(cli, &creds).await
}
