//! Command-line boundary for ask.
//!
//! Owns everything user-facing: the clap shell around the raw token vector,
//! usage text, admin-command confirmations, the verbose banner, exit codes,
//! and the rule that structural errors go to stderr with a non-zero exit
//! while provider failures print as answers with exit zero.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::config::Config;
use crate::invocation::{self, AdminCommand, Command, Invocation, ResolveError};
use crate::provider::{self, Credentials};

/// Top-level CLI structure for ask.
///
/// A single trailing, hyphen-permissive token vector: the invocation
/// grammar (prefix-matched overrides anywhere, unknown `--` tokens as
/// question words) is looser than a conventional flag parser accepts, so
/// the resolver owns it and clap only provides the outer shell.
#[derive(Parser)]
#[command(
    name = "ask",
    about = "A command-line assistant that routes questions to LLM providers",
    disable_help_flag = true
)]
pub struct Cli {
    /// Override flags, an administrative command, or the question itself.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Parses command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Runs one invocation end to end and returns the process exit code.
pub async fn run(cli: Cli, creds: &Credentials) -> ExitCode {
    if let Some("--help" | "-h") = cli.tokens.first().map(String::as_str) {
        print!("{}", usage());
        return ExitCode::SUCCESS;
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => return fail(anyhow::Error::new(err)),
    };

    let command = match invocation::resolve(&cli.tokens, &config) {
        Ok(command) => command,
        Err(ResolveError::EmptyInvocation) => {
            eprint!("{}", usage());
            return ExitCode::FAILURE;
        }
        Err(err) => return fail(anyhow::Error::new(err)),
    };

    match command {
        Command::Admin(admin) => match run_admin(admin, &mut config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => fail(err),
        },
        Command::Ask(inv) => {
            run_ask(&inv, creds).await;
            ExitCode::SUCCESS
        }
    }
}

/// Applies an administrative command: mutate, persist, confirm.
fn run_admin(admin: AdminCommand, config: &mut Config) -> Result<()> {
    match admin {
        AdminCommand::AddModel { name, id } => {
            config.add_model(&name, &id);
            config.save()?;
            println!("{} '{}' -> {}", "Registered model".green(), name, id);
        }
        AdminCommand::DefaultModel { key } => {
            config.set_default_model(&key);
            config.save()?;
            println!("{} {}", "Default model set to".green(), key);
        }
        AdminCommand::DefaultTemp { value } => {
            config.set_default_temperature(value);
            config.save()?;
            println!("{} {}", "Default temperature set to".green(), value);
        }
        AdminCommand::DefaultMaxTokens { value } => {
            config.set_default_max_tokens(value);
            config.save()?;
            println!("{} {}", "Default max tokens set to".green(), value);
        }
        AdminCommand::DefaultSystemMessage { message } => {
            config.set_default_system_message(&message);
            config.save()?;
            println!("{}", "Default system message updated".green());
        }
        AdminCommand::DefaultVerbose => {
            let on = config.toggle_verbose();
            config.save()?;
            println!(
                "{} {}",
                "Verbose".green(),
                if on { "on" } else { "off" }
            );
        }
        AdminCommand::CurrentConfig => {
            let path = Config::config_path()?;
            println!("{} {}", "Config path:".bold(), path.display());
            println!();
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}

/// Routes and dispatches a question, printing the uniform outcome.
///
/// Everything here exits zero: an unsupported model or a provider failure
/// is rendered as the answer text, never as a tool crash.
async fn run_ask(inv: &Invocation, creds: &Credentials) {
    match provider::route(&inv.model_id) {
        Ok(family) => {
            if inv.verbose {
                println!(
                    "{} [model: {} | provider: {} | temp: {} | max_tokens: {}]",
                    "ask".bold().cyan(),
                    inv.model_id.yellow(),
                    family,
                    inv.temperature,
                    inv.max_tokens,
                );
                println!();
            }
            let answer = provider::ask(family, inv, creds).await;
            println!("{}", answer.text());
        }
        Err(unsupported) => println!("{unsupported}"),
    }
}

fn fail(err: anyhow::Error) -> ExitCode {
    eprintln!("{} {err:#}", "error:".red().bold());
    ExitCode::FAILURE
}

fn usage() -> String {
    "\
Usage: ask [flags] [<model>] <question...>
       ask <command> [args...]

Flags (any position):
  --model=<key-or-id>   select a model without first-token matching
  --temp=<float>        sampling temperature for this question
  --system=<message>    system message for this question
  --max_tokens=<int>    max completion tokens for this question
  --verbose             print the resolved model and parameters

Commands:
  add_model <short> <full-id>        register a model short-name
  default_model <short>              set the default model key
  default_temp <float>               set the default temperature
  default_max_tokens <int>           set the default max tokens
  default_system_message <text...>   set the default system message
  default_verbose                    toggle verbose output
  current_config                     print the current configuration
"
    .to_string()
}
