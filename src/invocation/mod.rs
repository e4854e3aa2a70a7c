//! Invocation resolution for ask.
//!
//! Turns the raw CLI token vector into either a question-shaped
//! [`Invocation`] or an [`AdminCommand`], merging explicit overrides with
//! the configuration defaults. Priority: override flag > config > built-in
//! default.
//!
//! The token grammar is deliberately permissive: override flags are
//! extracted by prefix from any position, and unrecognized `--` tokens are
//! treated as ordinary question words rather than rejected.

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::config::Config;

/// A fully resolved question-shaped invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Registry short-name or explicit identifier the user selected.
    pub model_key: String,
    /// Full provider model identifier the router classifies on.
    pub model_id: String,
    /// The question text, space-joined from the positional tokens.
    pub question: String,
    pub temperature: f64,
    pub system_message: String,
    pub max_tokens: u32,
    pub verbose: bool,
}

/// An administrative command that mutates or prints the persisted
/// configuration instead of asking a question.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    /// Register (or overwrite) a short-name -> model identifier mapping.
    AddModel { name: String, id: String },
    /// Set the default model registry key.
    DefaultModel { key: String },
    /// Set the default sampling temperature.
    DefaultTemp { value: f64 },
    /// Set the default maximum completion tokens.
    DefaultMaxTokens { value: u32 },
    /// Set the default system message.
    DefaultSystemMessage { message: String },
    /// Flip the verbose flag.
    DefaultVerbose,
    /// Print the current configuration.
    CurrentConfig,
}

/// Outcome of resolving a token vector: either a question or an
/// administrative command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Ask(Invocation),
    Admin(AdminCommand),
}

/// Errors from turning a token vector into a [`Command`].
///
/// All of these are structural: the boundary reports them and exits
/// non-zero, unlike provider failures which degrade to a printed answer.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    /// No tokens at all: nothing to ask, nothing to administer.
    #[error("no question or command given")]
    EmptyInvocation,
    /// An administrative command was missing required positional arguments.
    #[error("'{command}' expects {expected} argument(s), got {got}")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    /// A recognized flag or command carried a value that does not parse.
    #[error("invalid {what}: '{value}'")]
    InvalidValue { what: &'static str, value: String },
    /// The default model key is not present in the registry.
    #[error("default model '{0}' is not in the model registry; run 'ask add_model {0} <model-id>' or pick another default")]
    DefaultModelUnregistered(String),
}

/// Override flags extracted from the token stream before positional parsing.
#[derive(Debug, Default)]
struct Overrides {
    model: Option<String>,
    temperature: Option<f64>,
    system: Option<String>,
    max_tokens: Option<u32>,
    verbose: bool,
}

impl Overrides {
    /// Splits the token stream into recognized overrides and the remaining
    /// positional tokens, regardless of flag position.
    ///
    /// `--system=` values may themselves contain `=`; only the first `=` of
    /// the flag delimits. Unrecognized `--` tokens land in the positional
    /// remainder.
    fn extract(tokens: &[String]) -> Result<(Self, Vec<String>), ResolveError> {
        let mut overrides = Self::default();
        let mut rest = Vec::with_capacity(tokens.len());

        for token in tokens {
            if let Some(value) = token.strip_prefix("--temp=") {
                overrides.temperature = Some(parse_temperature(value)?);
            } else if let Some(value) = token.strip_prefix("--system=") {
                overrides.system = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("--max_tokens=") {
                overrides.max_tokens = Some(parse_max_tokens(value)?);
            } else if let Some(value) = token.strip_prefix("--model=") {
                overrides.model = Some(value.to_string());
            } else if token == "--verbose" {
                overrides.verbose = true;
            } else {
                rest.push(token.clone());
            }
        }

        Ok((overrides, rest))
    }
}

/// Resolves a raw token vector against the loaded configuration.
///
/// Override flags are extracted first; then the first remaining token is
/// checked against the administrative command table; otherwise the tokens
/// describe a question, with the first token acting as a model selector
/// only when it matches a registry key (or `--model=` was given, which
/// disables first-token matching entirely).
pub fn resolve(tokens: &[String], config: &Config) -> Result<Command, ResolveError> {
    let (overrides, rest) = Overrides::extract(tokens)?;

    if rest.is_empty() {
        return Err(ResolveError::EmptyInvocation);
    }

    if let Some(admin) = parse_admin(&rest)? {
        return Ok(Command::Admin(admin));
    }

    let (model_key, model_id, question_tokens) = select_model(&overrides, &rest, config)?;

    Ok(Command::Ask(Invocation {
        model_key,
        model_id,
        question: question_tokens.join(" "),
        temperature: overrides
            .temperature
            .unwrap_or(config.default_temperature),
        system_message: overrides
            .system
            .unwrap_or_else(|| config.default_system_message.clone()),
        max_tokens: overrides.max_tokens.unwrap_or(config.default_max_tokens),
        verbose: overrides.verbose || config.verbose,
    }))
}

/// Picks the model for a question invocation and returns the tokens that
/// form the question text.
///
/// An explicit `--model=` wins and resolves through the registry when it
/// is a short-name, else is taken verbatim as a full identifier. Without
/// it, a first token matching a registry key selects that model; anything
/// else falls back to the configured default, which must be registered.
fn select_model<'a>(
    overrides: &Overrides,
    rest: &'a [String],
    config: &Config,
) -> Result<(String, String, &'a [String]), ResolveError> {
    if let Some(selector) = &overrides.model {
        let id = config
            .model_id(selector)
            .unwrap_or(selector.as_str())
            .to_string();
        return Ok((selector.clone(), id, rest));
    }

    if let Some(first) = rest.first() {
        if let Some(id) = config.model_id(first) {
            return Ok((first.clone(), id.to_string(), &rest[1..]));
        }
    }

    let key = config.default_model.clone();
    let id = config
        .model_id(&key)
        .ok_or_else(|| ResolveError::DefaultModelUnregistered(key.clone()))?
        .to_string();
    Ok((key, id, rest))
}

/// Parses the token remainder as an administrative command, or returns
/// `None` when the first token is not a command name.
///
/// Value-taking commands use their declared arity and ignore trailing
/// extras, except `default_system_message` which joins the full remainder
/// (messages are free text).
fn parse_admin(rest: &[String]) -> Result<Option<AdminCommand>, ResolveError> {
    let Some(first) = rest.first() else {
        return Ok(None);
    };
    let args = &rest[1..];

    let admin = match first.as_str() {
        "add_model" => match args {
            [name, id, ..] => AdminCommand::AddModel {
                name: name.clone(),
                id: id.clone(),
            },
            _ => return Err(missing("add_model", 2, args.len())),
        },
        "default_model" => match args {
            [key, ..] => AdminCommand::DefaultModel { key: key.clone() },
            [] => return Err(missing("default_model", 1, 0)),
        },
        "default_temp" => match args {
            [value, ..] => AdminCommand::DefaultTemp {
                value: parse_temperature(value)?,
            },
            [] => return Err(missing("default_temp", 1, 0)),
        },
        "default_max_tokens" => match args {
            [value, ..] => AdminCommand::DefaultMaxTokens {
                value: parse_max_tokens(value)?,
            },
            [] => return Err(missing("default_max_tokens", 1, 0)),
        },
        "default_system_message" => {
            if args.is_empty() {
                return Err(missing("default_system_message", 1, 0));
            }
            AdminCommand::DefaultSystemMessage {
                message: args.join(" "),
            }
        }
        "default_verbose" => AdminCommand::DefaultVerbose,
        "current_config" => AdminCommand::CurrentConfig,
        _ => return Ok(None),
    };

    Ok(Some(admin))
}

fn missing(command: &'static str, expected: usize, got: usize) -> ResolveError {
    ResolveError::MissingArgument {
        command,
        expected,
        got,
    }
}

fn parse_temperature(value: &str) -> Result<f64, ResolveError> {
    value.parse().map_err(|_| ResolveError::InvalidValue {
        what: "temperature",
        value: value.to_string(),
    })
}

fn parse_max_tokens(value: &str) -> Result<u32, ResolveError> {
    match value.parse() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ResolveError::InvalidValue {
            what: "max tokens",
            value: value.to_string(),
        }),
    }
}
