use super::*;

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.to_string()).collect()
}

fn config() -> Config {
    let mut config = Config::default();
    config.add_model("claude-3-opus", "claude-3-opus-20240229");
    config
}

fn ask(raw: &[&str]) -> Invocation {
    match resolve(&tokens(raw), &config()).unwrap() {
        Command::Ask(inv) => inv,
        other => panic!("expected Ask, got {other:?}"),
    }
}

fn admin(raw: &[&str]) -> AdminCommand {
    match resolve(&tokens(raw), &config()).unwrap() {
        Command::Admin(cmd) => cmd,
        other => panic!("expected Admin, got {other:?}"),
    }
}

#[test]
fn test_explicit_model_key_with_overrides_anywhere() {
    let inv = ask(&["claude-3-opus", "--temp=0.2", "what", "is", "2+2"]);
    assert_eq!(inv.model_key, "claude-3-opus");
    assert_eq!(inv.model_id, "claude-3-opus-20240229");
    assert_eq!(inv.temperature, 0.2);
    assert_eq!(inv.question, "what is 2+2");
}

#[test]
fn test_overrides_beat_defaults_regardless_of_position() {
    let inv = ask(&[
        "--max_tokens=42",
        "hello",
        "--temp=1.5",
        "there",
        "--system=be brief",
        "--verbose",
    ]);
    assert_eq!(inv.temperature, 1.5);
    assert_eq!(inv.system_message, "be brief");
    assert_eq!(inv.max_tokens, 42);
    assert!(inv.verbose);
    assert_eq!(inv.question, "hello there");
}

#[test]
fn test_defaults_apply_when_no_overrides() {
    let inv = ask(&["what", "time", "is", "it"]);
    let defaults = Config::default();
    assert_eq!(inv.temperature, defaults.default_temperature);
    assert_eq!(inv.system_message, defaults.default_system_message);
    assert_eq!(inv.max_tokens, defaults.default_max_tokens);
    assert!(!inv.verbose);
}

#[test]
fn test_unmatched_first_token_joins_question_and_default_model_applies() {
    let inv = ask(&["what", "is", "rust"]);
    assert_eq!(inv.model_key, "gpt4o");
    assert_eq!(inv.model_id, "gpt-4o");
    assert_eq!(inv.question, "what is rust");
}

#[test]
fn test_system_override_value_may_contain_equals() {
    let inv = ask(&["--system=x=y means x equals y", "hi"]);
    assert_eq!(inv.system_message, "x=y means x equals y");
}

#[test]
fn test_unrecognized_flags_pass_through_as_question_words() {
    let inv = ask(&["--frobnicate", "the", "--thing"]);
    assert_eq!(inv.question, "--frobnicate the --thing");
}

#[test]
fn test_model_flag_disables_first_token_matching() {
    // "claude-3-opus" would normally be consumed as a model selector.
    let inv = ask(&["--model=gpt4o", "claude-3-opus", "is", "a", "model"]);
    assert_eq!(inv.model_key, "gpt4o");
    assert_eq!(inv.model_id, "gpt-4o");
    assert_eq!(inv.question, "claude-3-opus is a model");
}

#[test]
fn test_model_flag_accepts_full_identifier_verbatim() {
    let inv = ask(&["--model=gpt-4-turbo", "hi"]);
    assert_eq!(inv.model_key, "gpt-4-turbo");
    assert_eq!(inv.model_id, "gpt-4-turbo");
}

#[test]
fn test_empty_tokens_is_empty_invocation() {
    let err = resolve(&[], &config()).unwrap_err();
    assert_eq!(err, ResolveError::EmptyInvocation);
}

#[test]
fn test_only_flags_is_empty_invocation() {
    let err = resolve(&tokens(&["--verbose"]), &config()).unwrap_err();
    assert_eq!(err, ResolveError::EmptyInvocation);
}

#[test]
fn test_invalid_temperature_override_is_rejected() {
    let err = resolve(&tokens(&["--temp=warm", "hi"]), &config()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidValue {
            what: "temperature",
            value: "warm".to_string(),
        }
    );
}

#[test]
fn test_unregistered_default_model_fails_resolution() {
    let mut config = config();
    config.set_default_model("nonexistent");
    let err = resolve(&tokens(&["hi"]), &config).unwrap_err();
    assert_eq!(
        err,
        ResolveError::DefaultModelUnregistered("nonexistent".to_string())
    );
}

#[test]
fn test_explicit_model_skips_default_registry_invariant() {
    // A broken default must not affect an explicitly selected model.
    let mut config = config();
    config.set_default_model("nonexistent");
    let cmd = resolve(&tokens(&["claude-3-opus", "hi"]), &config).unwrap();
    assert!(matches!(cmd, Command::Ask(inv) if inv.model_id == "claude-3-opus-20240229"));
}

#[test]
fn test_add_model_parses() {
    assert_eq!(
        admin(&["add_model", "x", "gpt-4o-mini"]),
        AdminCommand::AddModel {
            name: "x".to_string(),
            id: "gpt-4o-mini".to_string(),
        }
    );
}

#[test]
fn test_add_model_missing_argument() {
    let err = resolve(&tokens(&["add_model", "x"]), &config()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::MissingArgument {
            command: "add_model",
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn test_default_temp_parses_and_rejects_garbage() {
    assert_eq!(
        admin(&["default_temp", "0.7"]),
        AdminCommand::DefaultTemp { value: 0.7 }
    );
    let err = resolve(&tokens(&["default_temp", "hot"]), &config()).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidValue { .. }));
}

#[test]
fn test_default_max_tokens_rejects_zero() {
    let err = resolve(&tokens(&["default_max_tokens", "0"]), &config()).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidValue { .. }));
}

#[test]
fn test_default_system_message_joins_remainder() {
    assert_eq!(
        admin(&["default_system_message", "you", "are", "terse"]),
        AdminCommand::DefaultSystemMessage {
            message: "you are terse".to_string(),
        }
    );
}

#[test]
fn test_niladic_admin_commands() {
    assert_eq!(admin(&["default_verbose"]), AdminCommand::DefaultVerbose);
    assert_eq!(admin(&["current_config"]), AdminCommand::CurrentConfig);
}

#[test]
fn test_admin_recognition_happens_after_override_extraction() {
    assert_eq!(
        admin(&["--verbose", "default_model", "claude"]),
        AdminCommand::DefaultModel {
            key: "claude".to_string(),
        }
    );
}
