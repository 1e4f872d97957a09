#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PARAMS: &str = r#"[
    { "id": "uuid_width", "name": "WIDTH", "value": "8" },
    { "id": "uuid_depth", "name": "DEPTH", "value": "$pow(2, uuid_width)" },
    { "id": "uuid_loop", "name": "LOOP", "value": "uuid_loop + 1" }
]"#;

struct Fixture {
    _dir: TempDir,
    params: PathBuf,
    overrides: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir");
    let params = dir.path().join("params.json");
    let overrides = dir.path().join("overrides.json");
    std::fs::write(&params, PARAMS).unwrap();
    std::fs::write(&overrides, r#"{ "uuid_width": "4" }"#).unwrap();
    Fixture {
        _dir: dir,
        params,
        overrides,
    }
}

fn with_params(fixture: &Fixture) -> EvalOptions {
    EvalOptions {
        params: Some(fixture.params.clone()),
        ..EvalOptions::default()
    }
}

#[test]
fn eval_without_symbols() {
    let options = EvalOptions::default();
    assert_eq!(eval_expression("2+3*4", &options).unwrap(), "14");
    assert_eq!(eval_expression("  ", &options).unwrap(), "");
}

#[test]
fn eval_in_base() {
    let options = EvalOptions {
        base: Some(16),
        ..EvalOptions::default()
    };
    assert_eq!(eval_expression("255", &options).unwrap(), "8'hFF");
}

#[test]
fn eval_with_parameters() {
    let fixture = fixture();
    let options = with_params(&fixture);
    assert_eq!(eval_expression("uuid_depth", &options).unwrap(), "256");
    assert_eq!(eval_expression("uuid_loop", &options).unwrap(), "x");
}

#[test]
fn eval_with_overrides() {
    let fixture = fixture();
    let options = EvalOptions {
        overrides: Some(fixture.overrides.clone()),
        ..with_params(&fixture)
    };
    assert_eq!(eval_expression("uuid_depth", &options).unwrap(), "16");
}

#[test]
fn eval_reports_the_reason() {
    let error = eval_expression("1/0", &EvalOptions::default()).unwrap_err();
    assert_eq!(error.to_string(), "invalid expression `1/0`: division by zero");
}

#[test]
fn eval_respects_max_depth() {
    let fixture = fixture();
    let options = EvalOptions {
        max_depth: Some(1),
        ..with_params(&fixture)
    };
    assert!(matches!(
        eval_expression("uuid_depth", &options),
        Err(CliError::Evaluation { .. })
    ));
}

#[test]
fn format_and_refs() {
    let fixture = fixture();
    let options = with_params(&fixture);
    assert_eq!(
        format_expression("uuid_width + uuid_depth", &options).unwrap(),
        "WIDTH + DEPTH"
    );
    assert_eq!(
        list_references("uuid_depth * uuid_width * uuid_depth", &options).unwrap(),
        "uuid_depth\tDEPTH\t$pow(2, uuid_width)\nuuid_width\tWIDTH\t8"
    );
}

#[test]
fn format_needs_params() {
    assert!(matches!(
        format_expression("a", &EvalOptions::default()),
        Err(CliError::MissingParams("format"))
    ));
}

#[test]
fn lex_lists_tokens() {
    assert_eq!(
        lex_expression("8'hFF + w"),
        "Based `8'hFF` @ 0..5\nPlus `+` @ 6..7\nIdent `w` @ 8..9"
    );
}

#[test]
fn usage_mentions_every_command() {
    let text = usage();
    for command in ["eval", "lex", "format", "refs", "help", "version"] {
        assert!(text.contains(command), "usage is missing {command}");
    }
}

fn argv(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn run_dispatches_commands() {
    assert_eq!(run(&argv(&["eval", "8'hFF"])).unwrap(), "255");
    assert_eq!(run(&argv(&["--base=2", "eval", "5"])).unwrap(), "3'b101");
    assert_eq!(run(&argv(&["eval", "5", "--base=8"])).unwrap(), "3'o5");
    assert!(run(&argv(&["version"])).unwrap().starts_with("kx "));
    assert_eq!(run(&argv(&[])).unwrap(), usage());
}

#[test]
fn later_options_win() {
    assert_eq!(
        run(&argv(&["--base=2", "eval", "255", "--base=16"])).unwrap(),
        "8'hFF"
    );
}

#[test]
fn run_rejects_bad_input() {
    assert!(matches!(
        run(&argv(&["compile", "1"])),
        Err(CliError::UnknownCommand(command)) if command == "compile"
    ));
    assert!(matches!(
        run(&argv(&["eval"])),
        Err(CliError::MissingExpression("eval"))
    ));
}
