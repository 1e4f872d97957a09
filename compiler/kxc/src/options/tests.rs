#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn options_and_positionals() {
    let (options, positional) = parse_eval_options(&args(&[
        "--params=p.json",
        "WIDTH * 2",
        "--base=16",
        "--max-depth=8",
        "--overrides=o.json",
    ]))
    .unwrap();
    assert_eq!(
        options,
        EvalOptions {
            params: Some(PathBuf::from("p.json")),
            overrides: Some(PathBuf::from("o.json")),
            base: Some(16),
            max_depth: Some(8),
        }
    );
    assert_eq!(positional, vec!["WIDTH * 2".to_owned()]);
}

#[test]
fn unknown_flags_are_skipped() {
    let (options, positional) = parse_eval_options(&args(&["--verbose", "1+1"])).unwrap();
    assert_eq!(options, EvalOptions::default());
    assert_eq!(positional, vec!["1+1".to_owned()]);
}

#[test]
fn invalid_numbers_are_errors() {
    let error = parse_eval_options(&args(&["--base=hex"])).unwrap_err();
    assert!(matches!(
        error,
        CliError::InvalidOption {
            option: "--base",
            ..
        }
    ));
    assert!(parse_eval_options(&args(&["--max-depth=-1"])).is_err());
}

#[test]
fn merge_prefers_set_fields() {
    let mut options = EvalOptions {
        params: Some(PathBuf::from("a.json")),
        base: Some(2),
        ..EvalOptions::default()
    };
    options.merge(&EvalOptions {
        base: Some(16),
        max_depth: Some(4),
        ..EvalOptions::default()
    });
    assert_eq!(options.params, Some(PathBuf::from("a.json")));
    assert_eq!(options.base, Some(16));
    assert_eq!(options.max_depth, Some(4));
    assert_eq!(options.overrides, None);
}
