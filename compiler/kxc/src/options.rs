//! `--key=value` option parsing shared by the commands.

use std::path::PathBuf;

use crate::CliError;

/// Options accepted by `eval`, `format` and `refs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Parameter table (--params=<file.json>)
    pub params: Option<PathBuf>,
    /// Instance overrides (--overrides=<file.json>)
    pub overrides: Option<PathBuf>,
    /// Output base: 2, 8, 10 or 16 (--base=<n>)
    pub base: Option<u32>,
    /// Symbol expansion limit (--max-depth=<n>)
    pub max_depth: Option<usize>,
}

impl EvalOptions {
    /// Merge `other` into this one. Fields set in `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.params.is_some() {
            self.params.clone_from(&other.params);
        }
        if other.overrides.is_some() {
            self.overrides.clone_from(&other.overrides);
        }
        if other.base.is_some() {
            self.base = other.base;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
    }
}

/// Split `args` into options and positional arguments.
///
/// Unknown `--` flags are reported and skipped.
pub fn parse_eval_options(args: &[String]) -> Result<(EvalOptions, Vec<String>), CliError> {
    let mut options = EvalOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--params=") {
            options.params = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--overrides=") {
            options.overrides = Some(PathBuf::from(path));
        } else if let Some(base) = arg.strip_prefix("--base=") {
            options.base = Some(parse_number(base, "--base", "2, 8, 10 or 16")?);
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_number(depth, "--max-depth", "a non-negative integer")?);
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    option: &'static str,
    expected: &'static str,
) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidOption {
        option,
        expected,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests;
