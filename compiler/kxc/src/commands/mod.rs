//! Command handlers for the `kx` CLI.
//!
//! Each handler returns the text to print so the binary stays a thin
//! dispatcher and the commands can be tested directly.

mod eval;
mod format;
mod lex;

pub use eval::eval_expression;
pub use format::{format_expression, list_references};
pub use lex::lex_expression;

use kx_eval::{DocumentResolver, InstanceResolver, NullResolver, Resolver};

use crate::params::{load_overrides, load_parameters};
use crate::{parse_eval_options, CliError, EvalOptions};

/// Run one command line (without the program name) and return its output.
///
/// Options may come before the command as well as after it; later ones win.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let Some(command_index) = args.iter().position(|arg| !arg.starts_with("--")) else {
        return Ok(usage());
    };
    let (mut options, _) = parse_eval_options(&args[..command_index])?;
    let (local, positional) = parse_eval_options(&args[command_index + 1..])?;
    options.merge(&local);

    match args[command_index].as_str() {
        "eval" => eval_expression(expression(&positional, "eval")?, &options),
        "lex" => Ok(lex_expression(expression(&positional, "lex")?)),
        "format" => format_expression(expression(&positional, "format")?, &options),
        "refs" => list_references(expression(&positional, "refs")?, &options),
        "version" => Ok(format!("kx {}", env!("CARGO_PKG_VERSION"))),
        "help" | "-h" => Ok(usage()),
        other => Err(CliError::UnknownCommand(other.to_owned())),
    }
}

fn expression<'a>(positional: &'a [String], command: &'static str) -> Result<&'a str, CliError> {
    positional
        .first()
        .map(String::as_str)
        .ok_or(CliError::MissingExpression(command))
}

/// Symbol tables named by the options, loaded once per command.
struct Symbols {
    document: Option<DocumentResolver>,
    overrides: Vec<(String, String)>,
}

impl Symbols {
    fn load(options: &EvalOptions) -> Result<Self, CliError> {
        let document = options.params.as_deref().map(load_parameters).transpose()?;
        let overrides = match options.overrides.as_deref() {
            Some(path) => load_overrides(path)?,
            None => Vec::new(),
        };
        Ok(Symbols {
            document,
            overrides,
        })
    }

    /// The innermost tier the options call for.
    fn resolver<'a>(&'a self, empty: &'a DocumentResolver) -> Resolver<'a> {
        let document = self.document.as_ref();
        if !self.overrides.is_empty() {
            let mut instance = InstanceResolver::new(document.unwrap_or(empty));
            for (id, value) in &self.overrides {
                instance.set_override(id.as_str(), value.as_str());
            }
            return instance.into();
        }
        match document {
            Some(document) => document.into(),
            None => NullResolver.into(),
        }
    }
}

pub fn usage() -> String {
    format!(
        "kx {version} - evaluate IP-XACT constant expressions

Usage: kx [options] <command> [args] [options]

Commands:
  eval <expression>     Evaluate and print the result
  lex <expression>      Print the token stream
  format <expression>   Show parameter names in place of ids (needs --params)
  refs <expression>     List the parameters an expression references (needs --params)
  help                  Show this message
  version               Show the version

Options:
  --params=<file.json>     Parameter table: [{{\"id\", \"name\", \"value\", \"scope\"}}]
  --overrides=<file.json>  Instance overrides: {{\"<id>\": \"<expression>\"}}
  --base=<n>               Output base: 2, 8, 10 or 16
  --max-depth=<n>          Limit on nested parameter references (default {depth})

Set RUST_LOG (e.g. RUST_LOG=kx_eval=trace) to trace symbol expansion.",
        version = env!("CARGO_PKG_VERSION"),
        depth = kx_eval::DEFAULT_MAX_DEPTH,
    )
}

#[cfg(test)]
mod tests;
