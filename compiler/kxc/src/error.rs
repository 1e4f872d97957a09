//! CLI errors.

use std::path::PathBuf;

use kx_eval::EvalError;
use kx_fmt::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown parameter scope `{0}`")]
    UnknownScope(String),
    #[error("`{option}` expects {expected}, got `{value}`")]
    InvalidOption {
        option: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("unknown command `{0}`; run `kx help` for usage")]
    UnknownCommand(String),
    #[error("`{0}` needs an expression argument")]
    MissingExpression(&'static str),
    #[error("`{0}` needs --params=<file.json>")]
    MissingParams(&'static str),
    #[error("invalid expression `{expression}`: {source}")]
    Evaluation {
        expression: String,
        #[source]
        source: EvalError,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}
