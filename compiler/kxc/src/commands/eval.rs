//! `kx eval`.

use kx_eval::{DocumentResolver, EvalConfig, ExpressionEvaluator};
use kx_fmt::format_value;

use super::Symbols;
use crate::{CliError, EvalOptions};

/// Evaluate `expression` and render the result in the requested base.
pub fn eval_expression(expression: &str, options: &EvalOptions) -> Result<String, CliError> {
    let symbols = Symbols::load(options)?;
    let empty = DocumentResolver::new();
    let resolver = symbols.resolver(&empty);

    let mut config = EvalConfig::default();
    if let Some(depth) = options.max_depth {
        config = config.with_max_depth(depth);
    }
    let evaluator = ExpressionEvaluator::with_config(config);

    if expression.trim().is_empty() {
        return Ok(String::new());
    }
    let value = evaluator
        .evaluate_value(expression, &resolver)
        .map_err(|source| CliError::Evaluation {
            expression: expression.to_owned(),
            source,
        })?;

    Ok(format_value(&value.to_string(), options.base.unwrap_or(0))?)
}
