//! `kx format` and `kx refs`.

use kx_eval::{DocumentResolver, SymbolResolver};
use kx_fmt::ExpressionFormatter;

use super::Symbols;
use crate::{CliError, EvalOptions};

/// `expression` with parameter ids replaced by parameter names.
pub fn format_expression(expression: &str, options: &EvalOptions) -> Result<String, CliError> {
    if options.params.is_none() {
        return Err(CliError::MissingParams("format"));
    }
    let symbols = Symbols::load(options)?;
    let empty = DocumentResolver::new();
    let resolver = symbols.resolver(&empty);
    Ok(ExpressionFormatter::new(&resolver).format_referring_expression(expression))
}

/// One line per referenced parameter: id, name and bound value.
pub fn list_references(expression: &str, options: &EvalOptions) -> Result<String, CliError> {
    if options.params.is_none() {
        return Err(CliError::MissingParams("refs"));
    }
    let symbols = Symbols::load(options)?;
    let empty = DocumentResolver::new();
    let resolver = symbols.resolver(&empty);

    let lines: Vec<String> = ExpressionFormatter::new(&resolver)
        .referenced_ids(expression)
        .into_iter()
        .map(|id| {
            format!(
                "{id}\t{}\t{}",
                resolver.name_for_id(&id),
                resolver.value_for_id(&id)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
