//! Display names in place of parameter ids.
//!
//! Expressions reference parameters by id (`uuid_4b1c + 2`). For display,
//! every id the resolver knows is replaced with its name (`WIDTH + 2`).
//! Everything else, whitespace included, is copied byte for byte.

use kx_eval::SymbolResolver;
use kx_lexer::{Scanner, TokenKind};

pub struct ExpressionFormatter<'r> {
    resolver: &'r dyn SymbolResolver,
}

impl<'r> ExpressionFormatter<'r> {
    pub fn new(resolver: &'r dyn SymbolResolver) -> Self {
        ExpressionFormatter { resolver }
    }

    /// `expression` with every known symbol id replaced by its name.
    pub fn format_referring_expression(&self, expression: &str) -> String {
        let mut output = String::with_capacity(expression.len());
        for (kind, text) in pieces(expression) {
            if kind == TokenKind::Ident && self.resolver.is_symbol(text) {
                output.push_str(&self.resolver.name_for_id(text));
            } else {
                output.push_str(text);
            }
        }
        output
    }

    /// Distinct known symbol ids in order of first appearance.
    pub fn referenced_ids(&self, expression: &str) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for (kind, text) in pieces(expression) {
            if kind == TokenKind::Ident
                && self.resolver.is_symbol(text)
                && !ids.iter().any(|id| id == text)
            {
                ids.push(text.to_owned());
            }
        }
        ids
    }
}

/// Every token of `source` with its text. The texts concatenate to `source`.
fn pieces(source: &str) -> impl Iterator<Item = (TokenKind, &str)> {
    let mut offset = 0;
    Scanner::new(source).map(move |token| {
        let text = &source[offset..offset + token.len];
        offset += token.len;
        (token.kind, text)
    })
}

#[cfg(test)]
mod tests;
