//! Questions about an expression that do not need a full evaluation.
//!
//! All of these work on the token stream, so they answer sensibly even for
//! expressions that would not parse.

use kx_lexer::{NumericLiteral, RealLiteral, Scanner, TokenKind};

use crate::cycle_guard::{CycleGuard, Entry};
use crate::evaluator::ExpressionEvaluator;
use crate::resolver::SymbolResolver;

/// Non-whitespace tokens of `source` with their text.
fn tokens(source: &str) -> impl Iterator<Item = (TokenKind, &str)> {
    let mut offset = 0;
    Scanner::new(source).filter_map(move |token| {
        let text = &source[offset..offset + token.len];
        offset += token.len;
        (!token.kind.is_trivia()).then_some((token.kind, text))
    })
}

/// Radix of a numeric literal token; `None` when it does not decode.
fn literal_radix(kind: TokenKind, text: &str) -> Option<u32> {
    match kind {
        TokenKind::Real => RealLiteral::parse(text).ok().map(|_| 10),
        TokenKind::Int | TokenKind::Based => NumericLiteral::parse(text).ok().map(|l| l.radix()),
        _ => None,
    }
}

impl ExpressionEvaluator {
    /// Whether the whole expression, trimmed, is one known symbol.
    pub fn is_symbol(&self, expression: &str, resolver: &dyn SymbolResolver) -> bool {
        let mut tokens = tokens(expression);
        match (tokens.next(), tokens.next()) {
            (Some((TokenKind::Ident, id)), None) => resolver.is_symbol(id),
            _ => false,
        }
    }

    /// Whether the expression is already a value: empty, a single numeric
    /// literal with an optional sign, or a single string literal.
    pub fn is_plain_value(&self, expression: &str) -> bool {
        let parts: Vec<_> = tokens(expression).collect();
        match parts.as_slice() {
            [] | [(TokenKind::Str, _)] => true,
            [(kind, text)] | [(TokenKind::Minus | TokenKind::Plus, _), (kind, text)] => {
                literal_radix(*kind, text).is_some()
            }
            _ => false,
        }
    }

    /// Whether the expression is written as an array, `{...}`.
    pub fn is_array_expression(&self, expression: &str) -> bool {
        expression.contains('{') && expression.contains('}')
    }

    /// The radix the expression is most naturally shown in.
    ///
    /// The greatest radix among its literals and the symbols it references,
    /// so `'b01 + 'h01` is 16 and `'h01 + 12` is 16. A symbol whose resolver
    /// reports no base contributes the base of its bound expression. Strings
    /// and expressions without numbers give 0.
    pub fn base_for_expression(&self, expression: &str, resolver: &dyn SymbolResolver) -> u32 {
        let mut guard = CycleGuard::new();
        self.base_with_guard(expression, resolver, &mut guard)
    }

    fn base_with_guard(
        &self,
        expression: &str,
        resolver: &dyn SymbolResolver,
        guard: &mut CycleGuard,
    ) -> u32 {
        tokens(expression)
            .map(|(kind, text)| match kind {
                TokenKind::Ident if resolver.is_symbol(text) => {
                    self.symbol_base(text, resolver, guard)
                }
                _ => literal_radix(kind, text).unwrap_or(0),
            })
            .max()
            .unwrap_or(0)
    }

    fn symbol_base(&self, id: &str, resolver: &dyn SymbolResolver, guard: &mut CycleGuard) -> u32 {
        let base = resolver.base_for_symbol(id);
        if base != 0 || guard.depth() >= self.config().max_depth {
            return base;
        }
        if guard.enter(id) == Entry::Cycle {
            return 0;
        }
        let base = self.base_with_guard(&resolver.value_for_id(id), resolver, guard);
        guard.exit(id);
        base
    }
}

#[cfg(test)]
mod tests;
