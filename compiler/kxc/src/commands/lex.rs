//! `kx lex`: token stream dump.

use kx_lexer::Scanner;

/// One line per non-whitespace token: kind, text and byte range.
pub fn lex_expression(expression: &str) -> String {
    let mut lines = Vec::new();
    let mut offset = 0;
    for token in Scanner::new(expression) {
        let end = offset + token.len;
        if !token.kind.is_trivia() {
            lines.push(format!(
                "{:?} `{}` @ {offset}..{end}",
                token.kind,
                &expression[offset..end]
            ));
        }
        offset = end;
    }
    lines.join("\n")
}
