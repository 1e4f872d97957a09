use super::*;

#[test]
fn operator_lexemes() {
    assert_eq!(TokenKind::StarStar.lexeme(), Some("**"));
    assert_eq!(TokenKind::BangEqualEqual.lexeme(), Some("!=="));
    assert_eq!(TokenKind::LessLess.lexeme(), Some("<<"));
    assert_eq!(TokenKind::Question.lexeme(), Some("?"));
}

#[test]
fn literal_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::Int.lexeme(), None);
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

#[test]
fn classification() {
    assert!(TokenKind::Based.is_number());
    assert!(!TokenKind::Str.is_number());
    assert!(TokenKind::MalformedLiteral.is_error());
    assert!(TokenKind::Plus.is_operator());
    assert!(!TokenKind::LeftParen.is_operator());
    assert!(TokenKind::Whitespace.is_trivia());
}

#[test]
fn eof_is_empty() {
    assert_eq!(Token::eof(), Token::new(TokenKind::Eof, 0));
}
