use super::*;

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("8'h");
    assert_eq!(cursor.current(), b'8');
    assert_eq!(cursor.peek(), b'\'');
    assert_eq!(cursor.peek2(), b'h');
}

#[test]
fn reads_past_end_return_zero() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn at_clamps_to_length() {
    let cursor = Cursor::at("abc", 10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_digits() {
    let mut cursor = Cursor::new("10_000+1");
    cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    assert_eq!(cursor.slice_from(0), "10_000");
    assert_eq!(cursor.current(), b'+');
}

#[test]
fn eat_whitespace_mixed() {
    let mut cursor = Cursor::new(" \t\r\n x");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_found_and_missing() {
    let mut cursor = Cursor::new("\"abc\" rest");
    cursor.advance();
    assert!(cursor.eat_until(b'"'));
    assert_eq!(cursor.pos(), 4);

    let mut cursor = Cursor::new("\"abc");
    cursor.advance();
    assert!(!cursor.eat_until(b'"'));
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_keeps_boundaries() {
    let mut cursor = Cursor::new("ä+");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.slice_from(0), "ä");
    assert_eq!(cursor.current(), b'+');
}

#[test]
fn slice_out_of_range_is_empty() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.slice(2, 10), "");
}
