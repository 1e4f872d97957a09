use super::*;
use pretty_assertions::assert_eq;

fn ok(value: &str, base: u32) -> String {
    match format_value(value, base) {
        Ok(formatted) => formatted,
        Err(error) => panic!("format_value({value:?}, {base}) failed: {error}"),
    }
}

#[test]
fn base_zero_is_untouched() {
    assert_eq!(ok(" 0042 ", 0), " 0042 ");
    assert_eq!(ok("anything at all", 0), "anything at all");
}

#[test]
fn decimal_normalizes() {
    assert_eq!(ok("+007", 10), "7");
    assert_eq!(ok(" -12 ", 10), "-12");
    assert_eq!(ok("1.50", 10), "1.50");
    assert_eq!(ok("\"text\"", 10), "\"text\"");
}

#[test]
fn hexadecimal() {
    assert_eq!(ok("255", 16), "8'hFF");
    assert_eq!(ok("256", 16), "9'h100");
    assert_eq!(ok("0", 16), "1'h0");
    assert_eq!(ok("1", 16), "1'h1");
}

#[test]
fn binary_and_octal() {
    assert_eq!(ok("5", 2), "3'b101");
    assert_eq!(ok("0", 2), "1'b0");
    assert_eq!(ok("8", 8), "4'o10");
}

#[test]
fn negative_values_keep_the_sign() {
    assert_eq!(ok("-10", 16), "-4'hA");
    assert_eq!(ok("-1", 2), "-1'b1");
}

#[test]
fn wide_values() {
    assert_eq!(ok("18446744073709551616", 16), "65'h10000000000000000");
}

#[test]
fn unknown_passes_through() {
    for base in [2, 8, 10, 16] {
        assert_eq!(ok("x", base), "x");
    }
}

#[test]
fn arrays_format_each_element() {
    assert_eq!(ok("{16,20}", 16), "{5'h10,5'h14}");
    assert_eq!(ok("{1,{2,x}}", 2), "{1'b1,{2'b10,x}}");
    assert_eq!(ok("{\"a,b\",1}", 10), "{\"a,b\",1}");
}

#[test]
fn non_integers_in_other_bases() {
    assert_eq!(
        format_value("1.5", 16),
        Err(FormatError::NotAnInteger {
            value: "1.5".to_owned(),
            base: 16
        })
    );
    assert_eq!(
        format_value("\"text\"", 2),
        Err(FormatError::NotAnInteger {
            value: "\"text\"".to_owned(),
            base: 2
        })
    );
    assert_eq!(
        format_value("WIDTH", 10),
        Err(FormatError::NotAValue("WIDTH".to_owned()))
    );
}

#[test]
fn unsupported_base() {
    assert_eq!(format_value("1", 3), Err(FormatError::UnsupportedBase(3)));
    assert_eq!(format_value("1", 32), Err(FormatError::UnsupportedBase(32)));
}
