//! Decoding of numeric literal text.
//!
//! The scanner only finds literal boundaries. The types here turn the text of
//! an `Int`, `Based` or `Real` token into a value:
//!
//! ```text
//! 8'sh0F     size 8, signed, radix 16, value 15
//! 'b1_010    no size, radix 2, value 10
//! '2         no size, radix 10, value 2
//! 10_000     no size, radix 10, value 10000
//! ```
//!
//! The size prefix is recorded but never truncates the value.

use thiserror::Error;

/// Why a literal's text could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("invalid size prefix `{0}`")]
    InvalidSize(String),
    #[error("missing digits after the base specifier")]
    MissingDigits,
    #[error("`{digits}` is not a valid base-{radix} number")]
    InvalidDigit { digits: String, radix: u32 },
    #[error("`{0}` is not a fixed-point number")]
    InvalidReal(String),
    #[error("literal `{0}` does not fit in 128 bits")]
    TooLarge(String),
}

/// A decoded integer literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericLiteral {
    size: Option<u32>,
    signed: bool,
    radix: u32,
    digits: String,
    value: i128,
}

impl NumericLiteral {
    /// Decode `text`, which must be a single literal with no surrounding
    /// whitespace or sign.
    pub fn parse(text: &str) -> Result<Self, LiteralError> {
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }

        let Some((size_text, rest)) = text.split_once('\'') else {
            return Self::from_digits(None, false, 10, text);
        };

        let size = if size_text.is_empty() {
            None
        } else {
            Some(parse_size(size_text)?)
        };

        let (signed, rest) = match rest.as_bytes().first() {
            Some(b's' | b'S') => (true, &rest[1..]),
            _ => (false, rest),
        };

        let (radix, digits) = match rest.as_bytes().first() {
            Some(b'd' | b'D') => (10, &rest[1..]),
            Some(b'h' | b'H') => (16, &rest[1..]),
            Some(b'o' | b'O') => (8, &rest[1..]),
            Some(b'b' | b'B') => (2, &rest[1..]),
            _ => (10, rest),
        };

        if digits.is_empty() {
            return Err(LiteralError::MissingDigits);
        }
        Self::from_digits(size, signed, radix, digits)
    }

    fn from_digits(
        size: Option<u32>,
        signed: bool,
        radix: u32,
        raw: &str,
    ) -> Result<Self, LiteralError> {
        let digits: String = raw.chars().filter(|&c| c != '_').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(LiteralError::InvalidDigit {
                digits: raw.to_owned(),
                radix,
            });
        }

        // Only overflow remains once every digit is known to be valid.
        let value = i128::from_str_radix(&digits, radix)
            .map_err(|_| LiteralError::TooLarge(raw.to_owned()))?;

        Ok(Self {
            size,
            signed,
            radix,
            digits,
            value,
        })
    }

    /// Declared bit width, if the literal had a size prefix.
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// Whether the literal carried the `s` signedness marker.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Digit radix: 2, 8, 10 or 16.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Digits with `_` separators removed.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decoded value.
    pub fn value(&self) -> i128 {
        self.value
    }
}

fn parse_size(text: &str) -> Result<u32, LiteralError> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    match cleaned.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(LiteralError::InvalidSize(text.to_owned())),
    }
}

/// A decoded fixed-point literal such as `0.25`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealLiteral {
    /// Numeric value.
    pub value: f64,
    /// Number of digits after the decimal point.
    pub precision: u32,
}

impl RealLiteral {
    pub fn parse(text: &str) -> Result<Self, LiteralError> {
        let invalid = || LiteralError::InvalidReal(text.to_owned());

        let (whole, fraction) = text.split_once('.').ok_or_else(invalid)?;
        let is_digits = |part: &str| {
            part.chars().any(|c| c.is_ascii_digit())
                && part.chars().all(|c| c.is_ascii_digit() || c == '_')
        };
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        let cleaned: String = text.chars().filter(|&c| c != '_').collect();
        let value = cleaned.parse::<f64>().map_err(|_| invalid())?;
        let precision = fraction.chars().filter(char::is_ascii_digit).count();

        Ok(Self {
            value,
            precision: u32::try_from(precision).map_err(|_| invalid())?,
        })
    }
}

/// Radix of a single literal, ignoring surrounding whitespace and a leading
/// sign.
///
/// Plain decimals and fixed-point numbers report 10. Anything that is not a
/// numeric literal (strings, names, expressions) reports 0.
pub fn literal_base(text: &str) -> u32 {
    let text = text.trim();
    let text = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text)
        .trim_start();

    if RealLiteral::parse(text).is_ok() {
        return 10;
    }
    NumericLiteral::parse(text).map_or(0, |literal| literal.radix())
}
