//! Rendering evaluated values in a chosen base.
//!
//! Input is the `value` of a valid evaluation result. Integers in base 2, 8
//! or 16 become sized based literals with the minimal bit width:
//!
//! ```text
//! 255, 16  ->  8'hFF
//! 5,   2   ->  3'b101
//! -10, 16  ->  -4'hA
//! ```
//!
//! Negative numbers keep their sign in front of the magnitude so the output
//! evaluates back to the input. Arrays are formatted element by element.

use kx_lexer::RealLiteral;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unsupported base {0}; expected 0, 2, 8, 10 or 16")]
    UnsupportedBase(u32),
    #[error("`{value}` cannot be shown in base {base}")]
    NotAnInteger { value: String, base: u32 },
    #[error("`{0}` is not a value")]
    NotAValue(String),
}

/// Format `value` in `base`.
///
/// Base 0 returns `value` untouched. Base 10 normalizes integers (`+007`
/// becomes `7`) and keeps reals and strings as they are. The indeterminate
/// `x` passes through every base.
pub fn format_value(value: &str, base: u32) -> Result<String, FormatError> {
    if base == 0 {
        return Ok(value.to_owned());
    }
    if !matches!(base, 2 | 8 | 10 | 16) {
        return Err(FormatError::UnsupportedBase(base));
    }
    format_trimmed(value.trim(), base)
}

fn format_trimmed(value: &str, base: u32) -> Result<String, FormatError> {
    if value == "x" {
        return Ok(value.to_owned());
    }
    if let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) {
        return format_array(inner, base);
    }
    if let Ok(n) = value.parse::<i128>() {
        return Ok(format_integer(n, base));
    }
    match (is_real(value) || is_string(value), base) {
        (true, 10) => Ok(value.to_owned()),
        (true, _) => Err(FormatError::NotAnInteger {
            value: value.to_owned(),
            base,
        }),
        (false, _) => Err(FormatError::NotAValue(value.to_owned())),
    }
}

fn format_array(inner: &str, base: u32) -> Result<String, FormatError> {
    let elements = split_top_level(inner)
        .into_iter()
        .map(|element| format_trimmed(element.trim(), base))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{{{}}}", elements.join(",")))
}

/// Split on commas that are not inside a nested `{}` or a string.
fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => depth = depth.saturating_sub(1),
            ',' if !in_string && depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

fn format_integer(n: i128, base: u32) -> String {
    let magnitude = n.unsigned_abs();
    let sign = if n < 0 { "-" } else { "" };
    let bits = (u128::BITS - magnitude.leading_zeros()).max(1);
    match base {
        2 => format!("{sign}{bits}'b{magnitude:b}"),
        8 => format!("{sign}{bits}'o{magnitude:o}"),
        16 => format!("{sign}{bits}'h{magnitude:X}"),
        _ => n.to_string(),
    }
}

fn is_real(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    RealLiteral::parse(unsigned).is_ok()
}

fn is_string(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

#[cfg(test)]
mod tests;
