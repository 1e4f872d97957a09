//! Runtime values.
//!
//! Integers are `i128` and all integer arithmetic is checked. Reals carry the
//! number of fractional digits they are rendered with, which is how
//! `0.25 + 0.25 + 0.25 + 0.25` renders as `1.00`.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i128),
    Real { value: f64, precision: u32 },
    /// String contents, without quotes.
    Str(String),
    Array(Vec<Value>),
    /// Indeterminate result of a circular reference. Renders as `x`.
    Unknown,
}

impl Value {
    /// Integer for a boolean: `1` or `0`.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i128::from(b))
    }

    pub fn real(value: f64, precision: u32) -> Self {
        Value::Real { value, precision }
    }

    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real { .. } => "real",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Unknown => "unknown",
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Numeric value as `f64`, for integers and reals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(n) => Some(*n as f64),
            Value::Real { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Fractional digits used when rendering: 0 for integers.
    pub fn precision(&self) -> u32 {
        match self {
            Value::Real { precision, .. } => *precision,
            _ => 0,
        }
    }

    /// Truth value of a number. Strings and arrays have none.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Int(n) => Some(*n != 0),
            Value::Real { value, .. } => Some(*value != 0.0),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Real { value, precision } => write!(f, "{value:.prec$}", prec = *precision as usize),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Value::Unknown => f.write_str("x"),
        }
    }
}
