//! Presentation helpers for evaluated IP-XACT expressions.
//!
//! - [`format_value`]: render a value in base 2, 8, 10 or 16.
//! - [`ExpressionFormatter`]: show parameter names instead of ids.

mod expression_formatter;
mod value_formatter;

pub use expression_formatter::ExpressionFormatter;
pub use value_formatter::{format_value, FormatError};
