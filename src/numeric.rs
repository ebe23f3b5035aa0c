//! Fixed-width and limit-width decimal formatting.
//!
//! These are the primitives every component encoding is built on: zero-pad a
//! value into a digit budget, or round it to the budget's significant digits
//! and saturate when it still does not fit. All arithmetic is done on
//! arbitrary-precision integers so very large digit budgets never drift the
//! way floating-point significant-digit rounding would.

use num_bigint::BigUint;
use num_integer::Integer;
use std::fmt;

/// Errors from formatting preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The value is not a non-negative decimal integer
    NotAnInteger(String),
    /// Fixed-width formatting cannot target a zero-digit width
    ZeroWidth,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotAnInteger(value) => {
                write!(f, "value must be a non-negative integer, got: {}", value)
            }
            FormatError::ZeroWidth => {
                write!(f, "fixed-width formatting requires a width of at least one digit")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result of formatting one numeric component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Decimal digit string, possibly zero-padded
    pub digits: String,
    /// True when the value was saturated to fit the width
    pub overflow: bool,
}

/// Returns true for a strict non-negative decimal integer literal.
///
/// No sign, no whitespace, and no leading zeros other than the literal "0".
pub fn is_strict_int(value: &str) -> bool {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    value.len() == 1 || !value.starts_with('0')
}

/// Formats `value` into exactly `width` digits, zero-padding on the left.
///
/// Values too wide for the budget are delegated to [`format_limit_width`],
/// which rounds and saturates; the overflow flag from that call is preserved.
///
/// # Errors
///
/// Returns [`FormatError::ZeroWidth`] for a zero width (callers that allow a
/// zero budget use [`format_limit_width`] instead), or
/// [`FormatError::NotAnInteger`] if `value` is not a decimal integer.
pub fn format_fixed_width(value: &str, width: usize) -> Result<Formatted, FormatError> {
    if width == 0 {
        return Err(FormatError::ZeroWidth);
    }
    let result = format_limit_width(value, width)?;
    if result.digits.len() < width {
        return Ok(Formatted {
            digits: format!("{value:0>width$}"),
            overflow: false,
        });
    }
    Ok(result)
}

/// Formats `value` into at most `width` digits.
///
/// A zero width has no room to encode anything and yields an empty string
/// with `overflow = true`. Values already within the width pass through
/// unchanged. Wider values are rounded to `width` significant digits,
/// half-up on ties; if the rounded value still exceeds `10^width - 1` it is
/// clamped to that maximum and flagged as overflow.
///
/// # Errors
///
/// Returns [`FormatError::NotAnInteger`] if `value` is not a decimal integer.
pub fn format_limit_width(value: &str, width: usize) -> Result<Formatted, FormatError> {
    if width == 0 {
        return Ok(Formatted {
            digits: String::new(),
            overflow: true,
        });
    }

    let num = parse_decimal(value)?;
    if value.len() <= width {
        return Ok(Formatted {
            digits: value.to_string(),
            overflow: false,
        });
    }

    // Round to `width` significant digits. Ties round up (away from zero).
    let scale = BigUint::from(10u8).pow((value.len() - width) as u32);
    let (quotient, remainder) = num.div_rem(&scale);
    let rounded = if remainder * 2u8 >= scale {
        (quotient + 1u8) * &scale
    } else {
        quotient * &scale
    };

    let max = BigUint::from(10u8).pow(width as u32) - 1u8;
    if rounded <= max {
        return Ok(Formatted {
            digits: rounded.to_string(),
            overflow: false,
        });
    }

    Ok(Formatted {
        digits: max.to_string(),
        overflow: true,
    })
}

fn parse_decimal(value: &str) -> Result<BigUint, FormatError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NotAnInteger(value.to_string()));
    }
    BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| FormatError::NotAnInteger(value.to_string()))
}
