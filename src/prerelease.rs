//! Prerelease label encoding.
//!
//! A prerelease label is walked component by component (dot-separated) and
//! turned into a run of decimal digits. Numeric components are clamped below
//! the ASCII range and width-formatted; alphanumeric components become
//! concatenated two-digit ordinal codes ordered the way semver orders ASCII
//! identifiers. The run is then forced to the configured prerelease width.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{Component, SemverIntError};
use crate::numeric::{Formatted, format_fixed_width, format_limit_width, is_strict_int};

/// Result of encoding one prerelease label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseEncoding {
    /// Digit string of exactly the requested width (empty for a zero width)
    pub digits: String,
    /// Unfiltered conditions; policy filtering is the caller's concern
    pub errs: Vec<SemverIntError>,
}

/// Ordinal code for one prerelease character.
///
/// Codes are two decimal digits each: digits `0`-`9` map to 37-46, `-` to
/// 47, `A`-`Z` to 48-73 and `a`-`z` to 74-99, matching semver's ASCII
/// comparison order for identifiers.
fn char_code(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(37 + (c as u32 - '0' as u32)),
        '-' => Some(47),
        'A'..='Z' => Some(48 + (c as u32 - 'A' as u32)),
        'a'..='z' => Some(74 + (c as u32 - 'a' as u32)),
        _ => None,
    }
}

/// Encodes a prerelease label into exactly `width` decimal digits.
///
/// An empty label encodes as all nines: a release sorts above every
/// prerelease of the same version. A non-empty label with a zero width
/// cannot be represented at all, which is reported as an overflow of the
/// whole prerelease.
///
/// When `first_component_table` is given, the first dot-separated component
/// is looked up in it and encoded as a single digit (`index + 1`, or `0`
/// when absent) instead of being numerically or ordinally encoded.
pub fn prerelease_to_int(
    prerelease: &str,
    width: usize,
    component_width: usize,
    first_component_table: Option<&[String; 9]>,
) -> PrereleaseEncoding {
    let mut errs = Vec::new();

    if prerelease.is_empty() {
        return PrereleaseEncoding {
            digits: "9".repeat(width),
            errs,
        };
    }

    if width == 0 {
        errs.push(SemverIntError::Overflow {
            component: Component::Prerelease,
            value: prerelease.to_string(),
        });
        return PrereleaseEncoding {
            digits: String::new(),
            errs,
        };
    }

    let mut acc = String::new();
    for (i, component) in prerelease.split('.').enumerate() {
        if i == 0 {
            if let Some(table) = first_component_table {
                let matched = table.iter().position(|entry| entry == component);
                // "No match" stays distinct from digit zero until this point.
                acc.push(match matched {
                    Some(index) => char::from(b'1' + index as u8),
                    None => '0',
                });
                continue;
            }
        }

        if is_strict_int(component) {
            let formatted = format_numeric_component(component, component_width);
            acc.push_str(&formatted.digits);
            if formatted.overflow {
                let remaining = width.saturating_sub(acc.len());
                acc.push_str(&"9".repeat(remaining));
                errs.push(SemverIntError::Overflow {
                    component: Component::PrereleaseComponent,
                    value: component.to_string(),
                });
            }
            // A numeric component always ends the walk.
            break;
        }

        let mut run = String::new();
        for c in component.chars() {
            // Characters outside the ordinal alphabet are dropped; grammar
            // validation happens before the label reaches this module.
            if let Some(code) = char_code(c) {
                run.push_str(&code.to_string());
            }
        }
        if run.len() > component_width {
            run.truncate(component_width);
            acc.push_str(&run);
            let remaining = width.saturating_sub(acc.len());
            acc.push_str(&"9".repeat(remaining));
            errs.push(SemverIntError::Overflow {
                component: Component::PrereleaseComponent,
                value: component.to_string(),
            });
            break;
        }
        acc.push_str(&run);
        if acc.len() >= width {
            break;
        }
    }

    let (digits, precision_loss) = narrow_to_width(&acc, width);
    if precision_loss {
        errs.push(SemverIntError::PrecisionLoss {
            component: Component::Prerelease,
            value: prerelease.to_string(),
        });
    }
    PrereleaseEncoding { digits, errs }
}

/// Clamps a numeric component strictly below the smallest all-ASCII
/// encoding so the digit-encoded and ordinal-encoded ranges never
/// interleave, then width-formats it.
fn format_numeric_component(component: &str, component_width: usize) -> Formatted {
    let floor = ascii_floor(component_width);
    let clamped = if floor.is_zero() {
        "0".to_string()
    } else {
        let max = floor - 1u8;
        let num = BigUint::parse_bytes(component.as_bytes(), 10)
            .expect("component checked as a strict integer");
        if num > max { max.to_string() } else { num.to_string() }
    };

    let result = if component_width == 0 {
        format_limit_width(&clamped, component_width)
    } else {
        format_fixed_width(&clamped, component_width)
    };
    result.expect("clamped component is a canonical integer")
}

/// The smallest `component_width`-bounded value an ASCII component can
/// encode to: the lowest ordinal code repeated across the budget.
fn ascii_floor(component_width: usize) -> BigUint {
    let repeated = "37".repeat(std::cmp::max(1, component_width / 2));
    let truncated = &repeated[..repeated.len().min(component_width)];
    if truncated.is_empty() {
        return BigUint::zero();
    }
    BigUint::parse_bytes(truncated.as_bytes(), 10).expect("floor digits are decimal")
}

/// Forces the accumulated digit run to exactly `width` digits.
///
/// Shorter runs are right-padded with zeros, which keeps a bare identifier
/// below the same identifier with further components appended ("alpha" <
/// "alpha.1"). Longer runs are rounded half-up to the leading `width`
/// digits, preserving leading zeros; a carry out of the width saturates to
/// all nines rather than wrapping.
fn narrow_to_width(acc: &str, width: usize) -> (String, bool) {
    if acc.len() < width {
        return (format!("{acc:0<width$}"), false);
    }
    if acc.len() == width {
        return (acc.to_string(), false);
    }

    let mut digits: Vec<u8> = acc.as_bytes()[..width].to_vec();
    if acc.as_bytes()[width] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            return ("9".repeat(width), true);
        }
    }
    (String::from_utf8(digits).expect("digits are ASCII"), true)
}
