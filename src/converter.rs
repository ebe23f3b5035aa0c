use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::{ErrorPolicy, SemverIntConfig};
use crate::errors::{Component, EncodeError, SemverIntError};
use crate::numeric::{Formatted, format_fixed_width, format_limit_width, is_strict_int};
use crate::prerelease::prerelease_to_int;

/// Outcome of one conversion.
///
/// `version_str` is always produced, best-effort and saturating, once the
/// inputs pass precondition checks. `errs` holds the conditions that
/// survived the configured error policies, in stage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverIntResult {
    /// Encoded decimal digit string (may carry leading zeros)
    pub version_str: String,
    pub errs: Vec<SemverIntError>,
}

/// Converts semantic versions into fixed-width, order-preserving digit
/// strings.
///
/// Encoding a sequence of versions in ascending semver precedence order
/// yields a non-decreasing sequence of integers, as closely as the
/// configured digit budgets allow.
///
/// # Example
///
/// ```
/// use semver_int::{SemverIntConfig, SemverIntConverter};
///
/// let converter = SemverIntConverter::new(SemverIntConfig::default());
/// let result = converter.semver_to_int("1", "2", "3", "").unwrap();
/// assert_eq!(result.version_str, "001002003999999");
/// ```
#[derive(Debug, Clone)]
pub struct SemverIntConverter {
    config: SemverIntConfig,
}

impl Default for SemverIntConverter {
    fn default() -> Self {
        Self::new(SemverIntConfig::default())
    }
}

impl SemverIntConverter {
    /// Creates a converter holding the given configuration.
    pub fn new(config: SemverIntConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter encodes with.
    pub fn config(&self) -> &SemverIntConfig {
        &self.config
    }

    /// Encodes pre-split version components into one digit string.
    ///
    /// `prerelease` is the label after the hyphen, or empty when absent;
    /// build metadata must already be stripped. Each numeric stage that
    /// overflows its budget saturates and nine-fills everything after it,
    /// since nothing beyond that point can refine the ordering.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NotAnInteger`] if `major`, `minor` or `patch`
    /// is not a strict non-negative decimal integer literal. Data-quality
    /// conditions (overflow, precision loss) never produce an `Err`; they
    /// are collected into the result.
    pub fn semver_to_int(
        &self,
        major: &str,
        minor: &str,
        patch: &str,
        prerelease: &str,
    ) -> Result<SemverIntResult, EncodeError> {
        check_strict(Component::Major, major)?;
        check_strict(Component::Minor, minor)?;
        check_strict(Component::Patch, patch)?;

        let cfg = &self.config;
        let mut version_str = String::with_capacity(cfg.total_digits());
        let mut errs = Vec::new();

        let major_fmt = fit(major, cfg.num_major_digits);
        version_str.push_str(&major_fmt.digits);
        if major_fmt.overflow {
            if cfg.major_version_errors == ErrorPolicy::Report {
                errs.push(SemverIntError::Overflow {
                    component: Component::Major,
                    value: major.to_string(),
                });
            }
            let remaining =
                cfg.num_minor_digits + cfg.num_patch_digits + cfg.num_prerelease_digits;
            version_str.push_str(&"9".repeat(remaining));
            return Ok(SemverIntResult { version_str, errs });
        }

        let minor_fmt = fit(minor, cfg.num_minor_digits);
        version_str.push_str(&minor_fmt.digits);
        if minor_fmt.overflow {
            if cfg.minor_version_errors == ErrorPolicy::Report {
                errs.push(SemverIntError::Overflow {
                    component: Component::Minor,
                    value: minor.to_string(),
                });
            }
            let remaining = cfg.num_patch_digits + cfg.num_prerelease_digits;
            version_str.push_str(&"9".repeat(remaining));
            return Ok(SemverIntResult { version_str, errs });
        }

        let patch_fmt = fit(patch, cfg.num_patch_digits);
        version_str.push_str(&patch_fmt.digits);
        if patch_fmt.overflow {
            if cfg.patch_version_errors == ErrorPolicy::Report {
                errs.push(SemverIntError::Overflow {
                    component: Component::Patch,
                    value: patch.to_string(),
                });
            }
            version_str.push_str(&"9".repeat(cfg.num_prerelease_digits));
            return Ok(SemverIntResult { version_str, errs });
        }

        let prerelease_result = prerelease_to_int(
            prerelease,
            cfg.num_prerelease_digits,
            cfg.num_prerelease_component_digits,
            cfg.first_prerelease_component_to_digit.as_ref(),
        );
        version_str.push_str(&prerelease_result.digits);
        errs.extend(prerelease_result.errs.into_iter().filter(|err| {
            match err.component() {
                Component::Prerelease => cfg.prerelease_errors == ErrorPolicy::Report,
                Component::PrereleaseComponent => {
                    cfg.prerelease_numeric_component_errors == ErrorPolicy::Report
                }
                _ => true,
            }
        }));

        if let Some(max) = &cfg.max_semver_int {
            if &as_int(&version_str) > max {
                errs.push(SemverIntError::Overflow {
                    component: Component::SemverInt,
                    value: version_str.clone(),
                });
                version_str = max.to_string();
            }
        }

        Ok(SemverIntResult { version_str, errs })
    }
}

fn check_strict(component: Component, value: &str) -> Result<(), EncodeError> {
    if is_strict_int(value) {
        Ok(())
    } else {
        Err(EncodeError::NotAnInteger {
            component,
            value: value.to_string(),
        })
    }
}

/// Width-formats one validated numeric component.
///
/// A zero-budget stage keeps the limit-width behavior (empty digits with the
/// overflow flag set) so a missing column still saturates everything after
/// it; nonzero budgets are zero-padded to keep the encoded width stable.
fn fit(value: &str, width: usize) -> Formatted {
    let result = if width == 0 {
        format_limit_width(value, width)
    } else {
        format_fixed_width(value, width)
    };
    result.expect("component validated as a strict integer")
}

/// An empty encoding (all budgets zero) counts as zero for the ceiling
/// check.
fn as_int(digits: &str) -> BigUint {
    if digits.is_empty() {
        return BigUint::zero();
    }
    BigUint::parse_bytes(digits.as_bytes(), 10).expect("encoded digits are decimal")
}
