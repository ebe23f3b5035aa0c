//! Version-string entry points and the process-wide default converter.
//!
//! The core converter only ever sees pre-split, pre-validated component
//! strings. Splitting a full version string lives here, together with a
//! default-configured converter for callers that do not want to thread one
//! through.

use regex::Regex;
use std::sync::{Arc, LazyLock, RwLock};

use crate::config::SemverIntConfig;
use crate::converter::{SemverIntConverter, SemverIntResult};
use crate::errors::EncodeError;

/// Canonical semver pattern. Build metadata is matched and then ignored,
/// per semver precedence rules.
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver pattern compiles")
});

/// The process-wide default converter.
///
/// Replacement swaps the whole `Arc`, so a call in flight keeps the
/// configuration it started with and never observes a partial update.
static GLOBAL: LazyLock<RwLock<Arc<SemverIntConverter>>> =
    LazyLock::new(|| RwLock::new(Arc::new(SemverIntConverter::default())));

fn global_converter() -> Arc<SemverIntConverter> {
    GLOBAL.read().expect("global converter lock").clone()
}

/// Replaces the configuration of the process-wide default converter.
pub fn set_global_config(config: SemverIntConfig) {
    let mut slot = GLOBAL.write().expect("global converter lock");
    *slot = Arc::new(SemverIntConverter::new(config));
}

/// Splits a version string into `(major, minor, patch, prerelease)`.
///
/// The prerelease slice is empty when the version has no label. Build
/// metadata is dropped. Returns `None` when the input is not a valid
/// semantic version.
pub fn split_semver(version: &str) -> Option<(&str, &str, &str, &str)> {
    let caps = SEMVER_RE.captures(version)?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
        caps.get(4).map(|m| m.as_str()).unwrap_or(""),
    ))
}

/// Encodes pre-split components with the process-wide default converter.
///
/// See [`SemverIntConverter::semver_to_int`].
pub fn semver_to_int(
    major: &str,
    minor: &str,
    patch: &str,
    prerelease: &str,
) -> Result<SemverIntResult, EncodeError> {
    global_converter().semver_to_int(major, minor, patch, prerelease)
}

/// Splits and encodes a full version string with the given converter.
///
/// # Errors
///
/// Returns [`EncodeError::UnparseableVersion`] when the input is not a
/// semantic version, or any error from the underlying conversion.
pub fn encode_version_with(
    converter: &SemverIntConverter,
    version: &str,
) -> Result<SemverIntResult, EncodeError> {
    let (major, minor, patch, prerelease) =
        split_semver(version).ok_or_else(|| EncodeError::UnparseableVersion {
            input: version.to_string(),
        })?;
    converter.semver_to_int(major, minor, patch, prerelease)
}

/// Splits and encodes a full version string with the process-wide default
/// converter.
///
/// # Example
///
/// ```
/// let result = semver_int::encode_version("1.2.3-rc.1").unwrap();
/// assert_eq!(result.version_str, "001002003917600");
/// ```
pub fn encode_version(version: &str) -> Result<SemverIntResult, EncodeError> {
    encode_version_with(&global_converter(), version)
}
