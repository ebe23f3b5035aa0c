//! Encode semantic versions as fixed-width, order-preserving integers.
//!
//! Each version component gets a configurable decimal digit budget; values
//! that do not fit are rounded and saturated rather than rejected, and every
//! lossy step is reported as a structured condition the caller can inspect
//! or suppress per component.

mod config;
mod convenience;
mod converter;
mod errors;
pub mod numeric;
mod prerelease;

pub use config::{ConfigError, ConfigFile, ErrorPolicy, SemverIntConfig};
pub use convenience::{
    encode_version, encode_version_with, semver_to_int, set_global_config, split_semver,
};
pub use converter::{SemverIntConverter, SemverIntResult};
pub use errors::{Component, EncodeError, SemverIntError};
pub use prerelease::{PrereleaseEncoding, prerelease_to_int};

#[cfg(test)]
mod tests;
