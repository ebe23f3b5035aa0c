use num_bigint::BigUint;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Whether an overflow or precision-loss condition for a component stage is
/// surfaced in the result's error list or silently dropped.
///
/// The encoding itself is identical under both policies; only the reporting
/// changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    Report,
    Suppress,
}

/// Configuration for one converter.
///
/// Digit budgets control how many decimal positions each version component
/// receives in the encoded value; the unsigned types carry the "budgets are
/// never negative" invariant. A configuration is immutable for the duration
/// of a conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverIntConfig {
    pub num_major_digits: usize,
    pub num_minor_digits: usize,
    pub num_patch_digits: usize,
    pub num_prerelease_digits: usize,
    /// Budget for one dot-separated prerelease component
    pub num_prerelease_component_digits: usize,

    pub major_version_errors: ErrorPolicy,
    pub minor_version_errors: ErrorPolicy,
    pub patch_version_errors: ErrorPolicy,
    pub prerelease_errors: ErrorPolicy,
    pub prerelease_numeric_component_errors: ErrorPolicy,

    /// Optional ceiling on the final encoded value
    pub max_semver_int: Option<BigUint>,

    /// Optional override mapping of the first prerelease component to a
    /// single digit: the matching entry's index plus one, or zero when
    /// nothing matches. Later components are still ordinally encoded.
    /// Depending on the entries this may not follow semver precedence.
    pub first_prerelease_component_to_digit: Option<[String; 9]>,
}

impl Default for SemverIntConfig {
    fn default() -> Self {
        Self {
            num_major_digits: 3,
            num_minor_digits: 3,
            num_patch_digits: 3,
            num_prerelease_digits: 6,
            num_prerelease_component_digits: 4,
            major_version_errors: ErrorPolicy::Report,
            minor_version_errors: ErrorPolicy::Report,
            patch_version_errors: ErrorPolicy::Report,
            prerelease_errors: ErrorPolicy::Report,
            prerelease_numeric_component_errors: ErrorPolicy::Report,
            max_semver_int: None,
            first_prerelease_component_to_digit: None,
        }
    }
}

impl SemverIntConfig {
    /// Total width of an encoded version, absent a ceiling clamp.
    pub fn total_digits(&self) -> usize {
        self.num_major_digits
            + self.num_minor_digits
            + self.num_patch_digits
            + self.num_prerelease_digits
    }
}

/// Errors from loading or validating a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    /// `max_semver_int` did not parse as a non-negative decimal integer
    InvalidCeiling(String),
    /// The override table must have exactly nine entries
    OverrideTableSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Toml(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::InvalidCeiling(value) => {
                write!(f, "max_semver_int must be a non-negative integer, got: {}", value)
            }
            ConfigError::OverrideTableSize(len) => {
                write!(
                    f,
                    "first_prerelease_component_to_digit must have exactly 9 entries, got {}",
                    len
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

/// TOML-facing mirror of [`SemverIntConfig`] with every field optional.
///
/// Missing fields fall back to the defaults, so a config file only needs to
/// name what it changes. The ceiling is written as a decimal string to keep
/// arbitrary precision through the TOML layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub num_major_digits: Option<usize>,
    #[serde(default)]
    pub num_minor_digits: Option<usize>,
    #[serde(default)]
    pub num_patch_digits: Option<usize>,
    #[serde(default)]
    pub num_prerelease_digits: Option<usize>,
    #[serde(default)]
    pub num_prerelease_component_digits: Option<usize>,
    #[serde(default)]
    pub major_version_errors: Option<ErrorPolicy>,
    #[serde(default)]
    pub minor_version_errors: Option<ErrorPolicy>,
    #[serde(default)]
    pub patch_version_errors: Option<ErrorPolicy>,
    #[serde(default)]
    pub prerelease_errors: Option<ErrorPolicy>,
    #[serde(default)]
    pub prerelease_numeric_component_errors: Option<ErrorPolicy>,
    #[serde(default)]
    pub max_semver_int: Option<String>,
    #[serde(default)]
    pub first_prerelease_component_to_digit: Option<Vec<String>>,
}

impl ConfigFile {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Loads a configuration from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Loads configuration overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. `~/.config/semver-int/config.toml` (user overrides)
    /// 2. `./semver-int.toml` (project-local overrides)
    ///
    /// Later files override earlier ones field by field. Unreadable files
    /// are reported on stderr and skipped.
    pub fn load_with_overrides() -> Self {
        let mut file = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("semver-int").join("config.toml");
            if user_path.exists() {
                match Self::load_from_file(&user_path) {
                    Ok(user) => file.merge(user),
                    Err(e) => {
                        eprintln!("Warning: failed to load user config from {:?}: {}", user_path, e)
                    }
                }
            }
        }

        let local_path = Path::new("semver-int.toml");
        if local_path.exists() {
            match Self::load_from_file(local_path) {
                Ok(local) => file.merge(local),
                Err(e) => {
                    eprintln!("Warning: failed to load local config from {:?}: {}", local_path, e)
                }
            }
        }

        file
    }

    /// Merges another file's settings into this one, field by field.
    ///
    /// Fields set in `other` win.
    pub fn merge(&mut self, other: ConfigFile) {
        macro_rules! take {
            ($field:ident) => {
                if other.$field.is_some() {
                    self.$field = other.$field;
                }
            };
        }
        take!(num_major_digits);
        take!(num_minor_digits);
        take!(num_patch_digits);
        take!(num_prerelease_digits);
        take!(num_prerelease_component_digits);
        take!(major_version_errors);
        take!(minor_version_errors);
        take!(patch_version_errors);
        take!(prerelease_errors);
        take!(prerelease_numeric_component_errors);
        take!(max_semver_int);
        take!(first_prerelease_component_to_digit);
    }

    /// Validates the file and resolves it over the defaults into a runtime
    /// configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on an unparseable ceiling or an override table that does
    /// not have exactly nine entries.
    pub fn into_config(self) -> Result<SemverIntConfig, ConfigError> {
        let mut config = SemverIntConfig::default();

        if let Some(v) = self.num_major_digits {
            config.num_major_digits = v;
        }
        if let Some(v) = self.num_minor_digits {
            config.num_minor_digits = v;
        }
        if let Some(v) = self.num_patch_digits {
            config.num_patch_digits = v;
        }
        if let Some(v) = self.num_prerelease_digits {
            config.num_prerelease_digits = v;
        }
        if let Some(v) = self.num_prerelease_component_digits {
            config.num_prerelease_component_digits = v;
        }
        if let Some(v) = self.major_version_errors {
            config.major_version_errors = v;
        }
        if let Some(v) = self.minor_version_errors {
            config.minor_version_errors = v;
        }
        if let Some(v) = self.patch_version_errors {
            config.patch_version_errors = v;
        }
        if let Some(v) = self.prerelease_errors {
            config.prerelease_errors = v;
        }
        if let Some(v) = self.prerelease_numeric_component_errors {
            config.prerelease_numeric_component_errors = v;
        }
        if let Some(raw) = self.max_semver_int {
            let parsed = BigUint::parse_bytes(raw.as_bytes(), 10);
            match parsed {
                Some(value) if raw.bytes().all(|b| b.is_ascii_digit()) && !raw.is_empty() => {
                    config.max_semver_int = Some(value);
                }
                _ => return Err(ConfigError::InvalidCeiling(raw)),
            }
        }
        if let Some(table) = self.first_prerelease_component_to_digit {
            let table: [String; 9] = table
                .try_into()
                .map_err(|v: Vec<String>| ConfigError::OverrideTableSize(v.len()))?;
            config.first_prerelease_component_to_digit = Some(table);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budgets() {
        let config = SemverIntConfig::default();
        assert_eq!(config.num_major_digits, 3);
        assert_eq!(config.num_minor_digits, 3);
        assert_eq!(config.num_patch_digits, 3);
        assert_eq!(config.num_prerelease_digits, 6);
        assert_eq!(config.num_prerelease_component_digits, 4);
        assert_eq!(config.major_version_errors, ErrorPolicy::Report);
        assert_eq!(config.total_digits(), 15);
        assert!(config.max_semver_int.is_none());
    }

    #[test]
    fn test_empty_file_resolves_to_defaults() {
        let config = ConfigFile::from_toml("").unwrap().into_config().unwrap();
        assert_eq!(config, SemverIntConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let toml_content = r#"
num_major_digits = 2
num_prerelease_digits = 7
prerelease_errors = "suppress"
"#;
        let config = ConfigFile::from_toml(toml_content)
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.num_major_digits, 2);
        assert_eq!(config.num_minor_digits, 3);
        assert_eq!(config.num_prerelease_digits, 7);
        assert_eq!(config.prerelease_errors, ErrorPolicy::Suppress);
        assert_eq!(config.patch_version_errors, ErrorPolicy::Report);
    }

    #[test]
    fn test_ceiling_parses_with_arbitrary_precision() {
        let toml_content = r#"max_semver_int = "99999999999999999999999999999999""#;
        let config = ConfigFile::from_toml(toml_content)
            .unwrap()
            .into_config()
            .unwrap();
        let expected =
            BigUint::parse_bytes(b"99999999999999999999999999999999", 10).unwrap();
        assert_eq!(config.max_semver_int, Some(expected));
    }

    #[test]
    fn test_invalid_ceiling_fails_fast() {
        let toml_content = r#"max_semver_int = "-5""#;
        let err = ConfigFile::from_toml(toml_content)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCeiling(_)));
    }

    #[test]
    fn test_override_table_size_validated() {
        let toml_content = r#"first_prerelease_component_to_digit = ["alpha", "beta"]"#;
        let err = ConfigFile::from_toml(toml_content)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::OverrideTableSize(2)));
    }

    #[test]
    fn test_override_table_accepted() {
        let toml_content = r#"
first_prerelease_component_to_digit = [
    "alpha", "alpha-a", "alpha0", "beta", "DEV-SNAPSHOT", "rc", "rc12", "rc3", "prerelease",
]
"#;
        let config = ConfigFile::from_toml(toml_content)
            .unwrap()
            .into_config()
            .unwrap();
        let table = config.first_prerelease_component_to_digit.unwrap();
        assert_eq!(table[0], "alpha");
        assert_eq!(table[8], "prerelease");
    }

    #[test]
    fn test_merge_later_file_wins() {
        let mut base = ConfigFile::from_toml("num_major_digits = 2").unwrap();
        let local =
            ConfigFile::from_toml("num_major_digits = 4\nnum_patch_digits = 1").unwrap();
        base.merge(local);
        let config = base.into_config().unwrap();
        assert_eq!(config.num_major_digits, 4);
        assert_eq!(config.num_patch_digits, 1);
        assert_eq!(config.num_minor_digits, 3);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml_content = r#"prerelease_errors = "loud""#;
        assert!(ConfigFile::from_toml(toml_content).is_err());
    }
}
