use std::fmt;

/// Version component that produced an encoding condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The fully concatenated encoded value (ceiling clamp)
    SemverInt,
    Major,
    Minor,
    Patch,
    /// The prerelease label as a whole
    Prerelease,
    /// A single dot-separated prerelease component
    PrereleaseComponent,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::SemverInt => "semver int",
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::Prerelease => "prerelease",
            Component::PrereleaseComponent => "prerelease component",
        };
        write!(f, "{}", name)
    }
}

/// A data-quality condition collected while encoding.
///
/// These are never returned as `Err`. Encoding always produces a digit
/// string once the inputs pass precondition checks; conditions are gathered
/// into the result's error list, subject to the per-component policy in
/// [`SemverIntConfig`](crate::SemverIntConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemverIntError {
    /// The value could not be represented within its digit budget and was
    /// saturated to the maximal encoding.
    Overflow { component: Component, value: String },
    /// The value fit after rounding, but narrowing discarded digits without
    /// hitting the saturation ceiling.
    PrecisionLoss { component: Component, value: String },
}

impl SemverIntError {
    /// The component stage that produced this condition.
    pub fn component(&self) -> Component {
        match self {
            SemverIntError::Overflow { component, .. } => *component,
            SemverIntError::PrecisionLoss { component, .. } => *component,
        }
    }

    /// The offending raw input string.
    pub fn value(&self) -> &str {
        match self {
            SemverIntError::Overflow { value, .. } => value,
            SemverIntError::PrecisionLoss { value, .. } => value,
        }
    }
}

impl fmt::Display for SemverIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemverIntError::Overflow { component, value } => {
                write!(f, "{} overflow of {}", component, value)
            }
            SemverIntError::PrecisionLoss { component, value } => {
                write!(f, "{} precision loss of {}", component, value)
            }
        }
    }
}

impl std::error::Error for SemverIntError {}

/// Precondition violations, surfaced to the caller as `Err`.
///
/// These are caller errors rather than data-quality conditions: no encoding
/// is attempted and nothing is silently coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A numeric version component is not a strict non-negative decimal
    /// integer literal
    NotAnInteger { component: Component, value: String },
    /// The input does not parse as a semantic version string
    UnparseableVersion { input: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NotAnInteger { component, value } => {
                write!(
                    f,
                    "{} version must be an integer >= 0, got: {}",
                    component, value
                )
            }
            EncodeError::UnparseableVersion { input } => {
                write!(f, "not a valid semantic version: {}", input)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
