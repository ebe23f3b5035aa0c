use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    ErrorPolicy, SemverIntConfig, SemverIntConverter, SemverIntResult, split_semver,
};

/// Versions in ascending semver precedence order, including the ordering
/// example from the semver specification.
const PRECEDENCE_ORDER: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "0.9.9",
    "1.0.0-0",
    "1.0.0-1",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.9.0",
    "2.0.0",
    "10.0.0",
    "999.999.999",
];

fn encode(converter: &SemverIntConverter, version: &str) -> SemverIntResult {
    let (major, minor, patch, prerelease) =
        split_semver(version).unwrap_or_else(|| panic!("failed to split {}", version));
    converter
        .semver_to_int(major, minor, patch, prerelease)
        .unwrap_or_else(|e| panic!("failed to encode {}: {}", version, e))
}

fn as_int(digits: &str) -> BigUint {
    if digits.is_empty() {
        return BigUint::zero();
    }
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap()
}

fn assert_monotone(converter: &SemverIntConverter, versions: &[&str]) {
    let mut previous = BigUint::zero();
    let mut previous_version = "";
    for version in versions {
        let result = encode(converter, version);
        let value = as_int(&result.version_str);
        assert!(
            value >= previous,
            "{} encoded as {} below {} from {}",
            version,
            result.version_str,
            previous,
            previous_version,
        );
        previous = value;
        previous_version = version;
    }
}

#[test]
fn test_monotonic_with_default_config() {
    assert_monotone(&SemverIntConverter::default(), PRECEDENCE_ORDER);
}

#[test]
fn test_monotonic_with_custom_digits() {
    let converter = SemverIntConverter::new(SemverIntConfig {
        num_major_digits: 2,
        num_minor_digits: 5,
        num_patch_digits: 1,
        num_prerelease_digits: 7,
        ..SemverIntConfig::default()
    });
    assert_monotone(&converter, PRECEDENCE_ORDER);
}

#[test]
fn test_monotonic_with_tiny_component_budget() {
    // One digit per prerelease component collapses many labels to ties,
    // which must still never invert the order
    let converter = SemverIntConverter::new(SemverIntConfig {
        num_prerelease_component_digits: 1,
        ..SemverIntConfig::default()
    });
    assert_monotone(&converter, PRECEDENCE_ORDER);
}

#[test]
fn test_monotonic_with_override_table() {
    let table: [String; 9] = [
        "alpha", "alpha-a", "alpha0", "beta", "DEV-SNAPSHOT", "rc", "rc12", "rc3",
        "prerelease",
    ]
    .map(String::from);
    let converter = SemverIntConverter::new(SemverIntConfig {
        first_prerelease_component_to_digit: Some(table),
        ..SemverIntConfig::default()
    });
    let versions = [
        "1.0.0-alpha",
        "1.0.0-beta",
        "1.0.0-rc",
        "1.0.0-rc.1",
        "1.0.0",
        "2.0.0",
    ];
    assert_monotone(&converter, &versions);
}

#[test]
fn test_width_invariant() {
    let budgets: &[(usize, usize, usize, usize)] = &[
        (3, 3, 3, 6),
        (2, 5, 1, 7),
        (0, 0, 0, 0),
        (0, 3, 3, 6),
        (3, 0, 3, 6),
        (3, 3, 0, 6),
        (3, 3, 3, 0),
    ];
    let versions = [
        "0.0.0",
        "1.2.3",
        "999.999.999",
        "1000.0.0",
        "1.2.3-alpha",
        "10.20.30-rc.1+build.5",
    ];

    for &(major, minor, patch, prerelease) in budgets {
        let config = SemverIntConfig {
            num_major_digits: major,
            num_minor_digits: minor,
            num_patch_digits: patch,
            num_prerelease_digits: prerelease,
            ..SemverIntConfig::default()
        };
        let converter = SemverIntConverter::new(config);
        for version in versions {
            let result = encode(&converter, version);
            assert_eq!(
                result.version_str.len(),
                converter.config().total_digits(),
                "width broke for {} under budgets {:?}",
                version,
                (major, minor, patch, prerelease),
            );
        }
    }
}

#[test]
fn test_release_outranks_every_prerelease() {
    let converter = SemverIntConverter::default();
    let release = as_int(&encode(&converter, "1.2.3").version_str);

    for label in [
        "alpha",
        "alpha.1",
        "beta",
        "rc.1",
        "0",
        "9999",
        "zz",
        "DEV-SNAPSHOT",
    ] {
        let version = format!("1.2.3-{}", label);
        let encoded = as_int(&encode(&converter, &version).version_str);
        assert!(
            encoded < release,
            "{} did not sort below the release",
            version
        );
    }
}

#[test]
fn test_numeric_prerelease_sorts_below_ascii() {
    let converter = SemverIntConverter::default();
    let numeric = as_int(&encode(&converter, "1.0.0-11").version_str);
    let ascii = as_int(&encode(&converter, "1.0.0-alpha").version_str);
    assert!(numeric < ascii);
}

#[test]
fn test_default_encodings_are_stable() {
    let converter = SemverIntConverter::default();
    let cases = [
        ("0.0.0", "000000000999999"),
        ("1.2.3", "001002003999999"),
        ("1.2.3-alpha", "001002003748599"),
        ("1.2.3-rc.1", "001002003917600"),
        ("1.2.3-1", "001002003000100"),
        ("999.999.999", "999999999999999"),
    ];
    for (version, expected) in cases {
        assert_eq!(
            encode(&converter, version).version_str,
            expected,
            "unexpected encoding for {}",
            version
        );
    }
}

#[test]
fn test_suppressing_everything_never_errors() {
    let converter = SemverIntConverter::new(SemverIntConfig {
        num_major_digits: 1,
        num_minor_digits: 1,
        num_patch_digits: 1,
        num_prerelease_digits: 2,
        major_version_errors: ErrorPolicy::Suppress,
        minor_version_errors: ErrorPolicy::Suppress,
        patch_version_errors: ErrorPolicy::Suppress,
        prerelease_errors: ErrorPolicy::Suppress,
        prerelease_numeric_component_errors: ErrorPolicy::Suppress,
        ..SemverIntConfig::default()
    });

    for version in PRECEDENCE_ORDER {
        let result = encode(&converter, version);
        assert!(
            result.errs.is_empty(),
            "suppressed policies leaked an error for {}",
            version
        );
        assert!(result.version_str.bytes().all(|b| b.is_ascii_digit()));
    }
}
