//! Strict semver parsing and version bump calculation.

use clap::ValueEnum;
use regex_lite::Regex;
use semver::Version;

use crate::error::VersionError;

/// Type of version bump requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKind {
    /// Increment major version (X+1.0.0)
    #[value(alias = "breaking")]
    Major,
    /// Increment minor version (X.Y+1.0)
    Minor,
    /// Increment patch version (X.Y.Z+1)
    Patch,
}

/// Parse a release version, accepting exactly `major.minor.patch`.
///
/// `semver::Version::parse` is deliberately not used here: it accepts
/// pre-release and build metadata, and release artifacts must carry a plain
/// three-integer version.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let pattern = Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("Invalid regex");

    let trimmed = raw.trim();
    let captures = pattern
        .captures(trimmed)
        .ok_or_else(|| VersionError::InvalidVersion(raw.to_string()))?;

    let component = |i: usize| -> Result<u64, VersionError> {
        captures[i]
            .parse::<u64>()
            .map_err(|_| VersionError::InvalidVersion(raw.to_string()))
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Calculate the next version for the requested bump kind.
pub fn bump(current: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => Version::new(current.major + 1, 0, 0),
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_bump_resets_minor_and_patch() {
        let next = bump(&Version::new(1, 4, 9), BumpKind::Major);
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_major_bump_from_two_zero_zero() {
        let next = bump(&Version::new(2, 0, 0), BumpKind::Major);
        assert_eq!(next, Version::new(3, 0, 0));
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        let next = bump(&Version::new(1, 4, 9), BumpKind::Minor);
        assert_eq!(next, Version::new(1, 5, 0));
    }

    #[test]
    fn test_patch_bump() {
        let next = bump(&Version::new(1, 4, 9), BumpKind::Patch);
        assert_eq!(next, Version::new(1, 4, 10));
    }

    #[test]
    fn test_parse_accepts_plain_triple() {
        assert_eq!(parse_version("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version("0.0.0").unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_version(" 1.2.3\n").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_two_components() {
        assert!(matches!(
            parse_version("1.2"),
            Err(VersionError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_parse_rejects_v_prefix() {
        assert!(parse_version("v1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_prerelease() {
        assert!(parse_version("1.2.3-beta").is_err());
    }

    #[test]
    fn test_parse_rejects_build_metadata() {
        assert!(parse_version("1.2.3+build.5").is_err());
    }

    #[test]
    fn test_breaking_is_an_alias_of_major() {
        let kind = <BumpKind as clap::ValueEnum>::from_str("breaking", false).unwrap();
        assert_eq!(kind, BumpKind::Major);
    }
}
