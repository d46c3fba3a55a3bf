//! String-in, string-out version operations
//!
//! Each function parses its argument, applies one transformation to an owned
//! copy, and formats the result. Invalid input is returned as
//! [`SemverError::InvalidVersion`](crate::error::SemverError::InvalidVersion)
//! and no bump is attempted.

use crate::domain::{SuffixPolicy, Version, VersionBump};
use crate::error::Result;

pub use crate::domain::is_valid;

/// Parses a version string into its components.
///
/// # Example
/// ```ignore
/// let v = parse("1.0.1-a20210131+myawesomebranch-a01f7f7a")?;
/// assert_eq!(v.patch, 1);
/// assert_eq!(v.prerelease, "a20210131");
/// ```
pub fn parse(input: &str) -> Result<Version> {
    Version::parse(input)
}

/// Bumps `input` with the given bump type and suffix policy.
pub fn bump_version(input: &str, bump_type: VersionBump, policy: SuffixPolicy) -> Result<String> {
    let bumped = Version::parse(input)?.bump(bump_type, policy)?;
    Ok(bumped.to_string())
}

/// Bumps the major version: `1.1.1 -> 2.0.0`.
///
/// Prerelease and metadata are carried through unchanged.
pub fn bump_major(input: &str) -> Result<String> {
    bump_version(input, VersionBump::Major, SuffixPolicy::Preserve)
}

/// Bumps the minor version and zeroes patch: `1.1.1 -> 1.2.0`.
///
/// Prerelease and metadata are carried through unchanged.
pub fn bump_minor(input: &str) -> Result<String> {
    bump_version(input, VersionBump::Minor, SuffixPolicy::Preserve)
}

/// Bumps the patch version: `1.1.1 -> 1.1.2`.
pub fn bump_patch(input: &str) -> Result<String> {
    bump_version(input, VersionBump::Patch, SuffixPolicy::Preserve)
}

/// Bumps the prerelease.
///
/// - `1.0.0 -> 1.0.1-0`
/// - `1.0.0-1 -> 1.0.0-2`
/// - `1.0.0-a2021 -> 1.0.0-a2021.0`
/// - `1.0.0-a2021.1 -> 1.0.0-a2021.2`
pub fn bump_prerel(input: &str) -> Result<String> {
    bump_version(input, VersionBump::Prerelease, SuffixPolicy::Preserve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_patch() {
        assert_eq!(bump_patch("1.0.0").unwrap(), "1.0.1");
    }

    #[test]
    fn test_bump_minor() {
        assert_eq!(bump_minor("1.1.1").unwrap(), "1.2.0");
    }

    #[test]
    fn test_bump_major() {
        assert_eq!(bump_major("1.1.1").unwrap(), "2.0.0");
    }

    #[test]
    fn test_bump_prerel_numeric_only() {
        assert_eq!(bump_prerel("1.0.0-1").unwrap(), "1.0.0-2");
    }

    #[test]
    fn test_bump_version_with_clear_policy() {
        assert_eq!(
            bump_version("1.1.1-rc.1+sha", VersionBump::Major, SuffixPolicy::Clear).unwrap(),
            "2.0.0"
        );
    }

    #[test]
    fn test_successive_bumps_advance() {
        let once = bump_patch("1.0.0").unwrap();
        let twice = bump_patch(&once).unwrap();
        assert_ne!(once, twice);
        assert_eq!(twice, "1.0.2");
    }
}
