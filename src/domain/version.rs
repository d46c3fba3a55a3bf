use crate::domain::prerelease::PreRelease;
use crate::error::{Result, SemverError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SEMVER_PATTERN: &str = r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-(?P<prerelease>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<metadata>[0-9A-Za-z-]+))?$";

static SEMVER_RE: OnceLock<Regex> = OnceLock::new();

fn semver_regex() -> &'static Regex {
    SEMVER_RE.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is a valid regex"))
}

/// Semantic version representation
///
/// Serializes with capitalized keys (`Major`, `Minor`, ...), the shape the
/// `parse` command prints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub metadata: String,
}

/// Which component a bump advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    Prerelease,
}

/// What happens to the prerelease and metadata suffixes on a bump
///
/// `Preserve` carries both suffixes through every bump. `Clear` drops them on
/// major and minor bumps and drops metadata on prerelease bumps; patch bumps
/// keep them either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixPolicy {
    #[default]
    Preserve,
    Clear,
}

/// Returns true if `input` matches the version grammar
pub fn is_valid(input: &str) -> bool {
    semver_regex().is_match(input)
}

impl Version {
    /// Create a release version with empty prerelease and metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Default::default()
        }
    }

    /// Attach a prerelease string
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = prerelease.into();
        self
    }

    /// Attach build metadata
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]`
    ///
    /// The whole string must match the grammar; nothing is trimmed and no
    /// `v` prefix is accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = semver_regex()
            .captures(input)
            .ok_or_else(|| SemverError::invalid_version(input))?;

        let number = |name: &str| -> Result<u64> {
            caps[name]
                .parse::<u64>()
                .map_err(|_| SemverError::invalid_version(input))
        };

        Ok(Version {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease: caps
                .name("prerelease")
                .map_or_else(String::new, |m| m.as_str().to_string()),
            metadata: caps
                .name("metadata")
                .map_or_else(String::new, |m| m.as_str().to_string()),
        })
    }

    /// Bump according to bump type, consuming the current version
    pub fn bump(mut self, bump_type: VersionBump, policy: SuffixPolicy) -> Result<Self> {
        let clear = policy == SuffixPolicy::Clear;
        match bump_type {
            VersionBump::Major => {
                self.major = increment(self.major, "major")?;
                self.minor = 0;
                self.patch = 0;
                if clear {
                    self.prerelease.clear();
                    self.metadata.clear();
                }
            }
            VersionBump::Minor => {
                self.minor = increment(self.minor, "minor")?;
                self.patch = 0;
                if clear {
                    self.prerelease.clear();
                    self.metadata.clear();
                }
            }
            VersionBump::Patch => {
                self.patch = increment(self.patch, "patch")?;
            }
            VersionBump::Prerelease => {
                if clear {
                    self.metadata.clear();
                }
                if self.prerelease.is_empty() {
                    self.patch = increment(self.patch, "patch")?;
                    self.prerelease = PreRelease::initial().to_string();
                } else {
                    self.prerelease = PreRelease::parse(&self.prerelease)
                        .increment_iteration()?
                        .to_string();
                }
            }
        }
        Ok(self)
    }
}

fn increment(value: u64, component: &str) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| SemverError::overflow(format!("{} version {}", component, value)))
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}
