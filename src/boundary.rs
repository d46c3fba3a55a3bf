use std::fmt;

use crate::domain::Version;

/// Non-fatal issues with an accepted version string.
/// These are reported to the user on stderr; the command still succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Input parsed, but formatting it back gives a different string
    /// (leading zeros in a numeric component)
    NonCanonicalInput { input: String, canonical: String },
    /// A bump dropped prerelease or metadata because suffix clearing is on
    SuffixesCleared { input: String, dropped: String },
}

impl BoundaryWarning {
    /// Compare raw input against its parsed form
    pub fn check_canonical(input: &str, parsed: &Version) -> Option<Self> {
        let canonical = parsed.to_string();
        if canonical == input {
            None
        } else {
            Some(BoundaryWarning::NonCanonicalInput {
                input: input.to_string(),
                canonical,
            })
        }
    }

    /// Compare the suffixes before and after a bump
    pub fn check_cleared(input: &Version, output: &Version) -> Option<Self> {
        let mut dropped = Vec::new();
        if !input.prerelease.is_empty() && output.prerelease.is_empty() {
            dropped.push(format!("-{}", input.prerelease));
        }
        if !input.metadata.is_empty() && output.metadata.is_empty() {
            dropped.push(format!("+{}", input.metadata));
        }

        if dropped.is_empty() {
            None
        } else {
            Some(BoundaryWarning::SuffixesCleared {
                input: input.to_string(),
                dropped: dropped.join(" "),
            })
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonCanonicalInput { input, canonical } => {
                write!(
                    f,
                    "Version '{}' is not in canonical form (read as '{}')",
                    input, canonical
                )
            }
            BoundaryWarning::SuffixesCleared { input, dropped } => {
                write!(f, "Dropped {} from '{}'", dropped, input)
            }
        }
    }
}
