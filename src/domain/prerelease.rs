//! Pre-release identifier handling
//!
//! A pre-release is split into everything before its last dot-separated
//! segment and that last segment, which counts as an iteration number when it
//! parses as a non-negative integer.

use crate::error::{Result, SemverError};
use std::fmt;

/// Pre-release string with its trailing iteration number isolated
///
/// # Examples
/// - "a20210131" -> PreRelease { identifier: "a20210131", iteration: None }
/// - "beta.1" -> PreRelease { identifier: "beta", iteration: Some(1) }
/// - "a2021.1.1" -> PreRelease { identifier: "a2021.1", iteration: Some(1) }
/// - "3" -> PreRelease { identifier: "", iteration: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// Every segment before the iteration, joined by dots
    pub identifier: String,
    /// Trailing numeric segment, if the last segment is numeric
    pub iteration: Option<u64>,
}

impl PreRelease {
    /// Create a new pre-release from its parts
    pub fn new(identifier: impl Into<String>, iteration: Option<u64>) -> Self {
        PreRelease {
            identifier: identifier.into(),
            iteration,
        }
    }

    /// The first pre-release of a release cycle, rendered as "0"
    pub fn initial() -> Self {
        PreRelease::new("", Some(0))
    }

    /// Split a non-empty pre-release string on its last dot
    ///
    /// The string is assumed to have passed version validation already, so
    /// this never rejects characters; it only decides whether the last
    /// segment is an iteration number.
    pub fn parse(s: &str) -> Self {
        let (head, last) = match s.rfind('.') {
            Some(idx) => (&s[..idx], &s[idx + 1..]),
            None => ("", s),
        };

        match last.parse::<u64>() {
            Ok(n) => PreRelease::new(head, Some(n)),
            Err(_) => PreRelease::new(s, None),
        }
    }

    /// Advance to the next pre-release
    ///
    /// A numeric last segment is incremented; otherwise a new `.0` segment is
    /// appended.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::parse("a20210131.1");
    /// assert_eq!(pr.increment_iteration()?.to_string(), "a20210131.2");
    /// ```
    pub fn increment_iteration(&self) -> Result<Self> {
        let next = match self.iteration {
            Some(n) => n
                .checked_add(1)
                .ok_or_else(|| SemverError::overflow(format!("prerelease '{}'", self)))?,
            None => 0,
        };

        Ok(PreRelease {
            identifier: self.identifier.clone(),
            iteration: Some(next),
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            if !self.identifier.is_empty() {
                write!(f, ".")?;
            }
            write!(f, "{}", iter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerelease_parse_unversioned() {
        let pr = PreRelease::parse("a20210131");
        assert_eq!(pr.identifier, "a20210131");
        assert_eq!(pr.iteration, None);
    }

    #[test]
    fn test_prerelease_parse_with_iteration() {
        let pr = PreRelease::parse("beta.1");
        assert_eq!(pr.identifier, "beta");
        assert_eq!(pr.iteration, Some(1));
    }

    #[test]
    fn test_prerelease_parse_only_last_segment_counts() {
        let pr = PreRelease::parse("a2021013.1.1");
        assert_eq!(pr.identifier, "a2021013.1");
        assert_eq!(pr.iteration, Some(1));
    }

    #[test]
    fn test_prerelease_parse_bare_number() {
        let pr = PreRelease::parse("7");
        assert_eq!(pr, PreRelease::new("", Some(7)));
    }

    #[test]
    fn test_prerelease_parse_hyphenated_segment_is_not_numeric() {
        let pr = PreRelease::parse("rc.-5");
        assert_eq!(pr.identifier, "rc.-5");
        assert_eq!(pr.iteration, None);
    }

    #[test]
    fn test_prerelease_parse_oversized_number_is_not_numeric() {
        let pr = PreRelease::parse("rc.99999999999999999999999");
        assert_eq!(pr.iteration, None);
    }

    #[test]
    fn test_prerelease_increment_with_iteration() {
        let pr = PreRelease::parse("a20210131.1");
        assert_eq!(pr.increment_iteration().unwrap().to_string(), "a20210131.2");
    }

    #[test]
    fn test_prerelease_increment_appends_zero() {
        let pr = PreRelease::parse("a20210131");
        assert_eq!(pr.increment_iteration().unwrap().to_string(), "a20210131.0");
    }

    #[test]
    fn test_prerelease_increment_bare_number() {
        let pr = PreRelease::parse("1");
        assert_eq!(pr.increment_iteration().unwrap().to_string(), "2");
    }

    #[test]
    fn test_prerelease_increment_high_number() {
        let pr = PreRelease::parse("rc.99");
        assert_eq!(pr.increment_iteration().unwrap().iteration, Some(100));
    }

    #[test]
    fn test_prerelease_increment_overflow() {
        let pr = PreRelease::new("rc", Some(u64::MAX));
        assert!(matches!(
            pr.increment_iteration(),
            Err(SemverError::ComponentOverflow(_))
        ));
    }

    #[test]
    fn test_prerelease_initial() {
        assert_eq!(PreRelease::initial().to_string(), "0");
    }

    #[test]
    fn test_prerelease_leading_zero_is_normalized() {
        let pr = PreRelease::parse("beta.01");
        assert_eq!(pr.increment_iteration().unwrap().to_string(), "beta.2");
    }

    #[test]
    fn test_prerelease_display_round_trip() {
        for s in ["alpha", "beta.1", "x.y.z", "x.1.z", "0"] {
            assert_eq!(PreRelease::parse(s).to_string(), s);
        }
    }
}
