//! Increment level handling
//!
//! The level names the granularity (major/minor/patch) at which a version
//! is bumped. Matching is case-insensitive; anything else is rejected.

use crate::error::{NextVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Granularity at which a version is bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementLevel {
    Major,
    Minor,
    Patch,
}

impl IncrementLevel {
    /// The accepted level names, in canonical lowercase form
    pub const VALID: [&'static str; 3] = ["major", "minor", "patch"];

    /// Canonical lowercase name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementLevel::Major => "major",
            IncrementLevel::Minor => "minor",
            IncrementLevel::Patch => "patch",
        }
    }
}

impl FromStr for IncrementLevel {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(IncrementLevel::Major),
            "minor" => Ok(IncrementLevel::Minor),
            "patch" => Ok(IncrementLevel::Patch),
            _ => Err(NextVersionError::validation(s)),
        }
    }
}

impl fmt::Display for IncrementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        assert_eq!("major".parse::<IncrementLevel>().unwrap(), IncrementLevel::Major);
        assert_eq!("minor".parse::<IncrementLevel>().unwrap(), IncrementLevel::Minor);
        assert_eq!("patch".parse::<IncrementLevel>().unwrap(), IncrementLevel::Patch);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        for raw in ["PATCH", "Patch", "patch", "pAtCh"] {
            assert_eq!(raw.parse::<IncrementLevel>().unwrap(), IncrementLevel::Patch);
        }
        assert_eq!("MAJOR".parse::<IncrementLevel>().unwrap(), IncrementLevel::Major);
        assert_eq!("Minor".parse::<IncrementLevel>().unwrap(), IncrementLevel::Minor);
    }

    #[test]
    fn test_parse_invalid_carries_original_value() {
        let err = "bogus".parse::<IncrementLevel>().unwrap_err();
        match err {
            NextVersionError::Validation { ref level } => assert_eq!(level, "bogus"),
            other => panic!("expected Validation error, got: {}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_and_near_misses() {
        assert!("".parse::<IncrementLevel>().is_err());
        assert!("path".parse::<IncrementLevel>().is_err());
        assert!("majors".parse::<IncrementLevel>().is_err());
        assert!(" patch".parse::<IncrementLevel>().is_err());
    }

    #[test]
    fn test_display_matches_valid_list() {
        let levels = [IncrementLevel::Major, IncrementLevel::Minor, IncrementLevel::Patch];
        for (level, name) in levels.iter().zip(IncrementLevel::VALID) {
            assert_eq!(level.to_string(), name);
        }
    }
}
