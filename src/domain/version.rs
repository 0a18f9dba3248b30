//! Semantic version parsing and incrementing
//!
//! A raw version string is split into an optional literal "v" prefix and a
//! semver core. Incrementing follows the usual release rules: bumping a
//! pre-release at the matching level "releases" it instead of moving the
//! numeric core, and build metadata never survives an increment.

use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

use crate::domain::level::IncrementLevel;
use crate::error::Result;

/// A version string split into its optional "v" prefix and semver core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInput {
    prefix: &'static str,
    core: Version,
}

impl VersionInput {
    /// Parse a raw version string, remembering whether it carried a "v" prefix.
    ///
    /// # Example
    /// ```
    /// use get_next_version::domain::VersionInput;
    ///
    /// assert!(VersionInput::parse("1.2.3").is_ok());
    /// assert!(VersionInput::parse("v1.2.3").is_ok());
    /// assert!(VersionInput::parse("1.2").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let (prefix, core_str) = match raw.strip_prefix('v') {
            Some(rest) => ("v", rest),
            None => ("", raw),
        };
        let core = Version::parse(core_str)?;
        Ok(VersionInput { prefix, core })
    }

    /// Whether the input carried the "v" prefix
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Compute the next version at the given level.
    ///
    /// A version carrying pre-release identifiers is released rather than
    /// bumped when the requested level would not move past it: patch keeps
    /// the numeric core, minor keeps it when patch is already 0, and major
    /// keeps it when both minor and patch are 0. Pre-release and build
    /// metadata are always cleared.
    pub fn increment(&self, level: IncrementLevel) -> IncrementedVersion {
        let mut next = self.core.clone();
        match level {
            IncrementLevel::Major => {
                if next.minor != 0 || next.patch != 0 || next.pre.is_empty() {
                    next.major += 1;
                }
                next.minor = 0;
                next.patch = 0;
            }
            IncrementLevel::Minor => {
                if next.patch != 0 || next.pre.is_empty() {
                    next.minor += 1;
                }
                next.patch = 0;
            }
            IncrementLevel::Patch => {
                if next.pre.is_empty() {
                    next.patch += 1;
                }
            }
        }
        next.pre = Prerelease::EMPTY;
        next.build = BuildMetadata::EMPTY;

        let plain = next.to_string();
        IncrementedVersion {
            prefixed: format!("{}{}", self.prefix, plain),
            plain,
        }
    }
}

impl fmt::Display for VersionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.core)
    }
}

/// The computed next version, in both output forms.
///
/// Invariant: `prefixed` equals the input's prefix ("v" or empty)
/// concatenated with `plain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementedVersion {
    pub prefixed: String,
    pub plain: String,
}
