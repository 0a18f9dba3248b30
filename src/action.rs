//! Core invocation logic
//!
//! One invocation is a single linear pass: validate the level, parse the
//! version, compute the increment, and emit both output forms. There are
//! no retries and no intermediate states; every failure is terminal.

use crate::config::OutputConfig;
use crate::domain::{IncrementLevel, IncrementedVersion, VersionInput};
use crate::error::Result;
use crate::output::OutputSink;

/// Validate the inputs and compute the next version.
///
/// Fails with a `Validation` error for an unknown level and a `Parse`
/// error for a malformed version core. No output is produced here, so a
/// failed invocation never touches the output file.
pub fn compute(version: &str, level: &str) -> Result<IncrementedVersion> {
    let level: IncrementLevel = level.parse()?;
    let input = VersionInput::parse(version)?;
    Ok(input.increment(level))
}

/// Emit both output forms, prefixed first, then plain.
pub fn emit(
    next: &IncrementedVersion,
    keys: &OutputConfig,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    sink.append(&keys.version_key, &next.prefixed)?;
    sink.append(&keys.plain_key, &next.plain)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NextVersionError;
    use crate::output::MemorySink;

    fn emit_lines(version: &str, level: &str) -> Vec<(String, String)> {
        let next = compute(version, level).unwrap();
        let mut sink = MemorySink::new();
        emit(&next, &OutputConfig::default(), &mut sink).unwrap();
        sink.lines().to_vec()
    }

    #[test]
    fn test_patch_scenario() {
        assert_eq!(
            emit_lines("1.0.0", "patch"),
            vec![
                ("version".to_string(), "1.0.1".to_string()),
                ("version_plain".to_string(), "1.0.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_prefixed_major_scenario() {
        assert_eq!(
            emit_lines("v1.0.0", "major"),
            vec![
                ("version".to_string(), "v2.0.0".to_string()),
                ("version_plain".to_string(), "2.0.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_prerelease_with_build_metadata_scenario() {
        assert_eq!(
            emit_lines("1.0.0-alpha.1+build.1", "minor"),
            vec![
                ("version".to_string(), "1.0.0".to_string()),
                ("version_plain".to_string(), "1.0.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_level_is_case_insensitive() {
        assert_eq!(emit_lines("1.0.0", "PATCH"), emit_lines("1.0.0", "patch"));
        assert_eq!(emit_lines("1.0.0", "Patch"), emit_lines("1.0.0", "patch"));
    }

    #[test]
    fn test_invalid_level_is_validation_error() {
        let err = compute("1.0.0", "bogus").unwrap_err();
        assert!(matches!(err, NextVersionError::Validation { .. }));
        assert!(err.to_string().contains("bogus"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_malformed_version_is_parse_error() {
        let err = compute("not-a-version", "patch").unwrap_err();
        assert!(matches!(err, NextVersionError::Parse(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_level_validated_before_version_parse() {
        // Both inputs are bad; the level check runs first
        let err = compute("garbage", "bogus").unwrap_err();
        assert!(matches!(err, NextVersionError::Validation { .. }));
    }

    #[test]
    fn test_custom_output_keys() {
        let next = compute("1.0.0", "minor").unwrap();
        let keys = OutputConfig {
            version_key: "next".to_string(),
            plain_key: "next_plain".to_string(),
        };
        let mut sink = MemorySink::new();
        emit(&next, &keys, &mut sink).unwrap();

        assert_eq!(
            sink.lines(),
            &[
                ("next".to_string(), "1.1.0".to_string()),
                ("next_plain".to_string(), "1.1.0".to_string()),
            ]
        );
    }
}
