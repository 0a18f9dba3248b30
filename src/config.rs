use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NextVersionError, Result};

/// Names of the keys written to the pipeline output file.
///
/// Overridable from `nextversion.toml` so a pipeline can rename the
/// emitted keys without changing its workflow steps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_version_key")]
    pub version_key: String,

    #[serde(default = "default_plain_key")]
    pub plain_key: String,
}

/// Returns the default key for the prefixed version line.
fn default_version_key() -> String {
    "version".to_string()
}

/// Returns the default key for the plain (unprefixed) version line.
fn default_plain_key() -> String {
    "version_plain".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            version_key: default_version_key(),
            plain_key: default_plain_key(),
        }
    }
}

/// Represents the complete configuration for get-next-version.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `~/.config/.nextversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./nextversion.toml").exists() {
        fs::read_to_string("./nextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| NextVersionError::config(format!("invalid config file: {}", e)))?;
    Ok(config)
}

/// Fully-resolved inputs for one invocation.
///
/// Environment access happens here, once, at the process boundary; the
/// rest of the crate only sees this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// Current version, optionally "v"-prefixed
    pub version: String,

    /// Raw increment level, validated later
    pub level: String,

    /// Pipeline output file to append to; may be absent in dry-run mode
    pub output_path: Option<PathBuf>,
}

impl Inputs {
    /// Resolve inputs from CLI flags, falling back to the environment.
    ///
    /// Flags win over `INPUT_VERSION` / `INPUT_LEVEL` / `GITHUB_OUTPUT`.
    /// Version and level are required; the output path is validated by
    /// the caller since dry-run does not need one.
    pub fn resolve(
        version: Option<String>,
        level: Option<String>,
        output: Option<String>,
    ) -> Result<Self> {
        let version = version.or_else(|| env_var("INPUT_VERSION")).ok_or_else(|| {
            NextVersionError::config("missing current version: pass --current or set INPUT_VERSION")
        })?;

        let level = level.or_else(|| env_var("INPUT_LEVEL")).ok_or_else(|| {
            NextVersionError::config("missing increment level: pass --level or set INPUT_LEVEL")
        })?;

        let output_path = output
            .map(PathBuf::from)
            .or_else(|| env_var("GITHUB_OUTPUT").map(PathBuf::from));

        Ok(Inputs {
            version,
            level,
            output_path,
        })
    }

    /// The output path, required outside dry-run mode
    pub fn require_output_path(&self) -> Result<&Path> {
        self.output_path.as_deref().ok_or_else(|| {
            NextVersionError::config("missing output file: pass --output or set GITHUB_OUTPUT")
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
