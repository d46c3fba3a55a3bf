use crate::domain::SuffixPolicy;
use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LOCAL_CONFIG: &str = "./semver.toml";
const USER_CONFIG: &str = ".semver.toml";

/// Represents the complete configuration for the semver tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub bump: BumpConfig,
}

/// How `parse` renders a version.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON object
    #[default]
    Json,
    /// One `key: value` line per component
    Text,
}

fn default_indent() -> usize {
    2
}

/// Output rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per JSON indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            indent: default_indent(),
        }
    }
}

/// Bump behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BumpConfig {
    /// Drop prerelease and metadata on major/minor bumps, and metadata on
    /// prerelease bumps
    #[serde(default)]
    pub clear_suffixes: bool,
}

impl BumpConfig {
    pub fn suffix_policy(&self) -> SuffixPolicy {
        if self.clear_suffixes {
            SuffixPolicy::Clear
        } else {
            SuffixPolicy::Preserve
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG).exists() {
        fs::read_to_string(LOCAL_CONFIG)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| SemverError::config(e.to_string()))
}
