use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpCheckError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "bumpcheck.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bumpcheck.toml";

/// Represents the complete configuration for bump-check.
///
/// Contains commit parsing settings, bump analysis settings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default list of breaking change note keywords.
fn default_note_keywords() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string(), "BREAKING-CHANGE".to_string()]
}

/// Returns the default list of commit types that require a minor bump.
fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Configuration for conventional commit parsing.
///
/// Defines which trailer keywords become breaking-change notes and whether a `!`
/// in the header counts as one. The `!` marker is off unless enabled.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParserConfig {
    #[serde(default = "default_note_keywords")]
    pub note_keywords: Vec<String>,

    #[serde(default)]
    pub breaking_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            note_keywords: default_note_keywords(),
            breaking_header: false,
        }
    }
}

/// Configuration for increment classification.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            minor_types: default_minor_types(),
        }
    }
}

/// Configuration for the command line wrapper.
///
/// Controls logging and repository location without affecting version analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub repository: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpcheck.toml` in current directory
/// 3. `.bumpcheck.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            fs::read_to_string(user_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML configuration document.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| BumpCheckError::config(e.to_string()))
}
