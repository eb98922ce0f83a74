use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Document language code (ISO), selects the typography profile
    pub language: String,

    /// Which fixers run, and in what combination
    #[serde(default)]
    pub fixes: FixConfig,

    /// File extensions picked up in directory mode
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Rewrite input files in place instead of writing a sibling copy
    #[serde(default)]
    pub in_place: bool,

    /// Keep a timestamped backup when rewriting in place
    #[serde(default)]
    pub backup: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Per-fixer on/off switches
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FixConfig {
    // @field: Rewrite bare URLs into markup links
    #[serde(default = "default_true")]
    pub links: bool,

    // @field: Apply language typography rules
    #[serde(default = "default_true")]
    pub typography: bool,

    // @field: Renumber and validate footnotes
    #[serde(default = "default_true")]
    pub footnotes: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        FixConfig {
            links: true,
            typography: true,
            footnotes: true,
        }
    }
}

impl FixConfig {
    /// True when every fixer is switched off
    pub fn is_empty(&self) -> bool {
        !self.links && !self.typography && !self.footnotes
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "org".to_string()]
}

fn default_language() -> String {
    "en".to_string()
}

impl Config {
    /// Validate the configuration before use
    pub fn validate(&self) -> Result<()> {
        // The language must at least be a real ISO code; a valid code
        // without a typography profile simply disables that fixer
        crate::language_utils::validate_language_code(&self.language)?;

        if self.extensions.is_empty() {
            return Err(anyhow!("At least one file extension must be configured"));
        }

        if self.fixes.is_empty() {
            return Err(anyhow!(
                "All fixers are disabled; nothing to do (enable links, typography or footnotes)"
            ));
        }

        if self.backup && !self.in_place {
            return Err(anyhow!("'backup' only makes sense together with 'in_place'"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            fixes: FixConfig::default(),
            extensions: default_extensions(),
            in_place: false,
            backup: false,
            log_level: LogLevel::default(),
        }
    }
}
