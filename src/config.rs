//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.setgen.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".setgen.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Include line settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose output by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Marker separating the model name from the test number.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    crate::scanner::DEFAULT_DELIMITER.to_string()
}

/// Attributes written on every include line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// `NameSpace` attribute.
    #[serde(default)]
    pub namespace: String,

    /// `TAB` attribute.
    #[serde(default = "default_tab")]
    pub tab: u32,

    /// `LineComment` attribute.
    #[serde(default)]
    pub line_comment: u32,

    /// Extension of the referenced test scripts.
    #[serde(default = "default_extension")]
    pub member_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            tab: default_tab(),
            line_comment: 0,
            member_extension: default_extension(),
        }
    }
}

fn default_tab() -> u32 {
    10
}

fn default_extension() -> String {
    "xml".to_string()
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension of the generated main scripts.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI flags take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if args.verbose {
            self.general.verbose = true;
        }
        if args.quiet {
            self.general.verbose = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
