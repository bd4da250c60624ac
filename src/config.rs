//! Configuration management for the property compiler
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (properties.toml)
//! - Environment variables (PROPERTIES__*)
//!
//! ## Example config file (properties.toml):
//! ```toml
//! [naming]
//! separators = ["_", "-"]
//! acronyms = ["ID", "URL"]
//!
//! [output]
//! format = "compact"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the property compiler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesConfig {
    /// Identifier casing settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Naming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Characters that split a raw name into words
    #[serde(default = "default_separators")]
    pub separators: Vec<char>,

    /// Acronyms emitted fully upper-case (e.g., ID, URL)
    #[serde(default)]
    pub acronyms: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (pretty or compact)
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

fn default_separators() -> Vec<char> {
    vec!['_', '-']
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separators: default_separators(),
            acronyms: Vec::new(),
        }
    }
}

impl PropertiesConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the default locations
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "properties.toml",
            ".properties.toml",
            "config/properties.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "model-properties") {
            let xdg_config = config_dir.config_dir().join("properties.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // PROPERTIES__OUTPUT__FORMAT=compact
        builder = builder.add_source(
            Environment::with_prefix("PROPERTIES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
