//! Configuration system for yamlquery.
//!
//! Settings are read from `~/.config/yamlquery/config.toml` when present and
//! provide defaults for the command-line tool. Every field is optional in the
//! file; command-line flags override whatever is loaded.
//!
//! # Example
//!
//! ```
//! use yamlquery::config::{Config, OutputFormat};
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Plain);
//! assert!(!config.strict);
//!
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert_eq!(custom.log_level, "warn");
//! ```

use serde::{Deserialize, Serialize};

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Scalars printed bare, collections as YAML
    #[default]
    Plain,
    /// Always YAML
    Yaml,
    /// Always JSON
    Json,
}

/// Configuration for the yamlquery command-line tool.
///
/// # Fields
///
/// * `output_format` - Result rendering: "plain", "yaml" or "json" (default: "plain")
/// * `strict` - Fail on malformed or non-mapping documents instead of treating them as empty (default: false)
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Result rendering
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Reject documents that do not decode to a mapping
    #[serde(default)]
    pub strict: bool,

    /// Fallback `tracing` filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default log filter.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlquery/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlquery");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {}", err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Writes configuration to `path` as TOML, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
