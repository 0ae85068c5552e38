//! Runtime configuration parsing (`runtime.toml`).
//!
//! An embedding application can keep its template globals and extra filter
//! aliases in a TOML file and seed a [`crate::RuntimeBuilder`] from it once at
//! startup:
//!
//! ```toml
//! [globals]
//! site_name = "Example"
//!
//! [filter_aliases]
//! len = "size"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::value::Map;

const CONFIG_FILENAME: &str = "runtime.toml";

/// Startup configuration for a [`crate::Runtime`].
#[derive(Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Values available to every render unless shadowed by user variables.
    #[serde(default)]
    pub globals: Map,

    /// Extra filter names mapped to existing filters.
    #[serde(default)]
    pub filter_aliases: IndexMap<String, String>,
}

impl RuntimeConfig {
    /// Load configuration from a directory containing `runtime.toml`.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILENAME);
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;
        tracing::debug!(
            globals = config.globals.len(),
            aliases = config.filter_aliases.len(),
            "loaded runtime configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
