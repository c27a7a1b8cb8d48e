use crate::Result;
use scout_types::{DEFAULT_SEARCH_ACTION, DEFAULT_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Authority suggest URIs must be addressed to
    #[serde(default = "default_authority")]
    pub authority: String,

    #[serde(default)]
    pub search: SearchDefaults,
}

impl Config {
    /// Load config from file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            authority: default_authority(),
            search: SearchDefaults::default(),
        }
    }
}

/// Fallback values applied when a query omits or mangles its parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDefaults {
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    #[serde(default = "default_action")]
    pub default_action: i64,
}

fn default_authority() -> String {
    "scout.search".to_string()
}
fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}
fn default_action() -> i64 {
    DEFAULT_SEARCH_ACTION
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_action: default_action(),
        }
    }
}
