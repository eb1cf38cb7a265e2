//! Service configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Msgboard configuration, loaded from an optional TOML file.
///
/// Every field has a default so a partial (or absent) file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serve the interactive GraphiQL explorer on GET /graphql
    #[serde(default = "default_playground")]
    pub playground: bool,

    /// Maximum query depth accepted by the executor
    #[serde(default)]
    pub limit_depth: Option<usize>,

    /// Maximum query complexity accepted by the executor
    #[serde(default)]
    pub limit_complexity: Option<usize>,
}

fn default_playground() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playground: default_playground(),
            limit_depth: None,
            limit_complexity: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
