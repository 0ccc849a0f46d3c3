// src/config.rs
//! Outline configuration
//!
//! Loaded from `advpl-outline.toml`. Keys mirror the editor settings the
//! outline was first configured through:
//!
//! ```toml
//! show_activation_message = false
//!
//! [regex]
//! functions = '(?m)^[ \t]*(?:(Static|User)[ \t]+)?Function[ \t]+(\w+)[ \t]*\(([^)]*)\)'
//! variables = '(?m)^[ \t]*(Local|Private|Public|Static)[ \t]+(\w+)'
//!
//! [parameters]
//! fallback = "undefined"     # or "omit"
//! as_separator = "sensitive" # or "insensitive"
//! ```
//!
//! A key left out of `[regex]` keeps its default; set it to `""` to switch
//! that symbol kind off.

use advpl_extractors::{InferenceOptions, OutlineExtractor, PatternConfig, PatternSet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "advpl-outline.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Report activation on startup (deactivation is always reported)
    pub show_activation_message: bool,

    /// One matching rule per symbol kind
    pub regex: PatternConfig,

    /// Parameter type inference behaviour
    pub parameters: InferenceOptions,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            show_activation_message: false,
            regex: PatternConfig::default(),
            parameters: InferenceOptions::default(),
        }
    }
}

impl OutlineConfig {
    /// Load from `path`, or from the working directory when `None`
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        if !config_path.exists() {
            warn!(
                "Configuration file {} not found, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        debug!("Loaded configuration from: {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write this configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        debug!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Compile the rules, failing on the first broken one
    ///
    /// Extraction itself tolerates broken rules; this is for reporting them
    /// up front.
    pub fn validate(&self) -> Result<()> {
        PatternSet::try_compile(&self.regex).context("Invalid [regex] configuration")?;
        Ok(())
    }

    pub fn extractor(&self) -> OutlineExtractor {
        OutlineExtractor::from_config(&self.regex, self.parameters)
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}
