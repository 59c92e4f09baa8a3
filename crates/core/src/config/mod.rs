//! Configuration for the frame stats shim
//!
//! Only diagnostics are configurable; interception behavior is fixed.
//!
//! # Example
//!
//! ```toml
//! # openxr_frame_stats.toml
//! debug = true
//! log_filter = "xrstats_core=trace"
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{config_path, CONFIG_ENV_VAR, LOG_ENV_VAR};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Shim configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Explicit `tracing` filter directive, overrides `debug`
    pub log_filter: Option<String>,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: None,
        }
    }
}

impl ShimConfig {
    /// Load config from the path in [`CONFIG_ENV_VAR`].
    ///
    /// Returns defaults when the variable is unset or the file is missing.
    pub fn load() -> ConfigResult<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!("Config {:?} not found, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Filter directive to start logging with
    ///
    /// The environment wins over the file, `log_filter` over `debug`.
    pub fn log_directive(&self) -> String {
        if let Some(directive) = std::env::var(LOG_ENV_VAR).ok().filter(|d| !d.is_empty()) {
            return directive;
        }

        match &self.log_filter {
            Some(filter) if !filter.is_empty() => filter.clone(),
            _ if self.debug => "debug".to_string(),
            _ => "info".to_string(),
        }
    }
}
