//! Config path resolution
//!
//! The shim is loaded inside someone else's process (often an Android app
//! sandbox), so there is no install directory to derive paths from. The host
//! points at a config file through the environment instead.

use std::path::PathBuf;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "OPENXR_FRAME_STATS_CONFIG";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "OPENXR_FRAME_STATS_LOG";

/// Returns the config file path, if the host provided one.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
