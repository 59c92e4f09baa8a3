//! Logging setup for the host process

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use xrstats_core::ShimConfig;

static INIT: Once = Once::new();

/// Load config and install the tracing subscriber, once per process
///
/// Never fails: a broken config or filter falls back to defaults, and a
/// subscriber the host already installed is left in place.
pub(crate) fn init() {
    INIT.call_once(|| {
        let loaded = ShimConfig::load();
        let config = loaded.as_ref().cloned().unwrap_or_default();

        let filter = EnvFilter::try_new(config.log_directive())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();

        if let Err(e) = loaded {
            tracing::warn!("Failed to load config, using defaults: {}", e);
        }
    });
}
