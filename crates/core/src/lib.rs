//! OpenXR Frame Stats - Core Logic
//!
//! Interposes on `xrGetInstanceProcAddr` to observe `xrWaitFrame` and derive
//! two timing metrics from its `predictedDisplayTime`:
//! - the interval between successive predicted display times
//! - the most recent predicted display time itself
//!
//! Nothing else the runtime hands out is touched, and the observed call
//! returns exactly what the runtime produced.
//!
//! # Re-exports
//!
//! - [`sdk`] - OpenXR ABI types and entry point names

// Re-export SDK crate
pub use xrstats_sdk as sdk;

pub mod config;
pub mod globals;
pub mod hooks;
pub mod timing;

// Re-export commonly used items
pub use config::{ConfigError, ConfigResult, ShimConfig};
pub use globals::{install_hook, shim};
pub use hooks::{FrameStatsShim, HookError, InterceptKey, InterceptTable};
pub use timing::{FrameTiming, FrameTimingSnapshot, SampleOutcome, SharedFrameTiming};
