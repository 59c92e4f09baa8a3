//! xrWaitFrame interception
//!
//! Wraps the loader's `xrGetInstanceProcAddr` so that resolving
//! `xrWaitFrame` returns an observer instead of the runtime function:
//! - [`registry`] maps entry point names to substitutes and captured originals
//! - [`shim`] implements the resolver and observer behind those substitutes
//! - [`entry`] holds the `extern "system"` functions bound to the global shim

pub mod entry;
pub mod registry;
pub mod shim;

pub use registry::{HookError, InterceptKey, InterceptTable};
pub use shim::FrameStatsShim;
