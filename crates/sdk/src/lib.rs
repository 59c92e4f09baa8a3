//! xrstats SDK - OpenXR Bindings
//!
//! Raw OpenXR types come from `openxr-sys`, re-exported here as [`sys`] so
//! the rest of the workspace pins one version of the ABI. This crate adds
//! the entry point names the shim matches on and the runtime timebase.
//!
//! # Modules
//!
//! - [`names`] - Entry point names as passed to `xrGetInstanceProcAddr`

pub mod names;

pub use openxr_sys as sys;
pub use openxr_sys::pfn;
pub use openxr_sys::{
    Duration, FrameState, FrameWaitInfo, Instance, Result, Session, StructureType, Time,
};

/// Native ticks per second of `XrTime` (the runtime timebase is nanoseconds)
pub const NANOS_PER_SECOND: f64 = 1e9;
