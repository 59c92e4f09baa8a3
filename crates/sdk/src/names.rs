//! Entry point names for xrGetInstanceProcAddr
//!
//! These strings must match exactly what the loader and runtime resolve.
//! Comparison is byte-for-byte and case-sensitive.

use std::ffi::CStr;

/// Frame pacing call; blocks until the runtime wants the next frame
pub const WAIT_FRAME: &CStr = c"xrWaitFrame";
