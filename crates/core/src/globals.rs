//! Process-wide shim storage
//!
//! The OpenXR function table carries no per-instance context through the
//! hooked calls, so the exported entry points share one shim for the whole
//! process. Everything else takes a [`FrameStatsShim`] by reference.

use std::ffi::c_void;
use std::sync::LazyLock;

use xrstats_sdk::pfn;

use crate::hooks::{entry, FrameStatsShim};
use crate::timing::FrameTimingSnapshot;

/// Global shim, wired to hand out [`entry::wait_frame`]
static SHIM: LazyLock<FrameStatsShim> = LazyLock::new(|| FrameStatsShim::new(entry::wait_frame));

/// Get the process-wide shim
pub fn shim() -> &'static FrameStatsShim {
    &SHIM
}

/// Take the runtime's `xrGetInstanceProcAddr` and return the pointer to
/// install in its place
///
/// A NULL input is stored and handed straight back; there is nothing to wrap.
///
/// # Safety
/// `original` must be NULL or a valid `PFN_xrGetInstanceProcAddr`.
pub unsafe fn install_hook(original: *mut c_void) -> *mut c_void {
    let real = if original.is_null() {
        None
    } else {
        Some(std::mem::transmute::<*mut c_void, pfn::GetInstanceProcAddr>(original))
    };

    if shim().install(real) {
        entry::get_instance_proc_addr as pfn::GetInstanceProcAddr as *mut c_void
    } else {
        original
    }
}

/// Last frame period in seconds (0.0 if unset)
pub fn last_frame_period_seconds() -> f64 {
    shim().period_seconds()
}

/// Last predicted display time in seconds (0.0 if unset)
pub fn last_predicted_time_seconds() -> f64 {
    shim().predicted_time_seconds()
}

/// Current metrics as one consistent copy
pub fn snapshot() -> FrameTimingSnapshot {
    shim().snapshot()
}

/// Check if xrWaitFrame has been intercepted
pub fn is_intercepting() -> bool {
    shim().is_intercepting()
}
