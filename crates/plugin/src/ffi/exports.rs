//! C-compatible exports called by the host engine

use std::ffi::{c_char, c_void};

use tracing::instrument;

use xrstats_core::globals;

// Plugin metadata - static string with null terminator for C compatibility
static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// Called with the runtime's `xrGetInstanceProcAddr`; returns the pointer the
/// host should install in its place
///
/// Returns `original` unchanged when it is null or if installation fails.
///
/// # Safety
/// - `original` must be null or a valid `PFN_xrGetInstanceProcAddr`
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn fm_hook_get_instance_proc_addr(original: *mut c_void) -> *mut c_void {
    super::logging::init();

    match std::panic::catch_unwind(|| unsafe { globals::install_hook(original) }) {
        Ok(installed) => installed,
        Err(_) => {
            tracing::error!("Panic while installing xrGetInstanceProcAddr hook");
            original
        }
    }
}

/// Last measured frame period (delta between predicted display times) in seconds
#[no_mangle]
pub extern "C" fn fm_get_last_frame_period_seconds() -> f64 {
    globals::last_frame_period_seconds()
}

/// Last predicted display time in seconds, in the runtime's monotonic timebase
#[no_mangle]
pub extern "C" fn fm_get_last_frame_time_seconds() -> f64 {
    globals::last_predicted_time_seconds()
}

/// Frames per second implied by the last period, 0.0 while unknown
#[no_mangle]
pub extern "C" fn fm_get_frame_delivery_rate() -> f64 {
    globals::snapshot().delivery_rate()
}

/// Number of successful xrWaitFrame calls observed
#[no_mangle]
pub extern "C" fn fm_get_sample_count() -> u64 {
    globals::snapshot().sample_count
}

/// Whether xrWaitFrame has been intercepted
///
/// Stays false if the hook was installed after the host resolved xrWaitFrame,
/// in which case the metrics remain at zero.
#[no_mangle]
pub extern "C" fn fm_is_intercepting() -> bool {
    globals::is_intercepting()
}

#[no_mangle]
pub extern "C" fn fm_get_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}
