//! Entry points handed to the OpenXR loader
//!
//! The runtime calls these through plain function pointers with no user
//! data, so they route into the process-wide shim.

use std::ffi::c_char;

use xrstats_sdk::{pfn, sys as xr};

use crate::globals::shim;

/// Installed in place of the runtime's `xrGetInstanceProcAddr`
///
/// # Safety
/// Called by the OpenXR loader/host with the `xrGetInstanceProcAddr` contract.
pub unsafe extern "system" fn get_instance_proc_addr(
    instance: xr::Instance,
    name: *const c_char,
    function: *mut Option<pfn::VoidFunction>,
) -> xr::Result {
    shim().get_instance_proc_addr(instance, name, function)
}

/// Handed out for `xrWaitFrame`
///
/// # Safety
/// Called by the host with the `xrWaitFrame` contract.
pub unsafe extern "system" fn wait_frame(
    session: xr::Session,
    frame_wait_info: *const xr::FrameWaitInfo,
    frame_state: *mut xr::FrameState,
) -> xr::Result {
    shim().wait_frame(session, frame_wait_info, frame_state)
}
