//! Frame stats shim context
//!
//! Owns everything the interception needs: the real resolver, the registry
//! of substituted entry points, and the timing state fed by xrWaitFrame.
//! The process-wide instance lives in [`crate::globals`]; tests build their
//! own.

use std::ffi::{c_char, CStr};

use parking_lot::RwLock;
use xrstats_sdk::{names, pfn, sys as xr};

use super::registry::{HookError, InterceptKey, InterceptTable};
use crate::timing::{FrameTimingSnapshot, SampleOutcome, SharedFrameTiming};

/// Interception context for `xrGetInstanceProcAddr` and `xrWaitFrame`
pub struct FrameStatsShim {
    /// Real `xrGetInstanceProcAddr`; last install wins
    next_resolver: RwLock<Option<pfn::GetInstanceProcAddr>>,

    /// Substituted entry points
    intercepts: InterceptTable,

    /// Registry key of the xrWaitFrame interception
    wait_frame_key: InterceptKey,

    /// Metrics derived from xrWaitFrame output
    timing: SharedFrameTiming,
}

impl FrameStatsShim {
    /// Create a shim that hands out `wait_frame_substitute` for xrWaitFrame
    ///
    /// The substitute is expected to route back into [`Self::wait_frame`] on
    /// this same instance.
    pub fn new(wait_frame_substitute: pfn::WaitFrame) -> Self {
        let mut intercepts = InterceptTable::new();

        // SAFETY: The resolver contract hands out every entry point as
        // PFN_xrVoidFunction; callers cast it back to the real signature.
        let substitute = unsafe {
            std::mem::transmute::<pfn::WaitFrame, pfn::VoidFunction>(wait_frame_substitute)
        };
        let wait_frame_key = intercepts.register(names::WAIT_FRAME, substitute);

        Self {
            next_resolver: RwLock::new(None),
            intercepts,
            wait_frame_key,
            timing: SharedFrameTiming::new(),
        }
    }

    /// Store the real resolver
    ///
    /// Returns `true` if there is something to wrap. With `None` the caller
    /// should keep using its own pointer.
    pub fn install(&self, real: Option<pfn::GetInstanceProcAddr>) -> bool {
        *self.next_resolver.write() = real;

        match real {
            Some(f) => {
                tracing::info!("Wrapping xrGetInstanceProcAddr at {:p}", f as *const ());
                true
            }
            None => {
                tracing::warn!("No xrGetInstanceProcAddr to wrap, interception disabled");
                false
            }
        }
    }

    /// Check if a real resolver is installed
    pub fn is_installed(&self) -> bool {
        self.next_resolver.read().is_some()
    }

    /// Check if the real xrWaitFrame has been captured
    pub fn is_intercepting(&self) -> bool {
        self.intercepts.is_captured(self.wait_frame_key)
    }

    /// `xrGetInstanceProcAddr` replacement
    ///
    /// Delegates to the real resolver, then swaps in the substitute when the
    /// requested name is intercepted. Failures and NULL results are passed
    /// through untouched.
    ///
    /// # Safety
    /// Same contract as `xrGetInstanceProcAddr`: `name` must be NULL or a
    /// valid C string, `function` must be NULL or writable.
    pub unsafe fn get_instance_proc_addr(
        &self,
        instance: xr::Instance,
        name: *const c_char,
        function: *mut Option<pfn::VoidFunction>,
    ) -> xr::Result {
        let next = *self.next_resolver.read();
        let Some(next) = next else {
            return HookError::Unavailable("xrGetInstanceProcAddr").into();
        };

        let result = next(instance, name, function);
        if result != xr::Result::SUCCESS || name.is_null() || function.is_null() {
            return result;
        }

        let Some(real) = *function else {
            return result;
        };

        let Some(key) = self.intercepts.find(CStr::from_ptr(name)) else {
            return result;
        };

        match self.intercepts.capture(key, real) {
            Ok(substitute) => *function = Some(substitute),
            Err(e) => tracing::warn!("Leaving {:?} unhooked: {}", CStr::from_ptr(name), e),
        }

        result
    }

    /// `xrWaitFrame` replacement
    ///
    /// Forwards to the captured implementation and records the predicted
    /// display time when the call succeeds. What the caller gets back is
    /// exactly what the runtime produced.
    ///
    /// # Safety
    /// Same contract as `xrWaitFrame`.
    pub unsafe fn wait_frame(
        &self,
        session: xr::Session,
        frame_wait_info: *const xr::FrameWaitInfo,
        frame_state: *mut xr::FrameState,
    ) -> xr::Result {
        match self.forward_wait_frame(session, frame_wait_info, frame_state) {
            Ok(result) => result,
            Err(e) => {
                tracing::trace!("xrWaitFrame not forwarded: {}", e);
                e.into()
            }
        }
    }

    unsafe fn forward_wait_frame(
        &self,
        session: xr::Session,
        frame_wait_info: *const xr::FrameWaitInfo,
        frame_state: *mut xr::FrameState,
    ) -> Result<xr::Result, HookError> {
        let real = self.real_wait_frame()?;
        let result = real(session, frame_wait_info, frame_state);

        if result != xr::Result::SUCCESS {
            tracing::trace!("xrWaitFrame returned {}, skipping sample", result);
            return Ok(result);
        }

        if let Some(state) = frame_state.as_ref() {
            self.observe(state.predicted_display_time);
        }

        Ok(result)
    }

    #[inline]
    fn real_wait_frame(&self) -> Result<pfn::WaitFrame, HookError> {
        let original = self
            .intercepts
            .original(self.wait_frame_key)
            .ok_or(HookError::Unavailable("xrWaitFrame"))?;

        // SAFETY: Captured from the resolver under the xrWaitFrame name, so
        // the runtime guarantees this signature.
        Ok(unsafe { std::mem::transmute::<pfn::VoidFunction, pfn::WaitFrame>(original) })
    }

    fn observe(&self, predicted_display_time: xr::Time) {
        if let SampleOutcome::Regressed { previous } = self.timing.record(predicted_display_time) {
            tracing::trace!(
                "predictedDisplayTime {} did not advance past {}, period unchanged",
                predicted_display_time.as_nanos(),
                previous.as_nanos()
            );
        }
    }

    /// Last frame period in seconds, 0.0 until two advancing samples
    pub fn period_seconds(&self) -> f64 {
        self.timing.period_seconds()
    }

    /// Last predicted display time in seconds, 0.0 until the first sample
    pub fn predicted_time_seconds(&self) -> f64 {
        self.timing.predicted_time_seconds()
    }

    pub fn snapshot(&self) -> FrameTimingSnapshot {
        self.timing.snapshot()
    }
}
