//! OpenXR Frame Stats Plugin - FFI Layer
//!
//! This crate provides the C ABI the host engine binds against
//! (`DllImport("openxr_frame_stats")` and friends) on top of the core
//! interception logic. It compiles to a cdylib (.so/.dll).

pub mod ffi;
