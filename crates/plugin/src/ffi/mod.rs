//! C-compatible boundary

pub mod exports;
mod logging;
