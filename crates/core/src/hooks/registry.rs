//! Interception registry
//!
//! Maps entry point names to the substitute handed back by the resolver and
//! remembers the real implementation each substitute forwards to.

use std::ffi::CStr;
use std::sync::OnceLock;

use slotmap::{new_key_type, SlotMap};
use xrstats_sdk::{pfn, sys as xr};

new_key_type! {
    /// Handle for a registered interception
    pub struct InterceptKey;
}

/// Error type for interception operations
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The real implementation was never captured
    #[error("No real implementation captured for {0}")]
    Unavailable(&'static str),

    #[error("Interception not found")]
    NotFound,
}

impl From<HookError> for xr::Result {
    fn from(_: HookError) -> Self {
        // Mirrors what the runtime reports for an entry point it lacks
        xr::Result::ERROR_FUNCTION_UNSUPPORTED
    }
}

/// Storage for one interception
struct InterceptEntry {
    /// Entry point name as requested through the resolver
    name: &'static CStr,

    /// Address handed to the caller instead of the real one
    substitute: pfn::VoidFunction,

    /// Real implementation, set by the first successful resolution
    original: OnceLock<pfn::VoidFunction>,
}

/// Registry of intercepted entry points
#[derive(Default)]
pub struct InterceptTable {
    entries: SlotMap<InterceptKey, InterceptEntry>,
}

impl InterceptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a substitute for `name`
    ///
    /// Registering a name twice keeps the first substitute and returns its key.
    pub fn register(
        &mut self,
        name: &'static CStr,
        substitute: pfn::VoidFunction,
    ) -> InterceptKey {
        if let Some(key) = self.find(name) {
            tracing::warn!(
                "Interception for {} already registered, keeping the first substitute",
                name.to_string_lossy()
            );
            return key;
        }

        let key = self.entries.insert(InterceptEntry {
            name,
            substitute,
            original: OnceLock::new(),
        });

        tracing::debug!(
            "Registered interception for {} -> {:p}",
            name.to_string_lossy(),
            substitute as *const ()
        );

        key
    }

    /// Look up an interception by exact, case-sensitive name
    pub fn find(&self, name: &CStr) -> Option<InterceptKey> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.name.to_bytes() == name.to_bytes())
            .map(|(key, _)| key)
    }

    /// Remember the real implementation and return the substitute to hand out
    ///
    /// Only the first capture is kept; later calls return the same substitute
    /// and leave the stored original alone.
    pub fn capture(
        &self,
        key: InterceptKey,
        real: pfn::VoidFunction,
    ) -> Result<pfn::VoidFunction, HookError> {
        let entry = self.entries.get(key).ok_or(HookError::NotFound)?;

        match entry.original.set(real) {
            Ok(()) => tracing::info!(
                "Intercepted {}: real={:p}, substitute={:p}",
                entry.name.to_string_lossy(),
                real as *const (),
                entry.substitute as *const ()
            ),
            Err(_) => {
                let kept = entry.original.get().map(|f| *f as usize);
                if kept != Some(real as usize) {
                    tracing::debug!(
                        "{} resolved to a different implementation {:p}, keeping the first",
                        entry.name.to_string_lossy(),
                        real as *const ()
                    );
                }
            }
        }

        Ok(entry.substitute)
    }

    /// Real implementation captured for `key`, if any
    #[inline]
    pub fn original(&self, key: InterceptKey) -> Option<pfn::VoidFunction> {
        self.entries.get(key).and_then(|e| e.original.get().copied())
    }

    /// Substitute registered for `key`
    pub fn substitute(&self, key: InterceptKey) -> Option<pfn::VoidFunction> {
        self.entries.get(key).map(|e| e.substitute)
    }

    /// Check if the real implementation has been captured
    pub fn is_captured(&self, key: InterceptKey) -> bool {
        self.original(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(f: pfn::VoidFunction) -> usize {
        f as usize
    }

    unsafe extern "system" fn substitute_a() {}

    unsafe extern "system" fn substitute_b() {
        std::hint::black_box(1);
    }

    unsafe extern "system" fn real_a() {
        std::hint::black_box(2);
    }

    unsafe extern "system" fn real_b() {
        std::hint::black_box(3);
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let mut table = InterceptTable::new();
        let key = table.register(c"xrWaitFrame", substitute_a);

        assert_eq!(table.find(c"xrWaitFrame"), Some(key));
        assert_eq!(table.find(c"xrwaitframe"), None);
        assert_eq!(table.find(c"xrWaitFrame2"), None);
        assert_eq!(table.find(c"xrWait"), None);
    }

    #[test]
    fn test_duplicate_register_keeps_first() {
        let mut table = InterceptTable::new();
        let first = table.register(c"xrWaitFrame", substitute_a);
        let second = table.register(c"xrWaitFrame", substitute_b);

        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.substitute(first).map(|f| f as usize),
            Some(addr(substitute_a))
        );
    }

    #[test]
    fn test_first_capture_wins() {
        let mut table = InterceptTable::new();
        let key = table.register(c"xrWaitFrame", substitute_a);
        assert!(!table.is_captured(key));

        let handed_out = table.capture(key, real_a).unwrap();
        assert_eq!(addr(handed_out), addr(substitute_a));

        let handed_out = table.capture(key, real_b).unwrap();
        assert_eq!(addr(handed_out), addr(substitute_a));

        assert!(table.is_captured(key));
        assert_eq!(table.original(key).map(|f| f as usize), Some(addr(real_a)));
    }

    #[test]
    fn test_unknown_key() {
        let table = InterceptTable::new();
        let stale = InterceptKey::default();

        assert!(matches!(table.capture(stale, real_a), Err(HookError::NotFound)));
        assert!(table.original(stale).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_hook_error_maps_to_unsupported() {
        let result: xr::Result = HookError::Unavailable("xrWaitFrame").into();
        assert_eq!(result, xr::Result::ERROR_FUNCTION_UNSUPPORTED);
    }
}
