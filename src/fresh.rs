use std::sync::atomic::{AtomicUsize, Ordering};

/// Mints globally unique atom names for `SymbolExpand`, using a prefix that
/// cannot collide with a `CONFIG_*` identifier.
///
/// Injected as a parameter rather than hidden behind a global so that tests
/// stay deterministic; callers may share one [`FreshAtoms`] across
/// invocations of [`crate::rewrite`] (freshness only needs to hold within a
/// single invocation) or create a fresh one per call.
#[derive(Debug)]
pub struct FreshAtoms {
    prefix: String,
    counter: AtomicUsize,
}

impl FreshAtoms {
    pub fn new() -> Self {
        Self::with_prefix("__FREE_")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicUsize::new(0),
        }
    }

    /// Returns a name not previously returned by this instance.
    pub fn next(&self) -> String {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{id}", self.prefix)
    }
}

impl Default for FreshAtoms {
    fn default() -> Self {
        Self::new()
    }
}
