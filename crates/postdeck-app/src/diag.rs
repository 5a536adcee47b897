use std::sync::{Arc, Mutex};

use postdeck_types::ApiError;

/// The diagnostic channel flow-level failures go to.
///
/// The rendered view deliberately shows nothing on failure; the stale or
/// empty view persists and the failure is only recorded here.
pub trait Diagnostics {
    /// Record a failed API exchange.
    fn failure(&self, context: &str, error: &ApiError);

    /// Record a non-failure diagnostic note (discarded input, stale
    /// response, incomplete form).
    fn note(&self, message: &str);
}

/// Collects diagnostics in memory.
///
/// Used by the interactive browser, where stderr is unusable while the
/// terminal is in raw mode, and by tests asserting on what got reported.
#[derive(Debug, Clone, Default)]
pub struct BufferDiagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl BufferDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("diagnostics lock").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("diagnostics lock").is_empty()
    }

    fn push(&self, entry: String) {
        self.entries.lock().expect("diagnostics lock").push(entry);
    }
}

impl Diagnostics for BufferDiagnostics {
    fn failure(&self, context: &str, error: &ApiError) {
        self.push(format!("error {}: {}", context, error));
    }

    fn note(&self, message: &str) {
        self.push(message.to_string());
    }
}
