//! Cooperative cancellation
//!
//! The ancestry walk polls a shared token on every step so a Ctrl-C
//! aborts the resolve instead of leaving a half-computed result.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

/// Shared cancellation flag, cheap to clone and poll.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, non-cancelled token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; observed by all clones of this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Install a Ctrl-C handler that cancels the given token.
///
/// Failure to install the handler is not fatal: the resolve still runs,
/// it just cannot be interrupted cleanly.
pub fn install_ctrlc_handler(token: &CancelToken) {
    let token = token.clone();
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}
