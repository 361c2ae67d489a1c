//! Search input debouncing.
//!
//! In delegated mode, forwarding every keystroke to the caller would flood
//! whatever backend sits behind it. [`SearchDebouncer`] coalesces rapid
//! term updates into a single downstream effect once a quiet period elapses
//! without further input.
//!
//! The debouncer holds no timer of its own. The host's event loop passes the
//! current instant into [`note`](SearchDebouncer::note) and
//! [`poll`](SearchDebouncer::poll), which keeps the component
//! single-threaded and makes coalescing and cancellation deterministic under
//! test.
//!
//! Cancellation matters as much as coalescing: a page or page-size change
//! issued while a debounce is pending must cancel it, otherwise the stale
//! search would settle later and silently reset the page the user just
//! navigated to. Component teardown cancels for the same reason.

use std::time::{Duration, Instant};

/// A pending, not-yet-settled search term.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    term: String,
    deadline: Instant,
}

/// Coalesces rapid search term updates behind a fixed quiet window.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl SearchDebouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records a new term, restarting the quiet window from `now`.
    ///
    /// A later term replaces an earlier pending one entirely; only the most
    /// recent term ever settles.
    pub fn note(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            term: term.into(),
            deadline: now + self.window,
        });
    }

    /// Settles the pending term if its quiet window has elapsed by `now`.
    ///
    /// Returns `Some(term)` exactly once per settled window; subsequent
    /// polls return `None` until [`note`](Self::note) is called again.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|p| p.term)
            }
            _ => None,
        }
    }

    /// Drops any pending term without settling it.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("pending debounced search cancelled");
        }
    }

    /// Returns `true` while a term is waiting to settle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
