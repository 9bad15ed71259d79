//! Input debouncing for UI callers.
//!
//! The query operations are cheap but rescan the whole collection, so a UI
//! should not invoke them on every keystroke. `Debouncer` implements the
//! usual quiescence scheme: each input event takes a ticket, waits out the
//! window, and runs only if no newer ticket was taken in the meantime.
//! Stale tickets are discarded, so only the last-scheduled call's result is
//! ever applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Recommended quiescence window for free-text input.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces bursts of input events into a single trailing invocation.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: AtomicU64::new(0),
        }
    }

    /// Records a new input event and returns its ticket.
    ///
    /// Taking a ticket invalidates every ticket taken before it.
    pub fn signal(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Waits out the quiescence window for `ticket`.
    ///
    /// Returns `true` when the ticket is still the latest after the window
    /// elapses; the caller should then run the query. Returns `false` when
    /// a newer input event superseded it, in which case the call must be
    /// discarded.
    pub async fn quiesce(&self, ticket: u64) -> bool {
        tokio::time::sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
