//! Frame coalescing for high-frequency input.
//!
//! Pure with respect to time: callers pass instants in, nothing here reads a
//! clock. The host pumps `take_due` from its animation/tick callback.

use std::time::{Duration, Instant};

/// One applied update per frame at ~60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Coalesces a stream of values down to at most one applied value per frame,
/// keeping only the latest. Intermediate values between frames are
/// superseded, never queued.
#[derive(Debug, Clone, Default)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    last_applied: Option<Instant>,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            last_applied: None,
        }
    }

    /// Replaces any pending value; last write wins.
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Yields the pending value when a frame interval has elapsed since the
    /// last applied one (or immediately for the first).
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        self.pending.as_ref()?;
        let due = self
            .last_applied
            .is_none_or(|last| now.duration_since(last) >= FRAME_INTERVAL);
        if !due {
            return None;
        }
        self.last_applied = Some(now);
        self.pending.take()
    }

    /// Drops pending state, e.g. when the drag it was feeding got cancelled.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_applied = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
