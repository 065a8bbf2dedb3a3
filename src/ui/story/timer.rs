// SPDX-License-Identifier: MPL-2.0
//! Single-slot progress timer.
//!
//! The story player never owns a real clock. It asks the host to schedule
//! ticks for a [`TimerHandle`] and receives them back as messages. Starting
//! a new timer retires the previous handle, so a tick that was already in
//! flight for an older segment is recognised as stale and dropped.

use crate::domain::ui::ProgressPercent;
use std::time::{Duration, Instant};

/// Identifies one scheduled polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A running segment timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimer {
    handle: TimerHandle,
    started_at: Instant,
    duration: Duration,
}

impl ProgressTimer {
    #[must_use]
    pub fn handle(&self) -> TimerHandle {
        self.handle
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fill ratio at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> ProgressPercent {
        let elapsed = now.saturating_duration_since(self.started_at);
        ProgressPercent::from_elapsed(elapsed, self.duration)
    }
}

/// Holds at most one active timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    next_id: u64,
    active: Option<ProgressTimer>,
}

impl TimerSlot {
    /// Starts a timer, cancelling whatever was running.
    pub fn start(&mut self, now: Instant, duration: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active = Some(ProgressTimer {
            handle,
            started_at: now,
            duration,
        });
        handle
    }

    /// Stops the active timer. Returns false if nothing was running.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ProgressTimer> {
        self.active.as_ref()
    }

    /// Returns true if `handle` belongs to the running timer.
    #[must_use]
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.active.is_some_and(|t| t.handle == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, PERCENT_EPSILON};

    #[test]
    fn start_replaces_previous_timer() {
        let mut slot = TimerSlot::default();
        let now = Instant::now();
        let first = slot.start(now, Duration::from_secs(5));
        let second = slot.start(now, Duration::from_secs(5));

        assert_ne!(first, second);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut slot = TimerSlot::default();
        assert!(!slot.cancel());

        let handle = slot.start(Instant::now(), Duration::from_secs(1));
        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert!(!slot.is_current(handle));
        assert!(slot.active().is_none());
    }

    #[test]
    fn progress_tracks_elapsed_time() {
        let mut slot = TimerSlot::default();
        let t0 = Instant::now();
        slot.start(t0, Duration::from_millis(5_000));
        let timer = slot.active().copied().unwrap();

        assert_abs_diff_eq!(timer.progress(t0).value(), 0.0);
        assert_relative_eq!(
            timer.progress(t0 + Duration::from_millis(1_250)).value(),
            25.0,
            epsilon = PERCENT_EPSILON
        );
        let done = timer.progress(t0 + Duration::from_millis(5_000));
        assert!(done.is_complete());
    }

    #[test]
    fn progress_before_start_is_empty() {
        let mut slot = TimerSlot::default();
        let t0 = Instant::now() + Duration::from_secs(1);
        slot.start(t0, Duration::from_secs(1));
        let timer = slot.active().copied().unwrap();
        assert_abs_diff_eq!(timer.progress(Instant::now()).value(), 0.0);
    }
}
