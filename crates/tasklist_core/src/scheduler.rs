//! Deferred work for the two-phase delete.
//!
//! # Responsibility
//! - Hold task ids whose deletion commit is waiting for the fade-out delay.
//! - Hand due ids back to the host loop; nothing runs on another thread.
//!
//! # Invariants
//! - Scheduled entries are never cancelled or coalesced.
//! - Due ids come back in scheduling order.

use crate::model::task::TaskId;
use std::time::{Duration, Instant};

/// Fade-out time between marking a row and removing its task.
pub const DELETE_FADE_DELAY: Duration = Duration::from_millis(300);

/// Injectable scheduler for deferred delete commits.
pub trait DeferredScheduler {
    fn schedule(&mut self, id: TaskId, delay: Duration);
    /// Removes and returns every entry due at `now`.
    fn take_due(&mut self, now: Instant) -> Vec<TaskId>;
    /// Earliest pending deadline, if any.
    fn next_due(&self) -> Option<Instant>;
}

/// Deadline-based queue driven by the host's clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, TaskId)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl DeferredScheduler for TimerQueue {
    fn schedule(&mut self, id: TaskId, delay: Duration) {
        self.pending.push((Instant::now() + delay, id));
    }

    fn take_due(&mut self, now: Instant) -> Vec<TaskId> {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|(deadline, _)| *deadline <= now);
        self.pending = waiting;
        due.into_iter().map(|(_, id)| id).collect()
    }

    fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }
}

/// Scheduler that treats every entry as already due.
///
/// Lets tests run the commit phase synchronously.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    pending: Vec<TaskId>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeferredScheduler for ImmediateScheduler {
    fn schedule(&mut self, id: TaskId, _delay: Duration) {
        self.pending.push(id);
    }

    fn take_due(&mut self, _now: Instant) -> Vec<TaskId> {
        std::mem::take(&mut self.pending)
    }

    fn next_due(&self) -> Option<Instant> {
        (!self.pending.is_empty()).then(Instant::now)
    }
}
