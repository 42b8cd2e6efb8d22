//! Search control: deadline and stop flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;

/// The search ran past its deadline or was stopped externally.
///
/// Produced at the first node that notices the stop and carried up to the
/// driver with `?`; no intermediate node handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search aborted")]
pub struct Aborted;

/// Controls when a search must abort.
///
/// Holds one absolute deadline for the whole top-level search (if any) and a
/// shared stop flag. [`should_stop`](SearchControl::should_stop) is checked
/// at the entry of every node.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    deadline: Option<Instant>,
}

impl SearchControl {
    /// Control with an optional deadline and a caller-owned stop flag.
    pub fn new(stopped: Arc<AtomicBool>, deadline: Option<Instant>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            deadline,
        }
    }

    /// No deadline; the search only stops when `stopped` is raised.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self::new(stopped, None)
    }

    /// Deadline `budget` from now.
    pub fn with_budget(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start,
            deadline: start.checked_add(budget),
        }
    }

    /// Absolute deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::new(Arc::new(AtomicBool::new(false)), Some(deadline))
    }

    /// Check whether the search must abort now.
    ///
    /// Returns `true` once the stop flag is set or the deadline has passed.
    /// A passed deadline raises the stop flag so later calls skip the clock.
    pub fn should_stop(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// [`should_stop`](Self::should_stop) as a `Result` for use with `?`.
    #[inline]
    pub fn check(&self) -> Result<(), Aborted> {
        if self.should_stop() { Err(Aborted) } else { Ok(()) }
    }

    /// Time since this control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The absolute deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}
