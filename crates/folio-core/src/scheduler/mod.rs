//! Single-shot timer scheduling
//!
//! Animated components never own a clock. They ask a [`Scheduler`] to run a
//! task once after a delay and keep the returned [`TimerHandle`] so teardown
//! can cancel it.
//!
//! - [`TokioScheduler`] runs timers on a tokio runtime
//! - [`ManualScheduler`] is a virtual clock advanced by hand (tests, headless traces)

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Work run by a timer when it fires
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Arms single-shot timers
pub trait Scheduler: Send + Sync + 'static {
    /// Run `task` once after `delay`, unless the returned handle is cancelled first
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Wrapper around CancellationToken for a pending timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Prevent the timer from firing. No-op if it already fired or was cancelled.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
