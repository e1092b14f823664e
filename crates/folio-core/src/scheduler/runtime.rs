//! Timers backed by the tokio runtime

use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::{Scheduler, Task, TimerHandle};

/// Spawns one sleeping task per timer on a tokio runtime.
///
/// Every timer token is a child of the scheduler's root token, so
/// [`TokioScheduler::shutdown`] cancels all pending timers at once.
pub struct TokioScheduler {
    runtime: Handle,
    root: CancellationToken,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            root: CancellationToken::new(),
        }
    }

    /// Cancel every pending timer. Timers scheduled afterwards never fire.
    pub fn shutdown(&self) {
        self.root.cancel();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let token = self.root.child_token();
        let timer = token.clone();

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = timer.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !timer.is_cancelled() {
                        task();
                    }
                }
            }
        });

        TimerHandle::new(token)
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
