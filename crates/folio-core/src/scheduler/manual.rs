//! Virtual clock scheduler
//!
//! Nothing fires until the owner moves time forward with [`ManualScheduler::advance`]
//! or [`ManualScheduler::run_next`]. Timers fire in (due time, insertion) order, and
//! tasks may schedule further timers while running. A zero-delay timer armed
//! by a task during `advance` waits for the next call, so a task that keeps
//! re-arming itself at the current instant cannot stall the clock.

use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::{Scheduler, Task, TimerHandle};

struct PendingTimer {
    due: Duration,
    seq: u64,
    token: CancellationToken,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<PendingTimer>,
}

/// Deterministic scheduler driven by explicit calls instead of wall time
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<Clock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of timers that are armed and not cancelled
    pub fn pending(&self) -> usize {
        self.clock
            .lock()
            .queue
            .iter()
            .filter(|t| !t.token.is_cancelled())
            .count()
    }

    /// Move time forward by `by`, firing every timer that falls due on the way.
    /// Timers armed during the call at the instant the clock currently shows
    /// are left for the next call. Returns the number of timers fired.
    pub fn advance(&self, by: Duration) -> usize {
        let (target, mut watermark) = {
            let clock = self.clock.lock();
            (clock.now + by, clock.next_seq)
        };
        let mut fired = 0;

        while let Some(task) = self.pop_due(Some(target), Some(&mut watermark)) {
            task();
            fired += 1;
        }

        let mut clock = self.clock.lock();
        if clock.now < target {
            clock.now = target;
        }
        fired
    }

    /// Jump straight to the next live timer and fire it.
    /// Returns the virtual time it fired at, or None when nothing is pending.
    pub fn run_next(&self) -> Option<Duration> {
        let task = self.pop_due(None, None)?;
        let at = self.now();
        task();
        Some(at)
    }

    /// Remove the earliest live timer due at or before `limit` and move the
    /// clock to its due time. The lock is released before the task runs.
    ///
    /// With a `watermark`, timers with `seq >= watermark` are only eligible
    /// once due strictly after the current clock. The watermark is raised to
    /// `next_seq` whenever the clock moves forward.
    fn pop_due(&self, limit: Option<Duration>, mut watermark: Option<&mut u64>) -> Option<Task> {
        let mut clock = self.clock.lock();
        clock.queue.retain(|t| !t.token.is_cancelled());

        let now = clock.now;
        let floor = watermark.as_deref().copied();
        let (idx, due) = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, t)| floor.map_or(true, |floor| t.seq < floor || t.due > now))
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(idx, t)| (idx, t.due))?;

        if limit.is_some_and(|limit| due > limit) {
            return None;
        }

        let timer = clock.queue.swap_remove(idx);
        if due > clock.now {
            clock.now = due;
            if let Some(watermark) = watermark.as_deref_mut() {
                *watermark = clock.next_seq;
            }
        }
        Some(timer.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let mut clock = self.clock.lock();
        let token = CancellationToken::new();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;

        clock.queue.push(PendingTimer {
            due,
            seq,
            token: token.clone(),
            task,
        });

        TimerHandle::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let make = {
            let log = Arc::clone(&log);
            move |label: &'static str| -> Task {
                let log = Arc::clone(&log);
                Box::new(move || log.lock().push(label))
            }
        };
        (log, make)
    }

    #[test]
    fn test_advance_fires_due_timers_in_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(30), task("late"));
        scheduler.schedule(Duration::from_millis(10), task("early"));
        scheduler.schedule(Duration::from_millis(10), task("early-second"));

        assert_eq!(scheduler.advance(Duration::from_millis(9)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 2);
        assert_eq!(*log.lock(), vec!["early", "early-second"]);
        assert_eq!(scheduler.now(), Duration::from_millis(10));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*log.lock(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(110));
    }

    #[test]
    fn test_cancelled_timer_is_skipped() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let handle = scheduler.schedule(Duration::from_millis(5), task("cancelled"));
        scheduler.schedule(Duration::from_millis(5), task("kept"));
        handle.cancel();

        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*log.lock(), vec!["kept"]);
    }

    #[test]
    fn test_tasks_can_schedule_more_timers() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (log, task) = recorder();

        let inner = Arc::clone(&scheduler);
        let follow_up = task("follow-up");
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner.schedule(Duration::from_millis(10), follow_up);
            }),
        );

        // Follow-up lands at 20ms, still inside the advance window
        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.lock(), vec!["follow-up"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_delay_rearm_waits_for_next_advance() {
        let scheduler = Arc::new(ManualScheduler::new());
        let runs = Arc::new(Mutex::new(0u32));

        fn rearm(scheduler: &Arc<ManualScheduler>, runs: &Arc<Mutex<u32>>) {
            let (inner, count) = (Arc::clone(scheduler), Arc::clone(runs));
            scheduler.schedule(
                Duration::ZERO,
                Box::new(move || {
                    *count.lock() += 1;
                    rearm(&inner, &count);
                }),
            );
        }
        rearm(&scheduler, &runs);

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(1));
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(*runs.lock(), 2);
    }

    #[test]
    fn test_timer_armed_earlier_fires_when_clock_reaches_it() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (log, task) = recorder();

        // Armed at 10ms for 20ms, alongside a timer already due at 20ms
        scheduler.schedule(Duration::from_millis(20), task("first"));
        let inner = Arc::clone(&scheduler);
        let second = task("second");
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner.schedule(Duration::from_millis(10), second);
            }),
        );

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(*log.lock(), vec!["first", "second"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_run_next_jumps_clock() {
        let scheduler = ManualScheduler::new();
        let (_log, task) = recorder();

        assert_eq!(scheduler.run_next(), None);

        scheduler.schedule(Duration::from_millis(2000), task("hold"));
        assert_eq!(scheduler.run_next(), Some(Duration::from_millis(2000)));
        assert_eq!(scheduler.now(), Duration::from_millis(2000));
        assert_eq!(scheduler.run_next(), None);
    }
}
