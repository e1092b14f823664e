//! Typewriter text cycler
//!
//! Types each phrase one grapheme at a time, holds it, deletes it, then moves
//! to the next phrase, forever. [`CyclerState`] holds the transition logic;
//! [`TextCycler`] mounts it on a [`Scheduler`] so each tick arms the next one.
//!
//! Only one timer is ever pending per cycler. Unmounting cancels it under the
//! state lock, so no tick can mutate state once `unmount` returns.

mod config;
mod state;

pub use config::{
    CyclerConfig, DEFAULT_DELETE_INTERVAL_MS, DEFAULT_HOLD_MS, DEFAULT_TYPE_INTERVAL_MS,
};
pub use state::{CyclerSnapshot, CyclerState, Mode};

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::scheduler::{Scheduler, TimerHandle};

struct Inner {
    /// None when configured with no phrases
    state: Option<CyclerState>,
    mounted: bool,
    timer: Option<TimerHandle>,
    ticks: u64,
}

struct Shared<S: Scheduler> {
    inner: Mutex<Inner>,
    scheduler: Arc<S>,
    frames: watch::Sender<CyclerSnapshot>,
}

/// A mounted typewriter driven by scheduled ticks
pub struct TextCycler<S: Scheduler> {
    shared: Arc<Shared<S>>,
}

impl<S: Scheduler> TextCycler<S> {
    /// Create the state and arm the first tick.
    ///
    /// An empty phrase list mounts an idle cycler: empty text, no timers.
    pub fn mount(config: &CyclerConfig, scheduler: Arc<S>) -> Self {
        let state = CyclerState::new(config);
        let initial = state
            .as_ref()
            .map(CyclerState::snapshot)
            .unwrap_or_default();
        let (frames, _) = watch::channel(initial);

        let first_delay = state.as_ref().map(CyclerState::initial_delay);
        match &state {
            Some(state) => tracing::info!(
                phrases = state.phrase_count(),
                type_ms = config.type_interval_ms,
                delete_ms = config.delete_interval_ms,
                hold_ms = config.hold_ms,
                "Typewriter mounted"
            ),
            None => tracing::warn!("Typewriter has no phrases, rendering nothing"),
        }

        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                state,
                mounted: true,
                timer: None,
                ticks: 0,
            }),
            scheduler,
            frames,
        });

        if let Some(delay) = first_delay {
            let mut inner = shared.inner.lock();
            arm(&shared, &mut inner, delay);
        }

        Self { shared }
    }

    /// Cancel the pending tick. Safe to call more than once.
    pub fn unmount(&self) {
        let mut inner = self.shared.inner.lock();
        if !inner.mounted {
            return;
        }
        inner.mounted = false;
        if let Some(timer) = inner.timer.take() {
            timer.cancel();
        }
        tracing::info!(ticks = inner.ticks, "Typewriter unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.inner.lock().mounted
    }

    /// True when there is nothing to cycle (empty phrase list)
    pub fn is_idle(&self) -> bool {
        self.shared.inner.lock().state.is_none()
    }

    /// Number of ticks applied since mount
    pub fn ticks(&self) -> u64 {
        self.shared.inner.lock().ticks
    }

    pub fn snapshot(&self) -> CyclerSnapshot {
        self.shared.frames.borrow().clone()
    }

    pub fn displayed_text(&self) -> String {
        self.shared.frames.borrow().text.clone()
    }

    /// Receiver notified after every tick
    pub fn subscribe(&self) -> watch::Receiver<CyclerSnapshot> {
        self.shared.frames.subscribe()
    }
}

impl<S: Scheduler> Drop for TextCycler<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Schedule the next tick. The task only holds a weak reference so a pending
/// timer never keeps a dropped cycler alive.
fn arm<S: Scheduler>(shared: &Arc<Shared<S>>, inner: &mut Inner, delay: Duration) {
    let weak: Weak<Shared<S>> = Arc::downgrade(shared);
    let timer = shared.scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                fire(&shared);
            }
        }),
    );
    inner.timer = Some(timer);
}

fn fire<S: Scheduler>(shared: &Arc<Shared<S>>) {
    let mut inner = shared.inner.lock();
    if !inner.mounted {
        return;
    }
    inner.timer = None;

    let Some(state) = inner.state.as_mut() else {
        return;
    };
    let previous = (state.active_index(), state.mode());
    let delay = state.tick();
    let snapshot = state.snapshot();

    if snapshot.phrase_index != previous.0 {
        tracing::debug!(
            phrase = snapshot.phrase_index,
            "Typewriter advanced to next phrase"
        );
    } else if snapshot.mode != previous.1 {
        tracing::trace!(mode = %snapshot.mode, text = %snapshot.text, "Typewriter mode changed");
    }

    inner.ticks += 1;
    shared.frames.send_replace(snapshot);
    arm(shared, &mut inner, delay);
}
