//! Cursor blink - the pulsing bar after the typewriter text

use std::time::{Duration, Instant};

/// Standard terminal blink: 500ms on, 500ms off
pub const DEFAULT_BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);

/// Blink phase derived from elapsed time since creation.
///
/// Runs independently of the typewriter, so typing never resets the phase.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    half_period: Duration,
    origin: Instant,
    visible: bool,
}

impl CursorBlink {
    pub fn new(half_period: Duration) -> Self {
        Self {
            half_period,
            origin: Instant::now(),
            visible: true,
        }
    }

    /// Visibility for a given elapsed time. A zero half period never blinks.
    pub fn phase_at(&self, elapsed: Duration) -> bool {
        let half = self.half_period.as_millis();
        if half == 0 {
            return true;
        }
        (elapsed.as_millis() / half) % 2 == 0
    }

    /// Update phase from wall time. Returns true if visibility changed.
    pub fn tick(&mut self) -> bool {
        self.update(self.origin.elapsed())
    }

    /// Update phase for an explicit elapsed time. Returns true if visibility changed.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        let visible = self.phase_at(elapsed);
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_HALF_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        let blink = CursorBlink::default();
        assert!(blink.is_visible());
    }

    #[test]
    fn test_phase_alternates() {
        let mut blink = CursorBlink::default();

        assert!(!blink.update(Duration::from_millis(499)));
        assert!(blink.is_visible());

        assert!(blink.update(Duration::from_millis(500)));
        assert!(!blink.is_visible());

        assert!(!blink.update(Duration::from_millis(900)));
        assert!(blink.update(Duration::from_millis(1000)));
        assert!(blink.is_visible());
    }

    #[test]
    fn test_zero_period_never_blinks() {
        let mut blink = CursorBlink::new(Duration::ZERO);
        for ms in [0, 1, 500, 10_000] {
            assert!(!blink.update(Duration::from_millis(ms)));
            assert!(blink.is_visible());
        }
    }
}
