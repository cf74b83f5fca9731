use std::time::{Duration, Instant};

/// Wall-clock rate limiter for chart rebuilds.
///
/// Leaky bucket of one: a draw is allowed when at least `interval` has
/// elapsed since the last allowed draw, otherwise the attempt is dropped.
/// There is no queue and no catch-up; the caller always renders the latest
/// window contents. The very first attempt always passes.
pub struct RedrawGate {
    interval: Duration,
    last_draw: Option<Instant>,
}

impl RedrawGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_draw: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a draw may happen at `now`, recording it as the
    /// last draw. Callers outside tests pass `Instant::now()`.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        match self.last_draw {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_draw = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attempt_always_passes() {
        let mut gate = RedrawGate::new(Duration::from_millis(50));
        assert!(gate.try_pass(Instant::now()));
    }

    #[test]
    fn blocks_within_interval() {
        let mut gate = RedrawGate::new(Duration::from_millis(50));
        let t0 = Instant::now();
        assert!(gate.try_pass(t0));
        assert!(!gate.try_pass(t0 + Duration::from_millis(10)));
        assert!(!gate.try_pass(t0 + Duration::from_millis(49)));
    }

    #[test]
    fn passes_at_or_after_interval() {
        let mut gate = RedrawGate::new(Duration::from_millis(50));
        let t0 = Instant::now();
        assert!(gate.try_pass(t0));
        assert!(gate.try_pass(t0 + Duration::from_millis(50)));
        // The interval restarts from the second draw, not the first.
        assert!(!gate.try_pass(t0 + Duration::from_millis(75)));
        assert!(gate.try_pass(t0 + Duration::from_millis(100)));
    }
}
