use std::time::{Duration, Instant};

/// A repeating timer owned by the state that drives it. Nothing runs in
/// the background: the owner polls `fire` once per frame and the timer
/// reports whether a period boundary has passed. Dropping the owner
/// drops the timer, so a timer can never outlive its view.
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    pub fn every_ms(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Testable constructor with an explicit epoch
    pub fn starting_at(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    /// True at most once per call when the next deadline has passed.
    /// A stalled frame does not cause a burst of firings afterwards;
    /// the deadline snaps forward instead.
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    pub fn fire_at(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_period() {
        let start = Instant::now();
        let mut timer = Interval::starting_at(start, Duration::from_millis(50));
        assert!(!timer.fire_at(start));
        assert!(!timer.fire_at(start + Duration::from_millis(49)));
        assert!(timer.fire_at(start + Duration::from_millis(50)));
    }

    #[test]
    fn fires_once_per_boundary() {
        let start = Instant::now();
        let mut timer = Interval::starting_at(start, Duration::from_millis(50));
        let t = start + Duration::from_millis(60);
        assert!(timer.fire_at(t));
        assert!(!timer.fire_at(t));
        assert!(timer.fire_at(t + Duration::from_millis(50)));
    }

    #[test]
    fn stall_does_not_burst() {
        let start = Instant::now();
        let mut timer = Interval::starting_at(start, Duration::from_millis(50));
        // Several periods pass unobserved while the frame loop stalls
        let t = start + Duration::from_millis(500);
        assert!(timer.fire_at(t));
        assert!(!timer.fire_at(t + Duration::from_millis(1)));
        assert!(timer.fire_at(t + Duration::from_millis(51)));
    }
}
