//! Time-boxed interpolation of mark attributes.
//!
//! Each animated attribute keeps where it started, where it is heading and
//! when. A redraw arriving mid-flight retargets from the current interpolated
//! value, so the latest redraw always wins and nothing queues.

use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" in milliseconds. Only differences between readings matter.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Tween {
    /// A value that is already at rest.
    pub fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    /// Head for `to`, starting from wherever the value is at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
        let from = self.value_at(now_ms);
        *self = Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
        };
    }

    /// Jump straight to `value`.
    pub fn snap(&mut self, value: f64) {
        *self = Self::fixed(value);
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.snaps() {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    /// Final value once the transition ends.
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn origin(&self) -> f64 {
        self.from
    }

    /// True while the value is visibly changing.
    pub fn is_running(&self, now_ms: f64) -> bool {
        !self.snaps() && self.from != self.to && now_ms < self.start_ms + self.duration_ms
    }

    fn snaps(&self) -> bool {
        self.duration_ms <= 0.0 || !self.from.is_finite() || !self.to.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
    }

    #[test]
    fn tween_runs_over_duration() {
        let mut t = Tween::fixed(0.0);
        t.retarget(100.0, 1000.0, 1000.0);
        assert_eq!(t.value_at(1000.0), 0.0);
        assert_eq!(t.value_at(1500.0), 50.0);
        assert_eq!(t.value_at(2000.0), 100.0);
        assert_eq!(t.value_at(5000.0), 100.0);
        assert!(t.is_running(1500.0));
        assert!(!t.is_running(2000.0));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let mut t = Tween::fixed(0.0);
        t.retarget(100.0, 0.0, 1000.0);
        t.retarget(0.0, 500.0, 1000.0);
        assert_eq!(t.origin(), 50.0);
        assert_eq!(t.target(), 0.0);
        assert_eq!(t.value_at(500.0), 50.0);
        assert_eq!(t.value_at(1500.0), 0.0);
    }

    #[test]
    fn retarget_to_same_value_does_not_move() {
        let mut t = Tween::fixed(42.0);
        t.retarget(42.0, 0.0, 1000.0);
        assert!(!t.is_running(100.0));
        assert_eq!(t.value_at(100.0), 42.0);
    }

    #[test]
    fn zero_duration_or_nan_snaps() {
        let mut t = Tween::fixed(0.0);
        t.retarget(10.0, 0.0, 0.0);
        assert_eq!(t.value_at(0.0), 10.0);

        let mut t = Tween::fixed(f64::NAN);
        t.retarget(10.0, 0.0, 1000.0);
        assert_eq!(t.value_at(1.0), 10.0);
        assert!(!t.is_running(1.0));
    }

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(250.0);
        assert_eq!(other.now_ms(), 250.0);
    }
}
