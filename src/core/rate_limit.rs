//! Throttle and debounce state machines
//!
//! The browser wrappers in `ui::helpers` own the timers; these types only decide
//! *when* the wrapped function should run. Time is passed in explicitly
//! (milliseconds since an arbitrary epoch) so the logic is testable.
//!
//! # Example
//!
//! ```
//! # use plantgift::core::rate_limit::{Throttle, ThrottleDecision};
//! let mut throttle = Throttle::new(100.0);
//! assert_eq!(throttle.call(0.0), ThrottleDecision::RunNow);
//! assert_eq!(throttle.call(30.0), ThrottleDecision::Trailing { delay_ms: 70.0 });
//! assert!(throttle.fire_trailing(100.0));
//! ```

/// Default throttle window for scroll-spy style work
pub const DEFAULT_THROTTLE_MS: f64 = 100.0;

/// Default quiet period for typing-driven validation
pub const DEFAULT_DEBOUNCE_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Run the function immediately
    RunNow,
    /// Replace any pending trailing call with one after `delay_ms`
    Trailing { delay_ms: f64 },
}

/// Caps call frequency to once per `limit_ms`, with a trailing call
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_ran: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_ran: None,
        }
    }

    /// Register a call at `now`
    pub fn call(&mut self, now: f64) -> ThrottleDecision {
        match self.last_ran {
            None => {
                self.last_ran = Some(now);
                ThrottleDecision::RunNow
            }
            Some(last) => ThrottleDecision::Trailing {
                delay_ms: (self.limit_ms - (now - last)).max(0.0),
            },
        }
    }

    /// The trailing timer fired at `now`. Returns `true` if the function must run.
    pub fn fire_trailing(&mut self, now: f64) -> bool {
        match self.last_ran {
            Some(last) if now - last < self.limit_ms => false,
            _ => {
                self.last_ran = Some(now);
                true
            }
        }
    }

    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }

    pub fn reset(&mut self) {
        self.last_ran = None;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceDecision {
    /// Leading-edge call that must run right away
    pub run_now: bool,
    /// The pending timer must be replaced by one after this many ms
    pub schedule_ms: f64,
}

/// Delays a call until `wait_ms` have passed without another call
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    immediate: bool,
    pending: bool,
}

impl Debounce {
    /// Trailing-edge debounce
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            immediate: false,
            pending: false,
        }
    }

    /// Leading-edge debounce: run on the first call of a burst only
    pub fn leading(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            immediate: true,
            pending: false,
        }
    }

    pub fn call(&mut self) -> DebounceDecision {
        let run_now = self.immediate && !self.pending;
        self.pending = true;
        DebounceDecision {
            run_now,
            schedule_ms: self.wait_ms,
        }
    }

    /// The quiet-period timer fired. Returns `true` if the function must run.
    pub fn fire(&mut self) -> bool {
        let was_pending = self.pending;
        self.pending = false;
        was_pending && !self.immediate
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_first_call_runs() {
        let mut throttle = Throttle::new(100.0);
        assert_eq!(throttle.call(5.0), ThrottleDecision::RunNow);
    }

    #[test]
    fn test_throttle_trailing_delay_shrinks() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        assert_eq!(
            throttle.call(20.0),
            ThrottleDecision::Trailing { delay_ms: 80.0 }
        );
        assert_eq!(
            throttle.call(90.0),
            ThrottleDecision::Trailing { delay_ms: 10.0 }
        );
        assert_eq!(
            throttle.call(250.0),
            ThrottleDecision::Trailing { delay_ms: 0.0 }
        );
    }

    #[test]
    fn test_throttle_trailing_respects_window() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        assert!(!throttle.fire_trailing(50.0));
        assert!(throttle.fire_trailing(100.0));
        // the trailing run restarts the window
        assert_eq!(
            throttle.call(120.0),
            ThrottleDecision::Trailing { delay_ms: 80.0 }
        );
    }

    #[test]
    fn test_throttle_reset() {
        let mut throttle = Throttle::default();
        throttle.call(0.0);
        throttle.reset();
        assert_eq!(throttle.call(1.0), ThrottleDecision::RunNow);
    }

    #[test]
    fn test_debounce_trailing_runs_once_after_burst() {
        let mut debounce = Debounce::new(500.0);
        for _ in 0..5 {
            let decision = debounce.call();
            assert!(!decision.run_now);
            assert_eq!(decision.schedule_ms, 500.0);
        }
        assert!(debounce.fire());
        assert!(!debounce.fire());
    }

    #[test]
    fn test_debounce_leading_runs_first_call_only() {
        let mut debounce = Debounce::leading(200.0);
        assert!(debounce.call().run_now);
        assert!(!debounce.call().run_now);
        assert!(!debounce.fire());
        assert!(!debounce.is_pending());
        assert!(debounce.call().run_now);
    }
}
