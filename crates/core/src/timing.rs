//! Timing module - per-action rate limiting
//!
//! Every player action is rate limited by a [`Gate`]: a timestamp of the last
//! time the action was allowed and a minimum interval. Time is whatever
//! monotonic millisecond clock the caller passes to
//! [`GameState::tick`](crate::GameState::tick); the core never reads a clock.
//!
//! Two flavours are in use:
//!
//! - **Latching** (horizontal, rotation, auto-descent): [`Gate::poll`] runs once
//!   per tick and sets a ready flag when the interval has passed. The flag
//!   stays set until an action consumes it, so a key pressed late is served
//!   immediately.
//! - **Direct** (soft drop, descent toggle): [`Gate::has_elapsed`] is checked
//!   only when the key is down, and [`Gate::stamp`] records the use.
//!
//! All comparisons are strict: an action is allowed once *more than* the
//! interval has passed.

use crate::types::{
    AUTO_DESCENT_INTERVAL_MS, DESCENT_TOGGLE_INTERVAL_MS, HORIZONTAL_INTERVAL_MS,
    MANUAL_DESCENT_INTERVAL_MS, ROTATION_INTERVAL_MS,
};

/// Minimum intervals for every rate-limited action, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub horizontal_ms: f64,
    pub auto_descent_ms: f64,
    pub manual_descent_ms: f64,
    pub rotation_ms: f64,
    pub descent_toggle_ms: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            horizontal_ms: HORIZONTAL_INTERVAL_MS,
            auto_descent_ms: AUTO_DESCENT_INTERVAL_MS,
            manual_descent_ms: MANUAL_DESCENT_INTERVAL_MS,
            rotation_ms: ROTATION_INTERVAL_MS,
            descent_toggle_ms: DESCENT_TOGGLE_INTERVAL_MS,
        }
    }
}

/// Last-use timestamp plus a minimum interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    interval_ms: f64,
    last_ms: f64,
    ready: bool,
}

impl Gate {
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
            ready: false,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Restart the interval at `now_ms` with the flag cleared
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
        self.ready = false;
    }

    pub fn has_elapsed(&self, now_ms: f64) -> bool {
        now_ms - self.last_ms > self.interval_ms
    }

    /// Latch the ready flag once the interval has passed
    ///
    /// Latching also restamps the gate, so the next interval counts from the
    /// poll, not from the eventual use.
    pub fn poll(&mut self, now_ms: f64) {
        if self.has_elapsed(now_ms) {
            self.ready = true;
            self.last_ms = now_ms;
        }
    }

    /// Use a latched gate
    pub fn consume(&mut self, now_ms: f64) {
        self.ready = false;
        self.last_ms = now_ms;
    }

    /// Drop the ready flag without touching the timestamp
    pub fn clear(&mut self) {
        self.ready = false;
    }

    /// Record a use of a direct gate
    pub fn stamp(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }
}

/// The full set of gates driven by the game loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gates {
    /// Shared by left and right
    pub horizontal: Gate,
    pub auto_descent: Gate,
    pub manual_descent: Gate,
    pub rotation: Gate,
    pub descent_toggle: Gate,
}

impl Gates {
    pub fn new(timings: &Timings) -> Self {
        Self {
            horizontal: Gate::new(timings.horizontal_ms),
            auto_descent: Gate::new(timings.auto_descent_ms),
            manual_descent: Gate::new(timings.manual_descent_ms),
            rotation: Gate::new(timings.rotation_ms),
            descent_toggle: Gate::new(timings.descent_toggle_ms),
        }
    }

    /// Restart every gate at `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.horizontal.reset(now_ms);
        self.auto_descent.reset(now_ms);
        self.manual_descent.reset(now_ms);
        self.rotation.reset(now_ms);
        self.descent_toggle.reset(now_ms);
    }

    /// Latch the readiness of the latching gates
    ///
    /// The direct gates (soft drop, toggle) are not touched here; polling them
    /// would restamp their timestamps every tick and they would never fire.
    pub fn poll(&mut self, now_ms: f64) {
        self.horizontal.poll(now_ms);
        self.auto_descent.poll(now_ms);
        self.rotation.poll(now_ms);
    }
}

impl Default for Gates {
    fn default() -> Self {
        Self::new(&Timings::default())
    }
}
