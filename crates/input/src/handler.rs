//! Held-key tracking for terminal environments.
//!
//! The game polls "is this key down" once per tick. Terminals report key
//! events instead, and many never report releases. [`KeyboardState`] turns the
//! event stream into per-tick [`InputSignals`]:
//!
//! - press / repeat marks the signal held and records when it was last seen
//! - release clears it
//! - while no release event has ever been seen, a signal not refreshed within
//!   the release timeout counts as released
//!
//! Timestamps are caller-supplied milliseconds, the same clock the game tick
//! uses.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{InputSignal, InputSignals, KEY_RELEASE_TIMEOUT_MS};

/// Tracks which signals are currently held.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    /// (signal, last press/repeat time)
    held: ArrayVec<(InputSignal, f64), 7>,
    key_release_timeout_ms: f64,
    /// Set once the terminal has delivered a release event.
    reports_release: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            reports_release: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> f64 {
        self.key_release_timeout_ms
    }

    /// Feed one terminal key event; returns the signal it mapped to.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: f64) -> Option<InputSignal> {
        let signal = map_key(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(signal, now_ms),
            KeyEventKind::Release => {
                self.reports_release = true;
                self.release(signal);
            }
        }
        Some(signal)
    }

    pub fn press(&mut self, signal: InputSignal, now_ms: f64) {
        match self.held.iter_mut().find(|(held, _)| *held == signal) {
            Some(entry) => entry.1 = now_ms,
            // Capacity equals the number of signals, so this cannot overflow.
            None => self.held.push((signal, now_ms)),
        }
    }

    pub fn release(&mut self, signal: InputSignal) {
        self.held.retain(|(held, _)| *held != signal);
    }

    pub fn is_held(&self, signal: InputSignal) -> bool {
        self.held.iter().any(|(held, _)| *held == signal)
    }

    /// Expire stale keys and return the signals held at `now_ms`.
    pub fn signals(&mut self, now_ms: f64) -> InputSignals {
        if !self.reports_release {
            let timeout = self.key_release_timeout_ms;
            self.held.retain(|(_, seen)| now_ms - *seen <= timeout);
        }

        let mut out = InputSignals::default();
        for &(signal, _) in &self.held {
            out.set(signal, true);
        }
        out
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
