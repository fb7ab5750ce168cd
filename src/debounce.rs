//! Last-call-wins debouncer driven by explicit timestamps.
//!
//! DESIGN
//! ======
//! The debouncer never reads a clock and never owns a timer. Callers pass
//! `now_ms` (the browser layer uses `Date.now()`, tests a plain counter) and
//! arm at most one timer at a time, for whatever delay the debouncer asks.
//! When that timer wakes early because later calls pushed the deadline back,
//! [`Debouncer::wake`] asks for the remaining delay instead of running.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// What to do when the armed timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// Quiet period elapsed; run the debounced work.
    Run,
    /// Calls arrived meanwhile; re-arm for this many milliseconds.
    Sleep(u32),
    /// Nothing pending.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u32,
    due_at_ms: Option<f64>,
    armed: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, due_at_ms: None, armed: false }
    }

    /// Register a call at `now_ms`, pushing the deadline back.
    ///
    /// Returns the delay to arm a timer with, or `None` when one is already
    /// armed and will pick up the new deadline.
    pub fn call(&mut self, now_ms: f64) -> Option<u32> {
        self.due_at_ms = Some(now_ms + f64::from(self.wait_ms));
        if self.armed {
            return None;
        }
        self.armed = true;
        Some(self.wait_ms)
    }

    /// The armed timer fired at `now_ms`.
    pub fn wake(&mut self, now_ms: f64) -> Wake {
        self.armed = false;
        let Some(due) = self.due_at_ms else {
            return Wake::Idle;
        };
        if now_ms >= due {
            self.due_at_ms = None;
            return Wake::Run;
        }
        self.armed = true;
        Wake::Sleep(remaining_ms(due - now_ms, self.wait_ms))
    }
}

/// Whole milliseconds left, rounded up and never above `wait_ms`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn remaining_ms(left: f64, wait_ms: u32) -> u32 {
    let ceiling = f64::from(wait_ms).max(1.0);
    left.ceil().clamp(1.0, ceiling) as u32
}
