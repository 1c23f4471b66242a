// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel channel: one command per cooldown window.
//!
//! Trackpads and free-spinning wheels report dozens of ticks for a single intentional
//! scroll. [`WheelThrottle`] turns such a burst into at most one command:
//!
//! - The first event that arrives while no window is open opens one, lasting
//!   [`WheelThrottle::cooldown_ms`]. It opens the window even when its delta is zero.
//! - That event yields [`Command::Next`] for a positive vertical delta, [`Command::Previous`]
//!   for a negative one, and nothing for zero.
//! - Every other event inside the window is dropped. New events do not extend the window.

use log::trace;
use understory_deck::Command;

/// Default cooldown window, in milliseconds.
pub const DEFAULT_WHEEL_COOLDOWN_MS: u64 = 500;

/// Rate limiter for wheel input.
#[derive(Clone, Debug)]
pub struct WheelThrottle {
    /// Length of the cooldown window, in milliseconds.
    pub cooldown_ms: u64,
    open_until: Option<u64>,
}

impl WheelThrottle {
    /// Create a throttle with the default 500 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cooldown(DEFAULT_WHEEL_COOLDOWN_MS)
    }

    /// Create a throttle with a custom window.
    #[must_use]
    pub fn with_cooldown(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            open_until: None,
        }
    }

    /// Feed one wheel event with vertical delta `delta_y` at time `now`.
    pub fn on_wheel(&mut self, delta_y: f64, now: u64) -> Option<Command> {
        if let Some(until) = self.open_until.filter(|until| now < *until) {
            trace!("deck-input: wheel dropped delta_y={delta_y} cooldown_until={until}");
            return None;
        }
        self.open_until = Some(now.saturating_add(self.cooldown_ms));

        if delta_y > 0.0 {
            Some(Command::Next)
        } else if delta_y < 0.0 {
            Some(Command::Previous)
        } else {
            None
        }
    }

    /// Whether a window is open at `now`.
    #[must_use]
    pub fn is_cooling_down(&self, now: u64) -> bool {
        self.open_until.is_some_and(|until| now < until)
    }

    /// When the open window closes, if one was opened.
    #[must_use]
    pub fn cooldown_until(&self) -> Option<u64> {
        self.open_until
    }
}

impl Default for WheelThrottle {
    fn default() -> Self {
        Self::new()
    }
}
