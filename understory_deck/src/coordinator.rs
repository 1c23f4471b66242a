// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialized command intake and the timed transition lock.
//!
//! The coordinator is the only writer of [`NavigationState`]. It has two states:
//!
//! - **Idle** (unlocked): any legal [`Command`] is applied, the view is notified, and a settle
//!   deadline `settle_ms` in the future is recorded.
//! - **Transitioning** (locked): every request is dropped until [`TransitionCoordinator::poll`]
//!   observes the deadline, releases the lock, and tells the view the transition settled.
//!
//! At most one deadline is ever outstanding, because a request cannot be accepted while the
//! lock from the previous one is held.

use log::{debug, trace};

use crate::command::Command;
use crate::state::{NavigationState, SlideDeck, Transition};
use crate::view::{DeckSnapshot, ViewSync};

/// Default time a transition holds the lock, in milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 400;

/// Timing configuration for transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionConfig {
    /// How long an accepted transition holds the lock, in milliseconds.
    ///
    /// This should match the length of the view's transition animation.
    pub settle_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct InFlight {
    transition: Transition,
    started_at: u64,
    settle_at: u64,
}

/// Applies commands to a [`NavigationState`] and manages the settle window.
///
/// All methods take the current time as a millisecond timestamp. The host is expected to call
/// [`poll`](Self::poll) once [`next_deadline`](Self::next_deadline) has passed; requests also
/// poll first, so a late timer never leaves input facing a lock that should have cleared.
#[derive(Clone, Debug)]
pub struct TransitionCoordinator {
    state: NavigationState,
    config: TransitionConfig,
    // Some exactly while `state` is locked.
    in_flight: Option<InFlight>,
}

impl TransitionCoordinator {
    /// Create an idle coordinator at the first slide with default timing.
    #[must_use]
    pub fn new(deck: SlideDeck) -> Self {
        Self::with_config(deck, TransitionConfig::default())
    }

    /// Create an idle coordinator at the first slide with custom timing.
    #[must_use]
    pub fn with_config(deck: SlideDeck, config: TransitionConfig) -> Self {
        Self {
            state: NavigationState::new(deck),
            config,
            in_flight: None,
        }
    }

    /// Read-only view of the navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The timing configuration.
    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Capture the state for a view update.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        self.state.snapshot()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The transition currently holding the lock, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Transition> {
        self.in_flight.map(|f| f.transition)
    }

    /// When the outstanding transition settles, if one is in flight.
    ///
    /// Hosts arm a single timer for this instant and call [`poll`](Self::poll) when it fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.in_flight.map(|f| f.settle_at)
    }

    /// Fraction of the in-flight transition that has elapsed at `now`, in `0.0..=1.0`.
    ///
    /// Returns `None` while idle. Frame-driven views can use this instead of their own clock.
    #[must_use]
    pub fn transition_progress(&self, now: u64) -> Option<f64> {
        let flight = self.in_flight?;
        let duration = flight.settle_at.saturating_sub(flight.started_at);
        if duration == 0 {
            return Some(1.0);
        }
        let elapsed = now.saturating_sub(flight.started_at).min(duration);
        Some(elapsed as f64 / duration as f64)
    }

    /// Push the current snapshot to `view`.
    ///
    /// Call once after construction so the view starts out consistent.
    pub fn sync_view<V: ViewSync + ?Sized>(&self, view: &mut V) {
        view.on_state_changed(&self.snapshot());
    }

    /// Apply `command` at time `now`.
    ///
    /// An expired transition is settled first. The command is then resolved against the
    /// current index and handed to [`NavigationState::try_transition`]. On acceptance the view
    /// receives `on_transition_start` followed by `on_state_changed`, and the lock is held
    /// for [`TransitionConfig::settle_ms`]. A rejected command is dropped without notifying
    /// anyone.
    ///
    /// Returns the accepted transition, if any.
    pub fn request<V: ViewSync + ?Sized>(
        &mut self,
        command: Command,
        now: u64,
        view: &mut V,
    ) -> Option<Transition> {
        self.poll(now, view);

        let target = command.target_from(self.state.current());
        let transition = match self.state.try_transition(target) {
            Ok(transition) => transition,
            Err(reason) => {
                trace!(
                    "deck: dropped command={:?} current={} reason={}",
                    command,
                    self.state.current(),
                    reason
                );
                return None;
            }
        };

        let settle_at = now.saturating_add(self.config.settle_ms);
        self.in_flight = Some(InFlight {
            transition,
            started_at: now,
            settle_at,
        });
        debug!(
            "deck: transition from={} to={} direction={:?} settle_at={}",
            transition.from,
            transition.to,
            transition.direction(),
            settle_at
        );

        view.on_transition_start(transition.from, transition.to, transition.direction());
        view.on_state_changed(&self.snapshot());
        Some(transition)
    }

    /// Settle the in-flight transition if its deadline is at or before `now`.
    ///
    /// Releases the lock, then notifies the view with `on_transition_settle` followed by
    /// `on_state_changed`. Returns whether a transition settled.
    pub fn poll<V: ViewSync + ?Sized>(&mut self, now: u64, view: &mut V) -> bool {
        match self.in_flight {
            Some(flight) if now >= flight.settle_at => {
                self.in_flight = None;
                self.state.release();
                debug!(
                    "deck: settled at={} current={}",
                    now,
                    self.state.current()
                );
                view.on_transition_settle();
                view.on_state_changed(&self.snapshot());
                true
            }
            _ => false,
        }
    }

    /// Consume the coordinator and return the final navigation state.
    #[must_use]
    pub fn into_state(self) -> NavigationState {
        self.state
    }
}
