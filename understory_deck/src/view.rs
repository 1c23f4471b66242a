// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notification boundary between the deck and the view that draws it.

use crate::command::Direction;

/// Everything a view needs to refresh counters, progress, indicators, and buttons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeckSnapshot {
    /// 1-based current slide.
    pub current: usize,
    /// Number of slides.
    pub total: usize,
    /// Whether a "next" control should be enabled.
    pub can_go_next: bool,
    /// Whether a "previous" control should be enabled.
    pub can_go_previous: bool,
    /// Whether a transition is in flight.
    pub locked: bool,
    /// `(current - 1) / (total - 1)`, or `0.0` for a single slide.
    pub progress: f64,
}

impl DeckSnapshot {
    /// Whether the indicator for the 1-based `index` should be highlighted.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        index == self.current
    }
}

/// Receiver for deck notifications.
///
/// The deck calls into the view but never owns it; every method defaults to doing nothing so
/// implementors only override what they draw.
pub trait ViewSync {
    /// A transition was accepted. `direction` selects the exit animation.
    fn on_transition_start(&mut self, _from: usize, _to: usize, _direction: Direction) {}

    /// The settle time of the last transition elapsed; transition-only visuals can be cleared.
    fn on_transition_settle(&mut self) {}

    /// Position or lock state changed.
    fn on_state_changed(&mut self, _snapshot: &DeckSnapshot) {}
}

impl<V: ViewSync + ?Sized> ViewSync for &mut V {
    fn on_transition_start(&mut self, from: usize, to: usize, direction: Direction) {
        (**self).on_transition_start(from, to, direction);
    }

    fn on_transition_settle(&mut self) {
        (**self).on_transition_settle();
    }

    fn on_state_changed(&mut self, snapshot: &DeckSnapshot) {
        (**self).on_state_changed(snapshot);
    }
}

/// A view that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopView;

impl ViewSync for NoopView {}
