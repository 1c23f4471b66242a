// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck size, position, and the transition lock.

use core::fmt;
use core::num::NonZeroUsize;

use crate::command::Direction;
use crate::view::DeckSnapshot;

/// The number of slides in a deck.
///
/// A deck always has at least one slide; the count is fixed for the lifetime of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideDeck {
    total: NonZeroUsize,
}

impl SlideDeck {
    /// Create a deck from the number of slides the view reports.
    ///
    /// Returns `None` for an empty deck, which has no valid position.
    #[must_use]
    pub const fn new(total_slides: usize) -> Option<Self> {
        match NonZeroUsize::new(total_slides) {
            Some(total) => Some(Self { total }),
            None => None,
        }
    }

    /// Number of slides.
    #[must_use]
    pub const fn total_slides(self) -> usize {
        self.total.get()
    }

    /// Whether `index` is a valid 1-based slide index.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index >= 1 && index <= self.total.get()
    }
}

impl From<NonZeroUsize> for SlideDeck {
    fn from(total: NonZeroUsize) -> Self {
        Self { total }
    }
}

/// An accepted move between two slides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// 1-based index of the slide being left.
    pub from: usize,
    /// 1-based index of the slide becoming current.
    pub to: usize,
}

impl Transition {
    /// Whether the move goes forward or backward through the deck.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        Direction::between(self.from, self.to)
    }
}

/// Why [`NavigationState::try_transition`] refused a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejected {
    /// A transition is still in flight.
    Locked,
    /// The target is not a slide of this deck.
    OutOfRange {
        /// The requested 1-based index.
        target: usize,
        /// Number of slides in the deck.
        total: usize,
    },
    /// The target is already the current slide.
    AlreadyCurrent,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => f.write_str("a transition is in progress"),
            Self::OutOfRange { target, total } => {
                write!(f, "slide {target} is outside the deck of {total}")
            }
            Self::AlreadyCurrent => f.write_str("slide is already current"),
        }
    }
}

impl core::error::Error for Rejected {}

/// The authoritative navigation state of a deck.
///
/// Holds the 1-based current index and the transition lock. The index always satisfies
/// `1 <= current <= total`, and it only changes through [`try_transition`], which refuses
/// to move while the lock is held.
///
/// [`try_transition`]: NavigationState::try_transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    deck: SlideDeck,
    current: usize,
    locked: bool,
}

impl NavigationState {
    /// Start at the first slide, unlocked.
    #[must_use]
    pub const fn new(deck: SlideDeck) -> Self {
        Self {
            deck,
            current: 1,
            locked: false,
        }
    }

    /// Move to `target` and take the lock.
    ///
    /// Fails, leaving the state untouched, when the lock is held, when `target` is not a
    /// slide of this deck, or when `target` is already current. Checks run in that order.
    pub fn try_transition(&mut self, target: usize) -> Result<Transition, Rejected> {
        if self.locked {
            return Err(Rejected::Locked);
        }
        if !self.deck.contains(target) {
            return Err(Rejected::OutOfRange {
                target,
                total: self.deck.total_slides(),
            });
        }
        if target == self.current {
            return Err(Rejected::AlreadyCurrent);
        }

        let from = self.current;
        self.current = target;
        self.locked = true;
        Ok(Transition { from, to: target })
    }

    /// Clear the lock. Calling this while unlocked does nothing.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Whether there is a slide after the current one.
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.current < self.deck.total_slides()
    }

    /// Whether there is a slide before the current one.
    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    /// The 1-based current index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.deck.total_slides()
    }

    /// The deck this state navigates.
    #[must_use]
    pub const fn deck(&self) -> SlideDeck {
        self.deck
    }

    /// Whether a transition holds the lock.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Position through the deck in `0.0..=1.0`.
    ///
    /// `(current - 1) / (total - 1)`, or `0.0` for a single-slide deck.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let span = self.total() - 1;
        if span == 0 {
            return 0.0;
        }
        (self.current - 1) as f64 / span as f64
    }

    /// Capture the state for a view update.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            current: self.current,
            total: self.total(),
            can_go_next: self.can_go_next(),
            can_go_previous: self.can_go_previous(),
            locked: self.locked,
            progress: self.progress(),
        }
    }
}
