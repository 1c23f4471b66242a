// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit controls: previous/next buttons and per-slide dot indicators.
//!
//! Controls map one-to-one onto commands with no debounce. The helpers here also answer the
//! questions a view asks when drawing them: is this button enabled, is this dot highlighted.

use understory_deck::{Command, DeckSnapshot, SlideDeck};

/// A navigation control the view has drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "previous" button.
    Previous,
    /// The "next" button.
    Next,
    /// The indicator for a 1-based slide index.
    Dot(usize),
}

impl Control {
    /// The dot for slide `index`, if `deck` has such a slide.
    #[must_use]
    pub const fn for_dot(index: usize, deck: SlideDeck) -> Option<Self> {
        if deck.contains(index) {
            Some(Self::Dot(index))
        } else {
            None
        }
    }

    /// All controls for `deck`: previous, next, then one dot per slide.
    pub fn all(deck: SlideDeck) -> impl Iterator<Item = Self> {
        [Self::Previous, Self::Next]
            .into_iter()
            .chain((1..=deck.total_slides()).map(Self::Dot))
    }

    /// The command this control issues.
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            Self::Previous => Command::Previous,
            Self::Next => Command::Next,
            Self::Dot(index) => Command::GoTo(index),
        }
    }

    /// Whether the control should be enabled for `snapshot`.
    ///
    /// Buttons are disabled at the matching end of the deck; dots are always enabled.
    #[must_use]
    pub const fn is_enabled(self, snapshot: &DeckSnapshot) -> bool {
        match self {
            Self::Previous => snapshot.can_go_previous,
            Self::Next => snapshot.can_go_next,
            Self::Dot(_) => true,
        }
    }

    /// Whether the control should be drawn as active (the dot of the current slide).
    #[must_use]
    pub const fn is_active(self, snapshot: &DeckSnapshot) -> bool {
        match self {
            Self::Dot(index) => snapshot.is_active(index),
            Self::Previous | Self::Next => false,
        }
    }
}
