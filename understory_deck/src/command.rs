// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The command vocabulary shared by every input channel.

/// A navigation request.
///
/// Every input channel, whatever its raw signal, produces one of these. Commands are hints:
/// whether one is honored is decided by [`NavigationState`](crate::NavigationState) at the
/// moment it is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move to the following slide.
    Next,
    /// Move to the preceding slide.
    Previous,
    /// Jump to a 1-based slide index.
    GoTo(usize),
}

impl Command {
    /// Resolve this command to a concrete target relative to the 1-based `current` index.
    ///
    /// The result is not range checked. `Previous` from slide 1 yields 0, which the state
    /// machine then rejects.
    #[must_use]
    pub const fn target_from(self, current: usize) -> usize {
        match self {
            Self::Next => current.saturating_add(1),
            Self::Previous => current.saturating_sub(1),
            Self::GoTo(index) => index,
        }
    }
}

/// Direction of an accepted transition.
///
/// Views use this to choose the orientation of the exit animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The target comes after the source.
    Forward,
    /// The target comes before the source.
    Backward,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    #[must_use]
    pub const fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}
