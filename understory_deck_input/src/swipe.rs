// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch channel: horizontal swipe recognition.
//!
//! A gesture is the pair of points reported at touch start and touch end. It produces a
//! command only when it is clearly horizontal:
//!
//! - the horizontal travel exceeds [`SwipeTracker::min_distance`] (strictly), and
//! - the horizontal travel exceeds the vertical travel.
//!
//! Moving the finger left (start to the right of end) advances; moving right goes back.
//! Anything else is ignored rather than queued.
//!
//! ```
//! use kurbo::Point;
//! use understory_deck::Command;
//! use understory_deck_input::swipe::SwipeTracker;
//!
//! let mut swipe = SwipeTracker::new();
//! swipe.begin(Point::new(300.0, 100.0));
//! assert_eq!(swipe.end(Point::new(200.0, 110.0)), Some(Command::Next));
//! ```

use kurbo::Point;
use log::trace;
use understory_deck::Command;

/// Default minimum horizontal travel for a swipe, in the host's coordinate units.
pub const DEFAULT_SWIPE_MIN_DISTANCE: f64 = 50.0;

/// Tracks one touch gesture at a time.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    /// Horizontal travel a gesture must exceed to count as a swipe.
    pub min_distance: f64,
    start: Option<Point>,
}

impl SwipeTracker {
    /// Create a tracker with the default 50 unit threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_distance(DEFAULT_SWIPE_MIN_DISTANCE)
    }

    /// Create a tracker with a custom threshold.
    #[must_use]
    pub fn with_min_distance(min_distance: f64) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    /// Record the start of a gesture. A gesture already in progress is replaced.
    pub fn begin(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Finish the gesture at `position` and classify it.
    ///
    /// The recorded start point is consumed either way. Returns `None` when no gesture was
    /// in progress or the travel was too short or too vertical.
    pub fn end(&mut self, position: Point) -> Option<Command> {
        let start = self.start.take()?;
        let travel = start - position;
        let (dx, dy) = (travel.x.abs(), travel.y.abs());

        if dx > dy && dx > self.min_distance {
            Some(if travel.x > 0.0 {
                Command::Next
            } else {
                Command::Previous
            })
        } else {
            trace!(
                "deck-input: swipe ignored dx={} dy={} min_distance={}",
                travel.x, travel.y, self.min_distance
            );
            None
        }
    }

    /// Drop a gesture in progress, for example on touch cancel.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
