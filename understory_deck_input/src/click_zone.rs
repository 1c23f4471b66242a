// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-zone channel: click the right half to advance, the left half to go back.
//!
//! Clicks that land on an interactive control (a button, link, or input inside the deck) are
//! left to that control and produce no command. The host decides what counts as interactive
//! and reports it with each click.

use kurbo::{Point, Rect};
use log::trace;
use understory_deck::Command;

/// A clickable area split into a "previous" half and a "next" half.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickZone {
    /// The area in the host's coordinate space.
    pub area: Rect,
}

impl ClickZone {
    /// Create a zone covering `area`.
    #[must_use]
    pub const fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Classify a click at `position`.
    ///
    /// A click strictly right of the area's horizontal midpoint yields [`Command::Next`]; a
    /// click on or left of it yields [`Command::Previous`]. Clicks on interactive controls and
    /// clicks outside the area yield nothing.
    #[must_use]
    pub fn on_click(&self, position: Point, interactive: bool) -> Option<Command> {
        if interactive {
            return None;
        }
        if !self.area.contains(position) {
            trace!("deck-input: click outside zone at={position:?}");
            return None;
        }

        let offset = position.x - self.area.x0;
        if offset > self.area.width() / 2.0 {
            Some(Command::Next)
        } else {
            Some(Command::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> ClickZone {
        ClickZone::new(Rect::new(100.0, 50.0, 500.0, 350.0))
    }

    #[test]
    fn halves_map_to_directions() {
        assert_eq!(
            zone().on_click(Point::new(450.0, 200.0), false),
            Some(Command::Next)
        );
        assert_eq!(
            zone().on_click(Point::new(150.0, 200.0), false),
            Some(Command::Previous)
        );
    }

    #[test]
    fn midpoint_goes_back() {
        assert_eq!(
            zone().on_click(Point::new(300.0, 200.0), false),
            Some(Command::Previous)
        );
        assert_eq!(
            zone().on_click(Point::new(300.5, 200.0), false),
            Some(Command::Next)
        );
    }

    #[test]
    fn interactive_targets_are_ignored() {
        assert_eq!(zone().on_click(Point::new(450.0, 200.0), true), None);
    }

    #[test]
    fn clicks_outside_are_ignored() {
        assert_eq!(zone().on_click(Point::new(50.0, 200.0), false), None);
        assert_eq!(zone().on_click(Point::new(450.0, 400.0), false), None);
    }

    #[test]
    fn empty_area_never_fires() {
        let empty = ClickZone::new(Rect::ZERO);
        assert_eq!(empty.on_click(Point::ZERO, false), None);
    }
}
