// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a deck session from a scripted event stream.
//!
//! This example shows how a host integrates `understory_deck_input`:
//! - build a `DeckSession` once the slide count is known,
//! - classify platform events into `RawEvent`s and hand them over with a timestamp,
//! - arm a single timer for `next_deadline` and `poll` when it fires,
//! - draw from the `ViewSync` notifications.
//!
//! Run:
//! - `cargo run -p understory_deck_demos --example deck_session`

use kurbo::{Point, Rect};
use understory_deck::{DeckSnapshot, Direction, SlideDeck, ViewSync};
use understory_deck_input::controls::Control;
use understory_deck_input::keyboard::Key;
use understory_deck_input::session::{DeckSession, RawEvent, SessionConfig};

/// A text "view" that prints what a real renderer would draw.
struct ConsoleView {
    dots: Vec<Control>,
}

impl ViewSync for ConsoleView {
    fn on_transition_start(&mut self, from: usize, to: usize, direction: Direction) {
        let exit = match direction {
            Direction::Forward => "exit-left",
            Direction::Backward => "exit-right",
        };
        println!("    slide {from} -> {to} ({exit})");
    }

    fn on_transition_settle(&mut self) {
        println!("    settled");
    }

    fn on_state_changed(&mut self, snapshot: &DeckSnapshot) {
        let dots: String = self
            .dots
            .iter()
            .map(|dot| if dot.is_active(snapshot) { '●' } else { '○' })
            .collect();
        println!(
            "    [{prev}] {dots} [{next}]  {current}/{total}  progress {progress:.0}%{lock}",
            prev = if Control::Previous.is_enabled(snapshot) { "<" } else { " " },
            next = if Control::Next.is_enabled(snapshot) { ">" } else { " " },
            current = snapshot.current,
            total = snapshot.total,
            progress = snapshot.progress * 100.0,
            lock = if snapshot.locked { "  (locked)" } else { "" },
        );
    }
}

fn main() {
    let deck = SlideDeck::new(5).expect("the script uses five slides");
    let mut view = ConsoleView {
        dots: (1..=deck.total_slides())
            .filter_map(|i| Control::for_dot(i, deck))
            .collect(),
    };

    println!("init");
    let mut session = DeckSession::new(deck, SessionConfig::default(), &mut view);
    session.set_deck_bounds(Rect::new(0.0, 0.0, 1280.0, 720.0));

    let center = Point::new(640.0, 360.0);
    let script: &[(u64, &str, RawEvent)] = &[
        (0, "ArrowRight", RawEvent::Key(Key::from_dom_key("ArrowRight"))),
        (120, "ArrowRight (during transition)", RawEvent::Key(Key::ArrowRight)),
        (600, "wheel tick", RawEvent::Wheel { delta_y: 12.0, position: center }),
        (620, "wheel tick", RawEvent::Wheel { delta_y: 12.0, position: center }),
        (640, "wheel tick", RawEvent::Wheel { delta_y: 12.0, position: center }),
        (1_200, "touch start", RawEvent::TouchStart(Point::new(900.0, 400.0))),
        (1_260, "touch end (short)", RawEvent::TouchEnd(Point::new(870.0, 410.0))),
        (1_400, "touch start", RawEvent::TouchStart(Point::new(900.0, 400.0))),
        (1_480, "touch end (swipe left)", RawEvent::TouchEnd(Point::new(700.0, 420.0))),
        (2_000, "click left half", RawEvent::Click { position: Point::new(200.0, 360.0), interactive: false }),
        (2_600, "click on a link", RawEvent::Click { position: Point::new(1_000.0, 360.0), interactive: true }),
        (2_700, "End", RawEvent::Key(Key::End)),
        (3_300, "next button at the end", RawEvent::Control(Control::Next)),
        (3_400, "dot 1", RawEvent::Control(Control::Dot(1))),
    ];

    for &(at, label, event) in script {
        // Fire the host timer if it would have gone off before this event.
        if let Some(deadline) = session.next_deadline().filter(|d| *d <= at) {
            println!("{deadline:>5} ms  timer");
            session.poll(deadline, &mut view);
        }

        println!("{at:>5} ms  {label}");
        let handled = session.handle(event, at, &mut view);
        if let (Some(command), None) = (handled.command, handled.transition) {
            println!("    {command:?} dropped");
        }
    }

    if let Some(deadline) = session.next_deadline() {
        println!("{deadline:>5} ms  timer");
        session.poll(deadline, &mut view);
    }

    let state = session.detach();
    println!("detached at slide {} of {}", state.current(), state.total());
}
