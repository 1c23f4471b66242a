// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deck session: every input channel feeding one coordinator.
//!
//! [`DeckSession`] is the object a hosting view owns for the lifetime of a deck. It is built
//! once the slide count is known, receives every raw event through [`DeckSession::handle`],
//! and is torn down with [`DeckSession::detach`].
//!
//! ## Routing
//!
//! Each [`RawEvent`] goes to exactly one channel adapter. The event is dropped before reaching
//! the adapter when its channel is disabled in [`InputConfig::channels`] or, for wheel and
//! click events, when it falls outside the configured [`EventScope`]. Whatever command the
//! adapter produces is forwarded to the [`TransitionCoordinator`], which alone decides whether
//! the deck moves.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_deck::{NoopView, SlideDeck};
//! use understory_deck_input::keyboard::Key;
//! use understory_deck_input::session::{DeckSession, RawEvent, SessionConfig};
//!
//! let mut view = NoopView;
//! let deck = SlideDeck::new(3).unwrap();
//! let mut session = DeckSession::new(deck, SessionConfig::default(), &mut view);
//! session.set_deck_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let handled = session.handle(RawEvent::Key(Key::End), 0, &mut view);
//! assert!(handled.prevent_default);
//! assert_eq!(session.snapshot().current, 3);
//!
//! // Clicking the left half goes back once the transition has settled.
//! session.handle(
//!     RawEvent::Click { position: Point::new(100.0, 300.0), interactive: false },
//!     400,
//!     &mut view,
//! );
//! assert_eq!(session.snapshot().current, 2);
//! ```

use kurbo::{Point, Rect};
use log::{debug, trace};
use understory_deck::{
    Command, DeckSnapshot, NavigationState, SlideDeck, Transition, TransitionConfig,
    TransitionCoordinator, ViewSync,
};

use crate::click_zone::ClickZone;
use crate::controls::Control;
use crate::keyboard::{Key, KeyMap};
use crate::swipe::{DEFAULT_SWIPE_MIN_DISTANCE, SwipeTracker};
use crate::wheel::{DEFAULT_WHEEL_COOLDOWN_MS, WheelThrottle};

bitflags::bitflags! {
    /// Input channels a session listens to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Channels: u8 {
        /// Previous/next buttons and dot indicators.
        const CONTROLS   = 0b0000_0001;
        /// Keyboard navigation keys.
        const KEYBOARD   = 0b0000_0010;
        /// Horizontal touch swipes.
        const SWIPE      = 0b0000_0100;
        /// Scroll wheel and trackpad scrolling.
        const WHEEL      = 0b0000_1000;
        /// Clicks on the left or right half of the click area.
        const CLICK_ZONE = 0b0001_0000;
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::all()
    }
}

/// Where a pointer channel accepts events from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventScope {
    /// Only events positioned inside the deck bounds.
    Deck,
    /// Events anywhere in the viewport.
    Document,
}

/// Input channel configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputConfig {
    /// Enabled channels.
    pub channels: Channels,
    /// Horizontal travel a swipe must exceed.
    pub swipe_min_distance: f64,
    /// Wheel cooldown window, in milliseconds.
    pub wheel_cooldown_ms: u64,
    /// Where wheel events are accepted from.
    pub wheel_scope: EventScope,
    /// Where clicks are accepted from, and which area is split into halves.
    pub click_scope: EventScope,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            channels: Channels::default(),
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
            wheel_cooldown_ms: DEFAULT_WHEEL_COOLDOWN_MS,
            wheel_scope: EventScope::Document,
            click_scope: EventScope::Deck,
        }
    }
}

/// Everything needed to build a [`DeckSession`].
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Transition timing.
    pub transition: TransitionConfig,
    /// Channel policy.
    pub input: InputConfig,
    /// Keyboard bindings.
    pub key_map: KeyMap,
}

/// A raw event, already classified by channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawEvent {
    /// A key was pressed.
    Key(Key),
    /// A touch gesture began at a point.
    TouchStart(Point),
    /// A touch gesture ended at a point.
    TouchEnd(Point),
    /// A touch gesture was cancelled by the platform.
    TouchCancel,
    /// The wheel turned.
    Wheel {
        /// Vertical delta; positive scrolls down.
        delta_y: f64,
        /// Pointer position when the wheel turned.
        position: Point,
    },
    /// A click landed.
    Click {
        /// Pointer position.
        position: Point,
        /// Whether the click landed on an interactive control.
        interactive: bool,
    },
    /// A navigation control was activated.
    Control(Control),
}

/// What a session did with one raw event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Handled {
    /// The command the event's channel produced, if any.
    pub command: Option<Command>,
    /// The transition the coordinator accepted, if any.
    pub transition: Option<Transition>,
    /// Whether the host should suppress the platform's default action for the event.
    ///
    /// Set for keys bound to a navigation action, whether or not the deck moved.
    pub prevent_default: bool,
}

/// A deck and all of its input channels.
#[derive(Clone, Debug)]
pub struct DeckSession {
    coordinator: TransitionCoordinator,
    input: InputConfig,
    key_map: KeyMap,
    swipe: SwipeTracker,
    wheel: WheelThrottle,
    deck_bounds: Rect,
    viewport: Option<Rect>,
}

impl DeckSession {
    /// Start a session at the first slide and push the initial state to `view`.
    ///
    /// Deck bounds start empty, so clicks and deck-scoped wheel events are ignored until
    /// [`set_deck_bounds`](Self::set_deck_bounds) is called.
    pub fn new<V: ViewSync + ?Sized>(deck: SlideDeck, config: SessionConfig, view: &mut V) -> Self {
        let SessionConfig {
            transition,
            input,
            key_map,
        } = config;
        let session = Self {
            coordinator: TransitionCoordinator::with_config(deck, transition),
            input,
            key_map,
            swipe: SwipeTracker::with_min_distance(input.swipe_min_distance),
            wheel: WheelThrottle::with_cooldown(input.wheel_cooldown_ms),
            deck_bounds: Rect::ZERO,
            viewport: None,
        };
        debug!(
            "deck-input: session started total={} channels={:?}",
            deck.total_slides(),
            input.channels
        );
        session.coordinator.sync_view(view);
        session
    }

    /// Set the deck's display area in the host's coordinate space.
    pub fn set_deck_bounds(&mut self, bounds: Rect) {
        self.deck_bounds = bounds;
    }

    /// Set the viewport used by document-scoped click zones.
    ///
    /// Until a viewport is set, document-scoped clicks are split using the deck bounds.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
    }

    /// The deck's display area.
    #[must_use]
    pub fn deck_bounds(&self) -> Rect {
        self.deck_bounds
    }

    /// The input configuration.
    #[must_use]
    pub fn input_config(&self) -> &InputConfig {
        &self.input
    }

    /// The keyboard bindings.
    #[must_use]
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// The coordinator, for read-only inspection.
    #[must_use]
    pub fn coordinator(&self) -> &TransitionCoordinator {
        &self.coordinator
    }

    /// Capture the deck state for a view update.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        self.coordinator.snapshot()
    }

    /// When the in-flight transition settles; see [`TransitionCoordinator::next_deadline`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.coordinator.next_deadline()
    }

    /// Settle an expired transition; see [`TransitionCoordinator::poll`].
    pub fn poll<V: ViewSync + ?Sized>(&mut self, now: u64, view: &mut V) -> bool {
        self.coordinator.poll(now, view)
    }

    /// Route one raw event at time `now`.
    pub fn handle<V: ViewSync + ?Sized>(
        &mut self,
        event: RawEvent,
        now: u64,
        view: &mut V,
    ) -> Handled {
        self.coordinator.poll(now, view);

        let command = self.normalize(event, now);
        let transition = command.and_then(|command| self.coordinator.request(command, now, view));
        Handled {
            command,
            transition,
            prevent_default: matches!(event, RawEvent::Key(_)) && command.is_some(),
        }
    }

    /// Submit a command directly, bypassing the channel adapters.
    pub fn request<V: ViewSync + ?Sized>(
        &mut self,
        command: Command,
        now: u64,
        view: &mut V,
    ) -> Option<Transition> {
        self.coordinator.request(command, now, view)
    }

    /// End the session and return the final navigation state.
    ///
    /// Adapter state (a half-finished swipe, an open wheel window) is discarded. A transition
    /// still in flight keeps its position; the returned state may still be locked.
    #[must_use]
    pub fn detach(self) -> NavigationState {
        debug!(
            "deck-input: session detached current={}",
            self.coordinator.state().current()
        );
        self.coordinator.into_state()
    }

    fn normalize(&mut self, event: RawEvent, now: u64) -> Option<Command> {
        let channel = match event {
            RawEvent::Key(_) => Channels::KEYBOARD,
            RawEvent::TouchStart(_) | RawEvent::TouchEnd(_) | RawEvent::TouchCancel => {
                Channels::SWIPE
            }
            RawEvent::Wheel { .. } => Channels::WHEEL,
            RawEvent::Click { .. } => Channels::CLICK_ZONE,
            RawEvent::Control(_) => Channels::CONTROLS,
        };
        if !self.input.channels.contains(channel) {
            trace!("deck-input: channel disabled event={event:?}");
            return None;
        }

        match event {
            RawEvent::Key(key) => self.key_map.resolve(key, self.coordinator.state().deck()),
            RawEvent::TouchStart(position) => {
                self.swipe.begin(position);
                None
            }
            RawEvent::TouchEnd(position) => self.swipe.end(position),
            RawEvent::TouchCancel => {
                self.swipe.cancel();
                None
            }
            RawEvent::Wheel { delta_y, position } => {
                if !self.in_scope(self.input.wheel_scope, position) {
                    trace!("deck-input: wheel outside deck at={position:?}");
                    return None;
                }
                self.wheel.on_wheel(delta_y, now)
            }
            RawEvent::Click {
                position,
                interactive,
            } => self.click_zone().on_click(position, interactive),
            RawEvent::Control(control) => Some(control.command()),
        }
    }

    fn in_scope(&self, scope: EventScope, position: Point) -> bool {
        match scope {
            EventScope::Deck => self.deck_bounds.contains(position),
            EventScope::Document => true,
        }
    }

    fn click_zone(&self) -> ClickZone {
        match self.input.click_scope {
            EventScope::Deck => ClickZone::new(self.deck_bounds),
            EventScope::Document => ClickZone::new(self.viewport.unwrap_or(self.deck_bounds)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_deck::{Direction, NoopView};

    #[derive(Default)]
    struct Recorder {
        starts: Vec<(usize, usize, Direction)>,
        settles: usize,
        states: Vec<DeckSnapshot>,
    }

    impl ViewSync for Recorder {
        fn on_transition_start(&mut self, from: usize, to: usize, direction: Direction) {
            self.starts.push((from, to, direction));
        }

        fn on_transition_settle(&mut self) {
            self.settles += 1;
        }

        fn on_state_changed(&mut self, snapshot: &DeckSnapshot) {
            self.states.push(*snapshot);
        }
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn session_with(total: usize, config: SessionConfig) -> (DeckSession, Recorder) {
        let mut view = Recorder::default();
        let mut session = DeckSession::new(SlideDeck::new(total).unwrap(), config, &mut view);
        session.set_deck_bounds(BOUNDS);
        (session, view)
    }

    fn session(total: usize) -> (DeckSession, Recorder) {
        session_with(total, SessionConfig::default())
    }

    fn wheel(delta_y: f64) -> RawEvent {
        RawEvent::Wheel {
            delta_y,
            position: Point::new(400.0, 300.0),
        }
    }

    fn click(x: f64, y: f64) -> RawEvent {
        RawEvent::Click {
            position: Point::new(x, y),
            interactive: false,
        }
    }

    #[test]
    fn new_session_pushes_initial_state() {
        let (session, view) = session(4);
        assert_eq!(view.states.len(), 1);
        assert_eq!(view.states[0].current, 1);
        assert!(!view.states[0].can_go_previous);
        assert_eq!(session.snapshot().total, 4);
    }

    #[test]
    fn wheel_burst_moves_one_slide() {
        for n in [1_u64, 2, 10, 60] {
            let (mut s, mut view) = session(5);
            for i in 0..n {
                s.handle(wheel(4.0), i * 5, &mut view);
            }
            assert_eq!(s.snapshot().current, 2, "burst of {n} events");
            assert_eq!(view.starts, [(1, 2, Direction::Forward)]);
        }
    }

    #[test]
    fn wheel_cooldown_runs_even_when_deck_is_locked() {
        let (mut s, mut view) = session(5);
        s.handle(wheel(1.0), 0, &mut view);
        // Window open until 500, transition settles at 400.
        assert_eq!(s.handle(wheel(1.0), 450, &mut view).command, None);
        assert_eq!(s.snapshot().current, 2);
        assert!(!s.snapshot().locked);
        let handled = s.handle(wheel(1.0), 500, &mut view);
        assert_eq!(handled.transition.map(|t| t.to), Some(3));
    }

    #[test]
    fn swipe_threshold() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::TouchStart(Point::new(300.0, 100.0)), 0, &mut view);
        let short = s.handle(RawEvent::TouchEnd(Point::new(251.0, 100.0)), 10, &mut view);
        assert_eq!(short.command, None);

        s.handle(RawEvent::TouchStart(Point::new(300.0, 100.0)), 20, &mut view);
        let long = s.handle(RawEvent::TouchEnd(Point::new(249.0, 100.0)), 30, &mut view);
        assert_eq!(long.command, Some(Command::Next));
        assert_eq!(view.starts.len(), 1);
    }

    #[test]
    fn touch_cancel_discards_gesture() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::TouchStart(Point::new(300.0, 100.0)), 0, &mut view);
        s.handle(RawEvent::TouchCancel, 5, &mut view);
        let end = s.handle(RawEvent::TouchEnd(Point::new(0.0, 100.0)), 10, &mut view);
        assert_eq!(end.command, None);
    }

    #[test]
    fn handled_keys_prevent_default_even_when_rejected() {
        let (mut s, mut view) = session(3);
        let home = s.handle(RawEvent::Key(Key::Home), 0, &mut view);
        assert!(home.prevent_default);
        assert_eq!(home.command, Some(Command::GoTo(1)));
        assert_eq!(home.transition, None);

        let other = s.handle(RawEvent::Key(Key::Character('x')), 0, &mut view);
        assert!(!other.prevent_default);
        assert_eq!(other.command, None);
    }

    #[test]
    fn keyboard_end_then_home() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::Key(Key::End), 0, &mut view);
        assert_eq!(s.snapshot().current, 5);
        s.handle(RawEvent::Key(Key::Home), 400, &mut view);
        assert_eq!(s.snapshot().current, 1);
        assert_eq!(
            view.starts,
            [(1, 5, Direction::Forward), (5, 1, Direction::Backward)]
        );
        assert_eq!(view.settles, 1);
    }

    #[test]
    fn click_halves_and_interactive_targets() {
        let (mut s, mut view) = session(5);
        assert_eq!(
            s.handle(click(700.0, 300.0), 0, &mut view).command,
            Some(Command::Next)
        );
        let on_button = RawEvent::Click {
            position: Point::new(100.0, 300.0),
            interactive: true,
        };
        assert_eq!(s.handle(on_button, 1_000, &mut view).command, None);
        assert_eq!(
            s.handle(click(100.0, 300.0), 1_000, &mut view).command,
            Some(Command::Previous)
        );
        assert_eq!(s.snapshot().current, 1);
    }

    #[test]
    fn deck_scoped_click_ignores_outside_points() {
        let (mut s, mut view) = session(5);
        assert_eq!(s.handle(click(900.0, 300.0), 0, &mut view).command, None);
    }

    #[test]
    fn document_scoped_click_splits_viewport() {
        let config = SessionConfig {
            input: InputConfig {
                click_scope: EventScope::Document,
                ..InputConfig::default()
            },
            ..SessionConfig::default()
        };
        let (mut s, mut view) = session_with(5, config);
        s.set_viewport(Rect::new(0.0, 0.0, 2_000.0, 1_000.0));
        // Right half of the deck, but left half of the viewport.
        assert_eq!(
            s.handle(click(700.0, 300.0), 0, &mut view).command,
            Some(Command::Previous)
        );
        assert_eq!(
            s.handle(click(1_900.0, 900.0), 0, &mut view).command,
            Some(Command::Next)
        );
    }

    #[test]
    fn deck_scoped_wheel_ignores_outside_points() {
        let config = SessionConfig {
            input: InputConfig {
                wheel_scope: EventScope::Deck,
                ..InputConfig::default()
            },
            ..SessionConfig::default()
        };
        let (mut s, mut view) = session_with(5, config);
        let outside = RawEvent::Wheel {
            delta_y: 1.0,
            position: Point::new(-10.0, 0.0),
        };
        assert_eq!(s.handle(outside, 0, &mut view).command, None);
        // The ignored event did not open a cooldown window.
        assert_eq!(s.handle(wheel(1.0), 1, &mut view).command, Some(Command::Next));
    }

    #[test]
    fn document_scoped_wheel_accepts_anywhere() {
        let (mut s, mut view) = session(5);
        let outside = RawEvent::Wheel {
            delta_y: -1.0,
            position: Point::new(-10.0, -10.0),
        };
        assert_eq!(s.handle(outside, 0, &mut view).command, Some(Command::Previous));
    }

    #[test]
    fn disabled_channels_are_ignored() {
        let config = SessionConfig {
            input: InputConfig {
                channels: Channels::all() - Channels::CLICK_ZONE - Channels::KEYBOARD,
                ..InputConfig::default()
            },
            ..SessionConfig::default()
        };
        let (mut s, mut view) = session_with(5, config);
        assert_eq!(s.handle(click(700.0, 300.0), 0, &mut view), Handled::default());
        let key = s.handle(RawEvent::Key(Key::ArrowRight), 0, &mut view);
        assert!(!key.prevent_default);
        assert_eq!(
            s.handle(RawEvent::Control(Control::Dot(4)), 0, &mut view)
                .transition
                .map(|t| t.to),
            Some(4)
        );
    }

    #[test]
    fn controls_and_dots() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::Control(Control::Dot(4)), 0, &mut view);
        s.handle(RawEvent::Control(Control::Next), 400, &mut view);
        assert_eq!(s.snapshot().current, 5);
        assert!(!s.snapshot().can_go_next);
        s.handle(RawEvent::Control(Control::Next), 800, &mut view);
        assert_eq!(s.snapshot().current, 5);
        s.handle(RawEvent::Control(Control::Previous), 800, &mut view);
        assert_eq!(s.snapshot().current, 4);
    }

    #[test]
    fn mixed_channels_during_transition_vanish() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::Key(Key::ArrowRight), 0, &mut view);
        s.handle(RawEvent::Control(Control::Next), 50, &mut view);
        s.handle(click(700.0, 300.0), 100, &mut view);
        s.handle(RawEvent::Key(Key::End), 399, &mut view);
        assert_eq!(s.snapshot().current, 2);
        assert_eq!(view.starts.len(), 1);
        assert_eq!(s.next_deadline(), Some(400));
        assert!(s.poll(400, &mut view));
        assert_eq!(view.settles, 1);
    }

    #[test]
    fn custom_key_map_and_thresholds() {
        let mut key_map = KeyMap::empty();
        key_map.bind(Key::Character('l'), crate::keyboard::KeyAction::Next);
        let config = SessionConfig {
            transition: TransitionConfig { settle_ms: 100 },
            input: InputConfig {
                swipe_min_distance: 10.0,
                ..InputConfig::default()
            },
            key_map,
        };
        let (mut s, mut view) = session_with(5, config);
        assert_eq!(s.handle(RawEvent::Key(Key::ArrowRight), 0, &mut view).command, None);
        s.handle(RawEvent::Key(Key::Character('l')), 0, &mut view);
        assert_eq!(s.next_deadline(), Some(100));

        s.handle(RawEvent::TouchStart(Point::new(0.0, 0.0)), 200, &mut view);
        s.handle(RawEvent::TouchEnd(Point::new(-11.0, 0.0)), 210, &mut view);
        assert_eq!(s.snapshot().current, 3);
    }

    #[test]
    fn detach_returns_final_state() {
        let (mut s, _) = session(3);
        s.request(Command::GoTo(3), 0, &mut NoopView);
        let state = s.detach();
        assert_eq!(state.current(), 3);
        assert!(state.is_locked());
    }

    #[test]
    fn progress_reported_to_view() {
        let (mut s, mut view) = session(5);
        s.handle(RawEvent::Control(Control::Dot(3)), 0, &mut view);
        let last = view.states.last().unwrap();
        assert_eq!(last.progress, 0.5);
        assert!(last.locked);
    }
}
