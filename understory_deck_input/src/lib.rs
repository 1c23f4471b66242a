// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck_input --heading-base-level=0

//! Understory Deck Input: raw input channels for `understory_deck`.
//!
//! ## Overview
//!
//! A slide deck is driven by several input channels at once. Each channel has its own raw
//! signal and its own noise: wheels fire in bursts, touches wobble, clicks land on buttons.
//! This crate holds one small adapter per channel, each turning its raw signal into zero or
//! one [`Command`](understory_deck::Command):
//!
//! - [`keyboard`]: a [`KeyMap`](keyboard::KeyMap) from keys to actions, with the usual
//!   arrow/space/page/home/end bindings by default.
//! - [`swipe`]: [`SwipeTracker`](swipe::SwipeTracker) recognizes predominantly horizontal
//!   touch gestures longer than a threshold.
//! - [`wheel`]: [`WheelThrottle`](wheel::WheelThrottle) emits at most one command per
//!   cooldown window.
//! - [`click_zone`]: [`ClickZone`](click_zone::ClickZone) splits an area into a "previous"
//!   half and a "next" half.
//! - [`controls`]: [`Control`](controls::Control) maps buttons and dot indicators directly.
//!
//! Adapters never look at the deck's lock. Whether a command is honored is decided by the
//! [`TransitionCoordinator`](understory_deck::TransitionCoordinator), so a burst of input
//! during a transition simply vanishes.
//!
//! ## Sessions
//!
//! [`DeckSession`](session::DeckSession) composes all adapters with a coordinator. The host
//! owns it, classifies each platform event into a [`RawEvent`](session::RawEvent), and
//! passes it to [`DeckSession::handle`](session::DeckSession::handle) together with a
//! millisecond timestamp. Channels can be switched off with
//! [`Channels`](session::Channels), and the wheel and click channels can be scoped to the
//! deck bounds or the whole document with [`EventScope`](session::EventScope).
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_deck::{NoopView, SlideDeck};
//! use understory_deck_input::session::{DeckSession, RawEvent, SessionConfig};
//!
//! let mut view = NoopView;
//! let mut session = DeckSession::new(SlideDeck::new(4).unwrap(), SessionConfig::default(), &mut view);
//! session.set_deck_bounds(Rect::new(0.0, 0.0, 1024.0, 768.0));
//!
//! // A trackpad fling: many ticks, one slide.
//! for t in 0..20 {
//!     session.handle(RawEvent::Wheel { delta_y: 8.0, position: Point::new(512.0, 384.0) }, t * 10, &mut view);
//! }
//! assert_eq!(session.snapshot().current, 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod click_zone;
pub mod controls;
pub mod keyboard;
pub mod session;
pub mod swipe;
pub mod wheel;
