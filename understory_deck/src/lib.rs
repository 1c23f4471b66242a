// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck --heading-base-level=0

//! Understory Deck: a navigation state machine for single-page slide decks.
//!
//! ## Overview
//!
//! This crate is the single authority for "which slide is current" in a deck of a fixed
//! number of slides. It decides, for any requested movement, whether it is legal right now,
//! what the resulting position is, and how long the deck stays locked before it accepts
//! another request.
//!
//! It does not render anything and does not listen for input. Input channels (see the
//! `understory_deck_input` crate) turn raw events into a [`Command`], and a host-owned view
//! receives notifications through the [`ViewSync`] trait.
//!
//! The core concepts are:
//!
//! - [`SlideDeck`]: the immutable slide count, always at least one.
//! - [`NavigationState`]: the 1-based current position plus the transition lock.
//!   [`NavigationState::try_transition`] is the only way to move, and it fails with
//!   [`Rejected`] while locked, for out-of-range targets, or for the current slide.
//! - [`TransitionCoordinator`]: resolves a [`Command`] to a target, applies it, notifies the
//!   view, and holds the lock for [`TransitionConfig::settle_ms`] before releasing it.
//!   Rejected requests are dropped without surfacing an error.
//!
//! ## Time
//!
//! Nothing in this crate blocks or owns a timer. Callers pass a millisecond timestamp with
//! every call and drive [`TransitionCoordinator::poll`] from whatever timer primitive they
//! have; [`TransitionCoordinator::next_deadline`] reports when the one outstanding settle is
//! due. A request always settles an expired transition first, so input that arrives after
//! the deadline never observes a stale lock.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_deck::{Command, Direction, NoopView, SlideDeck, TransitionCoordinator};
//!
//! let deck = SlideDeck::new(5).unwrap();
//! let mut coordinator = TransitionCoordinator::new(deck);
//! let mut view = NoopView;
//!
//! // The first request is accepted and locks the deck.
//! let transition = coordinator.request(Command::Next, 0, &mut view).unwrap();
//! assert_eq!((transition.from, transition.to), (1, 2));
//! assert_eq!(transition.direction(), Direction::Forward);
//!
//! // Input during the transition vanishes.
//! assert!(coordinator.request(Command::Next, 100, &mut view).is_none());
//!
//! // Once the settle time has passed the deck is idle again.
//! assert!(coordinator.poll(400, &mut view));
//! assert_eq!(coordinator.state().current(), 2);
//! assert!(!coordinator.state().is_locked());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod command;
mod coordinator;
mod state;
mod view;

pub use command::{Command, Direction};
pub use coordinator::{DEFAULT_SETTLE_MS, TransitionConfig, TransitionCoordinator};
pub use state::{NavigationState, Rejected, SlideDeck, Transition};
pub use view::{DeckSnapshot, NoopView, ViewSync};
