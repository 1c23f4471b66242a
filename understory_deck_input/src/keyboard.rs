// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard channel: a small binding table from keys to navigation actions.
//!
//! The default [`KeyMap`] binds:
//!
//! | Key | Command |
//! |---|---|
//! | `ArrowRight`, `ArrowDown`, `Space`, `PageDown` | [`Command::Next`] |
//! | `ArrowLeft`, `ArrowUp`, `PageUp` | [`Command::Previous`] |
//! | `Home` | `GoTo(1)` |
//! | `End` | `GoTo(total)` |
//!
//! Every other key is ignored. Keys that resolve to a command should have their default
//! action suppressed by the host (for example, so Space does not scroll the page).
//!
//! ```
//! use understory_deck::{Command, SlideDeck};
//! use understory_deck_input::keyboard::{Key, KeyMap};
//!
//! let deck = SlideDeck::new(7).unwrap();
//! let keys = KeyMap::default();
//! assert_eq!(keys.resolve(Key::from_dom_key("End"), deck), Some(Command::GoTo(7)));
//! assert_eq!(keys.resolve(Key::from_dom_key("a"), deck), None);
//! ```

use smallvec::SmallVec;
use understory_deck::{Command, SlideDeck};

/// A key identifier, as reported by the host's keyboard events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Right arrow.
    ArrowRight,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Space bar.
    Space,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Any other key that produces a single character.
    Character(char),
    /// A named key this crate has no variant for.
    Unidentified,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            " " | "Spacebar" => Self::Space,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified,
                }
            }
        }
    }
}

/// What a bound key asks the deck to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Following slide.
    Next,
    /// Preceding slide.
    Previous,
    /// First slide.
    First,
    /// Last slide.
    Last,
}

impl KeyAction {
    /// Resolve to a command for `deck`.
    #[must_use]
    pub const fn command(self, deck: SlideDeck) -> Command {
        match self {
            Self::Next => Command::Next,
            Self::Previous => Command::Previous,
            Self::First => Command::GoTo(1),
            Self::Last => Command::GoTo(deck.total_slides()),
        }
    }
}

/// Key bindings for the keyboard channel.
///
/// Bindings live inline; the default table never spills to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    bindings: SmallVec<[(Key, KeyAction); 9]>,
}

impl KeyMap {
    /// A map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding for `key`.
    pub fn bind(&mut self, key: Key, action: KeyAction) {
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = action;
        } else {
            self.bindings.push((key, action));
        }
    }

    /// Remove the binding for `key`. Returns the action it was bound to.
    pub fn unbind(&mut self, key: Key) -> Option<KeyAction> {
        let pos = self.bindings.iter().position(|(k, _)| *k == key)?;
        Some(self.bindings.remove(pos).1)
    }

    /// The action bound to `key`, if any.
    #[must_use]
    pub fn action(&self, key: Key) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| *action)
    }

    /// The command `key` produces for `deck`, or `None` if the key is unbound.
    #[must_use]
    pub fn resolve(&self, key: Key, deck: SlideDeck) -> Option<Command> {
        self.action(key).map(|action| action.command(deck))
    }

    /// Iterate over all bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (Key, KeyAction)> + '_ {
        self.bindings.iter().copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for key in [Key::ArrowRight, Key::ArrowDown, Key::Space, Key::PageDown] {
            map.bind(key, KeyAction::Next);
        }
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageUp] {
            map.bind(key, KeyAction::Previous);
        }
        map.bind(Key::Home, KeyAction::First);
        map.bind(Key::End, KeyAction::Last);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(total: usize) -> SlideDeck {
        SlideDeck::new(total).unwrap()
    }

    #[test]
    fn default_bindings() {
        let keys = KeyMap::default();
        let d = deck(5);
        for key in [Key::ArrowRight, Key::ArrowDown, Key::Space, Key::PageDown] {
            assert_eq!(keys.resolve(key, d), Some(Command::Next));
        }
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageUp] {
            assert_eq!(keys.resolve(key, d), Some(Command::Previous));
        }
        assert_eq!(keys.resolve(Key::Home, d), Some(Command::GoTo(1)));
        assert_eq!(keys.resolve(Key::End, d), Some(Command::GoTo(5)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let keys = KeyMap::default();
        assert_eq!(keys.resolve(Key::Character('n'), deck(5)), None);
        assert_eq!(keys.resolve(Key::Unidentified, deck(5)), None);
    }

    #[test]
    fn default_table_stays_inline() {
        assert!(!KeyMap::default().bindings.spilled());
    }

    #[test]
    fn dom_key_names() {
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("PageDown"), Key::PageDown);
        assert_eq!(Key::from_dom_key("End"), Key::End);
        assert_eq!(Key::from_dom_key("j"), Key::Character('j'));
        assert_eq!(Key::from_dom_key("é"), Key::Character('é'));
        assert_eq!(Key::from_dom_key("Escape"), Key::Unidentified);
        assert_eq!(Key::from_dom_key(""), Key::Unidentified);
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut keys = KeyMap::default();
        keys.bind(Key::Space, KeyAction::Previous);
        keys.bind(Key::Character('j'), KeyAction::Next);

        assert_eq!(keys.action(Key::Space), Some(KeyAction::Previous));
        assert_eq!(keys.resolve(Key::Character('j'), deck(3)), Some(Command::Next));
        assert_eq!(keys.bindings().filter(|(k, _)| *k == Key::Space).count(), 1);
    }

    #[test]
    fn unbinding_removes_key() {
        let mut keys = KeyMap::default();
        assert_eq!(keys.unbind(Key::Home), Some(KeyAction::First));
        assert_eq!(keys.unbind(Key::Home), None);
        assert_eq!(keys.resolve(Key::Home, deck(3)), None);
    }
}
