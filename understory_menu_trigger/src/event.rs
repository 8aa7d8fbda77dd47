// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the trigger's key handler.
//!
//! [`KeyInput`] wraps the key and modifiers of a key-down together with the two flags a
//! handler may set: default prevention and propagation stopping. The host applies them after
//! dispatch (for example by returning `Outcome::Stop` from an `understory_responder` handler and
//! skipping its default keyboard action).
//!
//! A third flag, [`KeyInput::propagation_delegated`], is set by the host when an ancestor has
//! taken over propagation control for this event. Handlers that would normally stop
//! propagation leave it alone in that case.
//!
//! ```
//! use ui_events::keyboard::{Key, Modifiers, NamedKey};
//! use understory_menu_trigger::event::KeyInput;
//!
//! let mut input = KeyInput::new(Key::Named(NamedKey::ArrowDown), Modifiers::empty());
//! input.prevent_default();
//! assert!(input.is_default_prevented());
//! assert!(!input.is_propagation_stopped());
//! ```

use ui_events::keyboard::{Key, KeyboardEvent, Modifiers, NamedKey};

/// A key-down delivered to a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// The logical key.
    pub key: Key,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
    /// An ancestor already owns propagation for this event; do not stop it here.
    pub propagation_delegated: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyInput {
    /// A key-down with no flags set.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            propagation_delegated: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Build from a `ui-events` keyboard event. Returns `None` for key-ups.
    pub fn from_key_down(event: &KeyboardEvent) -> Option<Self> {
        event
            .state
            .is_down()
            .then(|| Self::new(event.key.clone(), event.modifiers))
    }

    /// Mark propagation as delegated to an ancestor.
    #[must_use]
    pub fn delegated(mut self) -> Self {
        self.propagation_delegated = true;
        self
    }

    /// Suppress the host's default action for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching ancestor handlers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether a handler suppressed the default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether a handler stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether this is the space bar.
    pub fn is_space(&self) -> bool {
        matches!(&self.key, Key::Character(c) if c == " ")
    }

    /// Whether this is a named key.
    pub fn is_named(&self, named: NamedKey) -> bool {
        self.key == Key::Named(named)
    }
}
