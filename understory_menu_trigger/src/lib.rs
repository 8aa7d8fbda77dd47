// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu_trigger --heading-base-level=0

//! Understory Menu Trigger: headless behavior for a control that opens a menu.
//!
//! ## Overview
//!
//! A menu trigger has three ways to open its popup: a press (click, tap, or assistive
//! "activate"), a long press, and the keyboard. This crate reconciles them into one
//! open/close protocol and produces the attributes a screen reader needs to relate the
//! trigger to its popup.
//!
//! The controller, [`MenuTrigger`], does not store whether the popup is open. The host owns a
//! [`TriggerState`](state::TriggerState) and passes it to every handler, so any number of
//! observers can share it. [`state::MenuTriggerState`] is a ready-made implementation.
//!
//! ## Input arbitration
//!
//! - **Keyboard** ([`handlers::KeyDownHandler`]): `ArrowDown` toggles with the first item
//!   focused and `ArrowUp` with the last. Enter and Space act like `ArrowDown` in press mode and
//!   do nothing in long-press mode. Long-press triggers only react while Alt is held.
//!   Handled keys prevent default and stop propagation unless an ancestor has taken
//!   propagation over ([`event::KeyInput::propagation_delegated`]).
//! - **Press** ([`handlers::PressHandlers`]): mouse and pen toggle on press start, touch on a
//!   completed release, and keyboard presses are ignored because the key handler already
//!   handled the key. Presses synthesized by assistive technology focus the first item.
//! - **Long press** ([`handlers::LongPressHandlers`]): the gesture start closes the popup and
//!   completion opens it with the first item focused.
//!
//! Exactly one of the press and long-press handler sets is present, selected by
//! [`config::ActivationMode`]. A disabled trigger never calls into the state.
//!
//! ## Minimal example
//!
//! ```
//! use ui_events::keyboard::{Key, Modifiers, NamedKey};
//! use understory_menu_trigger::MenuTrigger;
//! use understory_menu_trigger::config::TriggerConfig;
//! use understory_menu_trigger::event::KeyInput;
//! use understory_menu_trigger::overlay::AriaOverlayTrigger;
//! use understory_menu_trigger::state::{FocusStrategy, MenuTriggerState, TriggerState};
//!
//! // The trigger element is node 7 in the host's tree.
//! let trigger = MenuTrigger::new(TriggerConfig::new(), Some(7_u32));
//! let overlay = AriaOverlayTrigger::new();
//! let mut state = MenuTriggerState::new();
//!
//! let aria = trigger.props(&state, &overlay);
//! assert_eq!(aria.trigger.id, aria.menu.aria_labelledby);
//!
//! // ArrowDown opens with the first item focused.
//! let mut key = KeyInput::new(Key::Named(NamedKey::ArrowDown), Modifiers::empty());
//! assert!(aria.trigger.on_key_down.on_key_down(&mut state, &mut key));
//! assert!(state.is_open());
//! assert!(key.is_default_prevented());
//!
//! // Rebuild after the state changes; the menu picks up the focus strategy.
//! let aria = trigger.props(&state, &overlay);
//! assert_eq!(aria.menu.auto_focus, FocusStrategy::First);
//! aria.menu.on_close.call(&mut state);
//! assert!(!state.is_open());
//! ```
//!
//! ## Driving the handlers from gesture state
//!
//! The press and long-press handlers consume events from `understory_event_state`:
//! feed [`PressRelease`](understory_event_state::press::PressRelease) values to
//! [`handlers::PressHandlers::on_release`] and
//! [`LongPressEvent`](understory_event_state::long_press::LongPressEvent) values to
//! [`handlers::LongPressHandlers::on_event`].
//!
//! ## Logging
//!
//! Decisions are logged through the [`log`] facade: `debug` for every state operation,
//! `trace` for ignored input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod event;
pub mod handlers;
pub mod id;
pub mod overlay;
pub mod props;
pub mod state;
mod trigger;

pub use trigger::MenuTrigger;
