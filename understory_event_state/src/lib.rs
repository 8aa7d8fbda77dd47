// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`pointer`]: Classify the input source of a press, including synthesized sources
//! - [`press`]: Press start, release and completion with leave-the-target handling
//! - [`long_press`]: Press-and-hold recognition with a time threshold and movement tolerance
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//! - **Clock-agnostic**: Timestamps are plain millisecond counts supplied by the caller
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. Managers accept pre-computed information (hit results, raw
//! pointer positions, timestamps) and produce transition events that applications
//! interpret.
//!
//! ## Usage Patterns
//!
//! ### Press Tracking
//!
//! Use [`press::PressState`] to learn whether a press completed over its target:
//!
//! ```rust
//! use understory_event_state::pointer::PointerKind;
//! use understory_event_state::press::PressState;
//!
//! let mut press = PressState::new();
//! press.on_down(42_u32, PointerKind::Mouse);
//! let release = press.on_up().unwrap();
//! assert!(release.completed);
//! assert_eq!(release.event.target, 42);
//! ```
//!
//! ### Long Press
//!
//! Use [`long_press::LongPressState`] to recognize press-and-hold:
//!
//! ```rust
//! # #[cfg(feature = "long_press")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::long_press::{LongPressEvent, LongPressState};
//! use understory_event_state::pointer::PointerKind;
//!
//! let mut hold = LongPressState::default();
//! hold.on_down(Point::new(5.0, 5.0), 0, PointerKind::Touch);
//! assert_eq!(hold.on_tick(500), Some(LongPressEvent::LongPress));
//! # }
//! ```
//!
//! ## Features
//!
//! - `long_press`: Enable long-press recognition (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "long_press")]
pub mod long_press;
pub mod pointer;
pub mod press;
