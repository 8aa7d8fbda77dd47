// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer classification shared by the press and long-press state machines.
//!
//! `ui-events` only distinguishes physical pointing devices. Press recognition
//! also has to know when a "press" was synthesized: by the keyboard (Enter or
//! Space on a focused control) or by assistive technology activating an element
//! on the user's behalf. [`PointerKind`] adds those two sources.
//!
//! ```
//! use ui_events::pointer::PointerType;
//! use understory_event_state::pointer::PointerKind;
//!
//! assert_eq!(PointerKind::from(PointerType::Touch), PointerKind::Touch);
//! assert!(PointerKind::Virtual.is_synthesized());
//! assert!(!PointerKind::Mouse.is_synthesized());
//! ```

use core::fmt;

use ui_events::pointer::PointerType;

/// The input source that produced a press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse button.
    Mouse,
    /// A pen or stylus.
    Pen,
    /// A touch contact.
    Touch,
    /// A press synthesized from a keyboard activation key.
    Keyboard,
    /// A press synthesized by assistive technology (screen reader "activate",
    /// switch control, and similar).
    Virtual,
    /// Any other source.
    #[default]
    Unknown,
}

impl PointerKind {
    /// Returns `true` for presses that did not come from a pointing device.
    pub fn is_synthesized(self) -> bool {
        matches!(self, Self::Keyboard | Self::Virtual)
    }

    /// Returns `true` for physical pointing devices that can hold a press.
    pub fn is_physical(self) -> bool {
        matches!(self, Self::Mouse | Self::Pen | Self::Touch)
    }

    /// Lower-case name of the pointer kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Pen => "pen",
            Self::Touch => "touch",
            Self::Keyboard => "keyboard",
            Self::Virtual => "virtual",
            Self::Unknown => "unknown",
        }
    }
}

impl From<PointerType> for PointerKind {
    fn from(value: PointerType) -> Self {
        match value {
            PointerType::Mouse => Self::Mouse,
            PointerType::Pen => Self::Pen,
            PointerType::Touch => Self::Touch,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
