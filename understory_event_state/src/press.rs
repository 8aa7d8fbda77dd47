// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press state helper: turn down/move/up/cancel into press start, release and completion.
//!
//! ## Usage
//!
//! 1) On pointer down over a pressable target, call [`PressState::on_down`]. It returns the
//!    press-start event, or `None` if another press is already in flight.
//! 2) While the press is active, report whether the pointer is still over the target with
//!    [`PressState::on_move`].
//! 3) On pointer up, call [`PressState::on_up`]. The returned [`PressRelease`] says whether the
//!    press *completed* (released over the target) or merely ended.
//! 4) If the platform cancels the pointer (for example a touch turns into a scroll), call
//!    [`PressState::on_cancel`]. A canceled press never completes.
//!
//! Synthesized presses ([`PointerKind::Keyboard`], [`PointerKind::Virtual`]) go through the
//! same calls; they simply never leave the target.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::pointer::PointerKind;
//! use understory_event_state::press::PressState;
//!
//! let mut press = PressState::new();
//!
//! let start = press.on_down(7_u32, PointerKind::Touch).unwrap();
//! assert_eq!(start.target, 7);
//!
//! // Finger slides off the button before lifting.
//! press.on_move(false);
//! let release = press.on_up().unwrap();
//! assert!(!release.completed);
//! assert!(!press.is_pressed());
//! ```

use crate::pointer::PointerKind;

/// A press lifecycle event for a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PressEvent<K> {
    /// The target the press started on.
    pub target: K,
    /// The input source of the press.
    pub pointer: PointerKind,
}

/// The result of releasing an active press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PressRelease<K> {
    /// The press that ended.
    pub event: PressEvent<K>,
    /// `true` when the release happened over the target the press started on.
    pub completed: bool,
}

/// Tracks at most one in-flight press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressState<K> {
    active: Option<ActivePress<K>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ActivePress<K> {
    event: PressEvent<K>,
    over_target: bool,
}

impl<K: Copy> PressState<K> {
    /// Create an idle press state.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Begin a press on `target`.
    ///
    /// Returns `None` without changing state if a press is already active, so a second
    /// finger or button cannot restart the gesture.
    pub fn on_down(&mut self, target: K, pointer: PointerKind) -> Option<PressEvent<K>> {
        if self.active.is_some() {
            return None;
        }
        let event = PressEvent { target, pointer };
        self.active = Some(ActivePress {
            event,
            over_target: true,
        });
        Some(event)
    }

    /// Record whether the pointer is currently over the pressed target.
    pub fn on_move(&mut self, over_target: bool) {
        if let Some(active) = &mut self.active {
            active.over_target = over_target;
        }
    }

    /// Release the active press.
    pub fn on_up(&mut self) -> Option<PressRelease<K>> {
        self.active.take().map(|active| PressRelease {
            event: active.event,
            completed: active.over_target,
        })
    }

    /// Cancel the active press, returning it. A canceled press never completes.
    pub fn on_cancel(&mut self) -> Option<PressEvent<K>> {
        self.active.take().map(|active| active.event)
    }

    /// Returns `true` while a press is active.
    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` while a press is active and the pointer is over its target.
    pub fn is_over_target(&self) -> bool {
        self.active.is_some_and(|active| active.over_target)
    }

    /// The active press, if any.
    pub fn current(&self) -> Option<PressEvent<K>> {
        self.active.map(|active| active.event)
    }
}
