// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press state helper: recognize press-and-hold with a time threshold and movement tolerance.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`LongPressState::on_down`] with the position, a millisecond
//!    timestamp and the pointer kind. Only physical pointers start a long press.
//! 2) Ask [`LongPressState::deadline`] when the threshold will elapse and schedule a timer for
//!    it with whatever timer facility the host has. When the timer fires (or on any later
//!    event), call [`LongPressState::on_tick`].
//! 3) Feed pointer moves to [`LongPressState::on_move`]. Moving further than the tolerance
//!    before the threshold cancels the gesture.
//! 4) On pointer up call [`LongPressState::on_up`]; on pointer cancel call
//!    [`LongPressState::on_cancel`].
//!
//! Timestamps are caller-provided and only compared with each other, so any monotonic
//! millisecond clock works.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::long_press::{LongPressEvent, LongPressState};
//! use understory_event_state::pointer::PointerKind;
//!
//! let mut long_press = LongPressState::default();
//!
//! let start = long_press.on_down(Point::new(10.0, 10.0), 1_000, PointerKind::Touch);
//! assert_eq!(start, Some(LongPressEvent::Start));
//! assert_eq!(long_press.deadline(), Some(1_500));
//!
//! // Too early.
//! assert_eq!(long_press.on_tick(1_200), None);
//! // Threshold reached.
//! assert_eq!(long_press.on_tick(1_500), Some(LongPressEvent::LongPress));
//! assert_eq!(long_press.on_up(), Some(LongPressEvent::End));
//! ```

use kurbo::Point;

use crate::pointer::PointerKind;

/// Default hold duration before a press becomes a long press, in milliseconds.
pub const DEFAULT_THRESHOLD_MS: u64 = 500;

/// Default distance the pointer may travel before the gesture is abandoned, in logical pixels.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Timing and movement limits for long-press recognition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LongPressConfig {
    /// How long the press must be held, in milliseconds.
    pub threshold_ms: u64,
    /// How far the pointer may move from the down position before the gesture cancels.
    pub tolerance: f64,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_THRESHOLD_MS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// A long-press transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LongPressEvent {
    /// A physical pointer went down; the gesture may become a long press.
    Start,
    /// The press was held past the threshold.
    LongPress,
    /// A completed long press was released.
    End,
    /// The gesture was abandoned before completion (moved, released early or canceled).
    Cancel,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct ActiveLongPress {
    origin: Point,
    started_at: u64,
    pointer: PointerKind,
    fired: bool,
}

/// Tracks at most one long-press gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LongPressState {
    config: LongPressConfig,
    disabled: bool,
    active: Option<ActiveLongPress>,
}

impl LongPressState {
    /// Create a recognizer with the given limits.
    pub fn new(config: LongPressConfig) -> Self {
        Self {
            config,
            disabled: false,
            active: None,
        }
    }

    /// The configured limits.
    pub fn config(&self) -> LongPressConfig {
        self.config
    }

    /// Enable or disable recognition.
    ///
    /// Disabling abandons any gesture in flight without emitting events.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.active = None;
        }
    }

    /// Returns `true` if recognition is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` while a gesture is being tracked.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The pointer kind of the gesture in flight.
    pub fn pointer(&self) -> Option<PointerKind> {
        self.active.map(|active| active.pointer)
    }

    /// Timestamp at which the gesture in flight becomes a long press, if it has not yet.
    pub fn deadline(&self) -> Option<u64> {
        self.active
            .filter(|active| !active.fired)
            .map(|active| active.started_at.saturating_add(self.config.threshold_ms))
    }

    /// Pointer down at `pos` at time `now`.
    pub fn on_down(
        &mut self,
        pos: Point,
        now: u64,
        pointer: PointerKind,
    ) -> Option<LongPressEvent> {
        if self.disabled || self.active.is_some() || !pointer.is_physical() {
            return None;
        }
        self.active = Some(ActiveLongPress {
            origin: pos,
            started_at: now,
            pointer,
            fired: false,
        });
        Some(LongPressEvent::Start)
    }

    /// Pointer moved to `pos`.
    pub fn on_move(&mut self, pos: Point) -> Option<LongPressEvent> {
        let active = self.active?;
        if active.fired {
            return None;
        }
        let tolerance = self.config.tolerance;
        // Compare squared lengths; `hypot` needs `std` or `libm`.
        if (pos - active.origin).hypot2() > tolerance * tolerance {
            self.active = None;
            return Some(LongPressEvent::Cancel);
        }
        None
    }

    /// Advance time. Emits [`LongPressEvent::LongPress`] once the threshold has elapsed.
    pub fn on_tick(&mut self, now: u64) -> Option<LongPressEvent> {
        let threshold = self.config.threshold_ms;
        let active = self.active.as_mut()?;
        if active.fired || now.saturating_sub(active.started_at) < threshold {
            return None;
        }
        active.fired = true;
        Some(LongPressEvent::LongPress)
    }

    /// Pointer released.
    ///
    /// Returns [`LongPressEvent::End`] for a completed long press and
    /// [`LongPressEvent::Cancel`] for one released before the threshold was observed.
    pub fn on_up(&mut self) -> Option<LongPressEvent> {
        let active = self.active.take()?;
        Some(if active.fired {
            LongPressEvent::End
        } else {
            LongPressEvent::Cancel
        })
    }

    /// Pointer canceled by the platform.
    pub fn on_cancel(&mut self) -> Option<LongPressEvent> {
        self.active.take().map(|_| LongPressEvent::Cancel)
    }
}
