// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state for a trigger's popup.
//!
//! The controller never stores whether the popup is open. It reads and mutates through the
//! [`TriggerState`] trait, so the state can be shared with whatever else observes it (the
//! rendered popup, a toolbar that closes sibling menus, tests that record calls).
//!
//! [`MenuTriggerState`] is a plain implementation for hosts without their own store.
//!
//! ```
//! use understory_menu_trigger::state::{FocusStrategy, MenuTriggerState, TriggerState};
//!
//! let mut state = MenuTriggerState::new();
//! state.toggle(FocusStrategy::Last);
//! assert!(state.is_open());
//! assert_eq!(state.focus_strategy(), FocusStrategy::Last);
//!
//! state.toggle(FocusStrategy::None);
//! assert!(!state.is_open());
//! ```

/// Which item receives focus when the popup opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusStrategy {
    /// No forced item focus; the popup decides (usually focus stays on the popup itself).
    #[default]
    None,
    /// Focus the first item.
    First,
    /// Focus the last item.
    Last,
}

/// Externally owned open/closed state of a trigger's popup.
pub trait TriggerState {
    /// Whether the popup is open.
    fn is_open(&self) -> bool;

    /// The focus strategy requested by the most recent open or toggle.
    fn focus_strategy(&self) -> FocusStrategy;

    /// Open the popup with the given focus strategy.
    fn open(&mut self, focus: FocusStrategy);

    /// Close the popup.
    fn close(&mut self);

    /// Open the popup with `focus` if it is closed, otherwise close it.
    ///
    /// [`FocusStrategy::None`] opens without forcing item focus.
    fn toggle(&mut self, focus: FocusStrategy);
}

impl<T: TriggerState + ?Sized> TriggerState for &mut T {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn focus_strategy(&self) -> FocusStrategy {
        (**self).focus_strategy()
    }

    fn open(&mut self, focus: FocusStrategy) {
        (**self).open(focus);
    }

    fn close(&mut self) {
        (**self).close();
    }

    fn toggle(&mut self, focus: FocusStrategy) {
        (**self).toggle(focus);
    }
}

/// A self-contained [`TriggerState`].
///
/// `open` and `toggle` record the requested focus strategy; `close` leaves it untouched.
/// The revision counter bumps whenever the open flag or the focus strategy changes, so
/// renderers can skip work when nothing moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuTriggerState {
    open: bool,
    focus_strategy: FocusStrategy,
    revision: u64,
}

impl MenuTriggerState {
    /// A closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set(&mut self, open: bool, focus_strategy: FocusStrategy) {
        if self.open != open || self.focus_strategy != focus_strategy {
            self.open = open;
            self.focus_strategy = focus_strategy;
            self.revision = self.revision.wrapping_add(1);
        }
    }
}

impl TriggerState for MenuTriggerState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn focus_strategy(&self) -> FocusStrategy {
        self.focus_strategy
    }

    fn open(&mut self, focus: FocusStrategy) {
        self.set(true, focus);
    }

    fn close(&mut self) {
        self.set(false, self.focus_strategy);
    }

    fn toggle(&mut self, focus: FocusStrategy) {
        self.set(!self.open, focus);
    }
}
