// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base ARIA attributes for a trigger and the overlay it controls.
//!
//! The menu trigger controller starts from these base bundles and augments them. Hosts with
//! their own overlay system implement [`OverlayTrigger`]; everyone else uses
//! [`AriaOverlayTrigger`].
//!
//! ```
//! use understory_menu_trigger::config::PopupKind;
//! use understory_menu_trigger::overlay::{AriaOverlayTrigger, OverlayTrigger};
//! use understory_menu_trigger::props::AriaHasPopup;
//! use understory_menu_trigger::state::{FocusStrategy, MenuTriggerState, TriggerState};
//!
//! let overlay = AriaOverlayTrigger::new();
//! let mut state = MenuTriggerState::new();
//!
//! let closed = overlay.trigger_attrs(PopupKind::Listbox, &state);
//! assert_eq!(closed.aria_haspopup, AriaHasPopup::Listbox);
//! assert_eq!(closed.aria_controls, None);
//!
//! state.open(FocusStrategy::First);
//! let open = overlay.trigger_attrs(PopupKind::Listbox, &state);
//! assert_eq!(open.aria_controls, Some(overlay.overlay_id()));
//! ```

use crate::config::PopupKind;
use crate::id::TriggerId;
use crate::props::{AriaHasPopup, OverlayAttrs, TriggerAttrs};
use crate::state::TriggerState;

/// Source of the base trigger and overlay attributes.
pub trait OverlayTrigger {
    /// Attributes describing the trigger's relationship to its popup.
    fn trigger_attrs<S: TriggerState + ?Sized>(&self, kind: PopupKind, state: &S) -> TriggerAttrs;

    /// Attributes for the popup element.
    fn overlay_attrs<S: TriggerState + ?Sized>(&self, kind: PopupKind, state: &S) -> OverlayAttrs;
}

/// The standard WAI-ARIA trigger/overlay relationship.
///
/// - `aria-haspopup` is `true` for menus and `listbox` for listboxes.
/// - `aria-expanded` mirrors the open state.
/// - `aria-controls` points at the overlay only while it is open, since a closed overlay is
///   not in the accessibility tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AriaOverlayTrigger {
    overlay_id: TriggerId,
}

impl AriaOverlayTrigger {
    /// Create an overlay trigger with a freshly minted overlay id.
    pub fn new() -> Self {
        Self::with_overlay_id(TriggerId::next())
    }

    /// Create an overlay trigger for an overlay the host already identifies.
    pub fn with_overlay_id(overlay_id: TriggerId) -> Self {
        Self { overlay_id }
    }

    /// The overlay element's id.
    pub fn overlay_id(&self) -> TriggerId {
        self.overlay_id
    }
}

impl Default for AriaOverlayTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayTrigger for AriaOverlayTrigger {
    fn trigger_attrs<S: TriggerState + ?Sized>(&self, kind: PopupKind, state: &S) -> TriggerAttrs {
        let expanded = state.is_open();
        TriggerAttrs {
            aria_haspopup: AriaHasPopup::from(kind),
            aria_expanded: expanded,
            aria_controls: expanded.then_some(self.overlay_id),
        }
    }

    fn overlay_attrs<S: TriggerState + ?Sized>(
        &self,
        _kind: PopupKind,
        _state: &S,
    ) -> OverlayAttrs {
        OverlayAttrs {
            id: Some(self.overlay_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FocusStrategy, MenuTriggerState};

    #[test]
    fn menu_kind_reports_true() {
        let overlay = AriaOverlayTrigger::with_overlay_id(TriggerId::from_raw(9));
        let state = MenuTriggerState::new();
        let attrs = overlay.trigger_attrs(PopupKind::Menu, &state);
        assert_eq!(attrs.aria_haspopup, AriaHasPopup::True);
        assert!(!attrs.aria_expanded);
        assert_eq!(attrs.aria_controls, None);
    }

    #[test]
    fn controls_only_while_open() {
        let overlay = AriaOverlayTrigger::with_overlay_id(TriggerId::from_raw(9));
        let mut state = MenuTriggerState::new();
        state.open(FocusStrategy::None);
        let attrs = overlay.trigger_attrs(PopupKind::Menu, &state);
        assert!(attrs.aria_expanded);
        assert_eq!(attrs.aria_controls, Some(TriggerId::from_raw(9)));

        state.close();
        let attrs = overlay.trigger_attrs(PopupKind::Menu, &state);
        assert_eq!(attrs.aria_controls, None);
    }

    #[test]
    fn overlay_carries_its_id_whether_open_or_not() {
        let overlay = AriaOverlayTrigger::with_overlay_id(TriggerId::from_raw(3));
        let state = MenuTriggerState::new();
        assert_eq!(
            overlay.overlay_attrs(PopupKind::Listbox, &state).id,
            Some(TriggerId::from_raw(3))
        );
    }
}
