// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu trigger controller.

use crate::config::{ActivationMode, TriggerConfig};
use crate::handlers::{Activation, CloseHandler, KeyDownHandler};
use crate::id::TriggerId;
use crate::overlay::OverlayTrigger;
use crate::props::{MenuProps, MenuTriggerAria, TriggerProps};
use crate::state::TriggerState;

/// Arbitrates press, long-press and keyboard input for a menu trigger.
///
/// One controller exists per trigger/menu pair. It owns the configuration, the identity
/// token linking trigger and menu, and the trigger's element key (if mounted). It owns no
/// open/closed state: bundles are rebuilt from the current [`TriggerState`] whenever the host
/// re-renders, and handlers take the state on every call.
///
/// `K` is the host's element key, for example a box tree node id. Without an element the
/// keyboard channel is inactive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTrigger<K> {
    config: TriggerConfig,
    id: TriggerId,
    element: Option<K>,
    activation: Activation,
}

impl<K> MenuTrigger<K> {
    /// Create a controller with a freshly minted identity token.
    pub fn new(config: TriggerConfig, element: Option<K>) -> Self {
        Self::with_id(config, TriggerId::next(), element)
    }

    /// Create a controller with a host-provided identity token.
    pub fn with_id(config: TriggerConfig, id: TriggerId, element: Option<K>) -> Self {
        let activation = Activation::for_config(&config);
        Self {
            config,
            id,
            element,
            activation,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// The identity token shared by the trigger `id` and the menu's `aria-labelledby`.
    pub fn id(&self) -> TriggerId {
        self.id
    }

    /// The trigger element, if mounted.
    pub fn element(&self) -> Option<&K> {
        self.element.as_ref()
    }

    /// Mount or unmount the trigger element.
    pub fn set_element(&mut self, element: Option<K>) {
        self.element = element;
    }

    /// Replace the configuration, keeping the identity token.
    pub fn set_config(&mut self, config: TriggerConfig) {
        self.activation = Activation::for_config(&config);
        self.config = config;
    }

    /// The activation handler set chosen by the configuration.
    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    /// The keyboard handler for the current configuration and element.
    pub fn key_down_handler(&self) -> KeyDownHandler {
        KeyDownHandler::new(
            self.config.disabled,
            self.config.activation,
            self.element.is_some(),
        )
    }

    /// Whether a long-press recognizer feeding this trigger should be disabled.
    pub fn long_press_disabled(&self) -> bool {
        self.config.disabled || self.config.activation != ActivationMode::LongPress
    }

    /// Build the trigger and menu bundles for the current state.
    ///
    /// The menu's `auto_focus` is read from `state` now; rebuild after the state changes.
    pub fn props<S, O>(&self, state: &S, overlay: &O) -> MenuTriggerAria
    where
        S: TriggerState + ?Sized,
        O: OverlayTrigger,
    {
        let kind = self.config.popup_kind;
        MenuTriggerAria {
            trigger: TriggerProps {
                base: overlay.trigger_attrs(kind, state),
                id: self.id,
                activation: self.activation.clone(),
                on_key_down: self.key_down_handler(),
            },
            menu: MenuProps {
                base: overlay.overlay_attrs(kind, state),
                aria_labelledby: self.id,
                auto_focus: state.focus_strategy(),
                on_close: CloseHandler,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopupKind;
    use crate::overlay::AriaOverlayTrigger;
    use crate::props::AriaHasPopup;
    use crate::state::{FocusStrategy, MenuTriggerState};

    #[test]
    fn props_link_trigger_and_menu() {
        let trigger = MenuTrigger::new(TriggerConfig::new(), Some(1_u32));
        let overlay = AriaOverlayTrigger::new();
        let state = MenuTriggerState::new();

        let aria = trigger.props(&state, &overlay);
        assert_eq!(aria.trigger.id, trigger.id());
        assert_eq!(aria.menu.aria_labelledby, trigger.id());
        assert_eq!(aria.menu.base.id, Some(overlay.overlay_id()));
        assert_eq!(aria.trigger.base.aria_haspopup, AriaHasPopup::True);
    }

    #[test]
    fn auto_focus_is_read_at_build_time() {
        let trigger = MenuTrigger::new(TriggerConfig::new(), Some(1_u32));
        let overlay = AriaOverlayTrigger::new();
        let mut state = MenuTriggerState::new();

        let before = trigger.props(&state, &overlay);
        state.open(FocusStrategy::Last);
        assert_eq!(before.menu.auto_focus, FocusStrategy::None);

        let after = trigger.props(&state, &overlay);
        assert_eq!(after.menu.auto_focus, FocusStrategy::Last);
        assert!(after.trigger.base.aria_expanded);
    }

    #[test]
    fn element_controls_keyboard_channel() {
        let mut trigger = MenuTrigger::new(TriggerConfig::new(), None::<u32>);
        assert!(!trigger.key_down_handler().is_active());
        trigger.set_element(Some(4));
        assert_eq!(trigger.element(), Some(&4));
        assert!(trigger.key_down_handler().is_active());
    }

    #[test]
    fn set_config_rebuilds_activation_and_keeps_id() {
        let mut trigger = MenuTrigger::new(TriggerConfig::new(), Some(1_u32));
        let id = trigger.id();
        assert!(trigger.long_press_disabled());

        trigger.set_config(
            TriggerConfig::new()
                .with_activation(ActivationMode::LongPress)
                .with_popup_kind(PopupKind::Listbox),
        );
        assert_eq!(trigger.id(), id);
        assert_eq!(trigger.activation().mode(), ActivationMode::LongPress);
        assert!(!trigger.long_press_disabled());

        trigger.set_config(
            TriggerConfig::new()
                .with_activation(ActivationMode::LongPress)
                .disabled(true),
        );
        assert!(trigger.long_press_disabled());
    }
}
