// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event handlers carried by the prop bundles.
//!
//! Each handler is a small value that captures the configuration it needs and takes the
//! trigger state as an argument on every call. Handlers never cache `is_open` or the focus
//! strategy between calls, and every change goes through [`TriggerState`].
//!
//! Every handler returns `true` when it issued a state operation, which hosts can use to
//! decide whether the event was consumed.

use alloc::borrow::Cow;

use ui_events::keyboard::{Modifiers, NamedKey};
use understory_event_state::long_press::{LongPressEvent, LongPressState};
use understory_event_state::pointer::PointerKind;
use understory_event_state::press::PressRelease;

use crate::config::{ActivationMode, TriggerConfig};
use crate::event::KeyInput;
use crate::state::{FocusStrategy, TriggerState};

/// Modifier that must be held for keyboard activation of a long-press trigger.
pub const LONG_PRESS_KEY_MODIFIER: Modifiers = Modifiers::ALT;

/// Press handlers: mouse and assistive presses open on press start, touch on release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PressHandlers {
    disabled: bool,
}

impl PressHandlers {
    /// Handlers for a trigger with the given disabled flag.
    pub fn new(disabled: bool) -> Self {
        Self { disabled }
    }

    /// Whether the handlers are inert.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// A press started.
    ///
    /// Touch waits for release. Keyboard presses are left to the key handler, which has
    /// already toggled the popup for the same key. Presses synthesized by assistive
    /// technology focus the first item; other pointers leave focus to the popup.
    pub fn on_press_start<S: TriggerState + ?Sized>(
        &self,
        state: &mut S,
        pointer: PointerKind,
    ) -> bool {
        if self.disabled || matches!(pointer, PointerKind::Touch | PointerKind::Keyboard) {
            log::trace!("menu trigger: press start from {pointer} ignored");
            return false;
        }
        let focus = if pointer == PointerKind::Virtual {
            FocusStrategy::First
        } else {
            FocusStrategy::None
        };
        log::debug!("menu trigger: press start from {pointer}, toggle({focus:?})");
        state.toggle(focus);
        true
    }

    /// A press completed over the trigger.
    pub fn on_press<S: TriggerState + ?Sized>(&self, state: &mut S, pointer: PointerKind) -> bool {
        if self.disabled || pointer != PointerKind::Touch {
            log::trace!("menu trigger: press from {pointer} ignored");
            return false;
        }
        log::debug!("menu trigger: touch press, toggle(None)");
        state.toggle(FocusStrategy::None);
        true
    }

    /// Feed a release from [`PressState`](understory_event_state::press::PressState).
    ///
    /// Only completed releases count as a press.
    pub fn on_release<S: TriggerState + ?Sized, K>(
        &self,
        state: &mut S,
        release: &PressRelease<K>,
    ) -> bool {
        release.completed && self.on_press(state, release.event.pointer)
    }
}

/// Long-press handlers: the gesture start closes, completion opens with the first item focused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongPressHandlers {
    disabled: bool,
    description: Cow<'static, str>,
}

impl LongPressHandlers {
    /// Handlers for a trigger with the given disabled flag and accessible description.
    pub fn new(disabled: bool, description: Cow<'static, str>) -> Self {
        Self {
            disabled,
            description,
        }
    }

    /// Whether the handlers are inert.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The accessible description of the gesture. Present even while disabled.
    pub fn accessibility_description(&self) -> &str {
        &self.description
    }

    pub(crate) fn description(&self) -> &Cow<'static, str> {
        &self.description
    }

    /// A long press started. Always closes, even an already closed popup.
    pub fn on_long_press_start<S: TriggerState + ?Sized>(&self, state: &mut S) -> bool {
        if self.disabled {
            return false;
        }
        log::debug!("menu trigger: long press start, close()");
        state.close();
        true
    }

    /// A long press completed.
    pub fn on_long_press<S: TriggerState + ?Sized>(&self, state: &mut S) -> bool {
        if self.disabled {
            return false;
        }
        log::debug!("menu trigger: long press, open(First)");
        state.open(FocusStrategy::First);
        true
    }

    /// Feed an event from [`LongPressState`].
    pub fn on_event<S: TriggerState + ?Sized>(&self, state: &mut S, event: LongPressEvent) -> bool {
        match event {
            LongPressEvent::Start => self.on_long_press_start(state),
            LongPressEvent::LongPress => self.on_long_press(state),
            LongPressEvent::End | LongPressEvent::Cancel => false,
        }
    }

    /// Bring a recognizer's disabled flag in line with these handlers.
    pub fn sync_recognizer(&self, recognizer: &mut LongPressState) {
        if recognizer.is_disabled() != self.disabled {
            recognizer.set_disabled(self.disabled);
        }
    }
}

/// The trigger's activation handlers. Exactly one set is wired per configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Press activation.
    Press(PressHandlers),
    /// Long-press activation.
    LongPress(LongPressHandlers),
}

impl Activation {
    /// Build the handler set selected by `config.activation`.
    pub fn for_config(config: &TriggerConfig) -> Self {
        match config.activation {
            ActivationMode::Press => Self::Press(PressHandlers::new(config.disabled)),
            ActivationMode::LongPress => Self::LongPress(LongPressHandlers::new(
                config.disabled,
                config.long_press_description.clone(),
            )),
        }
    }

    /// The mode these handlers implement.
    pub fn mode(&self) -> ActivationMode {
        match self {
            Self::Press(_) => ActivationMode::Press,
            Self::LongPress(_) => ActivationMode::LongPress,
        }
    }

    /// The press handlers, if this is press activation.
    pub fn press(&self) -> Option<&PressHandlers> {
        match self {
            Self::Press(handlers) => Some(handlers),
            Self::LongPress(_) => None,
        }
    }

    /// The long-press handlers, if this is long-press activation.
    pub fn long_press(&self) -> Option<&LongPressHandlers> {
        match self {
            Self::LongPress(handlers) => Some(handlers),
            Self::Press(_) => None,
        }
    }
}

/// Keyboard handler for the trigger element.
///
/// - Enter and Space behave like `ArrowDown`, except in long-press mode where they do nothing.
/// - `ArrowDown` toggles with the first item focused, `ArrowUp` with the last.
/// - In long-press mode every key requires [`LONG_PRESS_KEY_MODIFIER`].
///
/// A handled key has its default prevented and its propagation stopped, unless propagation
/// was delegated to an ancestor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyDownHandler {
    disabled: bool,
    activation: ActivationMode,
    attached: bool,
}

impl KeyDownHandler {
    /// A key handler. `attached` is `false` when the trigger has no element to receive keys,
    /// which makes the handler inert.
    pub fn new(disabled: bool, activation: ActivationMode, attached: bool) -> Self {
        Self {
            disabled,
            activation,
            attached,
        }
    }

    /// Whether the handler can act at all.
    pub fn is_active(&self) -> bool {
        !self.disabled && self.attached
    }

    /// Handle a key-down.
    pub fn on_key_down<S: TriggerState + ?Sized>(
        &self,
        state: &mut S,
        event: &mut KeyInput,
    ) -> bool {
        if self.disabled {
            return false;
        }
        let long_press = self.activation == ActivationMode::LongPress;
        if long_press && !event.modifiers.contains(LONG_PRESS_KEY_MODIFIER) {
            return false;
        }
        if !self.attached {
            log::trace!("menu trigger: no element attached, key ignored");
            return false;
        }

        let focus = if event.is_named(NamedKey::Enter) || event.is_space() {
            if long_press {
                return false;
            }
            FocusStrategy::First
        } else if event.is_named(NamedKey::ArrowDown) {
            FocusStrategy::First
        } else if event.is_named(NamedKey::ArrowUp) {
            FocusStrategy::Last
        } else {
            return false;
        };

        if !event.propagation_delegated {
            event.stop_propagation();
        }
        event.prevent_default();
        log::debug!("menu trigger: key {:?}, toggle({focus:?})", event.key);
        state.toggle(focus);
        true
    }
}

/// Closes the popup. Calling it is exactly [`TriggerState::close`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CloseHandler;

impl CloseHandler {
    /// Close the popup.
    pub fn call<S: TriggerState + ?Sized>(self, state: &mut S) {
        state.close();
    }

    /// The handler as a plain function pointer.
    pub fn as_fn<S: TriggerState>(self) -> fn(&mut S) {
        S::close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MenuTriggerState;
    use alloc::string::ToString;
    use ui_events::keyboard::Key;

    fn key(named: NamedKey, modifiers: Modifiers) -> KeyInput {
        KeyInput::new(Key::Named(named), modifiers)
    }

    #[test]
    fn activation_follows_config() {
        let press = Activation::for_config(&TriggerConfig::new());
        assert_eq!(press.mode(), ActivationMode::Press);
        assert!(press.press().is_some());
        assert!(press.long_press().is_none());

        let long = Activation::for_config(
            &TriggerConfig::new().with_activation(ActivationMode::LongPress),
        );
        assert_eq!(long.mode(), ActivationMode::LongPress);
        assert!(long.press().is_none());
        assert!(long.long_press().is_some());
    }

    #[test]
    fn enter_and_space_open_first_in_press_mode() {
        let handler = KeyDownHandler::new(false, ActivationMode::Press, true);
        let mut state = MenuTriggerState::new();

        let mut enter = key(NamedKey::Enter, Modifiers::empty());
        assert!(handler.on_key_down(&mut state, &mut enter));
        assert!(state.is_open());
        assert_eq!(state.focus_strategy(), FocusStrategy::First);

        let mut space = KeyInput::new(Key::Character(" ".to_string()), Modifiers::empty());
        assert!(handler.on_key_down(&mut state, &mut space));
        assert!(!state.is_open());
        assert!(space.is_default_prevented());
        assert!(space.is_propagation_stopped());
    }

    #[test]
    fn long_press_mode_requires_alt_and_ignores_enter() {
        let handler = KeyDownHandler::new(false, ActivationMode::LongPress, true);
        let mut state = MenuTriggerState::new();

        let mut plain = key(NamedKey::ArrowDown, Modifiers::empty());
        assert!(!handler.on_key_down(&mut state, &mut plain));
        assert!(!plain.is_default_prevented());

        let mut alt_enter = key(NamedKey::Enter, Modifiers::ALT);
        assert!(!handler.on_key_down(&mut state, &mut alt_enter));
        assert!(!alt_enter.is_default_prevented());
        assert!(!state.is_open());

        let mut alt_up = key(NamedKey::ArrowUp, Modifiers::ALT);
        assert!(handler.on_key_down(&mut state, &mut alt_up));
        assert_eq!(state.focus_strategy(), FocusStrategy::Last);
    }

    #[test]
    fn detached_handler_is_inert() {
        let handler = KeyDownHandler::new(false, ActivationMode::Press, false);
        assert!(!handler.is_active());
        let mut state = MenuTriggerState::new();
        let mut down = key(NamedKey::ArrowDown, Modifiers::empty());
        assert!(!handler.on_key_down(&mut state, &mut down));
        assert!(!down.is_default_prevented());
        assert!(!down.is_propagation_stopped());
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let handler = KeyDownHandler::new(false, ActivationMode::Press, true);
        let mut state = MenuTriggerState::new();
        let mut escape = key(NamedKey::Escape, Modifiers::empty());
        assert!(!handler.on_key_down(&mut state, &mut escape));
        assert!(!escape.is_default_prevented());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn release_outside_is_not_a_press() {
        use understory_event_state::press::PressState;

        let handlers = PressHandlers::new(false);
        let mut state = MenuTriggerState::new();
        let mut press = PressState::new();

        press.on_down((), PointerKind::Touch);
        press.on_move(false);
        let release = press.on_up().unwrap();
        assert!(!handlers.on_release(&mut state, &release));
        assert!(!state.is_open());

        press.on_down((), PointerKind::Touch);
        let release = press.on_up().unwrap();
        assert!(handlers.on_release(&mut state, &release));
        assert!(state.is_open());
    }

    #[test]
    fn long_press_events_dispatch() {
        let handlers = LongPressHandlers::new(false, Cow::Borrowed("hold"));
        let mut state = MenuTriggerState::new();
        assert!(handlers.on_event(&mut state, LongPressEvent::Start));
        assert!(handlers.on_event(&mut state, LongPressEvent::LongPress));
        assert!(state.is_open());
        assert!(!handlers.on_event(&mut state, LongPressEvent::End));
        assert!(!handlers.on_event(&mut state, LongPressEvent::Cancel));
        assert!(state.is_open());
    }

    #[test]
    fn sync_recognizer_copies_disabled() {
        let mut recognizer = LongPressState::default();
        LongPressHandlers::new(true, Cow::Borrowed("")).sync_recognizer(&mut recognizer);
        assert!(recognizer.is_disabled());
        LongPressHandlers::new(false, Cow::Borrowed("")).sync_recognizer(&mut recognizer);
        assert!(!recognizer.is_disabled());
    }

    #[test]
    fn close_handler_is_close() {
        let mut via_handler = MenuTriggerState::new();
        via_handler.open(FocusStrategy::Last);
        let mut direct = via_handler.clone();

        CloseHandler.call(&mut via_handler);
        direct.close();
        assert_eq!(via_handler, direct);

        let close = CloseHandler.as_fn::<MenuTriggerState>();
        via_handler.open(FocusStrategy::First);
        close(&mut via_handler);
        assert!(!via_handler.is_open());
    }
}
