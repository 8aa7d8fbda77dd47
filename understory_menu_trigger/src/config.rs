// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger configuration.
//!
//! A [`TriggerConfig`] is built once per render by the caller and never mutated by the
//! controller. The enums parse from the lower camel-case names used by markup and theme
//! files:
//!
//! ```
//! use understory_menu_trigger::config::{ActivationMode, PopupKind, TriggerConfig};
//!
//! let config = TriggerConfig::new()
//!     .with_popup_kind("listbox".parse().unwrap())
//!     .with_activation("longPress".parse().unwrap());
//! assert_eq!(config.popup_kind, PopupKind::Listbox);
//! assert_eq!(config.activation, ActivationMode::LongPress);
//! assert!("hover".parse::<ActivationMode>().is_err());
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// English description announced for a long-press trigger.
pub const DEFAULT_LONG_PRESS_DESCRIPTION: &str = "Long press or press Alt + ArrowDown to open menu";

/// The kind of popup a trigger opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PopupKind {
    /// A menu of actions.
    #[default]
    Menu,
    /// A list of selectable options.
    Listbox,
}

impl PopupKind {
    /// The markup name of the popup kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Listbox => "listbox",
        }
    }
}

/// How the trigger opens its popup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivationMode {
    /// Press (click, tap, or assistive activation) toggles the popup.
    #[default]
    Press,
    /// Press-and-hold opens the popup; a plain press is left to the trigger's own action.
    LongPress,
}

impl ActivationMode {
    /// The markup name of the activation mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::LongPress => "longPress",
        }
    }
}

/// Per-render trigger configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Kind of popup the trigger opens.
    pub popup_kind: PopupKind,
    /// Whether the trigger is disabled. A disabled trigger never changes the popup state.
    pub disabled: bool,
    /// How the trigger opens its popup.
    pub activation: ActivationMode,
    /// Accessible description attached to long-press triggers.
    pub long_press_description: Cow<'static, str>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            popup_kind: PopupKind::Menu,
            disabled: false,
            activation: ActivationMode::Press,
            long_press_description: Cow::Borrowed(DEFAULT_LONG_PRESS_DESCRIPTION),
        }
    }
}

impl TriggerConfig {
    /// An enabled press-activated menu trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the popup kind.
    #[must_use]
    pub fn with_popup_kind(mut self, popup_kind: PopupKind) -> Self {
        self.popup_kind = popup_kind;
        self
    }

    /// Set whether the trigger is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the activation mode.
    #[must_use]
    pub fn with_activation(mut self, activation: ActivationMode) -> Self {
        self.activation = activation;
        self
    }

    /// Replace the long-press description, for example with a localized string.
    #[must_use]
    pub fn with_long_press_description(
        mut self,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.long_press_description = description.into();
        self
    }
}

/// Error returned when parsing a [`PopupKind`] or [`ActivationMode`] from text fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfigError {
    /// What was being parsed.
    pub expected: &'static str,
    /// The rejected input.
    pub found: String,
}

impl fmt::Display for ParseConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.expected, self.found)
    }
}

impl core::error::Error for ParseConfigError {}

impl FromStr for PopupKind {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Self::Menu),
            "listbox" => Ok(Self::Listbox),
            _ => Err(ParseConfigError {
                expected: "popup kind",
                found: s.to_string(),
            }),
        }
    }
}

impl FromStr for ActivationMode {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "press" => Ok(Self::Press),
            "longPress" | "long_press" | "long-press" => Ok(Self::LongPress),
            _ => Err(ParseConfigError {
                expected: "activation mode",
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PopupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
