// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop bundles produced for the trigger and menu elements.
//!
//! Bundles are plain data: typed attribute fields plus handler values that the host calls
//! with its [`TriggerState`](crate::state::TriggerState). Renderers that work in terms of
//! attribute lists can flatten a bundle with [`TriggerProps::attributes`] or
//! [`MenuProps::attributes`].

use alloc::borrow::Cow;
use core::fmt;

use smallvec::SmallVec;

use crate::config::PopupKind;
use crate::handlers::{Activation, CloseHandler, KeyDownHandler};
use crate::id::TriggerId;
use crate::state::FocusStrategy;

/// Value of the `aria-haspopup` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AriaHasPopup {
    /// `aria-haspopup="true"`, equivalent to `menu`.
    True,
    /// `aria-haspopup="listbox"`.
    Listbox,
}

impl AriaHasPopup {
    /// The attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::Listbox => "listbox",
        }
    }
}

impl From<PopupKind> for AriaHasPopup {
    fn from(kind: PopupKind) -> Self {
        match kind {
            PopupKind::Menu => Self::True,
            PopupKind::Listbox => Self::Listbox,
        }
    }
}

/// A flattened attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// A boolean attribute, rendered as `true`/`false`.
    Bool(bool),
    /// An element id.
    Id(TriggerId),
    /// A fixed token such as `listbox`.
    Token(&'static str),
    /// Free text.
    Text(Cow<'static, str>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Token(token) => f.write_str(token),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Attribute name/value pairs in a stable order.
pub type Attributes = SmallVec<[(&'static str, AttrValue); 6]>;

/// Base trigger attributes supplied by an [`OverlayTrigger`](crate::overlay::OverlayTrigger).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerAttrs {
    /// `aria-haspopup`.
    pub aria_haspopup: AriaHasPopup,
    /// `aria-expanded`.
    pub aria_expanded: bool,
    /// `aria-controls`, present while the popup is open.
    pub aria_controls: Option<TriggerId>,
}

/// Base popup attributes supplied by an [`OverlayTrigger`](crate::overlay::OverlayTrigger).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayAttrs {
    /// The popup element's id.
    pub id: Option<TriggerId>,
}

/// Everything the trigger element needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerProps {
    /// Base attributes from the overlay trigger.
    pub base: TriggerAttrs,
    /// The trigger element's id; the menu is labelled by it.
    pub id: TriggerId,
    /// Exactly one of the press or long-press handler sets.
    pub activation: Activation,
    /// The keyboard handler.
    pub on_key_down: KeyDownHandler,
}

impl TriggerProps {
    /// The accessible description, present for long-press triggers.
    pub fn accessibility_description(&self) -> Option<&str> {
        match &self.activation {
            Activation::LongPress(handlers) => Some(handlers.accessibility_description()),
            Activation::Press(_) => None,
        }
    }

    /// Flatten to attribute pairs.
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.push(("id", AttrValue::Id(self.id)));
        attrs.push((
            "aria-haspopup",
            AttrValue::Token(self.base.aria_haspopup.as_str()),
        ));
        attrs.push(("aria-expanded", AttrValue::Bool(self.base.aria_expanded)));
        if let Some(controls) = self.base.aria_controls {
            attrs.push(("aria-controls", AttrValue::Id(controls)));
        }
        if let Activation::LongPress(handlers) = &self.activation {
            attrs.push((
                "aria-description",
                AttrValue::Text(handlers.description().clone()),
            ));
        }
        attrs
    }
}

/// Everything the menu element needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuProps {
    /// Base attributes from the overlay trigger.
    pub base: OverlayAttrs,
    /// The trigger's id, so the menu is announced as belonging to it.
    pub aria_labelledby: TriggerId,
    /// Initial item focus, read from the trigger state when the bundle was built.
    pub auto_focus: FocusStrategy,
    /// Closes the popup.
    pub on_close: CloseHandler,
}

impl MenuProps {
    /// Flatten to attribute pairs.
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(id) = self.base.id {
            attrs.push(("id", AttrValue::Id(id)));
        }
        attrs.push(("aria-labelledby", AttrValue::Id(self.aria_labelledby)));
        attrs
    }
}

/// The pair of bundles produced by [`MenuTrigger::props`](crate::MenuTrigger::props).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTriggerAria {
    /// Props for the trigger element.
    pub trigger: TriggerProps,
    /// Props for the menu element.
    pub menu: MenuProps,
}
