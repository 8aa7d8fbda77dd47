// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-unique identity tokens used to cross-link elements for assistive technology.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique element identifier.
///
/// Minted once per controller instance and used as the trigger element's `id`, which the
/// popup references from `aria-labelledby`. Renders as `understory-<n>`.
///
/// ```
/// use understory_menu_trigger::id::TriggerId;
///
/// let a = TriggerId::next();
/// let b = TriggerId::next();
/// assert_ne!(a, b);
/// assert!(a.to_string().starts_with("understory-"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

impl TriggerId {
    /// Mint a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an identifier allocated by the host.
    ///
    /// Hosts that mix their own raw ids with [`TriggerId::next`] are responsible for keeping
    /// them distinct.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "understory-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_increase() {
        let a = TriggerId::next();
        let b = TriggerId::next();
        assert!(b > a);
    }

    #[test]
    fn raw_ids_display() {
        let id = TriggerId::from_raw(42);
        assert_eq!(id.get(), 42);
        assert_eq!(alloc::format!("{id}"), "understory-42");
    }
}
