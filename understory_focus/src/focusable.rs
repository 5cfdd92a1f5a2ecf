// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static focusable-element matching.
//!
//! A surface's focus ring is built from the descendants that match a fixed
//! selector list. DOM hosts can hand [`FOCUSABLE_SELECTOR`] straight to
//! `querySelectorAll`; other hosts describe each descendant with an
//! [`ElementInfo`] and let [`ElementInfo::is_focusable`] apply the same rules.

/// Selector list for elements that take part in a surface's focus ring.
pub const FOCUSABLE_SELECTOR: &str = "button:not(:disabled), \
     [href]:not([aria-disabled=\"true\"]), \
     input:not(:disabled), \
     select:not(:disabled), \
     textarea:not(:disabled), \
     [tabindex]:not([tabindex^=\"-\"]):not([aria-disabled=\"true\"])";

/// Element categories the selector list distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// `<button>`.
    Button,
    /// `<a>` or `<area>`; focusable only when it carries an `href`.
    Link,
    /// `<input>`.
    Input,
    /// `<select>`.
    Select,
    /// `<textarea>`.
    TextArea,
    /// Anything else; focusable only through an explicit tab index.
    Other,
}

bitflags::bitflags! {
    /// Attribute state relevant to focusability.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ElementFlags: u8 {
        /// The element is `:disabled`.
        const DISABLED      = 0b0000_0001;
        /// The element carries `aria-disabled="true"`.
        const ARIA_DISABLED = 0b0000_0010;
        /// The element carries an `href` attribute.
        const HREF          = 0b0000_0100;
    }
}

/// Host-supplied description of one descendant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementInfo {
    /// Element category.
    pub kind: ElementKind,
    /// Attribute state.
    pub flags: ElementFlags,
    /// Parsed `tabindex` attribute, if present.
    pub tab_index: Option<i32>,
}

impl ElementInfo {
    /// An element of `kind` with no flags and no tab index.
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            flags: ElementFlags::empty(),
            tab_index: None,
        }
    }

    /// Returns a copy with `flags` added.
    #[must_use]
    pub const fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Returns a copy with the given tab index.
    #[must_use]
    pub const fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Whether this element matches [`FOCUSABLE_SELECTOR`].
    pub fn is_focusable(&self) -> bool {
        let disabled = self.flags.contains(ElementFlags::DISABLED);
        let aria_disabled = self.flags.contains(ElementFlags::ARIA_DISABLED);

        let native = match self.kind {
            ElementKind::Button
            | ElementKind::Input
            | ElementKind::Select
            | ElementKind::TextArea => !disabled,
            ElementKind::Link | ElementKind::Other => false,
        };
        let linked = self.flags.contains(ElementFlags::HREF) && !aria_disabled;
        let tabbable = self.tab_index.is_some_and(|t| t >= 0) && !aria_disabled;

        native || linked || tabbable
    }
}
