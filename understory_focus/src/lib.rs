// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Focus: focus containment for floating surfaces.
//!
//! While a menu, popover, or other floating surface is open, keyboard focus
//! should stay inside it. This crate provides the small amount of state that
//! takes:
//!
//! - A **focusable matcher** ([`ElementInfo::is_focusable`] and
//!   [`FOCUSABLE_SELECTOR`]) that decides which descendants take part.
//! - A **focus ring** ([`FocusRing`]) that records the first and last focusable
//!   descendants on open, wraps Tab/Shift+Tab at the ends, treats Escape as a
//!   close request, and hands focus back to its previous owner on close.
//! - A **host capability** ([`FocusHost`]) through which the ring reads and
//!   moves focus. The ring never reaches for a global focus singleton, so it
//!   runs unchanged against a DOM, a retained widget tree, or a test fixture.
//!
//! The ring knows nothing about geometry; placing the surface is the job of
//! `understory_menu_surface`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_focus::{ElementInfo, ElementKind, FocusHost, FocusRing};
//!
//! // Node 0 is the surface, 1..=3 are buttons inside it, 4 is outside.
//! struct Host {
//!     focused: Option<u32>,
//! }
//!
//! impl FocusHost for Host {
//!     type Node = u32;
//!     fn focused(&self) -> Option<u32> {
//!         self.focused
//!     }
//!     fn visit_descendants(&self, root: u32, visit: &mut dyn FnMut(u32, &ElementInfo)) {
//!         if root == 0 {
//!             for id in 1..=3 {
//!                 visit(id, &ElementInfo::new(ElementKind::Button));
//!             }
//!         }
//!     }
//!     fn contains(&self, ancestor: u32, node: u32) -> bool {
//!         ancestor == node || (ancestor == 0 && (1..=3).contains(&node))
//!     }
//!     fn can_focus(&self, _node: u32) -> bool {
//!         true
//!     }
//!     fn focus(&mut self, node: u32) {
//!         self.focused = Some(node);
//!     }
//! }
//!
//! let mut host = Host { focused: Some(4) };
//! let mut ring = FocusRing::new();
//! ring.activate(0, &host);
//!
//! // Tab on the last button wraps to the first.
//! host.focus(3);
//! assert!(ring.handle_tab_key(false, &mut host).handled);
//! assert_eq!(host.focused, Some(1));
//!
//! // Closing hands focus back to whoever had it before.
//! ring.deactivate(&mut host);
//! assert_eq!(host.focused, Some(4));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`ElementInfo`] and friends.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focusable;
mod ring;

pub use focusable::{ElementFlags, ElementInfo, ElementKind, FOCUSABLE_SELECTOR};
pub use ring::{EscapeResult, FocusHost, FocusRing, TabResult, collect_focusable};
