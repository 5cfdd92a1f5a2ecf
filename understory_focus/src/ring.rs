// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus ring: tab wrap and focus restore for an open surface.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::focusable::ElementInfo;

/// Read and write access to the host's focus state.
///
/// The ring never touches a global "active element" directly; everything it
/// needs goes through this trait so it can run against a browser DOM, a
/// retained widget tree, or a test fixture.
pub trait FocusHost {
    /// Node handle.
    type Node: Copy + Eq + Debug;

    /// The node that currently holds focus, if any.
    fn focused(&self) -> Option<Self::Node>;

    /// Visit every descendant of `root` (excluding `root`) in document order.
    fn visit_descendants(
        &self,
        root: Self::Node,
        visit: &mut dyn FnMut(Self::Node, &ElementInfo),
    );

    /// Whether `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool;

    /// Whether `node` is still attached and able to take focus.
    fn can_focus(&self, node: Self::Node) -> bool;

    /// Move focus to `node`.
    fn focus(&mut self, node: Self::Node);
}

/// Collect the focusable descendants of `root` in document order.
pub fn collect_focusable<H: FocusHost>(host: &H, root: H::Node) -> Vec<H::Node> {
    let mut out = Vec::new();
    host.visit_descendants(root, &mut |node, info| {
        if info.is_focusable() {
            out.push(node);
        }
    });
    out
}

/// Outcome of [`FocusRing::handle_tab_key`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct TabResult {
    /// Focus was wrapped; the caller must suppress the default tab behavior.
    pub handled: bool,
}

/// Outcome of [`FocusRing::handle_escape_key`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct EscapeResult {
    /// The surface should be asked to close.
    pub should_close: bool,
}

/// Focus containment state for one open surface.
///
/// The ring remembers the first and last focusable descendants of the surface
/// and the node that was focused before the surface opened. All of it is
/// captured by [`activate`](Self::activate) and dropped by
/// [`deactivate`](Self::deactivate); nothing carries over between open cycles.
#[derive(Clone, Debug)]
pub struct FocusRing<K> {
    root: Option<K>,
    first: Option<K>,
    last: Option<K>,
    previously_focused: Option<K>,
}

impl<K> Default for FocusRing<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FocusRing<K> {
    /// Create an inactive ring.
    pub const fn new() -> Self {
        Self {
            root: None,
            first: None,
            last: None,
            previously_focused: None,
        }
    }
}

impl<K: Copy + Eq + Debug> FocusRing<K> {
    /// Whether [`activate`](Self::activate) has run without a matching
    /// [`deactivate`](Self::deactivate).
    pub fn is_active(&self) -> bool {
        self.root.is_some()
    }

    /// Whether the ring has at least one focusable node to wrap between.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// First focusable descendant captured at activation.
    pub fn first(&self) -> Option<K> {
        self.first
    }

    /// Last focusable descendant captured at activation.
    pub fn last(&self) -> Option<K> {
        self.last
    }

    /// Node that held focus when the ring was activated.
    pub fn previously_focused(&self) -> Option<K> {
        self.previously_focused
    }

    /// Capture the focus ring of `root`.
    ///
    /// Any state from an earlier activation is discarded first. A root without
    /// focusable descendants yields an empty ring, which never wraps.
    pub fn activate<H: FocusHost<Node = K>>(&mut self, root: K, host: &H) {
        self.clear();

        let mut first = None;
        let mut last = None;
        host.visit_descendants(root, &mut |node, info| {
            if info.is_focusable() {
                if first.is_none() {
                    first = Some(node);
                }
                last = Some(node);
            }
        });

        self.root = Some(root);
        self.first = first;
        self.last = last;
        self.previously_focused = host.focused();
        log::trace!(
            target: "understory_focus",
            "focus ring activated: root={root:?} first={first:?} last={last:?} previous={:?}",
            self.previously_focused
        );
    }

    /// Release the ring.
    ///
    /// When focus is still inside the surface it goes back to the node that
    /// held it before activation, provided that node can still take focus.
    /// Focus that already left the surface is left where it is.
    pub fn deactivate<H: FocusHost<Node = K>>(&mut self, host: &mut H) {
        if let Some(root) = self.root {
            let focus_inside = host.focused().is_some_and(|f| host.contains(root, f));
            match self.previously_focused {
                Some(prev) if focus_inside && host.can_focus(prev) => {
                    log::trace!(target: "understory_focus", "restoring focus to {prev:?}");
                    host.focus(prev);
                }
                _ => {}
            }
        }
        self.clear();
    }

    /// Wrap focus at the ends of the ring.
    ///
    /// Tab on the last node moves to the first, Shift+Tab on the first node
    /// moves to the last. Everything else is left to the host's default
    /// traversal.
    pub fn handle_tab_key<H: FocusHost<Node = K>>(
        &self,
        shift: bool,
        host: &mut H,
    ) -> TabResult {
        let (Some(first), Some(last)) = (self.first, self.last) else {
            return TabResult { handled: false };
        };
        let Some(focused) = host.focused() else {
            return TabResult { handled: false };
        };

        let target = if !shift && focused == last {
            first
        } else if shift && focused == first {
            last
        } else {
            return TabResult { handled: false };
        };
        host.focus(target);
        TabResult { handled: true }
    }

    /// Escape always asks for the surface to close; whether it actually
    /// closes is up to the caller.
    pub fn handle_escape_key(&self) -> EscapeResult {
        EscapeResult { should_close: true }
    }

    fn clear(&mut self) {
        self.root = None;
        self.first = None;
        self.last = None;
        self.previously_focused = None;
    }
}
