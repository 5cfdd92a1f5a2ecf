// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu-surface controller: placement and focus ring behind one host trait.

use kurbo::{Point, Rect, Size, Vec2};
use understory_focus::{FocusHost, FocusRing};

use crate::corner::{Corner, Margin};
use crate::error::ConfigurationError;
use crate::position::{Placement, PositionRequest, compute_position};

/// Everything a [`MenuSurface`] needs from its environment.
///
/// Geometry is read fresh on every open or reposition and never cached.
pub trait SurfaceHost: FocusHost {
    /// The surface element itself.
    fn surface_root(&self) -> Self::Node;

    /// Viewport-space bounds of the anchor element, if one is attached.
    fn anchor_bounds(&self) -> Option<Rect>;

    /// Intrinsic size of the surface.
    fn surface_size(&self) -> Size;

    /// Inner size of the window.
    fn window_size(&self) -> Size;

    /// Client size of the document body.
    fn body_size(&self) -> Size;

    /// Current window scroll offsets.
    fn window_scroll(&self) -> Vec2;

    /// Whether the surface is laid out right-to-left.
    fn is_rtl(&self) -> bool;

    /// Move the surface element to the end of the document body.
    fn hoist_to_body(&mut self);

    /// Apply inline position, max-height, and transform-origin styles.
    fn apply_placement(&mut self, placement: &Placement);

    /// Deliver a lifecycle event.
    fn notify(&mut self, event: SurfaceEvent);
}

/// Events a [`MenuSurface`] reports to its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface was opened and placed.
    Opened,
    /// The surface was closed.
    Closed,
    /// Escape or an outside click asked for the surface to close. The host
    /// decides whether to call [`MenuSurface::close`].
    CloseRequested,
}

/// Keys the surface reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Anything else.
    Other,
}

impl Key {
    /// Classify a DOM `KeyboardEvent` from its `key` and legacy `keyCode`.
    pub fn from_dom(key: &str, key_code: u32) -> Self {
        if key == "Escape" || key_code == 27 {
            Self::Escape
        } else if key == "Tab" || key_code == 9 {
            Self::Tab
        } else {
            Self::Other
        }
    }
}

/// A keydown as seen by the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// The key pressed.
    pub key: Key,
    /// Whether Shift was held.
    pub shift: bool,
}

/// What the host must do after [`MenuSurface::handle_keydown`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct KeyOutcome {
    /// Suppress the browser's default handling of the key.
    pub prevent_default: bool,
}

/// Placement configuration for a [`MenuSurface`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig {
    /// Anchor corner the surface attaches to.
    pub anchor_corner: Corner,
    /// Gap between anchor and surface.
    pub anchor_margin: Margin,
    /// The surface lives at the document root.
    pub hoisted: bool,
    /// The surface uses fixed positioning.
    pub fixed_position: bool,
    /// Explicit reference point, used instead of the anchor.
    pub absolute_position: Option<Point>,
}

/// A floating surface anchored to another element.
///
/// Opening places the surface and traps focus inside it; closing releases
/// focus. Escape and clicks outside the surface are reported as
/// [`SurfaceEvent::CloseRequested`] rather than closing directly.
#[derive(Clone, Debug)]
pub struct MenuSurface<K> {
    config: SurfaceConfig,
    ring: FocusRing<K>,
    placement: Option<Placement>,
}

impl<K> Default for MenuSurface<K> {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl<K> MenuSurface<K> {
    /// Create a closed surface.
    pub const fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            ring: FocusRing::new(),
            placement: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Mutable configuration; changes apply on the next open or reposition.
    pub fn config_mut(&mut self) -> &mut SurfaceConfig {
        &mut self.config
    }

    /// Whether the surface is open.
    pub fn is_open(&self) -> bool {
        self.placement.is_some()
    }

    /// Placement applied by the last open or reposition, while open.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Focus ring of the open surface.
    pub fn focus_ring(&self) -> &FocusRing<K> {
        &self.ring
    }

    /// Set the anchor corner the surface attaches to.
    pub fn set_anchor_corner(&mut self, corner: Corner) {
        self.config.anchor_corner = corner;
    }

    /// Set the gap between anchor and surface.
    pub fn set_anchor_margin(&mut self, margin: Margin) {
        self.config.anchor_margin = margin;
    }

    /// Switch fixed positioning on or off.
    pub fn set_fixed_position(&mut self, fixed: bool) {
        self.config.fixed_position = fixed;
    }

    /// Mark the surface as living at the document root.
    pub fn set_hoisted(&mut self, hoisted: bool) {
        self.config.hoisted = hoisted;
    }

    /// Position against a fixed point instead of the anchor. Implies hoisting.
    pub fn set_absolute_position(&mut self, x: f64, y: f64) {
        self.config.absolute_position = Some(Point::new(x, y));
        self.config.hoisted = true;
    }
}

impl<K: Copy + Eq + core::fmt::Debug> MenuSurface<K> {
    /// Move the surface to the document body to escape clipping ancestors.
    pub fn hoist_to_body<H: SurfaceHost<Node = K>>(&mut self, host: &mut H) {
        host.hoist_to_body();
        self.config.hoisted = true;
    }

    /// Snapshot the host's geometry into a request for this configuration.
    pub fn position_request<H: SurfaceHost<Node = K>>(&self, host: &H) -> PositionRequest {
        PositionRequest {
            anchor: host.anchor_bounds(),
            surface_size: host.surface_size(),
            viewport: host.window_size(),
            body: host.body_size(),
            scroll: host.window_scroll(),
            corner: self.config.anchor_corner,
            margin: self.config.anchor_margin,
            hoisted: self.config.hoisted,
            fixed_position: self.config.fixed_position,
            absolute_position: self.config.absolute_position,
            rtl: host.is_rtl(),
        }
    }

    /// Place the surface, trap focus in it, and report [`SurfaceEvent::Opened`].
    ///
    /// Opening an open surface only repositions it. On error the surface
    /// stays closed and the host is not touched.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] when there is nothing to place against.
    pub fn open<H: SurfaceHost<Node = K>>(
        &mut self,
        host: &mut H,
    ) -> Result<Placement, ConfigurationError> {
        let placement = self.place(host)?;
        if self.ring.is_active() {
            return Ok(placement);
        }
        let root = host.surface_root();
        self.ring.activate(root, &*host);
        log::trace!(target: "understory_menu_surface", "opened at {:?}", placement.corner);
        host.notify(SurfaceEvent::Opened);
        Ok(placement)
    }

    /// Recompute placement after a layout change. Does nothing while closed.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] when there is nothing to place against; the
    /// previous placement stays applied.
    pub fn reposition<H: SurfaceHost<Node = K>>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<Placement>, ConfigurationError> {
        if !self.is_open() {
            return Ok(None);
        }
        self.place(host).map(Some)
    }

    /// Release focus and report [`SurfaceEvent::Closed`]. Does nothing while
    /// closed.
    pub fn close<H: SurfaceHost<Node = K>>(&mut self, host: &mut H) {
        if !self.is_open() {
            return;
        }
        self.release(host);
        log::trace!(target: "understory_menu_surface", "closed");
        host.notify(SurfaceEvent::Closed);
    }

    /// Tear down without emitting events, for example when the surface is
    /// removed from the document while open. Focus is still released.
    pub fn destroy<H: SurfaceHost<Node = K>>(&mut self, host: &mut H) {
        self.release(host);
    }

    /// React to a keydown inside the surface. Escape is ignored while closed.
    pub fn handle_keydown<H: SurfaceHost<Node = K>>(
        &mut self,
        input: KeyInput,
        host: &mut H,
    ) -> KeyOutcome {
        match input.key {
            Key::Escape => {
                if self.is_open() && self.ring.handle_escape_key().should_close {
                    host.notify(SurfaceEvent::CloseRequested);
                }
                KeyOutcome::default()
            }
            Key::Tab => KeyOutcome {
                prevent_default: self.ring.handle_tab_key(input.shift, host).handled,
            },
            Key::Other => KeyOutcome::default(),
        }
    }

    /// React to a click anywhere in the document while open.
    ///
    /// Returns `true` when the click landed outside the surface and a close
    /// was requested.
    pub fn handle_body_click<H: SurfaceHost<Node = K>>(
        &mut self,
        target: K,
        host: &mut H,
    ) -> bool {
        if !self.is_open() || host.contains(host.surface_root(), target) {
            return false;
        }
        host.notify(SurfaceEvent::CloseRequested);
        true
    }

    fn place<H: SurfaceHost<Node = K>>(
        &mut self,
        host: &mut H,
    ) -> Result<Placement, ConfigurationError> {
        let placement = compute_position(&self.position_request(&*host))?;
        host.apply_placement(&placement);
        self.placement = Some(placement);
        Ok(placement)
    }

    fn release<H: SurfaceHost<Node = K>>(&mut self, host: &mut H) {
        self.ring.deactivate(host);
        self.placement = None;
    }
}
