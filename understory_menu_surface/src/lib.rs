// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Menu Surface: anchored placement for floating surfaces.
//!
//! Menus, popovers, and dropdowns share one problem: draw a panel next to an
//! anchor without letting it fall off the screen, and keep keyboard focus
//! inside it while it is open. This crate splits that into two independent
//! pieces and a small controller that composes them.
//!
//! ## Placement
//!
//! [`compute_position`] takes a [`PositionRequest`] (anchor bounds, surface
//! size, window and body sizes, scroll offsets, requested [`Corner`],
//! [`Margin`], and the hoisted/fixed flags) and returns a [`Placement`]:
//!
//! - The requested corner is resolved against the writing direction
//!   ([`Corner::resolve`]).
//! - Each axis is placed independently. A candidate that leaves the bounds is
//!   flipped to the opposite side of the anchor once; if that also overflows,
//!   the coordinate is clamped.
//! - The resulting [`StylePatch`] sets exactly one of `left`/`right` and one
//!   of `top`/`bottom`, plus `max-height` only when the surface cannot fit.
//! - Hoisted surfaces are positioned against the document, so window scroll
//!   is folded in; fixed surfaces are viewport-relative and skip it.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_menu_surface::{Corner, PositionRequest, compute_position};
//!
//! let req = PositionRequest {
//!     anchor: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     surface_size: Size::new(300.0, 50.0),
//!     viewport: Size::new(200.0, 500.0),
//!     body: Size::new(200.0, 500.0),
//!     corner: Corner::BottomRight,
//!     ..PositionRequest::default()
//! };
//! let placement = compute_position(&req).unwrap();
//!
//! // Right-aligned would start far off the left edge; the flipped placement
//! // is still too wide, so it is clamped to the edge instead.
//! assert_eq!(placement.corner, Corner::BottomLeft);
//! assert_eq!(placement.style.left(), Some(0.0));
//! assert_eq!(placement.style.top(), Some(10.0));
//! ```
//!
//! ## Focus
//!
//! Focus containment lives in [`understory_focus`]. The placement code knows
//! nothing about focus and the focus ring knows nothing about geometry.
//!
//! ## Controller
//!
//! [`MenuSurface`] drives both through a single [`SurfaceHost`] adapter:
//! `open` places the surface and activates the focus ring, `close` releases
//! focus, and keydown/outside-click handlers turn Escape and stray clicks
//! into [`SurfaceEvent::CloseRequested`]. Configuration lives in
//! [`SurfaceConfig`].
//!
//! Float inputs are assumed to be finite (no NaNs).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for requests, placements, and
//!   configuration.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod corner;
mod error;
mod position;
mod surface;

pub use corner::{Corner, Margin};
pub use error::ConfigurationError;
pub use position::{
    HorizontalInset, OriginX, OriginY, Placement, PositionRequest, StylePatch, TransformOrigin,
    VerticalInset, compute_position,
};
pub use surface::{
    Key, KeyInput, KeyOutcome, MenuSurface, SurfaceConfig, SurfaceEvent, SurfaceHost,
};
