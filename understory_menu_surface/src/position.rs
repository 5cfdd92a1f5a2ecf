// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface placement: corner resolution, overflow flipping, and clamping.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use crate::corner::{Corner, Margin};
use crate::error::ConfigurationError;

/// Anchor-to-surface width ratio above which the transform origin is centered.
const CENTER_ORIGIN_WIDTH_RATIO: f64 = 0.67;

/// Everything needed to place a surface once.
///
/// Built fresh for every open or layout change; nothing here is cached
/// between calls. All rectangles and sizes are in viewport coordinates.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRequest {
    /// Bounds of the anchor element, if there is one.
    pub anchor: Option<Rect>,
    /// Intrinsic size of the surface.
    pub surface_size: Size,
    /// Size of the window (viewport).
    pub viewport: Size,
    /// Size of the document body.
    pub body: Size,
    /// Current window scroll offsets.
    pub scroll: Vec2,
    /// Requested anchor corner.
    pub corner: Corner,
    /// Gap between anchor and surface.
    pub margin: Margin,
    /// The surface has been moved to the document root.
    pub hoisted: bool,
    /// The surface uses fixed positioning.
    pub fixed_position: bool,
    /// Explicit reference point. Replaces the anchor when present.
    pub absolute_position: Option<Point>,
    /// Right-to-left writing direction.
    pub rtl: bool,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            anchor: None,
            surface_size: Size::ZERO,
            viewport: Size::ZERO,
            body: Size::ZERO,
            scroll: Vec2::ZERO,
            corner: Corner::default(),
            margin: Margin::ZERO,
            hoisted: false,
            fixed_position: false,
            absolute_position: None,
            rtl: false,
        }
    }
}

/// Horizontal offset of the surface: from the left or from the right edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalInset {
    /// CSS `left`, in pixels.
    Left(f64),
    /// CSS `right`, in pixels.
    Right(f64),
}

/// Vertical offset of the surface: from the top or from the bottom edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalInset {
    /// CSS `top`, in pixels.
    Top(f64),
    /// CSS `bottom`, in pixels.
    Bottom(f64),
}

/// Inline positioning styles for the surface.
///
/// Exactly one offset is set per axis, so layout is never over-constrained.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylePatch {
    /// Horizontal offset.
    pub horizontal: HorizontalInset,
    /// Vertical offset.
    pub vertical: VerticalInset,
    /// Height cap, present only when the surface would not otherwise fit.
    pub max_height: Option<f64>,
}

impl StylePatch {
    /// CSS `left`, if set.
    pub fn left(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalInset::Left(v) => Some(v),
            HorizontalInset::Right(_) => None,
        }
    }

    /// CSS `right`, if set.
    pub fn right(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalInset::Right(v) => Some(v),
            HorizontalInset::Left(_) => None,
        }
    }

    /// CSS `top`, if set.
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            VerticalInset::Top(v) => Some(v),
            VerticalInset::Bottom(_) => None,
        }
    }

    /// CSS `bottom`, if set.
    pub fn bottom(&self) -> Option<f64> {
        match self.vertical {
            VerticalInset::Bottom(v) => Some(v),
            VerticalInset::Top(_) => None,
        }
    }

    /// The rectangle a surface of `surface` size occupies inside a containing
    /// block of `container` size when these styles are applied.
    pub fn implied_rect(&self, surface: Size, container: Size) -> Rect {
        let height = self
            .max_height
            .map_or(surface.height, |cap| surface.height.min(cap));
        let x = match self.horizontal {
            HorizontalInset::Left(left) => left,
            HorizontalInset::Right(right) => container.width - right - surface.width,
        };
        let y = match self.vertical {
            VerticalInset::Top(top) => top,
            VerticalInset::Bottom(bottom) => container.height - bottom - height,
        };
        Rect::from_origin_size((x, y), (surface.width, height))
    }
}

/// Horizontal component of a [`TransformOrigin`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginX {
    /// `left`
    Left,
    /// `center`
    Center,
    /// `right`
    Right,
}

/// Vertical component of a [`TransformOrigin`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginY {
    /// `top`
    Top,
    /// `bottom`
    Bottom,
}

/// Point the open/close animation scales from: the surface corner that
/// touches the anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOrigin {
    /// Horizontal keyword.
    pub x: OriginX,
    /// Vertical keyword.
    pub y: OriginY,
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self.x {
            OriginX::Left => "left",
            OriginX::Center => "center",
            OriginX::Right => "right",
        };
        let y = match self.y {
            OriginY::Top => "top",
            OriginY::Bottom => "bottom",
        };
        write!(f, "{x} {y}")
    }
}

/// Result of [`compute_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Final physical corner, after direction resolution and any flips.
    pub corner: Corner,
    /// Inline styles to apply.
    pub style: StylePatch,
    /// Transform origin matching [`corner`](Self::corner).
    pub transform_origin: TransformOrigin,
}

/// Which way the surface extends from its reference edge on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Grow {
    /// Toward larger coordinates: left-aligned, or below the anchor.
    Forward,
    /// Toward smaller coordinates: right-aligned, or above the anchor.
    Backward,
}

impl Grow {
    fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// One axis of the placement problem.
#[derive(Copy, Clone, Debug)]
struct Axis {
    /// Reference edge for [`Grow::Forward`].
    forward_edge: f64,
    /// Reference edge for [`Grow::Backward`].
    backward_edge: f64,
    forward_margin: f64,
    backward_margin: f64,
    extent: f64,
    bound: f64,
}

impl Axis {
    fn origin(&self, grow: Grow) -> f64 {
        match grow {
            Grow::Forward => self.forward_edge + self.forward_margin,
            Grow::Backward => self.backward_edge - self.extent - self.backward_margin,
        }
    }

    fn fits(&self, origin: f64) -> bool {
        origin >= 0.0 && origin + self.extent <= self.bound
    }

    /// Try `requested`, then its opposite once, then clamp the opposite.
    fn place(&self, requested: Grow, axis: &str) -> (Grow, f64) {
        let origin = self.origin(requested);
        if self.fits(origin) {
            return (requested, origin);
        }
        let flipped = requested.flip();
        let origin = self.origin(flipped);
        if self.fits(origin) {
            log::debug!(
                target: "understory_menu_surface",
                "{axis} overflow: flipped {requested:?} -> {flipped:?}"
            );
            return (flipped, origin);
        }
        let max = (self.bound - self.extent).max(0.0);
        let clamped = origin.clamp(0.0, max);
        log::debug!(
            target: "understory_menu_surface",
            "{axis} overflow on both sides: clamped {origin} -> {clamped}"
        );
        (flipped, clamped)
    }
}

/// Compute where to draw a surface.
///
/// The requested corner is resolved against the writing direction and a
/// candidate position is computed from the reference rectangle. On each axis
/// independently, a candidate that leaves the bounds is flipped to the
/// opposite side once; if that still overflows, the coordinate is clamped.
/// Bounds are the window when the surface is hoisted and the body otherwise.
/// `fixed_position` only changes how scroll is applied.
///
/// Hoisted, non-fixed surfaces are positioned against the document, so the
/// window scroll is added to `left`/`top` and subtracted from
/// `right`/`bottom`.
///
/// Each call starts over from `req.corner`; flips never accumulate.
///
/// # Errors
///
/// [`ConfigurationError::MissingReference`] when there is no anchor, no
/// absolute position, and the surface is not hoisted.
pub fn compute_position(req: &PositionRequest) -> Result<Placement, ConfigurationError> {
    let reference = reference_rect(req)?;
    let requested = req.corner.resolve(req.rtl);
    let bounds = if req.hoisted {
        req.viewport
    } else {
        req.body
    };
    let size = req.surface_size;
    let margin = req.margin;

    let horizontal = Axis {
        forward_edge: reference.x0,
        backward_edge: reference.x1,
        forward_margin: margin.left,
        backward_margin: margin.right,
        extent: size.width,
        bound: bounds.width,
    };
    let vertical = Axis {
        forward_edge: reference.y1,
        backward_edge: reference.y0,
        forward_margin: margin.bottom,
        backward_margin: margin.top,
        extent: size.height,
        bound: bounds.height,
    };

    let requested_x = if requested.is_right(req.rtl) {
        Grow::Backward
    } else {
        Grow::Forward
    };
    let requested_y = if requested.is_bottom() {
        Grow::Forward
    } else {
        Grow::Backward
    };
    let (grow_x, x) = horizontal.place(requested_x, "horizontal");
    let (grow_y, y) = vertical.place(requested_y, "vertical");
    let corner = Corner::from_sides(grow_y == Grow::Forward, grow_x == Grow::Backward);

    let max_height = if y + size.height > bounds.height {
        let side_margin = match grow_y {
            Grow::Forward => margin.bottom,
            Grow::Backward => margin.top,
        };
        Some((bounds.height - y - side_margin).max(0.0))
    } else {
        None
    };
    let height = max_height.map_or(size.height, |cap| size.height.min(cap));

    let scroll = if req.hoisted && !req.fixed_position {
        req.scroll
    } else {
        Vec2::ZERO
    };
    let horizontal_inset = match grow_x {
        Grow::Forward => HorizontalInset::Left(x + scroll.x),
        Grow::Backward => HorizontalInset::Right(bounds.width - x - size.width - scroll.x),
    };
    let vertical_inset = match grow_y {
        Grow::Forward => VerticalInset::Top(y + scroll.y),
        Grow::Backward => VerticalInset::Bottom(bounds.height - y - height - scroll.y),
    };

    Ok(Placement {
        corner,
        style: StylePatch {
            horizontal: horizontal_inset,
            vertical: vertical_inset,
            max_height,
        },
        transform_origin: transform_origin(corner, reference, size),
    })
}

fn reference_rect(req: &PositionRequest) -> Result<Rect, ConfigurationError> {
    if let Some(p) = req.absolute_position {
        return Ok(Rect::from_points(p, p));
    }
    if let Some(anchor) = req.anchor {
        return Ok(anchor);
    }
    if req.hoisted {
        return Ok(Rect::ZERO);
    }
    log::debug!(
        target: "understory_menu_surface",
        "cannot place surface: no anchor, no absolute position, not hoisted"
    );
    Err(ConfigurationError::MissingReference)
}

fn transform_origin(corner: Corner, reference: Rect, surface: Size) -> TransformOrigin {
    let y = if corner.is_bottom() {
        OriginY::Top
    } else {
        OriginY::Bottom
    };
    let x = if surface.width > 0.0
        && reference.width() / surface.width > CENTER_ORIGIN_WIDTH_RATIO
    {
        OriginX::Center
    } else if corner.is_right(false) {
        OriginX::Right
    } else {
        OriginX::Left
    };
    TransformOrigin { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn request(anchor: Rect, surface: Size, viewport: Size, corner: Corner) -> PositionRequest {
        PositionRequest {
            anchor: Some(anchor),
            surface_size: surface,
            viewport,
            body: viewport,
            corner,
            ..PositionRequest::default()
        }
    }

    fn place(req: &PositionRequest) -> Placement {
        compute_position(req).unwrap()
    }

    #[test]
    fn bottom_left_hangs_below_anchor() {
        let req = request(
            Rect::new(20.0, 30.0, 60.0, 50.0),
            Size::new(100.0, 80.0),
            Size::new(400.0, 400.0),
            Corner::BottomLeft,
        );
        let p = place(&req);
        assert_eq!(p.corner, Corner::BottomLeft);
        assert_eq!(p.style.left(), Some(20.0));
        assert_eq!(p.style.top(), Some(50.0));
        assert_eq!(p.style.max_height, None);
    }

    #[test]
    fn top_right_sits_above_with_right_edges_aligned() {
        let req = request(
            Rect::new(200.0, 200.0, 260.0, 220.0),
            Size::new(100.0, 80.0),
            Size::new(400.0, 400.0),
            Corner::TopRight,
        );
        let p = place(&req);
        assert_eq!(p.corner, Corner::TopRight);
        // Surface spans x 160..260, y 120..200.
        assert_eq!(p.style.right(), Some(140.0));
        assert_eq!(p.style.bottom(), Some(200.0));
        assert_eq!(
            p.style.implied_rect(req.surface_size, req.viewport),
            Rect::new(160.0, 120.0, 260.0, 200.0)
        );
    }

    #[test]
    fn margins_push_away_from_anchor() {
        let mut req = request(
            Rect::new(100.0, 100.0, 140.0, 120.0),
            Size::new(50.0, 50.0),
            Size::new(400.0, 400.0),
            Corner::BottomLeft,
        );
        req.margin = Margin::uniform(0.0).with_left(5.0).with_bottom(8.0);
        let p = place(&req);
        assert_eq!(p.style.left(), Some(105.0));
        assert_eq!(p.style.top(), Some(128.0));

        req.corner = Corner::TopRight;
        req.margin = Margin::uniform(0.0).with_right(5.0).with_top(8.0);
        let p = place(&req);
        let r = p.style.implied_rect(req.surface_size, req.viewport);
        assert_eq!(r, Rect::new(85.0, 42.0, 135.0, 92.0));
    }

    #[test]
    fn overflow_flip_then_clamp() {
        // Right-aligned would start at x = 10 - 300; left-aligned is still too
        // wide for the viewport, so the flipped placement is clamped to 0.
        let req = request(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Size::new(300.0, 50.0),
            Size::new(200.0, 500.0),
            Corner::BottomRight,
        );
        let p = place(&req);
        assert_eq!(p.corner, Corner::BottomLeft);
        assert_eq!(p.style.left(), Some(0.0));
        assert_eq!(p.style.right(), None);
        assert_eq!(p.style.top(), Some(10.0));
    }

    #[test]
    fn flips_vertically_near_the_bottom_edge() {
        let req = request(
            Rect::new(10.0, 360.0, 50.0, 380.0),
            Size::new(100.0, 80.0),
            Size::new(400.0, 400.0),
            Corner::BottomLeft,
        );
        let p = place(&req);
        assert_eq!(p.corner, Corner::TopLeft);
        assert_eq!(
            p.style.implied_rect(req.surface_size, req.viewport),
            Rect::new(10.0, 280.0, 110.0, 360.0)
        );
        assert_eq!(p.transform_origin.y, OriginY::Bottom);
    }

    #[test]
    fn axes_flip_independently() {
        // Near the bottom-right corner: both axes overflow and both flip.
        let req = request(
            Rect::new(350.0, 370.0, 390.0, 390.0),
            Size::new(100.0, 80.0),
            Size::new(400.0, 400.0),
            Corner::BottomLeft,
        );
        assert_eq!(place(&req).corner, Corner::TopRight);

        // Only the horizontal axis overflows.
        let req = request(
            Rect::new(350.0, 10.0, 390.0, 30.0),
            Size::new(100.0, 80.0),
            Size::new(400.0, 400.0),
            Corner::BottomLeft,
        );
        assert_eq!(place(&req).corner, Corner::BottomRight);
    }

    #[test]
    fn clamps_to_far_edge_when_neither_side_fits() {
        // Anchor mid-screen, surface fits the viewport but not on either side.
        let req = request(
            Rect::new(80.0, 10.0, 90.0, 20.0),
            Size::new(150.0, 20.0),
            Size::new(200.0, 400.0),
            Corner::BottomLeft,
        );
        let p = place(&req);
        assert_eq!(p.corner, Corner::BottomRight);
        let r = p.style.implied_rect(req.surface_size, req.viewport);
        assert_eq!(r.x0, 0.0);
        assert!(r.x1 <= 200.0);
    }

    #[test]
    fn max_height_only_when_too_tall() {
        let mut req = request(
            Rect::new(10.0, 10.0, 50.0, 30.0),
            Size::new(100.0, 500.0),
            Size::new(400.0, 400.0),
            Corner::TopLeft,
        );
        req.margin = Margin::ZERO.with_bottom(16.0);
        let p = place(&req);
        // Too tall for either side: flipped below the anchor, then clamped.
        assert_eq!(p.corner, Corner::BottomLeft);
        assert_eq!(p.style.top(), Some(0.0));
        assert_eq!(p.style.max_height, Some(384.0));
        let r = p.style.implied_rect(req.surface_size, req.viewport);
        assert!(r.y1 <= 400.0);

        req.surface_size = Size::new(100.0, 50.0);
        assert_eq!(place(&req).style.max_height, None);
    }

    #[test]
    fn capped_top_corner_uses_capped_height_for_bottom() {
        let mut req = request(
            Rect::new(10.0, 10.0, 50.0, 30.0),
            Size::new(100.0, 500.0),
            Size::new(400.0, 400.0),
            Corner::TopLeft,
        );
        req.margin = Margin::ZERO.with_top(10.0);
        let p = place(&req);
        // Neither side fits; the flipped (bottom) placement is clamped.
        assert_eq!(p.corner, Corner::BottomLeft);
        assert_eq!(p.style.max_height, Some(400.0));

        req.anchor = Some(Rect::new(10.0, 395.0, 50.0, 399.0));
        req.corner = Corner::BottomLeft;
        req.margin = Margin::ZERO.with_top(10.0);
        let p = place(&req);
        assert_eq!(p.corner, Corner::TopLeft);
        assert_eq!(p.style.max_height, Some(390.0));
        assert_eq!(p.style.bottom(), Some(10.0));
        let r = p.style.implied_rect(req.surface_size, req.viewport);
        assert_eq!(r, Rect::new(10.0, 0.0, 110.0, 390.0));
    }

    #[test]
    fn fits_inside_viewport_for_inside_anchors() {
        let viewport = Size::new(320.0, 240.0);
        let surface = Size::new(90.0, 70.0);
        let corners = [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
            Corner::TopStart,
            Corner::BottomStart,
        ];
        let mut y = 0.0;
        while y + 12.0 <= viewport.height {
            let mut x = 0.0;
            while x + 30.0 <= viewport.width {
                for corner in corners {
                    for rtl in [false, true] {
                        let mut req = request(
                            Rect::new(x, y, x + 30.0, y + 12.0),
                            surface,
                            viewport,
                            corner,
                        );
                        req.rtl = rtl;
                        let r = place(&req).style.implied_rect(surface, viewport);
                        assert!(
                            r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= 320.0 && r.y1 <= 240.0,
                            "{corner:?} rtl={rtl} at ({x}, {y}) escaped: {r:?}"
                        );
                    }
                }
                x += 17.0;
            }
            y += 13.0;
        }
    }

    #[test]
    fn exactly_one_inset_per_axis() {
        let req = request(
            Rect::new(-50.0, -20.0, -10.0, 0.0),
            Size::new(600.0, 600.0),
            Size::new(200.0, 200.0),
            Corner::TopStart,
        );
        let p = place(&req);
        assert!(p.style.left().is_some() != p.style.right().is_some());
        assert!(p.style.top().is_some() != p.style.bottom().is_some());
    }

    #[test]
    fn idempotent_for_identical_requests() {
        let req = request(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Size::new(300.0, 50.0),
            Size::new(200.0, 500.0),
            Corner::BottomRight,
        );
        let a = place(&req);
        let b = place(&req);
        assert_eq!(a, b);
        assert_eq!(a.style.left().map(f64::to_bits), b.style.left().map(f64::to_bits));
    }

    #[test]
    fn rtl_start_matches_explicit_right() {
        let mut start = request(
            Rect::new(100.0, 100.0, 140.0, 120.0),
            Size::new(60.0, 40.0),
            Size::new(400.0, 400.0),
            Corner::TopStart,
        );
        start.rtl = true;
        let mut right = start.clone();
        right.corner = Corner::TopRight;
        assert_eq!(place(&start), place(&right));

        start.rtl = false;
        right.corner = Corner::TopLeft;
        right.rtl = false;
        assert_eq!(place(&start), place(&right));
    }

    #[test]
    fn hoisted_uses_window_and_scroll() {
        let req = PositionRequest {
            anchor: Some(Rect::new(10.0, 10.0, 50.0, 30.0)),
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 300.0),
            body: Size::new(50.0, 50.0),
            scroll: Vec2::new(5.0, 200.0),
            corner: Corner::BottomLeft,
            hoisted: true,
            ..PositionRequest::default()
        };
        let p = place(&req);
        assert_eq!(p.corner, Corner::BottomLeft);
        assert_eq!(p.style.left(), Some(15.0));
        assert_eq!(p.style.top(), Some(230.0));

        let mut flipped = req.clone();
        flipped.corner = Corner::TopRight;
        flipped.anchor = Some(Rect::new(300.0, 200.0, 350.0, 220.0));
        let p = place(&flipped);
        assert_eq!(p.corner, Corner::TopRight);
        // Surface spans x 250..350, y 120..200 in the viewport.
        assert_eq!(p.style.right(), Some(45.0));
        assert_eq!(p.style.bottom(), Some(-100.0));
    }

    #[test]
    fn fixed_skips_scroll() {
        let req = PositionRequest {
            anchor: Some(Rect::new(10.0, 10.0, 50.0, 30.0)),
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 300.0),
            body: Size::new(50.0, 50.0),
            scroll: Vec2::new(5.0, 200.0),
            corner: Corner::BottomLeft,
            hoisted: true,
            fixed_position: true,
            ..PositionRequest::default()
        };
        let p = place(&req);
        assert_eq!(p.style.left(), Some(10.0));
        assert_eq!(p.style.top(), Some(30.0));
    }

    #[test]
    fn non_hoisted_clamps_against_body() {
        let req = PositionRequest {
            anchor: Some(Rect::new(10.0, 10.0, 50.0, 30.0)),
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(1000.0, 1000.0),
            body: Size::new(100.0, 200.0),
            scroll: Vec2::new(5.0, 200.0),
            corner: Corner::BottomLeft,
            ..PositionRequest::default()
        };
        let p = place(&req);
        // x 10..110 overflows the 100px body; right-aligned would start at -50.
        assert_eq!(p.corner, Corner::BottomRight);
        assert_eq!(p.style.right(), Some(0.0));
        assert_eq!(p.style.top(), Some(30.0));
    }

    #[test]
    fn fixed_non_hoisted_clamps_against_body() {
        let req = PositionRequest {
            anchor: Some(Rect::new(10.0, 10.0, 50.0, 30.0)),
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(1000.0, 1000.0),
            body: Size::new(100.0, 200.0),
            scroll: Vec2::new(5.0, 200.0),
            corner: Corner::BottomLeft,
            fixed_position: true,
            ..PositionRequest::default()
        };
        let p = place(&req);
        // Fixed alone does not widen the bounds to the window.
        assert_eq!(p.corner, Corner::BottomRight);
        assert_eq!(p.style.right(), Some(0.0));
        assert_eq!(p.style.top(), Some(30.0));
    }

    #[test]
    fn absolute_position_is_a_degenerate_anchor() {
        let req = PositionRequest {
            anchor: Some(Rect::new(0.0, 0.0, 300.0, 300.0)),
            absolute_position: Some(Point::new(40.0, 60.0)),
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 400.0),
            body: Size::new(400.0, 400.0),
            corner: Corner::BottomLeft,
            hoisted: true,
            ..PositionRequest::default()
        };
        let p = place(&req);
        assert_eq!(p.style.left(), Some(40.0));
        assert_eq!(p.style.top(), Some(60.0));
        assert_eq!(p.transform_origin.to_string(), "left top");
    }

    #[test]
    fn hoisted_without_reference_uses_origin() {
        let req = PositionRequest {
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 400.0),
            corner: Corner::BottomLeft,
            hoisted: true,
            ..PositionRequest::default()
        };
        let p = place(&req);
        assert_eq!(p.style.left(), Some(0.0));
        assert_eq!(p.style.top(), Some(0.0));
    }

    #[test]
    fn missing_reference_is_a_configuration_error() {
        let req = PositionRequest {
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 400.0),
            body: Size::new(400.0, 400.0),
            ..PositionRequest::default()
        };
        assert_eq!(
            compute_position(&req),
            Err(ConfigurationError::MissingReference)
        );
    }

    #[test]
    fn fixed_without_reference_is_a_configuration_error() {
        let req = PositionRequest {
            surface_size: Size::new(100.0, 80.0),
            viewport: Size::new(400.0, 400.0),
            body: Size::new(400.0, 400.0),
            fixed_position: true,
            ..PositionRequest::default()
        };
        assert_eq!(
            compute_position(&req),
            Err(ConfigurationError::MissingReference)
        );
    }

    #[test]
    fn zero_size_anchor_is_valid() {
        let req = request(
            Rect::new(100.0, 100.0, 100.0, 100.0),
            Size::new(20.0, 20.0),
            Size::new(400.0, 400.0),
            Corner::TopLeft,
        );
        let p = place(&req);
        assert_eq!(p.style.left(), Some(100.0));
        assert_eq!(p.style.bottom(), Some(300.0));
    }

    #[test]
    fn wide_anchor_centers_transform_origin() {
        let req = request(
            Rect::new(0.0, 0.0, 90.0, 20.0),
            Size::new(100.0, 50.0),
            Size::new(400.0, 400.0),
            Corner::BottomRight,
        );
        let p = place(&req);
        assert_eq!(p.transform_origin.x, OriginX::Center);
        assert_eq!(p.transform_origin.to_string(), "center top");
    }
}
