// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor corners and margins.

use kurbo::Insets;

/// Which corner of the anchor the surface attaches to.
///
/// `Top*` corners place the surface above the anchor, `Bottom*` corners below
/// it. `Left` aligns the surface's left edge with the anchor's left edge,
/// `Right` aligns right edges. `Start` corners follow the writing direction and
/// must be [resolved](Self::resolve) before they name a physical side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    /// Above the anchor, left edges aligned.
    TopLeft,
    /// Above the anchor, right edges aligned.
    TopRight,
    /// Below the anchor, left edges aligned.
    BottomLeft,
    /// Below the anchor, right edges aligned.
    BottomRight,
    /// Above the anchor, aligned on the inline-start side.
    #[default]
    TopStart,
    /// Below the anchor, aligned on the inline-start side.
    BottomStart,
}

impl Corner {
    /// Map `*Start` corners to a physical side: left in LTR, right in RTL.
    pub const fn resolve(self, rtl: bool) -> Self {
        match (self, rtl) {
            (Self::TopStart, false) => Self::TopLeft,
            (Self::TopStart, true) => Self::TopRight,
            (Self::BottomStart, false) => Self::BottomLeft,
            (Self::BottomStart, true) => Self::BottomRight,
            (other, _) => other,
        }
    }

    /// Whether the surface sits below the anchor.
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight | Self::BottomStart)
    }

    /// Whether the surface is right-aligned once resolved against `rtl`.
    pub const fn is_right(self, rtl: bool) -> bool {
        matches!(self.resolve(rtl), Self::TopRight | Self::BottomRight)
    }

    /// Swap left and right. `Start` corners are resolved as LTR first.
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        match self.resolve(false) {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            _ => Self::BottomLeft,
        }
    }

    /// Swap top and bottom, keeping the horizontal alignment.
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
            Self::TopStart => Self::BottomStart,
            Self::BottomStart => Self::TopStart,
        }
    }

    pub(crate) const fn from_sides(bottom: bool, right: bool) -> Self {
        match (bottom, right) {
            (false, false) => Self::TopLeft,
            (false, true) => Self::TopRight,
            (true, false) => Self::BottomLeft,
            (true, true) => Self::BottomRight,
        }
    }
}

/// Distance kept between the anchor and the surface, per side.
///
/// Only the margins on the sides the surface attaches to are used: a
/// `BottomLeft` surface moves down by `bottom` and right by `left`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    /// Gap above the anchor, used by `Top*` corners.
    pub top: f64,
    /// Inset from the anchor's right edge, used by right-aligned corners.
    pub right: f64,
    /// Gap below the anchor, used by `Bottom*` corners.
    pub bottom: f64,
    /// Inset from the anchor's left edge, used by left-aligned corners.
    pub left: f64,
}

impl Margin {
    /// No margin on any side.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same margin on every side.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns a copy with the top margin replaced.
    #[must_use]
    pub const fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Returns a copy with the right margin replaced.
    #[must_use]
    pub const fn with_right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }

    /// Returns a copy with the bottom margin replaced.
    #[must_use]
    pub const fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    /// Returns a copy with the left margin replaced.
    #[must_use]
    pub const fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }
}

impl From<Insets> for Margin {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.y0,
            right: insets.x1,
            bottom: insets.y1,
            left: insets.x0,
        }
    }
}
