//! Pixel geometry: points, sizes, rectangles, and edge insets.
//!
//! Coordinates are `f32` pixels with the origin at the top-left and the
//! y-axis growing downward. Rectangles are allowed to carry zero or negative
//! extents; over-constrained layouts produce them and callers are expected
//! to treat them as degenerate rather than as errors.

use serde::{Deserialize, Serialize};

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair. Either extent may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the size has no positive area.
    #[inline]
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    #[must_use]
    pub const fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Smallest x edge, taking negative widths into account.
    #[inline]
    #[must_use]
    pub fn min_x(self) -> f32 {
        self.x.min(self.x + self.width)
    }

    #[inline]
    #[must_use]
    pub fn min_y(self) -> f32 {
        self.y.min(self.y + self.height)
    }

    #[inline]
    #[must_use]
    pub fn max_x(self) -> f32 {
        self.x.max(self.x + self.width)
    }

    #[inline]
    #[must_use]
    pub fn max_y(self) -> f32 {
        self.y.max(self.y + self.height)
    }

    /// True when the rect has no positive area.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.size().is_degenerate()
    }

    /// The same region expressed with non-negative extents.
    #[must_use]
    pub fn standardized(self) -> Self {
        Self {
            x: self.min_x(),
            y: self.min_y(),
            width: self.max_x() - self.min_x(),
            height: self.max_y() - self.min_y(),
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    ///
    /// Both inputs are standardized first, so the result always has
    /// non-negative extents.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let x0 = self.min_x().min(other.min_x());
        let y0 = self.min_y().min(other.min_y());
        let x1 = self.max_x().max(other.max_x());
        let y1 = self.max_y().max(other.max_y());
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Shrink by the given insets. Extents are not clamped: insets larger
    /// than the rect yield negative widths/heights, which downstream code
    /// treats as degenerate.
    #[must_use]
    pub fn inset_by(self, insets: Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal(),
            height: self.height - insets.vertical(),
        }
    }
}

/// Edge insets applied to a container rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[inline]
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Total horizontal inset (left + right).
    #[inline]
    #[must_use]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    #[must_use]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}
