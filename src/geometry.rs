//! Core geometry types: Point, Size, Rect, Insets.
//!
//! All layout math runs in whole points. Integer coordinates keep the stacking
//! algorithm deterministic: the same tree and bounds always yield the same frames.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position in points, relative to the layout origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A width/height pair in points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative. Empty sizes take no space
    /// in a stack.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamp both dimensions to be non-negative.
    #[inline]
    pub const fn clamped(self) -> Size {
        Size {
            width: if self.width > 0 { self.width } else { 0 },
            height: if self.height > 0 { self.height } else { 0 },
        }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A frame: origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The empty rect at the origin. Children that take no space get this frame.
    pub const ZERO: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A rect with the given origin and size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies inside this rect.
    #[inline]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Move the rect by `offset`.
    #[inline]
    pub const fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, width: self.width, height: self.height }
    }

    /// Shrink the rect by `insets`. Width and height never go negative, so a
    /// container smaller than its padding yields an empty content rect.
    #[inline]
    pub const fn inset(self, insets: Insets) -> Rect {
        let w = self.width - insets.left - insets.right;
        let h = self.height - insets.top - insets.bottom;
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Grow the rect outward by `insets`.
    #[inline]
    pub const fn outset(self, insets: Insets) -> Rect {
        Rect {
            x: self.x - insets.left,
            y: self.y - insets.top,
            width: self.width + insets.left + insets.right,
            height: self.height + insets.top + insets.bottom,
        }
    }
}

// ---------------------------------------------------------------------------
// Insets
// ---------------------------------------------------------------------------

/// Four-sided spacing used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets { top: 0, right: 0, bottom: 0, left: 0 };

    /// Explicit values, in CSS order.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same value on every side.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// `left + right`, saturating.
    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// `top + bottom`, saturating.
    #[inline]
    pub const fn vertical(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl Add for Insets {
    type Output = Insets;
    #[inline]
    fn add(self, rhs: Insets) -> Insets {
        Insets {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
