use serde::{Deserialize, Serialize};

/// A 2D point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width:  f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box given by its two corners, the way the host describes
/// allocations. Widths are *not* clamped: a box with `x2 < x1` is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub const ZERO: Self = Self { x1: 0.0, y1: 0.0, x2: 0.0, y2: 0.0 };

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box at `origin` with the given size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x + size.width,
            y2: origin.y + size.height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Reflect horizontally inside a container of width `total`.
    #[must_use]
    pub fn mirrored(&self, total: f32) -> Self {
        Self {
            x1: total - self.x2,
            x2: total - self.x1,
            ..*self
        }
    }

    /// `true` when the horizontal spans share more than an edge.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2
    }
}

/// Reading direction of the panel's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}
