//! Point, size, rectangle and margin value types.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A point in page space (points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate (y grows upwards)
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Zero size.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle with a y-up convention.
///
/// `(x, y)` is the bottom-left corner. Width and height are never negative,
/// including for rectangles read from JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRect")]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    /// Width (non-negative)
    pub width: f32,
    /// Height (non-negative)
    pub height: f32,
}

#[derive(Deserialize)]
struct RawRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        Rect::new(raw.x, raw.y, raw.width, raw.height)
    }
}

impl Rect {
    /// Create a rectangle. Negative magnitudes are replaced by their absolute value.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Bottom-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dimensions of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Area in square points.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check whether the two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }

    /// Area shared by the two rectangles (0 when disjoint).
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.top().min(other.top()) - self.bottom().max(other.bottom());
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());
        Rect::new(left, bottom, right - left, top - bottom)
    }

    /// Check whether a point lies inside the rectangle (edges included).
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Return a copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Page or section margins in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
}

impl Margins {
    /// Create margins from the four sides.
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same margin on every side.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Word's default one-inch margins.
    pub fn inch() -> Self {
        Self::uniform(72.0)
    }

    /// Area left inside a page of the given size.
    pub fn content_rect(&self, page: Size) -> Rect {
        Rect::new(
            self.left,
            self.bottom,
            page.width - self.left - self.right,
            page.height - self.top - self.bottom,
        )
    }
}

impl Add for Margins {
    type Output = Margins;

    fn add(self, rhs: Margins) -> Margins {
        Margins {
            top: self.top + rhs.top,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
            right: self.right + rhs.right,
        }
    }
}
