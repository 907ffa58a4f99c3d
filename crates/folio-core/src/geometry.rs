//! Screen-space geometry shared by the pointer and animation modules.
//!
//! All values are CSS pixels with the origin at the viewport's top-left
//! corner, matching `MouseEvent.clientX/Y` and `getBoundingClientRect()`.

use serde::{Deserialize, Serialize};

/// Clamps `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Maps `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The result is not clamped; values outside the input range extrapolate.
/// An empty input range maps everything to `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle, shaped like a `DOMRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Returns true if `point` lies inside or on the border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Distance from `point` to the nearest edge; zero inside the rectangle.
    pub fn edge_distance(&self, point: Point) -> f64 {
        let dx = (self.left - point.x).max(0.0).max(point.x - self.right());
        let dy = (self.top - point.y).max(0.0).max(point.y - self.bottom());
        dx.hypot(dy)
    }
}

/// Inner size of the browser window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half the viewport diagonal; the distance at which proximity reaches zero.
    pub fn half_diagonal(&self) -> f64 {
        self.width.hypot(self.height) / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
