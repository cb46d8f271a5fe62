//! Interval-valued 2D points and circles.
//!
//! - `Point`: exact when both coordinates are singletons (caller input),
//!   derived otherwise (e.g. a constructed center).
//! - `Circle`: center plus radius, same exact/derived distinction.
//! - `len`, `dist`: Euclidean norm and distance with outward rounding.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// Point with interval coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Interval,
    pub y: Interval,
}

impl Point {
    #[inline]
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Exact point `(x, y)`.
    #[inline]
    pub const fn exact(x: f32, y: f32) -> Self {
        Self {
            x: Interval::point(x),
            y: Interval::point(y),
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.x.is_singleton() && self.y.is_singleton()
    }

    /// Midpoint of the coordinate box as an `f64` vector.
    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x.midpoint(), self.y.midpoint())
    }

    #[inline]
    pub(crate) fn midpoint_with(self, other: Point) -> Point {
        let two = Interval::point(2.0);
        Point::new((self.x + other.x) / two, (self.y + other.y) / two)
    }

    #[inline]
    pub(crate) fn centroid(a: Point, b: Point, c: Point) -> Point {
        let three = Interval::point(3.0);
        Point::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::exact(x, y)
    }
}

/// Circle with interval center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: Interval,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: Interval) -> Self {
        Self { center, radius }
    }

    /// Circle built from concrete numbers.
    #[inline]
    pub const fn exact(x: f32, y: f32, r: f32) -> Self {
        Self {
            center: Point::exact(x, y),
            radius: Interval::point(r),
        }
    }

    /// Center and radius are all singletons.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.center.is_exact() && self.radius.is_singleton()
    }

    /// Concrete circles at the four corners of the center box, each with the
    /// radius upper bound.
    pub fn corner_candidates(&self) -> [Circle; 4] {
        let (x, y, r) = (self.center.x, self.center.y, self.radius.upper());
        [
            Circle::exact(x.lower(), y.lower(), r),
            Circle::exact(x.lower(), y.upper(), r),
            Circle::exact(x.upper(), y.lower(), r),
            Circle::exact(x.upper(), y.upper(), r),
        ]
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "o.x={}, o.y={}, r={}",
            self.center.x, self.center.y, self.radius
        )
    }
}

/// Euclidean length of `p` seen as a vector.
#[inline]
pub fn len(p: Point) -> Interval {
    (p.x.square() + p.y.square()).sqrt()
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(p1: Point, p2: Point) -> Interval {
    len(Point::new(p1.x - p2.x, p1.y - p2.y))
}
