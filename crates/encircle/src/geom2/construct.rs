//! Circle through (or around) three points.
//!
//! The center is the intersection of the perpendicular bisectors of
//! `p1→p2` and `p2→p3` when that intersection is numerically trustworthy, and
//! the centroid of the three points otherwise.
//!
//! Derivation (Cramer's rule, kept scaled by `det_a` until the last step)
//! - `c12 + n12·t12 = o`, `c23 + n23·t23 = o`
//! - `[n12 | -n23] · (t12, t23)ᵀ = c23 - c12`
//! - `det_a = n23.x·n12.y - n12.x·n23.y`
//! - `t12·det_a = n23.x·(c23.y - c12.y) - n23.y·(c23.x - c12.x)`
//! - `o = c12 + n12 · (t12·det_a) / det_a`
//!
//! Stability check
//! - `|c12 - o|·det_a = |n12|·|t12·det_a|` is compared against
//!   `radius_max·det_a`. Unless it is certainly smaller, the circumcenter may
//!   lie arbitrarily far away (near-collinear triple) and the centroid is used.

use tracing::trace;

use super::types::{dist, len, Circle, Point};
use crate::interval::Interval;

/// Which center [`circle3p`] settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterKind {
    Circumcenter,
    Centroid,
}

/// Circle containing `p1`, `p2`, `p3`, with radius `dist(p1, center)`.
///
/// The result is derived: center and radius carry the propagated rounding
/// uncertainty and need not be singletons.
pub fn circle3p(p1: Point, p2: Point, p3: Point, radius_max: f32) -> Circle {
    circle3p_with_kind(p1, p2, p3, radius_max).0
}

/// [`circle3p`] plus the kind of center that was chosen.
pub fn circle3p_with_kind(
    p1: Point,
    p2: Point,
    p3: Point,
    radius_max: f32,
) -> (Circle, CenterKind) {
    let c12 = p1.midpoint_with(p2);
    let c23 = p2.midpoint_with(p3);

    // Segment normals.
    let n12 = Point::new(p2.y - p1.y, p1.x - p2.x);
    let n23 = Point::new(p3.y - p2.y, p2.x - p3.x);

    let det_a = n23.x * n12.y - n12.x * n23.y;
    let t12_det_a = n23.x * (c23.y - c12.y) - n23.y * (c23.x - c12.x);

    let dist_det_a = len(n12) * t12_det_a.abs();
    let maxdist_det_a = Interval::point(radius_max) * det_a;

    let (center, kind) =
        if dist_det_a.overlaps(&maxdist_det_a) || dist_det_a.certainly_gt(&maxdist_det_a) {
            trace!(%det_a, %dist_det_a, "circumcenter not trustworthy, using centroid");
            (Point::centroid(p1, p2, p3), CenterKind::Centroid)
        } else {
            let o = Point::new(
                c12.x + (n12.x * t12_det_a) / det_a,
                c12.y + (n12.y * t12_det_a) / det_a,
            );
            (o, CenterKind::Circumcenter)
        };

    (Circle::new(center, dist(p1, center)), kind)
}
