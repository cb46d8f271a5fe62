//! Plain `f64` minimal enclosing circle, for comparison only.
//!
//! Uses the classical characterisation: the optimal center is a single point,
//! the midpoint of two points, or the circumcenter of three. Every such center
//! is tried, and the one whose farthest point is closest wins. No rounding
//! control, so the result is accurate but not guaranteed to enclose the input.
//! O(n⁴); meant for small inputs in tests and experiments.

use nalgebra::{Matrix2, Vector2};

/// Center and radius of the minimal enclosing circle, `None` for no points.
pub fn min_circle_f64(points: &[Vector2<f64>]) -> Option<(Vector2<f64>, f64)> {
    let mut best: Option<(Vector2<f64>, f64)> = None;
    let mut consider = |c: Vector2<f64>| {
        let r = farthest(points, c);
        if best.as_ref().map_or(true, |(_, rb)| r < *rb) {
            best = Some((c, r));
        }
    };
    for (i, a) in points.iter().enumerate() {
        consider(*a);
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            consider((a + b) * 0.5);
            for c in points.iter().skip(j + 1) {
                if let Some(o) = circumcenter(*a, *b, *c) {
                    consider(o);
                }
            }
        }
    }
    best
}

/// Distance from `c` to the farthest point.
#[inline]
fn farthest(points: &[Vector2<f64>], c: Vector2<f64>) -> f64 {
    points
        .iter()
        .map(|p| (p - c).norm())
        .fold(0.0, f64::max)
}

/// Circumcenter `o` solving `2 (b - a)·o = |b|² - |a|²`, `2 (c - a)·o = |c|² - |a|²`.
fn circumcenter(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Option<Vector2<f64>> {
    let ab = b - a;
    let ac = c - a;
    let m = Matrix2::new(ab.x, ab.y, ac.x, ac.y) * 2.0;
    if m.determinant().abs() <= f64::EPSILON * ab.norm() * ac.norm() {
        return None;
    }
    let rhs = Vector2::new(
        b.norm_squared() - a.norm_squared(),
        c.norm_squared() - a.norm_squared(),
    );
    let o = m.try_inverse()? * rhs;
    o.iter().all(|v| v.is_finite()).then_some(o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn empty_and_single() {
        assert!(min_circle_f64(&[]).is_none());
        let (c, r) = min_circle_f64(&[vector![2.0, -1.0]]).unwrap();
        assert_eq!(c, vector![2.0, -1.0]);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn two_points_use_diameter() {
        let (c, r) = min_circle_f64(&[vector![0.0, 0.0], vector![2.0, 0.0]]).unwrap();
        assert!((c - vector![1.0, 0.0]).norm() < 1e-12);
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn acute_triangle_uses_circumcircle() {
        let h = 3f64.sqrt();
        let pts = [vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, h]];
        let (c, r) = min_circle_f64(&pts).unwrap();
        assert!((c - vector![1.0, h / 3.0]).norm() < 1e-12);
        assert!((r - 2.0 / h).abs() < 1e-12);
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 0.5]];
        let (c, r) = min_circle_f64(&pts).unwrap();
        assert!((c - vector![2.0, 0.0]).norm() < 1e-12);
        assert!((r - 2.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_skip_circumcenter() {
        assert!(circumcenter(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]).is_none());
        let pts = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        let (c, r) = min_circle_f64(&pts).unwrap();
        assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
        assert!((r - 2f64.sqrt()).abs() < 1e-12);
    }
}
