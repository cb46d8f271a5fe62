//! Point collection and provably enclosing minimal circle.
//!
//! Purpose
//! - `Bound` owns an ordered list of exact points inside a `DomainCfg` and
//!   answers `min_circle`: the smallest circle found whose containment of
//!   every point is certified by interval arithmetic.
//!
//! Search
//! - Every ordered triple (with repetition) goes through `circle3p`. Its
//!   derived circle yields four concrete candidates (corners of the center
//!   box, radius upper bound). A candidate replaces the best circle when its
//!   radius is smaller and `points_fit` certifies it. O(n³) triples, each
//!   checked against n points.
//! - The result is always exact: candidates are rebuilt from extracted bounds.
//!
//! Out-of-range input
//! - `add` rejects and leaves the collection unchanged. `try_extend` stops at
//!   the first rejected point; `extend_skipping` drops rejected points.
//!
//! Code cross-refs: `geom2::{circle3p, Circle, DomainCfg}`, `interval::Interval`

mod error;

pub use error::OutOfRangeError;

use tracing::{debug, instrument, warn};

use crate::geom2::{circle3p, dist, Circle, DomainCfg, Point};

/// Ordered collection of exact, admissible points.
#[derive(Clone, Debug, Default)]
pub struct Bound {
    points: Vec<Point>,
    cfg: DomainCfg,
}

impl Bound {
    /// Empty collection over the default domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collection over a custom domain.
    pub fn with_cfg(cfg: DomainCfg) -> Self {
        Self {
            points: Vec::new(),
            cfg,
        }
    }

    #[inline]
    pub fn cfg(&self) -> DomainCfg {
        self.cfg
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append the exact point `(x, y)`; chainable.
    pub fn add(&mut self, x: f32, y: f32) -> Result<&mut Self, OutOfRangeError> {
        if !self.cfg.admits(x, y) {
            return Err(OutOfRangeError {
                x,
                y,
                limit: self.cfg.point_xy_max(),
            });
        }
        self.points.push(Point::from((x, y)));
        Ok(self)
    }

    /// Add points in order, stopping at the first out-of-range one.
    /// Points before it stay added.
    pub fn try_extend<I>(&mut self, points: I) -> Result<&mut Self, OutOfRangeError>
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        for (x, y) in points {
            self.add(x, y)?;
        }
        Ok(self)
    }

    /// Add points in order, dropping out-of-range ones. Returns how many were dropped.
    pub fn extend_skipping<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let mut skipped = 0;
        for (x, y) in points {
            if let Err(err) = self.add(x, y) {
                warn!(%err, "skipping point");
                skipped += 1;
            }
        }
        skipped
    }

    /// True iff every point is certainly inside the concrete circle `c`:
    /// `dist(p, center).upper() <= radius.lower()`.
    pub fn points_fit(&self, c: &Circle) -> bool {
        self.points
            .iter()
            .all(|p| dist(*p, c.center).upper() <= c.radius.lower())
    }

    /// Smallest certified enclosing circle; `(0, 0), 0` for no points.
    ///
    /// Read-only and deterministic: repeated calls give bit-identical circles.
    #[instrument(skip(self), fields(n = self.points.len()))]
    pub fn min_circle(&self) -> Circle {
        let initial_r = if self.points.is_empty() {
            0.0
        } else {
            self.cfg.radius_max()
        };
        let mut best = Circle::exact(0.0, 0.0, initial_r);
        let mut improved = 0usize;

        let mut consider = |cand: Circle| {
            if cand.radius.certainly_lt(&best.radius) && self.points_fit(&cand) {
                best = cand;
                improved += 1;
            }
        };
        let radius_max = self.cfg.radius_max();
        for &p1 in &self.points {
            for &p2 in &self.points {
                for &p3 in &self.points {
                    let ic = circle3p(p1, p2, p3, radius_max);
                    // TODO: subdivide the center box for a tighter result.
                    for cand in ic.corner_candidates() {
                        consider(cand);
                    }
                }
            }
        }

        debug_assert!(best.is_exact(), "min_circle produced a derived circle");
        debug!(improved, %best, "min_circle done");
        best
    }
}
