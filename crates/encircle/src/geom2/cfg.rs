//! Coordinate domain of a point collection.
//!
//! Policy
//! - Defaults are the reference domain (`|x|, |y| <= 1000`). A different
//!   domain is chosen once, when the collection is built, and never changes.

/// Largest admissible coordinate magnitude in the default domain.
pub const POINT_XY_MAX: f32 = 1000.0;
/// Radius that encloses every admissible point set of the default domain.
pub const RADIUS_MAX: f32 = RADIUS_MARGIN * POINT_XY_MAX;

/// `radius_max / point_xy_max`; 1.5 * 2 covers the diagonal of the box.
const RADIUS_MARGIN: f32 = 1.5 * 2.0;

/// Invalid domain parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("point_xy_max must be finite and positive, got {0}")]
    InvalidMagnitude(f32),
    #[error("radius_max {radius_max} does not reach the corners of the domain |x|,|y| <= {point_xy_max}")]
    InvalidRadius { point_xy_max: f32, radius_max: f32 },
}

/// Coordinate bound and worst-case radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainCfg {
    point_xy_max: f32,
    radius_max: f32,
}

impl Default for DomainCfg {
    fn default() -> Self {
        Self {
            point_xy_max: POINT_XY_MAX,
            radius_max: RADIUS_MAX,
        }
    }
}

impl DomainCfg {
    /// Domain `|x|, |y| <= point_xy_max` with `radius_max = 3 * point_xy_max`.
    pub fn new(point_xy_max: f32) -> Result<Self, DomainError> {
        Self::with_radius(point_xy_max, RADIUS_MARGIN * point_xy_max)
    }

    /// Domain with an explicit worst-case radius.
    ///
    /// `radius_max` must reach the domain corners from the origin, since the
    /// search falls back to the circle `(0, 0), radius_max` when no candidate fits.
    pub fn with_radius(point_xy_max: f32, radius_max: f32) -> Result<Self, DomainError> {
        if !point_xy_max.is_finite() || point_xy_max <= 0.0 {
            return Err(DomainError::InvalidMagnitude(point_xy_max));
        }
        let corner = point_xy_max as f64 * std::f64::consts::SQRT_2;
        if !radius_max.is_finite() || (radius_max as f64) < corner {
            return Err(DomainError::InvalidRadius {
                point_xy_max,
                radius_max,
            });
        }
        Ok(Self {
            point_xy_max,
            radius_max,
        })
    }

    #[inline]
    pub fn point_xy_max(&self) -> f32 {
        self.point_xy_max
    }

    #[inline]
    pub fn radius_max(&self) -> f32 {
        self.radius_max
    }

    /// True iff both coordinates lie in `[-point_xy_max, point_xy_max]`.
    #[inline]
    pub fn admits(&self, x: f32, y: f32) -> bool {
        let m = self.point_xy_max;
        (-m..=m).contains(&x) && (-m..=m).contains(&y)
    }
}
