//! Provably enclosing minimal circles for small 2D point sets.
//!
//! Every arithmetic step runs on directed interval numbers (`interval`), so a
//! returned circle is certified to contain each input point despite rounding.
//!
//! Layout
//! - `interval`: outward-rounded `f32` intervals.
//! - `geom2`: points, circles, distances, three-point circle, domain config.
//! - `bound`: point collection and the O(n³) search (`Bound::min_circle`).
//! - `reference`: plain `f64` minimal circle for comparisons.
//! - `sample`: seeded random point clouds.

pub mod bound;
pub mod geom2;
pub mod interval;
pub mod reference;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bound::{Bound, OutOfRangeError};
pub use geom2::{Circle, DomainCfg, Point, POINT_XY_MAX, RADIUS_MAX};
pub use interval::Interval;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bound::{Bound, OutOfRangeError};
    pub use crate::geom2::{
        circle3p, dist, len, Circle, DomainCfg, DomainError, Point, POINT_XY_MAX, RADIUS_MAX,
    };
    pub use crate::interval::{overlap, Interval};
    pub use crate::sample::{draw_points, PointCloudCfg, ReplayToken};
}
