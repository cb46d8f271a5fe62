//! 2D geometry on interval numbers.
//!
//! Purpose
//! - Thin value types (`Point`, `Circle`) and metric helpers built on
//!   `Interval`, plus the three-point circle construction used by the search.
//! - `DomainCfg` fixes the admissible coordinate box and worst-case radius.
//!
//! Code cross-refs: `interval::Interval`, `bound::Bound`

mod cfg;
mod construct;
mod types;

pub use cfg::{DomainCfg, DomainError, POINT_XY_MAX, RADIUS_MAX};
pub use construct::{circle3p, circle3p_with_kind, CenterKind};
pub use types::{dist, len, Circle, Point};
