//! Directed interval numbers over `f32`.
//!
//! Purpose
//! - `Interval` is a closed range `[lo, hi]` that soundly bounds the real
//!   result of every operation applied to any values inside its operands.
//! - Lower bounds round toward −∞, upper bounds toward +∞ (see `round`).
//!
//! Comparisons
//! - `certainly_lt`/`certainly_gt` hold only when the ranges cannot be ordered
//!   the other way. Overlapping ranges are indeterminate; `overlaps` detects
//!   that case explicitly.
//!
//! Code cross-refs: `geom2::{Point, Circle}`, `bound::Bound`

mod round;

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed interval `[lo, hi]` with `lo <= hi`.
///
/// Deserialization goes through [`Interval::new`], so unordered or NaN bounds
/// are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    lo: f32,
    hi: f32,
}

impl Interval {
    pub const ZERO: Interval = Interval { lo: 0.0, hi: 0.0 };

    /// Interval `[lo, hi]`. `None` if the bounds are unordered or NaN.
    #[inline]
    pub fn new(lo: f32, hi: f32) -> Option<Self> {
        if lo <= hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// Singleton `[x, x]`: a value known exactly.
    #[inline]
    pub const fn point(x: f32) -> Self {
        Self { lo: x, hi: x }
    }

    #[inline]
    pub fn lower(&self) -> f32 {
        self.lo
    }

    #[inline]
    pub fn upper(&self) -> f32 {
        self.hi
    }

    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    /// Upper bound on `hi - lo`.
    #[inline]
    pub fn width(&self) -> f32 {
        round::sub_up(self.hi, self.lo)
    }

    /// Midpoint in `f64` (exact for finite bounds).
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lo as f64 + self.hi as f64) * 0.5
    }

    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// True iff both intervals share at least one value.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// `self < other` for every choice of values.
    #[inline]
    pub fn certainly_lt(&self, other: &Interval) -> bool {
        self.hi < other.lo
    }

    /// `self > other` for every choice of values.
    #[inline]
    pub fn certainly_gt(&self, other: &Interval) -> bool {
        other.certainly_lt(self)
    }

    pub fn square(self) -> Interval {
        if self.lo >= 0.0 {
            Interval {
                lo: round::mul_down(self.lo, self.lo),
                hi: round::mul_up(self.hi, self.hi),
            }
        } else if self.hi <= 0.0 {
            Interval {
                lo: round::mul_down(self.hi, self.hi),
                hi: round::mul_up(self.lo, self.lo),
            }
        } else {
            let m = (-self.lo).max(self.hi);
            Interval {
                lo: 0.0,
                hi: round::mul_up(m, m),
            }
        }
    }

    /// Square root of the non-negative part.
    pub fn sqrt(self) -> Interval {
        let lo = self.lo.max(0.0);
        let hi = self.hi.max(0.0);
        Interval {
            lo: round::sqrt_down(lo),
            hi: round::sqrt_up(hi),
        }
    }

    pub fn abs(self) -> Interval {
        if self.lo >= 0.0 {
            self
        } else if self.hi <= 0.0 {
            -self
        } else {
            Interval {
                lo: 0.0,
                hi: (-self.lo).max(self.hi),
            }
        }
    }

    #[inline]
    fn whole() -> Interval {
        Interval {
            lo: f32::NEG_INFINITY,
            hi: f32::INFINITY,
        }
    }
}

/// Bounds that do not form an interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("invalid interval bounds {lo}...{hi}: need lo <= hi")]
pub struct UnorderedBounds {
    pub lo: f32,
    pub hi: f32,
}

#[derive(Deserialize)]
struct RawInterval {
    lo: f32,
    hi: f32,
}

impl TryFrom<RawInterval> for Interval {
    type Error = UnorderedBounds;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.lo, raw.hi).ok_or(UnorderedBounds {
            lo: raw.lo,
            hi: raw.hi,
        })
    }
}

/// Free-function form of [`Interval::overlaps`].
#[inline]
pub fn overlap(a: Interval, b: Interval) -> bool {
    a.overlaps(&b)
}

impl From<f32> for Interval {
    #[inline]
    fn from(x: f32) -> Self {
        Interval::point(x)
    }
}

impl Neg for Interval {
    type Output = Interval;
    #[inline]
    fn neg(self) -> Interval {
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for Interval {
    type Output = Interval;
    #[inline]
    fn add(self, rhs: Interval) -> Interval {
        Interval {
            lo: round::add_down(self.lo, rhs.lo),
            hi: round::add_up(self.hi, rhs.hi),
        }
    }
}

impl Sub for Interval {
    type Output = Interval;
    #[inline]
    fn sub(self, rhs: Interval) -> Interval {
        Interval {
            lo: round::sub_down(self.lo, rhs.hi),
            hi: round::sub_up(self.hi, rhs.lo),
        }
    }
}

impl Mul for Interval {
    type Output = Interval;
    fn mul(self, rhs: Interval) -> Interval {
        let (a, b, c, d) = (self.lo, self.hi, rhs.lo, rhs.hi);
        let lo = round::mul_down(a, c)
            .min(round::mul_down(a, d))
            .min(round::mul_down(b, c))
            .min(round::mul_down(b, d));
        let hi = round::mul_up(a, c)
            .max(round::mul_up(a, d))
            .max(round::mul_up(b, c))
            .max(round::mul_up(b, d));
        Interval { lo, hi }
    }
}

/// Division by an interval containing zero yields the whole real line;
/// callers are expected to exclude that case beforehand.
impl Div for Interval {
    type Output = Interval;
    fn div(self, rhs: Interval) -> Interval {
        if rhs.contains(0.0) {
            return Interval::whole();
        }
        let (a, b, c, d) = (self.lo, self.hi, rhs.lo, rhs.hi);
        let lo = round::div_down(a, c)
            .min(round::div_down(a, d))
            .min(round::div_down(b, c))
            .min(round::div_down(b, d));
        let hi = round::div_up(a, c)
            .max(round::div_up(a, d))
            .max(round::div_up(b, c))
            .max(round::div_up(b, d));
        Interval { lo, hi }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests;
