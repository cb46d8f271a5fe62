//! Directed rounding on `f32` without touching the FPU rounding mode.
//!
//! Each operation is evaluated once in round-to-nearest. The exact error of
//! that result is recovered with an error-free transformation (TwoSum for
//! addition, an FMA residual for product, quotient and square root), and its
//! sign decides whether the bound must step one ulp outward. The bounds are
//! the same as those produced by hardware rounding toward ±∞.
//!
//! Residuals stop being exact once results fall into the subnormal range; there
//! the result is widened by one ulp unconditionally.

/// Below this magnitude the FMA residual may be inexact.
const TINY: f32 = f32::MIN_POSITIVE / f32::EPSILON;

/// Rounded result plus the sign of `exact - approx`.
#[derive(Clone, Copy, Debug)]
struct Rounded {
    approx: f32,
    err: ErrSign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ErrSign {
    Exact,
    Above,
    Below,
    Unknown,
    /// Finite operands, result rounded to ±∞.
    Overflow,
}

impl ErrSign {
    #[inline]
    fn of(residual: f32) -> Self {
        if residual > 0.0 {
            ErrSign::Above
        } else if residual < 0.0 {
            ErrSign::Below
        } else if residual == 0.0 {
            ErrSign::Exact
        } else {
            ErrSign::Unknown
        }
    }
}

impl Rounded {
    #[inline]
    fn down(self) -> f32 {
        match self.err {
            ErrSign::Exact | ErrSign::Above => self.approx,
            ErrSign::Below | ErrSign::Unknown => self.approx.next_down(),
            ErrSign::Overflow if self.approx > 0.0 => f32::MAX,
            ErrSign::Overflow => self.approx,
        }
    }

    #[inline]
    fn up(self) -> f32 {
        match self.err {
            ErrSign::Exact | ErrSign::Below => self.approx,
            ErrSign::Above | ErrSign::Unknown => self.approx.next_up(),
            ErrSign::Overflow if self.approx < 0.0 => f32::MIN,
            ErrSign::Overflow => self.approx,
        }
    }
}

#[inline]
fn non_finite(approx: f32, overflowed: bool) -> Rounded {
    let err = if overflowed && !approx.is_nan() {
        ErrSign::Overflow
    } else {
        ErrSign::Exact
    };
    Rounded { approx, err }
}

#[inline]
fn add(a: f32, b: f32) -> Rounded {
    let s = a + b;
    if !s.is_finite() {
        return non_finite(s, a.is_finite() && b.is_finite());
    }
    // TwoSum (Knuth): exact for any finite a, b, subnormals included.
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    Rounded {
        approx: s,
        err: ErrSign::of(e),
    }
}

#[inline]
fn mul(a: f32, b: f32) -> Rounded {
    if a == 0.0 || b == 0.0 {
        return Rounded {
            approx: 0.0,
            err: ErrSign::Exact,
        };
    }
    let p = a * b;
    if !p.is_finite() {
        return non_finite(p, a.is_finite() && b.is_finite());
    }
    if p.abs() < TINY {
        return Rounded {
            approx: p,
            err: ErrSign::Unknown,
        };
    }
    Rounded {
        approx: p,
        err: ErrSign::of(a.mul_add(b, -p)),
    }
}

#[inline]
fn div(a: f32, b: f32) -> Rounded {
    if a == 0.0 {
        return Rounded {
            approx: 0.0,
            err: ErrSign::Exact,
        };
    }
    let q = a / b;
    if !q.is_finite() {
        return non_finite(q, a.is_finite() && b.is_finite() && b != 0.0);
    }
    if q.abs() < TINY || a.abs() < TINY {
        return Rounded {
            approx: q,
            err: ErrSign::Unknown,
        };
    }
    // a - q*b is exact; a/b - q has the sign of (a - q*b) / b.
    let r = (-q).mul_add(b, a);
    let err = match ErrSign::of(r) {
        ErrSign::Above if b < 0.0 => ErrSign::Below,
        ErrSign::Below if b < 0.0 => ErrSign::Above,
        e => e,
    };
    Rounded { approx: q, err }
}

#[inline]
fn sqrt(a: f32) -> Rounded {
    let s = a.sqrt();
    if a == 0.0 || !s.is_finite() {
        return Rounded {
            approx: s,
            err: ErrSign::Exact,
        };
    }
    if a < TINY {
        return Rounded {
            approx: s,
            err: ErrSign::Unknown,
        };
    }
    Rounded {
        approx: s,
        err: ErrSign::of((-s).mul_add(s, a)),
    }
}

#[inline]
pub(crate) fn add_down(a: f32, b: f32) -> f32 {
    add(a, b).down()
}
#[inline]
pub(crate) fn add_up(a: f32, b: f32) -> f32 {
    add(a, b).up()
}
#[inline]
pub(crate) fn sub_down(a: f32, b: f32) -> f32 {
    add(a, -b).down()
}
#[inline]
pub(crate) fn sub_up(a: f32, b: f32) -> f32 {
    add(a, -b).up()
}
#[inline]
pub(crate) fn mul_down(a: f32, b: f32) -> f32 {
    mul(a, b).down()
}
#[inline]
pub(crate) fn mul_up(a: f32, b: f32) -> f32 {
    mul(a, b).up()
}
#[inline]
pub(crate) fn div_down(a: f32, b: f32) -> f32 {
    div(a, b).down()
}
#[inline]
pub(crate) fn div_up(a: f32, b: f32) -> f32 {
    div(a, b).up()
}
#[inline]
pub(crate) fn sqrt_down(a: f32) -> f32 {
    sqrt(a).down()
}
#[inline]
pub(crate) fn sqrt_up(a: f32) -> f32 {
    sqrt(a).up()
}
