use super::*;
use proptest::prelude::*;

fn iv(lo: f32, hi: f32) -> Interval {
    Interval::new(lo, hi).unwrap()
}

/// Interval is at most one ulp wide.
fn tight(x: Interval) -> bool {
    x.is_singleton() || x.lower().next_up() == x.upper()
}

fn encloses(x: Interval, v: f64) -> bool {
    (x.lower() as f64) <= v && v <= (x.upper() as f64)
}

#[test]
fn new_rejects_unordered_and_nan() {
    assert!(Interval::new(1.0, 0.0).is_none());
    assert!(Interval::new(f32::NAN, 1.0).is_none());
    assert!(Interval::new(0.0, 0.0).unwrap().is_singleton());
}

#[test]
fn exact_arithmetic_stays_singleton() {
    let a = Interval::point(1.5);
    let b = Interval::point(0.25);
    assert_eq!(a + b, Interval::point(1.75));
    assert_eq!(a - b, Interval::point(1.25));
    assert_eq!(a * b, Interval::point(0.375));
    assert_eq!(a / b, Interval::point(6.0));
    assert_eq!(Interval::point(9.0).sqrt(), Interval::point(3.0));
    assert_eq!(Interval::point(-3.0).square(), Interval::point(9.0));
    assert_eq!(Interval::point(-3.0).abs(), Interval::point(3.0));
    assert_eq!(-a, Interval::point(-1.5));
}

#[test]
fn centroid_of_tenths_is_not_exact() {
    // (0.1 + 0.1 + 0.1) / 3 cannot be represented exactly in f32.
    let t = Interval::point(0.1);
    let c = (t + t + t) / Interval::point(3.0);
    assert!(!c.is_singleton());
    assert!(c.contains(0.1));
}

#[test]
fn square_and_abs_of_straddling_interval() {
    let x = iv(-2.0, 3.0);
    assert_eq!(x.square(), iv(0.0, 9.0));
    assert_eq!(x.abs(), iv(0.0, 3.0));
    let y = iv(-5.0, -2.0);
    assert_eq!(y.square(), iv(4.0, 25.0));
    assert_eq!(y.abs(), iv(2.0, 5.0));
}

#[test]
fn sqrt_clamps_negative_part() {
    let x = iv(-1.0, 4.0);
    assert_eq!(x.sqrt(), iv(0.0, 2.0));
}

#[test]
fn mul_takes_extreme_products() {
    let x = iv(-1.0, 2.0);
    let y = iv(-3.0, 4.0);
    assert_eq!(x * y, iv(-6.0, 8.0));
}

#[test]
fn division_by_zero_straddling_interval_is_whole_line() {
    let q = Interval::point(1.0) / iv(-1.0, 1.0);
    assert_eq!(q.lower(), f32::NEG_INFINITY);
    assert_eq!(q.upper(), f32::INFINITY);
}

#[test]
fn comparisons_are_conservative() {
    let a = iv(0.0, 1.0);
    let b = iv(1.0, 2.0);
    let c = iv(1.5, 2.0);
    assert!(a.overlaps(&b) && overlap(a, b));
    assert!(!a.certainly_lt(&b));
    assert!(!b.certainly_gt(&a));
    assert!(a.certainly_lt(&c));
    assert!(c.certainly_gt(&a));
    assert!(!a.overlaps(&c));
    // Overlapping intervals are neither smaller nor greater.
    let d = iv(0.5, 1.75);
    assert!(!d.certainly_lt(&c) && !d.certainly_gt(&c));
}

#[test]
fn display_prints_bounds() {
    assert_eq!(format!("{}", iv(-1.0, 2.5)), "-1...2.5");
}

#[test]
fn width_and_midpoint() {
    let x = iv(1.0, 3.0);
    assert_eq!(x.width(), 2.0);
    assert_eq!(x.midpoint(), 2.0);
}

#[test]
fn deserialize_goes_through_new() {
    let x: Interval = serde_json::from_str(r#"{"lo":-1.5,"hi":2.0}"#).unwrap();
    assert_eq!(x, iv(-1.5, 2.0));
    let back: Interval = serde_json::from_value(serde_json::to_value(x).unwrap()).unwrap();
    assert_eq!(back, x);

    let err = serde_json::from_str::<Interval>(r#"{"lo":2.0,"hi":1.0}"#).unwrap_err();
    assert!(err.to_string().contains("need lo <= hi"), "{err}");
    assert!(serde_json::from_str::<Interval>(r#"{"lo":1.0}"#).is_err());
}

fn arb_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => -1000.0f32..1000.0,
        1 => -1e-3f32..1e-3,
        1 => (-2000i32..2000).prop_map(|k| k as f32 * 0.5),
    ]
}

fn arb_interval() -> impl Strategy<Value = Interval> {
    (arb_f32(), arb_f32()).prop_map(|(a, b)| iv(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn singleton_ops_enclose_exact_result_within_one_ulp(a in arb_f32(), b in arb_f32()) {
        let (x, y) = (Interval::point(a), Interval::point(b));
        let (a64, b64) = (a as f64, b as f64);

        let s = x + y;
        prop_assert!(encloses(s, a64 + b64));
        prop_assert!(tight(s));

        let d = x - y;
        prop_assert!(encloses(d, a64 - b64));
        prop_assert!(tight(d));

        let p = x * y;
        prop_assert!(encloses(p, a64 * b64));

        let sq = x.square();
        prop_assert!(encloses(sq, a64 * a64));
        prop_assert!(sq.lower() >= 0.0);

        let r = x.abs().sqrt();
        prop_assert!(encloses(r, a64.abs().sqrt()));
        prop_assert!(tight(r));

        if b != 0.0 {
            let q = x / y;
            prop_assert!(encloses(q, a64 / b64));
        }
    }

    #[test]
    fn interval_ops_enclose_every_endpoint_combination(x in arb_interval(), y in arb_interval()) {
        let xs = [x.lower() as f64, x.upper() as f64, x.midpoint()];
        let ys = [y.lower() as f64, y.upper() as f64, y.midpoint()];
        let (s, d, p) = (x + y, x - y, x * y);
        for &a in &xs {
            for &b in &ys {
                prop_assert!(encloses(s, a + b));
                prop_assert!(encloses(d, a - b));
                prop_assert!(encloses(p, a * b));
                if !y.contains(0.0) {
                    prop_assert!(encloses(x / y, a / b));
                }
            }
            prop_assert!(encloses(x.square(), a * a));
            prop_assert!(encloses(x.abs(), a.abs()));
            prop_assert!(encloses(x.abs().sqrt(), a.abs().sqrt()));
        }
    }

    #[test]
    fn overlap_matches_shared_value(x in arb_interval(), y in arb_interval()) {
        let shared = x.contains(y.lower()) || y.contains(x.lower());
        prop_assert_eq!(x.overlaps(&y), shared);
        prop_assert!(!(x.certainly_lt(&y) && x.overlaps(&y)));
        prop_assert!(!(x.certainly_lt(&y) && x.certainly_gt(&y)));
    }
}
