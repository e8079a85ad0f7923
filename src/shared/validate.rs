use std::borrow::Borrow;

use crate::core::types::{Number, Point2, Vector2};

/// Macro that inserts a `return` statement if debug assertions are disabled
///
/// Required because we use some of the asserts from [`approx`],
/// which don't have a [`debug_assert!`] equivalent, so the only way to not
/// execute them in release is to return.
macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const ULPS: usize = 4;
pub const RELATIVE: Number = 1e-3;

/// Check is not [`Number::NAN`] and not [`Number::INFINITY`]
#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();
    let val = val.borrow();

    assert!(!val.is_nan(), "should not be nan; val: {val}");
    assert!(!val.is_infinite(), "should not be inf; val: {val}");
}

/// Check all components are valid numbers
#[inline(always)]
#[track_caller]
pub fn point2(v: impl Borrow<Point2>) {
    debug_assert_only!();
    let p = v.borrow();

    for c in p.as_array() {
        number(c);
    }
}

/// Check all components are valid numbers
#[inline(always)]
#[track_caller]
pub fn vector2(v: impl Borrow<Vector2>) {
    debug_assert_only!();
    let v = v.borrow();

    for c in v.as_array() {
        number(c);
    }
}

/// Check is a valid vector, and normalised
#[inline(always)]
#[track_caller]
pub fn normal2(n: impl Borrow<Vector2>) {
    debug_assert_only!();
    let n = n.borrow();

    vector2(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

/// Check an orientation/facing angle is in degrees `[0, 360)`
#[inline(always)]
#[track_caller]
pub fn orientation_degrees(theta: impl Borrow<Number>) {
    debug_assert_only!();
    let theta = theta.borrow();
    number(theta);
    assert!((0.0..360.0).contains(theta), "orientation should be in [0, 360); got {theta}");
}

/// Check a fov aperture is in degrees `(0, 360]`
#[inline(always)]
#[track_caller]
pub fn aperture_degrees(aperture: impl Borrow<Number>) {
    debug_assert_only!();
    let aperture = aperture.borrow();
    number(aperture);
    assert!(
        *aperture > 0.0 && *aperture <= 360.0,
        "aperture should be in (0, 360]; got {aperture}"
    );
}

/// Check a radius is finite and strictly positive
#[inline(always)]
#[track_caller]
pub fn radius(r: impl Borrow<Number>) {
    debug_assert_only!();
    let r = r.borrow();
    number(r);
    assert!(*r > 0.0, "radius should be > 0; got {r}");
}
