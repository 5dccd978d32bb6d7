// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Integer-only trigonometry used by the quaternion and 2D rotation code.
//!
//! Accuracy is a few raw units over the full input range; every function is
//! deterministic for a given configuration.

use crate::fxp::ops::{fxp_mul, fxp_sqrt, fxp_sub};
use crate::types::scalar::Fix16;

const TWO_PI: i32 = 411_775;

// atan(r) ~ r * (c1 + c3 r^2 + c5 r^4 + c7 r^6 + c9 r^8) on [0, 1],
// absolute error below 1e-5 before rounding.
const ATAN_C1: i32 = 65_527;
const ATAN_C3: i32 = -21_647;
const ATAN_C5: i32 = 11_806;
const ATAN_C7: i32 = -5_579;
const ATAN_C9: i32 = 1_365;

pub fn fxp_sq(x: Fix16) -> Fix16 {
    fxp_mul(x, x)
}

/// Reduces an angle into `(-pi, pi]`.
fn wrap_angle(angle: Fix16) -> i32 {
    let mut t = angle.0 % TWO_PI;
    if t > Fix16::PI.0 {
        t -= TWO_PI;
    } else if t <= -Fix16::PI.0 {
        t += TWO_PI;
    }
    t
}

pub fn fxp_sin(angle: Fix16) -> Fix16 {
    let mut t = wrap_angle(angle);

    // sin(pi - t) = sin(t) folds the argument into [-pi/2, pi/2].
    if t > Fix16::FRAC_PI_2.0 {
        t = Fix16::PI.0 - t;
    } else if t < -Fix16::FRAC_PI_2.0 {
        t = -Fix16::PI.0 - t;
    }

    let x = Fix16(t);
    let x2 = fxp_mul(x, x);

    // Taylor series to x^11 in Horner form.
    let mut r = Fix16(Fix16::ONE.0 - x2.0 / 110);
    for divisor in [72, 42, 20, 6] {
        r = Fix16(Fix16::ONE.0 - fxp_mul(x2, r).0 / divisor);
    }

    fxp_mul(x, r)
}

pub fn fxp_cos(angle: Fix16) -> Fix16 {
    fxp_sin(Fix16(wrap_angle(angle) + Fix16::FRAC_PI_2.0))
}

fn atan_unit(r: Fix16) -> Fix16 {
    let r2 = fxp_mul(r, r);
    let mut poly = Fix16(ATAN_C9);
    for coeff in [ATAN_C7, ATAN_C5, ATAN_C3, ATAN_C1] {
        poly = Fix16(coeff + fxp_mul(r2, poly).0);
    }
    fxp_mul(r, poly)
}

/// Four-quadrant arctangent of `y / x`. `atan2(0, 0)` is 0.
pub fn fxp_atan2(y: Fix16, x: Fix16) -> Fix16 {
    if x.0 == 0 && y.0 == 0 {
        return Fix16::ZERO;
    }

    let ax = x.0.unsigned_abs() as u64;
    let ay = y.0.unsigned_abs() as u64;

    // Reduce to the first octant so the ratio stays in [0, 1].
    let steep = ay > ax;
    let (num, den) = if steep { (ax, ay) } else { (ay, ax) };
    let ratio = Fix16((((num << 16) + (den >> 1)) / den) as i32);

    let mut angle = atan_unit(ratio).0;
    if steep {
        angle = Fix16::FRAC_PI_2.0 - angle;
    }
    if x.0 < 0 {
        angle = Fix16::PI.0 - angle;
    }
    if y.0 < 0 {
        angle = -angle;
    }

    Fix16(angle)
}

pub fn fxp_atan(x: Fix16) -> Fix16 {
    fxp_atan2(x, Fix16::ONE)
}

/// Arcsine; inputs outside `[-1, 1]` are clamped.
pub fn fxp_asin(x: Fix16) -> Fix16 {
    if x >= Fix16::ONE {
        return Fix16::FRAC_PI_2;
    }
    if x <= -Fix16::ONE {
        return -Fix16::FRAC_PI_2;
    }
    fxp_atan2(x, cos_from_sin(x))
}

/// Arccosine; inputs outside `[-1, 1]` are clamped.
pub fn fxp_acos(x: Fix16) -> Fix16 {
    if x >= Fix16::ONE {
        return Fix16::ZERO;
    }
    if x <= -Fix16::ONE {
        return Fix16::PI;
    }
    fxp_atan2(cos_from_sin(x), x)
}

/// sqrt(1 - x^2) for |x| < 1.
fn cos_from_sin(x: Fix16) -> Fix16 {
    fxp_sqrt(fxp_sub(Fix16::ONE, fxp_sq(x)))
}
