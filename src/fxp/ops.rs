// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point operations.

use crate::config::{ARITH, NO_64BIT, OVERFLOW_DETECT, ROUNDING};
use crate::fxp::{convert, narrow, sqrt, wide};
use crate::types::scalar::Fix16;

const SIGN_BIT: u32 = 0x8000_0000;

/// Addition with overflow detection.
///
/// Overflow is only possible when both operands have the same sign, and then
/// shows up as a result of the opposite sign.
pub fn fxp_add(a: Fix16, b: Fix16) -> Fix16 {
    add_with(a, b, OVERFLOW_DETECT)
}

/// Subtraction with overflow detection.
///
/// Subtracting `MIN` always overflows: its negation is not representable.
pub fn fxp_sub(a: Fix16, b: Fix16) -> Fix16 {
    sub_with(a, b, OVERFLOW_DETECT)
}

pub(crate) fn add_with(a: Fix16, b: Fix16, overflow_detect: bool) -> Fix16 {
    let ua = a.0 as u32;
    let ub = b.0 as u32;
    let sum = ua.wrapping_add(ub);

    if overflow_detect && (ua ^ ub) & SIGN_BIT == 0 && (ua ^ sum) & SIGN_BIT != 0 {
        return Fix16::OVERFLOW;
    }

    Fix16(sum as i32)
}

pub(crate) fn sub_with(a: Fix16, b: Fix16, overflow_detect: bool) -> Fix16 {
    let ua = a.0 as u32;
    let ub = b.0 as u32;
    let diff = ua.wrapping_sub(ub);

    if overflow_detect
        && (b == Fix16::MIN || ((ua ^ ub) & SIGN_BIT != 0 && (ua ^ diff) & SIGN_BIT != 0))
    {
        return Fix16::OVERFLOW;
    }

    Fix16(diff as i32)
}

/// Fixed-point multiplication: `round(a * b / 2^16)`.
pub fn fxp_mul(a: Fix16, b: Fix16) -> Fix16 {
    if NO_64BIT {
        narrow::mul(a, b, ARITH)
    } else {
        wide::mul(a, b, ARITH)
    }
}

/// Fixed-point division: `round(a * 2^16 / b)`. Division by zero returns `MIN`.
pub fn fxp_div(a: Fix16, b: Fix16) -> Fix16 {
    if NO_64BIT {
        narrow::div(a, b, ARITH)
    } else {
        wide::div(a, b, ARITH)
    }
}

pub fn fxp_sqrt(a: Fix16) -> Fix16 {
    sqrt::sqrt(a, ROUNDING)
}

/// Helper to convert f32 to Fix16.
pub fn from_f32(f: f32) -> Fix16 {
    convert::from_f32(f)
}

/// Helper to convert Fix16 to f32.
pub fn to_f32(s: Fix16) -> f32 {
    convert::to_f32(s)
}
