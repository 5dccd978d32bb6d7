// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Conversions between Fix16 and integers / floats.
//!
//! Float conversions only use multiplication and `as` casts, which are
//! available in `core`.

use crate::config::{ROUNDING, SCALE};
use crate::types::scalar::Fix16;

/// Rounds to the nearest integer, ties away from zero.
/// Truncates toward minus infinity when rounding is disabled.
pub fn to_int(a: Fix16) -> i32 {
    if !ROUNDING {
        return a.0 >> 16;
    }

    let half = (SCALE >> 1) as i64;
    let wide = a.0 as i64;
    if wide >= 0 {
        ((wide + half) / SCALE as i64) as i32
    } else {
        ((wide - half) / SCALE as i64) as i32
    }
}

pub fn from_f32(f: f32) -> Fix16 {
    let mut temp = f * SCALE as f32;
    if ROUNDING {
        temp += if temp >= 0.0 { 0.5 } else { -0.5 };
    }
    Fix16(temp as i32)
}

pub fn to_f32(a: Fix16) -> f32 {
    a.0 as f32 / SCALE as f32
}

pub fn from_f64(f: f64) -> Fix16 {
    let mut temp = f * SCALE as f64;
    if ROUNDING {
        temp += if temp >= 0.0 { 0.5 } else { -0.5 };
    }
    Fix16(temp as i32)
}

pub fn to_f64(a: Fix16) -> f64 {
    a.0 as f64 / SCALE as f64
}
