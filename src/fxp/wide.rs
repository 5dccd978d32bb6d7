// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 64-bit scalar path. This is the normative implementation; `narrow`
//! mirrors it bit for bit using 32-bit integers only.

use crate::config::{Arith, FRAC_BITS};
use crate::types::scalar::Fix16;

/// Fixed-point multiplication using an i64 intermediate.
pub fn mul(a: Fix16, b: Fix16, mode: Arith) -> Fix16 {
    let mut product = (a.0 as i64) * (b.0 as i64);

    // The upper 17 bits must all equal the sign.
    if mode.overflow_detect && (product >> 63) != (product >> 47) {
        return Fix16::OVERFLOW;
    }

    if !mode.rounding {
        return Fix16((product >> FRAC_BITS) as i32);
    }

    // Subtracting 0x8000 and shifting rounds to result-1, except for negative
    // products whose low word is exactly 0x8000; those need one more unit off.
    // The +1 after the shift compensates both.
    product -= 0x8000;
    product -= ((product as u64) >> 63) as i64;

    Fix16(((product >> FRAC_BITS) as i32).wrapping_add(1))
}

/// Fixed-point division. The quotient is computed on magnitudes and then
/// re-signed, so rounding is symmetric around zero.
pub fn div(a: Fix16, b: Fix16, mode: Arith) -> Fix16 {
    if b.0 == 0 {
        return Fix16::MIN;
    }

    let ua = a.0.unsigned_abs() as u64;
    let ub = b.0.unsigned_abs() as u64;

    // One extra bit below the binary point carries the rounding decision.
    let doubled = (ua << (FRAC_BITS + 1)) / ub;
    let magnitude = if mode.rounding {
        (doubled + 1) >> 1
    } else {
        doubled >> 1
    };

    resign(magnitude, (a.0 < 0) != (b.0 < 0), mode)
}

/// Applies the sign to an unsigned quotient magnitude, detecting overflow.
pub(crate) fn resign(magnitude: u64, negative: bool, mode: Arith) -> Fix16 {
    if mode.overflow_detect && magnitude > i32::MAX as u64 {
        return Fix16::OVERFLOW;
    }

    let low = magnitude as u32 as i32;
    if negative {
        Fix16(low.wrapping_neg())
    } else {
        Fix16(low)
    }
}
