// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point dot product.

use crate::config::{Arith, ARITH, FRAC_BITS, NO_64BIT};
use crate::fxp::{narrow, ops};
use crate::types::scalar::Fix16;

/// Strided dot product: `sum(a[i * a_stride] * b[i * b_stride])` for `i < n`.
///
/// Returns `OVERFLOW` when the result is unrepresentable. Panics if either
/// slice is shorter than the strided range it is asked to cover.
pub fn fa_dot(a: &[Fix16], a_stride: usize, b: &[Fix16], b_stride: usize, n: usize) -> Fix16 {
    if NO_64BIT {
        dot_narrow(a, a_stride, b, b_stride, n, ARITH)
    } else {
        dot_wide(a, a_stride, b, b_stride, n, ARITH)
    }
}

/// Accumulates the full products in an i128 and rounds once at the end, so
/// intermediate sums may leave the Q16.16 range as long as the total fits.
pub fn dot_wide(
    a: &[Fix16],
    a_stride: usize,
    b: &[Fix16],
    b_stride: usize,
    n: usize,
    mode: Arith,
) -> Fix16 {
    // Each product is at most 2^62 in magnitude; an i128 sum cannot wrap.
    let mut total: i128 = 0;

    for i in 0..n {
        let x = a[i * a_stride].0;
        let y = b[i * b_stride].0;
        if x != 0 && y != 0 {
            total += x as i128 * y as i128;
        }
    }

    // Everything above bit 47 must equal the sign.
    if mode.overflow_detect && (total >> 47) != (total >> 127) {
        return Fix16::OVERFLOW;
    }

    let mut sum = total as i64;
    if sum < 0 && mode.rounding {
        // Ties on negative sums round away from zero.
        sum = sum.wrapping_sub(1);
    }

    let mut result = (sum >> FRAC_BITS) as i32;
    if mode.rounding {
        result = result.wrapping_add(((sum & 0x8000) >> 15) as i32);
    }

    Fix16(result)
}

/// 32-bit fallback: rounds each product and sums in Q16.16.
///
/// Unlike `dot_wide` this can overflow on an intermediate sum, and the
/// per-term rounding makes it differ from the wide result by a few units.
pub fn dot_narrow(
    a: &[Fix16],
    a_stride: usize,
    b: &[Fix16],
    b_stride: usize,
    n: usize,
    mode: Arith,
) -> Fix16 {
    let mut sum = Fix16::ZERO;

    for i in 0..n {
        let x = a[i * a_stride];
        let y = b[i * b_stride];
        if x.0 == 0 || y.0 == 0 {
            continue;
        }

        let product = narrow::mul(x, y, mode);
        sum = ops::add_with(sum, product, mode.overflow_detect);

        if mode.overflow_detect && (sum.is_overflow() || product.is_overflow()) {
            return Fix16::OVERFLOW;
        }
    }

    sum
}
