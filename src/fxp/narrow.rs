// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-bit scalar path for targets without 64-bit integers.
//!
//! Every function returns exactly the bits `wide` returns for the same
//! inputs and mode.

use crate::config::{Arith, FRAC_BITS};
use crate::types::scalar::Fix16;

/// Fixed-point multiplication by the halfword school method.
///
/// ```text
///          AB
///      *   CD
/// -----------
///          BD  16 * 16 -> 32 bit products
///         CB
///         AD
///        AC
///       |----| 64 bit product
/// ```
pub fn mul(a: Fix16, b: Fix16, mode: Arith) -> Fix16 {
    let hi_a = a.0 >> 16;
    let hi_c = b.0 >> 16;
    let lo_b = (a.0 & 0xFFFF) as u32;
    let lo_d = (b.0 & 0xFFFF) as u32;

    let ac = hi_a * hi_c;
    let ad = hi_a * lo_d as i32;
    let cb = hi_c * lo_b as i32;
    let bd = lo_b * lo_d;

    let mut product_hi = ac + (ad >> 16) + (cb >> 16);

    // Carries from the lower word into the upper one.
    let ad_lo = (ad as u32) << 16;
    let cb_lo = (cb as u32) << 16;
    let mid = ad_lo.wrapping_add(cb_lo);
    if mid < ad_lo {
        product_hi += 1;
    }
    let mut product_lo = bd.wrapping_add(mid);
    if product_lo < bd {
        product_hi += 1;
    }

    // The upper 17 bits must all equal the sign.
    if mode.overflow_detect && (product_hi >> 31) != (product_hi >> 15) {
        return Fix16::OVERFLOW;
    }

    if mode.rounding {
        // Same correction as the 64-bit path, with the borrow propagated by hand.
        let before = product_lo;
        product_lo = product_lo.wrapping_sub(0x8000);
        product_lo = product_lo.wrapping_sub((product_hi as u32) >> 31);
        if product_lo > before {
            product_hi = product_hi.wrapping_sub(1);
        }

        let result = (product_hi << 16) | (product_lo >> 16) as i32;
        return Fix16(result.wrapping_add(1));
    }

    Fix16((product_hi << 16) | (product_lo >> 16) as i32)
}

/// Fixed-point division by binary long division of the 48-bit numerator
/// `|a| << 16` by `|b|`, keeping the remainder in 32 bits.
pub fn div(a: Fix16, b: Fix16, mode: Arith) -> Fix16 {
    if b.0 == 0 {
        return Fix16::MIN;
    }

    let ua = a.0.unsigned_abs();
    let ub = b.0.unsigned_abs();

    let mut remainder: u32 = 0;
    let mut quotient: u32 = 0;
    // Set once a quotient bit has been shifted past bit 31.
    let mut spilled = false;

    for bit in (0..32 + FRAC_BITS).rev() {
        let next = if bit >= FRAC_BITS {
            (ua >> (bit - FRAC_BITS)) & 1
        } else {
            0
        };
        // remainder < ub <= 2^31, so doubling cannot wrap.
        remainder = (remainder << 1) | next;

        spilled |= quotient & 0x8000_0000 != 0;
        quotient <<= 1;

        if remainder >= ub {
            remainder -= ub;
            quotient |= 1;
        }
    }

    let mut magnitude = quotient;
    if mode.rounding && remainder << 1 >= ub {
        let (sum, carry) = magnitude.overflowing_add(1);
        magnitude = sum;
        spilled |= carry;
    }

    let negative = (a.0 < 0) != (b.0 < 0);
    if mode.overflow_detect && (spilled || magnitude > i32::MAX as u32) {
        return Fix16::OVERFLOW;
    }

    let low = magnitude as i32;
    if negative {
        Fix16(low.wrapping_neg())
    } else {
        Fix16(low)
    }
}
