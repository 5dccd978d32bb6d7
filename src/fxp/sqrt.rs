// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Square root, shared by both scalar paths (it never needs 64-bit values).

use crate::types::scalar::Fix16;

/// Base-2 digit-by-digit square root.
///
/// The main loop runs twice: the first pass produces the top 24 bits of the
/// answer, the second the low 8 bits, so no intermediate exceeds 32 bits.
/// Negative inputs return `-sqrt(-a)`.
pub fn sqrt(a: Fix16, rounding: bool) -> Fix16 {
    let negative = a.0 < 0;
    let mut num = a.0.unsigned_abs();
    let mut result: u32 = 0;

    // Most inputs are below 16.0; starting lower saves loop iterations.
    let mut bit: u32 = if num & 0xFFF0_0000 != 0 { 1 << 30 } else { 1 << 18 };
    while bit > num {
        bit >>= 2;
    }

    for pass in 0..2 {
        while bit != 0 {
            if num >= result.wrapping_add(bit) {
                num = num.wrapping_sub(result.wrapping_add(bit));
                result = (result >> 1).wrapping_add(bit);
            } else {
                result >>= 1;
            }
            bit >>= 2;
        }

        if pass == 0 {
            if num > 65535 {
                // num is too large to shift left by 16, so add 0.5 to the
                // result by hand: num = num - result - 0.5
                num = num.wrapping_sub(result);
                num = (num << 16).wrapping_sub(1 << 15);
                result = (result << 16).wrapping_add(1 << 15);
            } else {
                num <<= 16;
                result <<= 16;
            }

            bit = 1 << 14;
        }
    }

    // Round up if the next bit would have been 1.
    if rounding && num > result {
        result = result.wrapping_add(1);
    }

    let root = result as i32;
    if negative {
        Fix16(root.wrapping_neg())
    } else {
        Fix16(root)
    }
}
