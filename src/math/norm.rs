// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Euclidean norm over strided arrays.
//!
//! Squaring a Q16.16 value above 128.0 already leaves little headroom, so
//! both paths rescale before summing and undo the scale on the root.

use crate::config::{Arith, ARITH, NO_64BIT};
use crate::fxp::{narrow, ops, sqrt};
use crate::types::scalar::Fix16;

/// `sqrt(sum(a[i * stride]^2))` for `i < n`.
pub fn fa_norm(a: &[Fix16], stride: usize, n: usize) -> Fix16 {
    if NO_64BIT {
        norm_narrow(a, stride, n, ARITH)
    } else {
        norm_wide(a, stride, n, ARITH)
    }
}

/// Shifts left for positive `scale`, arithmetic right for negative.
fn scale_value(value: Fix16, scale: i32, overflow_detect: bool) -> Fix16 {
    if scale > 0 {
        let shifted = value.0 << scale;
        if overflow_detect && shifted >> scale != value.0 {
            return Fix16::OVERFLOW;
        }
        Fix16(shifted)
    } else if scale < 0 {
        Fix16(value.0 >> -scale)
    } else {
        value
    }
}

pub fn norm_wide(a: &[Fix16], stride: usize, n: usize, mode: Arith) -> Fix16 {
    let mut sum: u64 = 0;
    for i in 0..n {
        let v = a[i * stride].0 as i64;
        sum = sum.saturating_add((v * v) as u64);
    }

    // A saturated sum means a norm above 65536.0.
    if sum == u64::MAX {
        return if mode.overflow_detect { Fix16::OVERFLOW } else { Fix16::MAX };
    }

    // Bring the sum below 2^31 with an even shift so the root can be
    // shifted back by half of it.
    let high = (sum >> 32) as u32;
    let mut scale: i32 = if high != 0 {
        33 - high.leading_zeros() as i32
    } else if sum & 0x8000_0000 != 0 {
        1
    } else {
        0
    };
    if scale & 1 != 0 {
        scale += 1;
    }

    let root = sqrt::sqrt(Fix16((sum >> scale) as i32), mode.rounding);

    // `sqrt` reads its argument as Q16.16, so it returns the integer root of
    // the raw sum times 2^8.
    scale_value(root, scale / 2 - 8, mode.overflow_detect)
}

pub fn norm_narrow(a: &[Fix16], stride: usize, n: usize, mode: Arith) -> Fix16 {
    let mut max: u32 = 0;
    for i in 0..n {
        max |= a[i * stride].0.unsigned_abs();
    }

    // Keep every component below 128.0 and leave log2(n) bits of headroom
    // for the sum of squares.
    let len_bits = (usize::BITS - n.leading_zeros()) as i32;
    let scale = max.leading_zeros() as i32 - 9 - len_bits / 2;

    let mut sum = Fix16::ZERO;
    for i in 0..n {
        let v = scale_value(a[i * stride], scale, mode.overflow_detect);
        let product = narrow::mul(v, v, mode);
        sum = ops::add_with(sum, product, mode.overflow_detect);
    }

    if mode.overflow_detect && sum.is_overflow() {
        return sum;
    }

    scale_value(sqrt::sqrt(sum, mode.rounding), -scale, mode.overflow_detect)
}
