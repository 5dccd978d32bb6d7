// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for raw i32 representing Q16.16.Scalar type.

use core::ops::{Add, Div, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use crate::config::SCALE;
use crate::error::{FixError, FixResult};
use crate::fxp::convert;
use crate::fxp::ops::{fxp_add, fxp_div, fxp_mul, fxp_sqrt, fxp_sub};

/// Signed Q16.16 fixed-point number: the rational `raw / 65536`.
///
/// `OVERFLOW` shares its bit pattern with `MIN`, so `from_int(-32768)` is
/// indistinguishable from a failed operation. Matrix code that needs reliable
/// signalling uses `ErrorFlags` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fix16(pub i32);

impl Fix16 {
    pub const ZERO: Fix16 = Fix16(0);
    pub const ONE: Fix16 = Fix16(SCALE);
    pub const MAX: Fix16 = Fix16(0x7FFF_FFFF);
    pub const MIN: Fix16 = Fix16(i32::MIN);
    /// Returned by scalar kernels when the result is unrepresentable.
    pub const OVERFLOW: Fix16 = Fix16::MIN;

    pub const PI: Fix16 = Fix16(205_887);
    pub const E: Fix16 = Fix16(178_145);
    pub const FRAC_PI_2: Fix16 = Fix16(102_944);
    pub const FRAC_PI_4: Fix16 = Fix16(51_472);

    /// Reinterprets a raw Q16.16 bit pattern.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fix16(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Exact for `k` in `[-32768, 32767]`.
    #[inline]
    pub const fn from_int(k: i32) -> Self {
        Fix16(k.wrapping_mul(SCALE))
    }

    pub fn to_int(self) -> i32 {
        convert::to_int(self)
    }

    pub fn from_f32(f: f32) -> Self {
        convert::from_f32(f)
    }

    pub fn to_f32(self) -> f32 {
        convert::to_f32(self)
    }

    pub fn from_f64(f: f64) -> Self {
        convert::from_f64(f)
    }

    pub fn to_f64(self) -> f64 {
        convert::to_f64(self)
    }

    /// True when this value is the overflow sentinel.
    #[inline]
    pub fn is_overflow(self) -> bool {
        self == Fix16::OVERFLOW
    }

    /// Maps the overflow sentinel to an error.
    pub fn checked(self) -> FixResult<Fix16> {
        if self.is_overflow() {
            Err(FixError::Overflow)
        } else {
            Ok(self)
        }
    }

    /// Absolute value. `MIN` maps to itself.
    #[inline]
    pub fn abs(self) -> Self {
        Fix16(self.0.wrapping_abs())
    }

    pub fn sq(self) -> Self {
        fxp_mul(self, self)
    }

    pub fn sqrt(self) -> Self {
        fxp_sqrt(self)
    }
}

impl From<i16> for Fix16 {
    fn from(k: i16) -> Self {
        Fix16::from_int(k as i32)
    }
}

impl Add for Fix16 {
    type Output = Fix16;

    fn add(self, rhs: Fix16) -> Fix16 {
        fxp_add(self, rhs)
    }
}

impl Sub for Fix16 {
    type Output = Fix16;

    fn sub(self, rhs: Fix16) -> Fix16 {
        fxp_sub(self, rhs)
    }
}

impl Mul for Fix16 {
    type Output = Fix16;

    fn mul(self, rhs: Fix16) -> Fix16 {
        fxp_mul(self, rhs)
    }
}

impl Div for Fix16 {
    type Output = Fix16;

    fn div(self, rhs: Fix16) -> Fix16 {
        fxp_div(self, rhs)
    }
}

impl Neg for Fix16 {
    type Output = Fix16;

    fn neg(self) -> Fix16 {
        Fix16(self.0.wrapping_neg())
    }
}
