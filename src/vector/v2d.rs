// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::fxp::{fxp_add, fxp_cos, fxp_div, fxp_mul, fxp_sin, fxp_sub};
use crate::math::{fa_dot, fa_norm, Operand};
use crate::types::scalar::Fix16;
use crate::types::vector::V2d;

pub fn v2d_add<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>, b: impl Into<Operand<'a, V2d>>) {
    let a = a.into().value_or(dest);
    let b = b.into().value_or(dest);
    dest.x = fxp_add(a.x, b.x);
    dest.y = fxp_add(a.y, b.y);
}

pub fn v2d_sub<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>, b: impl Into<Operand<'a, V2d>>) {
    let a = a.into().value_or(dest);
    let b = b.into().value_or(dest);
    dest.x = fxp_sub(a.x, b.x);
    dest.y = fxp_sub(a.y, b.y);
}

pub fn v2d_mul_s<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>, b: Fix16) {
    let a = a.into().value_or(dest);
    dest.x = fxp_mul(a.x, b);
    dest.y = fxp_mul(a.y, b);
}

pub fn v2d_div_s<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>, b: Fix16) {
    let a = a.into().value_or(dest);
    dest.x = fxp_div(a.x, b);
    dest.y = fxp_div(a.y, b);
}

pub fn v2d_dot(a: &V2d, b: &V2d) -> Fix16 {
    fa_dot(&a.as_array(), 1, &b.as_array(), 1, 2)
}

pub fn v2d_norm(a: &V2d) -> Fix16 {
    fa_norm(&a.as_array(), 1, 2)
}

/// Scales `a` to unit length. A zero vector yields `OVERFLOW` components.
pub fn v2d_normalize<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>) {
    let a = a.into().value_or(dest);
    v2d_div_s(dest, &a, v2d_norm(&a));
}

/// Counter-clockwise rotation by `angle` radians.
pub fn v2d_rotate<'a>(dest: &mut V2d, a: impl Into<Operand<'a, V2d>>, angle: Fix16) {
    let a = a.into().value_or(dest);
    let c = fxp_cos(angle);
    let s = fxp_sin(angle);

    dest.x = fxp_sub(fxp_mul(a.x, c), fxp_mul(a.y, s));
    dest.y = fxp_add(fxp_mul(a.y, c), fxp_mul(a.x, s));
}

impl Add for V2d {
    type Output = V2d;

    fn add(self, rhs: V2d) -> V2d {
        let mut out = V2d::ZERO;
        v2d_add(&mut out, &self, &rhs);
        out
    }
}

impl Sub for V2d {
    type Output = V2d;

    fn sub(self, rhs: V2d) -> V2d {
        let mut out = V2d::ZERO;
        v2d_sub(&mut out, &self, &rhs);
        out
    }
}

impl Mul<Fix16> for V2d {
    type Output = V2d;

    fn mul(self, rhs: Fix16) -> V2d {
        let mut out = V2d::ZERO;
        v2d_mul_s(&mut out, &self, rhs);
        out
    }
}

impl Div<Fix16> for V2d {
    type Output = V2d;

    fn div(self, rhs: Fix16) -> V2d {
        let mut out = V2d::ZERO;
        v2d_div_s(&mut out, &self, rhs);
        out
    }
}

impl Neg for V2d {
    type Output = V2d;

    fn neg(self) -> V2d {
        V2d::new(-self.x, -self.y)
    }
}
