// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::fxp::{fxp_add, fxp_div, fxp_mul, fxp_sub};
use crate::math::{fa_dot, fa_norm, fa_unalias, Operand};
use crate::types::scalar::Fix16;
use crate::types::vector::V3d;

pub fn v3d_add<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>, b: impl Into<Operand<'a, V3d>>) {
    let a = a.into().value_or(dest);
    let b = b.into().value_or(dest);
    dest.x = fxp_add(a.x, b.x);
    dest.y = fxp_add(a.y, b.y);
    dest.z = fxp_add(a.z, b.z);
}

pub fn v3d_sub<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>, b: impl Into<Operand<'a, V3d>>) {
    let a = a.into().value_or(dest);
    let b = b.into().value_or(dest);
    dest.x = fxp_sub(a.x, b.x);
    dest.y = fxp_sub(a.y, b.y);
    dest.z = fxp_sub(a.z, b.z);
}

pub fn v3d_mul_s<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>, b: Fix16) {
    let a = a.into().value_or(dest);
    dest.x = fxp_mul(a.x, b);
    dest.y = fxp_mul(a.y, b);
    dest.z = fxp_mul(a.z, b);
}

pub fn v3d_div_s<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>, b: Fix16) {
    let a = a.into().value_or(dest);
    dest.x = fxp_div(a.x, b);
    dest.y = fxp_div(a.y, b);
    dest.z = fxp_div(a.z, b);
}

pub fn v3d_dot(a: &V3d, b: &V3d) -> Fix16 {
    fa_dot(&a.as_array(), 1, &b.as_array(), 1, 3)
}

pub fn v3d_norm(a: &V3d) -> Fix16 {
    fa_norm(&a.as_array(), 1, 3)
}

/// Scales `a` to unit length. A zero vector yields `OVERFLOW` components.
pub fn v3d_normalize<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>) {
    let a = a.into().value_or(dest);
    v3d_div_s(dest, &a, v3d_norm(&a));
}

/// Cross product `a x b`. Every output component reads both inputs, so an
/// aliased input is copied first.
pub fn v3d_cross<'a>(dest: &mut V3d, a: impl Into<Operand<'a, V3d>>, b: impl Into<Operand<'a, V3d>>) {
    let mut tmp = None;
    let (a, b) = fa_unalias(dest, a.into(), b.into(), &mut tmp);

    dest.x = fxp_sub(fxp_mul(a.y, b.z), fxp_mul(a.z, b.y));
    dest.y = fxp_sub(fxp_mul(a.z, b.x), fxp_mul(a.x, b.z));
    dest.z = fxp_sub(fxp_mul(a.x, b.y), fxp_mul(a.y, b.x));
}

impl Add for V3d {
    type Output = V3d;

    fn add(self, rhs: V3d) -> V3d {
        let mut out = V3d::ZERO;
        v3d_add(&mut out, &self, &rhs);
        out
    }
}

impl Sub for V3d {
    type Output = V3d;

    fn sub(self, rhs: V3d) -> V3d {
        let mut out = V3d::ZERO;
        v3d_sub(&mut out, &self, &rhs);
        out
    }
}

impl Mul<Fix16> for V3d {
    type Output = V3d;

    fn mul(self, rhs: Fix16) -> V3d {
        let mut out = V3d::ZERO;
        v3d_mul_s(&mut out, &self, rhs);
        out
    }
}

impl Div<Fix16> for V3d {
    type Output = V3d;

    fn div(self, rhs: Fix16) -> V3d {
        let mut out = V3d::ZERO;
        v3d_div_s(&mut out, &self, rhs);
        out
    }
}

impl Neg for V3d {
    type Output = V3d;

    fn neg(self) -> V3d {
        V3d::new(-self.x, -self.y, -self.z)
    }
}
