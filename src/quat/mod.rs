// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Quaternion kernels.
//!
//! Rotations use unit quaternions: `q = (cos(t/2), axis * sin(t/2))` rotates
//! by `t` radians about the unit vector `axis`.

use core::ops::{Add, Div, Mul};

use crate::fxp::{fxp_acos, fxp_add, fxp_cos, fxp_div, fxp_mul, fxp_sin, fxp_sq, fxp_sqrt, fxp_sub};
use crate::math::{fa_dot, fa_norm, fa_unalias, Operand};
use crate::matrix::track;
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::quat::Qf16;
use crate::types::scalar::Fix16;
use crate::types::vector::V3d;

/// Half-angles at or below this many raw units are treated as no rotation
/// by `qf16_pow`, since `sin` of them is too small to divide by.
const POW_MIN_HALF_ANGLE: i32 = 10;

const TWO: Fix16 = Fix16::from_int(2);
const FOUR: Fix16 = Fix16::from_int(4);

/// Conjugate `(a, -b, -c, -d)`.
pub fn qf16_conj<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>) {
    let q = q.into().value_or(dest);
    dest.a = q.a;
    dest.b = -q.b;
    dest.c = -q.c;
    dest.d = -q.d;
}

/// Hamilton product `q * r`.
pub fn qf16_mul<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>, r: impl Into<Operand<'a, Qf16>>) {
    let mut tmp = None;
    let (q, r) = fa_unalias(dest, q.into(), r.into(), &mut tmp);

    dest.a = sum4(
        fxp_mul(q.a, r.a),
        -fxp_mul(q.b, r.b),
        -fxp_mul(q.c, r.c),
        -fxp_mul(q.d, r.d),
    );
    dest.b = sum4(
        fxp_mul(q.a, r.b),
        fxp_mul(q.b, r.a),
        fxp_mul(q.c, r.d),
        -fxp_mul(q.d, r.c),
    );
    dest.c = sum4(
        fxp_mul(q.a, r.c),
        -fxp_mul(q.b, r.d),
        fxp_mul(q.c, r.a),
        fxp_mul(q.d, r.b),
    );
    dest.d = sum4(
        fxp_mul(q.a, r.d),
        fxp_mul(q.b, r.c),
        -fxp_mul(q.c, r.b),
        fxp_mul(q.d, r.a),
    );
}

fn sum4(w: Fix16, x: Fix16, y: Fix16, z: Fix16) -> Fix16 {
    fxp_add(fxp_add(w, x), fxp_add(y, z))
}

pub fn qf16_add<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>, r: impl Into<Operand<'a, Qf16>>) {
    let q = q.into().value_or(dest);
    let r = r.into().value_or(dest);
    dest.a = fxp_add(q.a, r.a);
    dest.b = fxp_add(q.b, r.b);
    dest.c = fxp_add(q.c, r.c);
    dest.d = fxp_add(q.d, r.d);
}

pub fn qf16_mul_s<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>, s: Fix16) {
    let q = q.into().value_or(dest);
    dest.a = fxp_mul(q.a, s);
    dest.b = fxp_mul(q.b, s);
    dest.c = fxp_mul(q.c, s);
    dest.d = fxp_mul(q.d, s);
}

pub fn qf16_div_s<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>, s: Fix16) {
    let q = q.into().value_or(dest);
    dest.a = fxp_div(q.a, s);
    dest.b = fxp_div(q.b, s);
    dest.c = fxp_div(q.c, s);
    dest.d = fxp_div(q.d, s);
}

/// Dot product of the four components.
pub fn qf16_dot(q: &Qf16, r: &Qf16) -> Fix16 {
    fa_dot(&q.as_array(), 1, &r.as_array(), 1, 4)
}

pub fn qf16_norm(q: &Qf16) -> Fix16 {
    fa_norm(&q.as_array(), 1, 4)
}

pub fn qf16_normalize<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>) {
    let q = q.into().value_or(dest);
    qf16_div_s(dest, &q, qf16_norm(&q));
}

/// `q^power` for a unit quaternion: scales the rotation angle by `power`.
pub fn qf16_pow<'a>(dest: &mut Qf16, q: impl Into<Operand<'a, Qf16>>, power: Fix16) {
    let q = q.into().value_or(dest);

    let old_half_angle = fxp_acos(q.a);
    let new_half_angle = fxp_mul(old_half_angle, power);

    let multiplier = if old_half_angle.0 > POW_MIN_HALF_ANGLE {
        fxp_div(fxp_sin(new_half_angle), fxp_sin(old_half_angle))
    } else {
        Fix16::ZERO
    };

    dest.a = fxp_cos(new_half_angle);
    dest.b = fxp_mul(q.b, multiplier);
    dest.c = fxp_mul(q.c, multiplier);
    dest.d = fxp_mul(q.d, multiplier);
}

/// Weighted average of two unit quaternions: `weight = 1` gives `q1`,
/// `weight = 0` gives `q2`. The result is normalized.
///
/// Uses the closed-form mean of two rotations, which stays well defined
/// when `q1` and `q2` lie in opposite hemispheres.
pub fn qf16_avg<'a>(
    dest: &mut Qf16,
    q1: impl Into<Operand<'a, Qf16>>,
    q2: impl Into<Operand<'a, Qf16>>,
    weight: Fix16,
) {
    let q1 = q1.into().value_or(dest);
    let q2 = q2.into().value_or(dest);

    let dot = qf16_dot(&q1, &q2);
    let double_weight = fxp_mul(TWO, weight);

    // z = sqrt((2w - 1)^2 + 4w (1 - w) d^2)
    let bias = fxp_sq(fxp_sub(double_weight, Fix16::ONE));
    let spread = fxp_mul(fxp_mul(FOUR, weight), fxp_mul(fxp_sub(Fix16::ONE, weight), fxp_sq(dot)));
    let z = fxp_sqrt(fxp_add(bias, spread));

    let mut first = Qf16::default();
    let mut second = Qf16::default();
    qf16_mul_s(&mut first, &q1, fxp_mul(double_weight, dot));
    qf16_mul_s(&mut second, &q2, fxp_add(fxp_sub(Fix16::ONE, double_weight), z));

    qf16_add(dest, &first, &second);
    qf16_normalize(dest, Operand::Dest);
}

/// Rotation by `angle` radians about the unit vector `axis`. The axis is not
/// normalized here.
pub fn qf16_from_axis_angle(dest: &mut Qf16, axis: &V3d, angle: Fix16) {
    let half_angle = Fix16(angle.0 / 2);
    let sin = fxp_sin(half_angle);

    dest.a = fxp_cos(half_angle);
    dest.b = fxp_mul(axis.x, sin);
    dest.c = fxp_mul(axis.y, sin);
    dest.d = fxp_mul(axis.z, sin);
}

/// Writes the 3x3 rotation matrix of a unit quaternion. Clears any previous
/// flags of `dest`; only `OVERFLOW` can be raised.
///
/// The diagonal is `1 - 2(c^2 + d^2)` and so on, which does not scale with
/// the norm of `q`.
pub fn qf16_to_matrix(dest: &mut Mf16, q: &Qf16) {
    let twice = |x: Fix16| fxp_add(x, x);

    let bb = fxp_sq(q.b);
    let cc = fxp_sq(q.c);
    let dd = fxp_sq(q.d);
    let ab = fxp_mul(q.a, q.b);
    let ac = fxp_mul(q.a, q.c);
    let ad = fxp_mul(q.a, q.d);
    let bc = fxp_mul(q.b, q.c);
    let bd = fxp_mul(q.b, q.d);
    let cd = fxp_mul(q.c, q.d);

    dest.rows = 3;
    dest.columns = 3;
    dest.errors = ErrorFlags::NONE;

    let cells = [
        [
            fxp_sub(Fix16::ONE, twice(fxp_add(cc, dd))),
            twice(fxp_sub(bc, ad)),
            twice(fxp_add(bd, ac)),
        ],
        [
            twice(fxp_add(bc, ad)),
            fxp_sub(Fix16::ONE, twice(fxp_add(bb, dd))),
            twice(fxp_sub(cd, ab)),
        ],
        [
            twice(fxp_sub(bd, ac)),
            twice(fxp_add(cd, ab)),
            fxp_sub(Fix16::ONE, twice(fxp_add(bb, cc))),
        ],
    ];

    for (row, values) in cells.iter().enumerate() {
        for (column, &value) in values.iter().enumerate() {
            dest.data[row][column] = track(&mut dest.errors, value);
        }
    }
}

/// `q = (a, v)`.
pub fn qf16_from_v3d(dest: &mut Qf16, v: &V3d, a: Fix16) {
    dest.a = a;
    dest.b = v.x;
    dest.c = v.y;
    dest.d = v.z;
}

/// The vector part `(b, c, d)`.
pub fn qf16_to_v3d(dest: &mut V3d, q: &Qf16) {
    dest.x = q.b;
    dest.y = q.c;
    dest.z = q.d;
}

/// Rotates `v` by the unit quaternion `q`: `q * (0, v) * q^*`.
pub fn qf16_rotate<'a>(dest: &mut V3d, v: impl Into<Operand<'a, V3d>>, q: &Qf16) {
    let v = v.into().value_or(dest);

    let mut vector = Qf16::default();
    qf16_from_v3d(&mut vector, &v, Fix16::ZERO);

    let mut conj = Qf16::default();
    qf16_conj(&mut conj, q);

    let mut result = Qf16::default();
    qf16_mul(&mut result, q, &vector);
    qf16_mul(&mut result, Operand::Dest, &conj);

    qf16_to_v3d(dest, &result);
}

impl Add for Qf16 {
    type Output = Qf16;

    fn add(self, rhs: Qf16) -> Qf16 {
        let mut out = Qf16::default();
        qf16_add(&mut out, &self, &rhs);
        out
    }
}

/// Hamilton product.
impl Mul for Qf16 {
    type Output = Qf16;

    fn mul(self, rhs: Qf16) -> Qf16 {
        let mut out = Qf16::default();
        qf16_mul(&mut out, &self, &rhs);
        out
    }
}

impl Mul<Fix16> for Qf16 {
    type Output = Qf16;

    fn mul(self, rhs: Fix16) -> Qf16 {
        let mut out = Qf16::default();
        qf16_mul_s(&mut out, &self, rhs);
        out
    }
}

impl Div<Fix16> for Qf16 {
    type Output = Qf16;

    fn div(self, rhs: Fix16) -> Qf16 {
        let mut out = Qf16::default();
        qf16_div_s(&mut out, &self, rhs);
        out
    }
}
