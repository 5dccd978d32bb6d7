// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::math::Operand;
use crate::quat::*;
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::quat::Qf16;
use crate::types::scalar::Fix16;
use crate::types::vector::V3d;

fn q(a: i32, b: i32, c: i32, d: i32) -> Qf16 {
    Qf16::new(Fix16(a), Fix16(b), Fix16(c), Fix16(d))
}

fn qi(a: i32, b: i32, c: i32, d: i32) -> Qf16 {
    Qf16::new(Fix16::from_int(a), Fix16::from_int(b), Fix16::from_int(c), Fix16::from_int(d))
}

const ONE: i32 = Fix16::ONE.0;

fn quarter_turn_z() -> Qf16 {
    let mut out = Qf16::default();
    qf16_from_axis_angle(&mut out, &V3d::from_ints(0, 0, 1), Fix16::FRAC_PI_2);
    out
}

#[test]
fn test_conj_and_arithmetic() {
    let a = qi(1, 2, 3, 4);
    let b = qi(5, 6, 7, 8);
    let mut out = Qf16::default();

    qf16_conj(&mut out, &a);
    assert_eq!(out, qi(1, -2, -3, -4));

    qf16_add(&mut out, &a, &b);
    assert_eq!(out, qi(6, 8, 10, 12));

    qf16_mul_s(&mut out, &a, Fix16::from_int(3));
    assert_eq!(out, qi(3, 6, 9, 12));

    qf16_div_s(&mut out, Operand::Dest, Fix16::from_int(6));
    assert_eq!(out, q(ONE / 2, ONE, 3 * ONE / 2, 2 * ONE));

    assert_eq!(qf16_dot(&a, &b), Fix16::from_int(70));
}

#[test]
fn test_hamilton_product() {
    let i = qi(0, 1, 0, 0);
    let j = qi(0, 0, 1, 0);
    let k = qi(0, 0, 0, 1);
    let mut out = Qf16::default();

    qf16_mul(&mut out, &i, &j);
    assert_eq!(out, k);

    qf16_mul(&mut out, &j, &i);
    assert_eq!(out, qi(0, 0, 0, -1));

    qf16_mul(&mut out, &qi(1, 2, 3, 4), &qi(5, 6, 7, 8));
    assert_eq!(out, qi(-60, 12, 30, 24));

    let mut squared = i;
    qf16_mul(&mut squared, Operand::Dest, Operand::Dest);
    assert_eq!(squared, qi(-1, 0, 0, 0));
}

#[test]
fn test_norm_and_normalize() {
    assert_eq!(qf16_norm(&qi(1, 2, 3, 4)), Fix16(358_955));

    let mut out = Qf16::default();
    qf16_normalize(&mut out, &qi(1, 1, 1, 1));
    assert_eq!(out, q(ONE / 2, ONE / 2, ONE / 2, ONE / 2));

    let mut unit = qi(1, 2, 3, 4);
    qf16_normalize(&mut unit, Operand::Dest);
    assert_eq!(unit, q(11_965, 23_930, 35_896, 47_861));

    let mut product = Qf16::default();
    let mut conj = Qf16::default();
    qf16_conj(&mut conj, &unit);
    qf16_mul(&mut product, &unit, &conj);
    assert_eq!(product, Qf16::IDENTITY);
}

#[test]
fn test_from_axis_angle() {
    assert_eq!(quarter_turn_z(), q(46_341, 0, 0, 46_341));

    let mut half_turn = Qf16::default();
    qf16_from_axis_angle(&mut half_turn, &V3d::from_ints(1, 0, 0), Fix16::PI);
    assert_eq!(half_turn, q(0, ONE, 0, 0));
}

#[test]
fn test_rotate() {
    let mut out = V3d::ZERO;
    qf16_rotate(&mut out, &V3d::from_ints(1, 0, 0), &quarter_turn_z());
    assert_eq!(out, V3d::from_ints(0, 1, 0));

    let mut half_turn = Qf16::default();
    qf16_from_axis_angle(&mut half_turn, &V3d::from_ints(1, 0, 0), Fix16::PI);
    qf16_rotate(&mut out, Operand::Dest, &half_turn);
    assert_eq!(out, V3d::from_ints(0, -1, 0));

    let mut about_y = Qf16::default();
    qf16_from_axis_angle(&mut about_y, &V3d::from_ints(0, 1, 0), Fix16::FRAC_PI_2);
    qf16_rotate(&mut out, &V3d::from_ints(0, 0, 2), &about_y);
    assert_eq!(out, V3d::from_ints(2, 0, 0));
}

#[test]
fn test_to_matrix() {
    let mut m = Mf16::default();
    m.errors = ErrorFlags::SINGULAR;

    qf16_to_matrix(&mut m, &quarter_turn_z());
    assert_eq!(m, Mf16::from_ints(&[[0, -1, 0], [1, 0, 0], [0, 0, 1]]).unwrap());

    qf16_to_matrix(&mut m, &q(ONE / 2, ONE / 2, ONE / 2, ONE / 2));
    assert_eq!(m, Mf16::from_ints(&[[0, 0, 1], [1, 0, 0], [0, 1, 0]]).unwrap());

    let mut about_y = Qf16::default();
    qf16_from_axis_angle(&mut about_y, &V3d::from_ints(0, 1, 0), Fix16::FRAC_PI_2);
    qf16_to_matrix(&mut m, &about_y);
    assert_eq!(m, Mf16::from_ints(&[[0, 0, 1], [0, 1, 0], [-1, 0, 0]]).unwrap());
}

#[test]
fn test_to_matrix_ignores_norm_on_diagonal() {
    // Rounding leaves quaternions slightly off unit length; the diagonal
    // must still be 1 for a rotation by zero.
    let mut m = Mf16::default();
    qf16_to_matrix(&mut m, &Qf16::new(Fix16::from_f32(1.01), Fix16::ZERO, Fix16::ZERO, Fix16::ZERO));
    assert_eq!(m, Mf16::identity(3).unwrap());

    qf16_to_matrix(&mut m, &Qf16::new(Fix16::from_f32(0.99), Fix16::ZERO, Fix16::ZERO, Fix16::ZERO));
    assert_eq!(m, Mf16::identity(3).unwrap());
}

#[test]
fn test_pow() {
    let quarter = quarter_turn_z();
    let mut out = Qf16::default();

    qf16_pow(&mut out, &quarter, Fix16::from_int(2));
    assert_eq!(out, q(0, 0, 0, 65_537));

    qf16_pow(&mut out, &quarter, Fix16::from_f32(0.5));
    assert_eq!(out, q(60_548, 0, 0, 25_080));

    let mut identity = Qf16::IDENTITY;
    qf16_pow(&mut identity, Operand::Dest, Fix16::from_int(3));
    assert_eq!(identity, q(65_537, 0, 0, 0));
}

#[test]
fn test_avg() {
    let quarter = quarter_turn_z();
    let mut out = Qf16::default();

    qf16_avg(&mut out, &quarter, &Qf16::IDENTITY, Fix16::from_f32(0.5));
    assert_eq!(out, q(60_548, 0, 0, 25_080));

    qf16_avg(&mut out, &quarter, &Qf16::IDENTITY, Fix16::ONE);
    assert_eq!(out, quarter);

    qf16_avg(&mut out, &quarter, &Qf16::IDENTITY, Fix16::ZERO);
    assert_eq!(out, Qf16::IDENTITY);

    // Weighted toward the identity, still a unit rotation about z.
    qf16_avg(&mut out, &quarter, &Qf16::IDENTITY, Fix16::from_f32(0.25));
    assert_eq!(out, q(64_690, 0, 0, 10_498));
    assert!(out.d.0 > 0 && out.d.0 < 25_080);
}

#[test]
fn test_v3d_conversions() {
    let v = V3d::from_ints(1, 2, 3);
    let mut out = Qf16::default();
    qf16_from_v3d(&mut out, &v, Fix16::from_int(9));
    assert_eq!(out, qi(9, 1, 2, 3));

    let mut back = V3d::ZERO;
    qf16_to_v3d(&mut back, &out);
    assert_eq!(back, v);
}

#[test]
fn test_operators() {
    let a = qi(1, 2, 3, 4);
    let b = qi(5, 6, 7, 8);

    assert_eq!(a + b, qi(6, 8, 10, 12));
    assert_eq!(a * b, qi(-60, 12, 30, 24));
    assert_eq!(a * Fix16::from_int(2), qi(2, 4, 6, 8));
    assert_eq!(a / Fix16::from_int(2), q(ONE / 2, ONE, 3 * ONE / 2, 2 * ONE));
}
