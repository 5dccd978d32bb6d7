// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::math::Operand;
use crate::types::scalar::Fix16;
use crate::types::vector::{V2d, V3d};
use crate::vector::*;

fn f(x: f32) -> Fix16 {
    Fix16::from_f32(x)
}

fn near(a: Fix16, b: Fix16, tolerance: i32) -> bool {
    (a.0 - b.0).abs() <= tolerance
}

#[test]
fn test_v2d_arithmetic() {
    let a = V2d::from_ints(1, 2);
    let b = V2d::from_ints(3, -5);
    let mut out = V2d::ZERO;

    v2d_add(&mut out, &a, &b);
    assert_eq!(out, V2d::from_ints(4, -3));

    v2d_sub(&mut out, &a, &b);
    assert_eq!(out, V2d::from_ints(-2, 7));

    v2d_mul_s(&mut out, &a, f(1.5));
    assert_eq!(out, V2d::new(f(1.5), f(3.0)));

    v2d_div_s(&mut out, &b, Fix16::from_int(2));
    assert_eq!(out, V2d::new(f(1.5), f(-2.5)));

    assert_eq!(v2d_dot(&a, &b), Fix16::from_int(-7));
    assert_eq!(v2d_norm(&V2d::from_ints(3, 4)), Fix16::from_int(5));
}

#[test]
fn test_v2d_in_place() {
    let mut v = V2d::from_ints(1, 2);
    v2d_add(&mut v, Operand::Dest, Operand::Dest);
    assert_eq!(v, V2d::from_ints(2, 4));

    v2d_sub(&mut v, &V2d::from_ints(10, 10), Operand::Dest);
    assert_eq!(v, V2d::from_ints(8, 6));

    v2d_normalize(&mut v, Operand::Dest);
    assert_eq!(v, V2d::new(Fix16(52_429), Fix16(39_322)));
}

#[test]
fn test_v2d_rotate() {
    let mut out = V2d::ZERO;
    v2d_rotate(&mut out, &V2d::from_ints(1, 0), Fix16::FRAC_PI_2);
    assert!(near(out.x, Fix16::ZERO, 2));
    assert!(near(out.y, Fix16::ONE, 2));

    let mut v = V2d::from_ints(3, 4);
    v2d_rotate(&mut v, Operand::Dest, Fix16::PI);
    assert!(near(v.x, Fix16::from_int(-3), 8));
    assert!(near(v.y, Fix16::from_int(-4), 8));
}

#[test]
fn test_v3d_arithmetic() {
    let a = V3d::from_ints(1, 2, 3);
    let b = V3d::from_ints(-4, 5, 6);
    let mut out = V3d::ZERO;

    v3d_add(&mut out, &a, &b);
    assert_eq!(out, V3d::from_ints(-3, 7, 9));

    v3d_sub(&mut out, &a, &b);
    assert_eq!(out, V3d::from_ints(5, -3, -3));

    v3d_mul_s(&mut out, &a, Fix16::from_int(-2));
    assert_eq!(out, V3d::from_ints(-2, -4, -6));

    v3d_div_s(&mut out, &a, Fix16::from_int(2));
    assert_eq!(out, V3d::new(f(0.5), f(1.0), f(1.5)));

    assert_eq!(v3d_dot(&a, &b), Fix16::from_int(24));
    assert_eq!(v3d_norm(&V3d::from_ints(1, 2, 2)), Fix16::from_int(3));
}

#[test]
fn test_v3d_normalize() {
    let mut v = V3d::ZERO;
    v3d_normalize(&mut v, &V3d::from_ints(1, 2, 2));
    assert_eq!(v, V3d::new(Fix16(21_845), Fix16(43_691), Fix16(43_691)));

    // Zero length has no direction.
    v3d_normalize(&mut v, &V3d::ZERO);
    assert_eq!(v.x, Fix16::OVERFLOW);
}

#[test]
fn test_v3d_cross() {
    let mut out = V3d::ZERO;
    v3d_cross(&mut out, &V3d::from_ints(1, 0, 0), &V3d::from_ints(0, 1, 0));
    assert_eq!(out, V3d::from_ints(0, 0, 1));

    let a = V3d::new(f(1.5), f(-2.25), f(3.0));
    let b = V3d::new(f(0.5), f(4.0), f(-1.75));
    let mut ab = V3d::ZERO;
    let mut ba = V3d::ZERO;
    v3d_cross(&mut ab, &a, &b);
    v3d_cross(&mut ba, &b, &a);

    assert_eq!(ab, V3d::new(f(-8.0625), f(4.125), f(7.125)));
    assert_eq!(ab, -ba);
    assert_eq!(v3d_dot(&ab, &a), Fix16::ZERO);
    assert_eq!(v3d_dot(&ab, &b), Fix16::ZERO);
}

#[test]
fn test_v3d_cross_aliased() {
    let a = V3d::new(f(1.5), f(-2.25), f(3.0));
    let b = V3d::new(f(0.5), f(4.0), f(-1.75));
    let mut expected = V3d::ZERO;
    v3d_cross(&mut expected, &a, &b);

    let mut v = a;
    v3d_cross(&mut v, Operand::Dest, &b);
    assert_eq!(v, expected);

    let mut v = b;
    v3d_cross(&mut v, &a, Operand::Dest);
    assert_eq!(v, expected);

    let mut v = a;
    v3d_cross(&mut v, Operand::Dest, Operand::Dest);
    assert_eq!(v, V3d::ZERO);
}

#[test]
fn test_vector_operators() {
    let a = V3d::from_ints(1, 2, 3);
    let b = V3d::from_ints(3, 2, 1);
    assert_eq!(a + b, V3d::from_ints(4, 4, 4));
    assert_eq!(a - b, V3d::from_ints(-2, 0, 2));
    assert_eq!(a * Fix16::from_int(3), V3d::from_ints(3, 6, 9));
    assert_eq!(b / Fix16::from_int(-1), V3d::from_ints(-3, -2, -1));

    let p = V2d::from_ints(5, -5);
    assert_eq!(p + p, V2d::from_ints(10, -10));
    assert_eq!(-p, V2d::from_ints(-5, 5));
    assert_eq!(p * Fix16::ZERO, V2d::ZERO);
    assert_eq!((p - p) / Fix16::ONE, V2d::ZERO);
    assert_eq!(V3d::from([Fix16::ONE; 3]), V3d::from_ints(1, 1, 1));
}
