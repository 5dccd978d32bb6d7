// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! End-to-end checks through the public API.

use fixmatrix_kernel::digest::digest_of;
use fixmatrix_kernel::matrix::{mf16_mul, mf16_mul_at, mf16_qr_decomposition, mf16_solve};
use fixmatrix_kernel::quat::qf16_rotate;
use fixmatrix_kernel::{ErrorFlags, Fix16, FixError, Mf16, Qf16, V3d};

#[cfg(feature = "rounding")]
fn max_diff(a: &Mf16, b: &Mf16) -> i32 {
    a.cells()
        .zip(b.cells())
        .map(|(x, y)| (x.0 - y.0).abs())
        .max()
        .unwrap_or(0)
}

#[test]
fn multiply_3x3_is_exact() {
    let a = Mf16::from_ints(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    let mut product = Mf16::default();

    mf16_mul(&mut product, &a, &a);
    assert_eq!(
        product,
        Mf16::from_ints(&[[30, 36, 42], [66, 81, 96], [102, 126, 150]]).unwrap()
    );
    assert!(product.check().is_ok());
}

#[cfg(feature = "overflow-detect")]
#[test]
fn multiply_reports_overflow() {
    let mut a = Mf16::from_ints(&[[1000, 100, 100], [100, 5, 6], [100, 8, 9]]).unwrap();
    let mut product = Mf16::default();

    mf16_mul(&mut product, &a, &a);
    assert!(product.errors.contains(ErrorFlags::OVERFLOW));
    assert_eq!(product.check(), Err(FixError::Overflow));

    a[(0, 0)] = Fix16::from_int(100);
    mf16_mul(&mut product, &a, &a);
    assert_eq!(product.errors, ErrorFlags::NONE);
}

#[test]
fn transposed_vector_dot() {
    let a = Mf16::from_ints(&[[101], [102], [103], [104], [105]]).unwrap();
    let b = Mf16::from_ints(&[[51], [52], [53], [54], [55]]).unwrap();
    let mut out = Mf16::default();

    mf16_mul_at(&mut out, &a, &b);
    assert_eq!(out, Mf16::from_ints(&[[27_305]]).unwrap());
}

#[cfg(feature = "rounding")]
#[test]
fn qr_round_trip() {
    let a = Mf16::from_ints(&[[1, 2, 3], [4, 5, 6], [7, 8, 10]]).unwrap();
    let mut q = Mf16::default();
    let mut r = Mf16::default();
    let mut check = Mf16::default();

    mf16_qr_decomposition(&mut q, &mut r, &a, 1);
    assert!(r.check().is_ok());

    mf16_mul_at(&mut check, &q, &q);
    assert!(max_diff(&check, &Mf16::identity(3).unwrap()) < 5);

    mf16_mul(&mut check, &q, &r);
    assert!(max_diff(&check, &a) < 5);
}

#[cfg(feature = "rounding")]
#[test]
fn least_squares_4x3() {
    let a = Mf16::from_ints(&[[31, 41, 59], [26, 53, 58], [97, 93, 23], [84, 62, 64]]).unwrap();
    let b = Mf16::from_ints(&[[100], [100], [100], [100]]).unwrap();
    let mut q = Mf16::default();
    let mut r = Mf16::default();
    let mut x = Mf16::default();

    mf16_qr_decomposition(&mut q, &mut r, &a, 1);
    mf16_solve(&mut x, &q, &r, &b);
    assert!(x.check().is_ok());

    let expected = [-0.31426, 1.16055, 0.90470];
    assert_eq!((x.rows, x.columns), (3, 1));
    for (row, &value) in expected.iter().enumerate() {
        let diff = (x[(row, 0)].0 - Fix16::from_f64(value).0).abs();
        assert!(diff < 20, "x[{}] = {} ({} raw off)", row, x[(row, 0)], diff);
    }
}

#[test]
fn quaternion_rotation_is_exact() {
    let half = Fix16::from_f32(0.5);
    let q = Qf16::new(half, half, half, half);
    let mut v = V3d::ZERO;

    qf16_rotate(&mut v, &V3d::from_ints(1, 2, 3), &q);
    assert_eq!(v, V3d::from_ints(3, 1, 2));
}

#[test]
fn values_survive_serialization() {
    let config = bincode::config::standard();

    let mut m = Mf16::from_ints(&[[1, -2, 3], [4, 5, -6]]).unwrap();
    m.errors = ErrorFlags::SINGULAR;
    let bytes = bincode::serde::encode_to_vec(m, config).unwrap();
    let (decoded, _): (Mf16, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(decoded, m);
    assert_eq!(digest_of(&decoded), digest_of(&m));

    let q = Qf16::new(Fix16::ONE, Fix16(-7), Fix16::MIN, Fix16::MAX);
    let bytes = bincode::serde::encode_to_vec(q, config).unwrap();
    let (decoded, _): (Qf16, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(decoded, q);
}
