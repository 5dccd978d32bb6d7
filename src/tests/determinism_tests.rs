// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::digest::{digest_of, StateDigest};
use crate::matrix::{mf16_mul, mf16_qr_decomposition};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::quat::Qf16;
use crate::types::scalar::Fix16;
use crate::types::vector::{V2d, V3d};

const EMPTY_BLAKE3: [u8; 32] = [
    0xaf, 0x13, 0x49, 0xb9, 0xf5, 0xf9, 0xa1, 0xa6, 0xa0, 0x40, 0x4d, 0xea, 0x36, 0xdc, 0xc9, 0x49,
    0x9b, 0xcb, 0x25, 0xc9, 0xad, 0xc1, 0x12, 0xb7, 0xcc, 0x9a, 0x93, 0xca, 0xe4, 0x1f, 0x32, 0x62,
];

fn sample() -> Mf16 {
    Mf16::from_ints(&[[12, -51, 4], [6, 167, -68], [-4, 24, -41]]).unwrap()
}

#[test]
fn test_empty_digest() {
    assert_eq!(StateDigest::new().finalize(), EMPTY_BLAKE3);
    let nothing: &[Fix16] = &[];
    assert_eq!(digest_of(nothing), EMPTY_BLAKE3);
}

#[test]
fn test_digest_layout() {
    let v = V3d::from_ints(1, -2, 3);
    let mut manual = StateDigest::new();
    manual.write_i32(v.x.0).write_i32(v.y.0).write_i32(v.z.0);
    assert_eq!(digest_of(&v), manual.finalize());

    let components = [v.x, v.y, v.z];
    assert_eq!(digest_of(&components[..]), digest_of(&v));

    let m = Mf16::from_ints(&[[1, 2]]).unwrap();
    let mut manual = StateDigest::new();
    manual
        .write_u8(1)
        .write_u8(2)
        .write_u8(0)
        .write_i32(Fix16::ONE.0)
        .write_i32(2 * Fix16::ONE.0);
    assert_eq!(digest_of(&m), manual.finalize());
}

#[test]
fn test_repeated_runs_match() {
    let run = || {
        let mut q = Mf16::default();
        let mut r = Mf16::default();
        let mut product = Mf16::default();
        mf16_qr_decomposition(&mut q, &mut r, &sample(), 1);
        mf16_mul(&mut product, &q, &r);

        let mut digest = StateDigest::new();
        digest.update(&q).update(&r).update(&product);
        digest.finalize()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_inactive_cells_are_ignored() {
    let a = sample();
    let mut b = a;
    b.data[7][7] = Fix16::from_int(5);
    b.data[0][3] = Fix16::MIN;
    assert_eq!(digest_of(&a), digest_of(&b));
}

#[test]
fn test_distinct_values_differ() {
    let a = sample();

    let mut flagged = a;
    flagged.errors = ErrorFlags::OVERFLOW;
    assert_ne!(digest_of(&a), digest_of(&flagged));

    let mut changed = a;
    changed.data[2][2] = Fix16(changed.data[2][2].0 + 1);
    assert_ne!(digest_of(&a), digest_of(&changed));

    // Same cells, different shape.
    let row = Mf16::from_ints(&[[1, 2, 3, 4]]).unwrap();
    let square = Mf16::from_ints(&[[1, 2], [3, 4]]).unwrap();
    assert_ne!(digest_of(&row), digest_of(&square));

    assert_ne!(digest_of(&V2d::from_ints(1, 2)), digest_of(&V2d::from_ints(2, 1)));
    assert_ne!(digest_of(&Qf16::IDENTITY), digest_of(&Qf16::default()));
}
