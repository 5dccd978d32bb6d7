// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Inverses of lower-triangular matrices.
//!
//! Both kernels first write `L^-1` transposed into the upper triangle of
//! `dest`, so each row of the inverse can be read as a contiguous column of
//! already computed values, and then fold it into its final place.

use crate::fxp::{fxp_div, fxp_mul, fxp_sub};
use crate::math::{fa_unalias, Operand};
use crate::matrix::{raise, track};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::scalar::Fix16;

/// `dest = matrix^-1` for a lower-triangular square `matrix`.
pub fn mf16_invert_lt<'a>(dest: &mut Mf16, matrix: impl Into<Operand<'a, Mf16>>) {
    let matrix = matrix.into();
    let mut tmp = None;
    let (matrix, _) = fa_unalias(dest, matrix, matrix, &mut tmp);

    let n = prepare(dest, matrix, "mf16_invert_lt");
    inverse_upper(dest, matrix, n, "mf16_invert_lt");

    for i in 0..n {
        for j in 0..i {
            dest.data[i][j] = dest.data[j][i];
            dest.data[j][i] = Fix16::ZERO;
        }
    }
}

/// `dest = (L * L^T)^-1` given the Cholesky factor `L`, i.e. the inverse of
/// the matrix that was factored. The result is symmetric.
pub fn mf16_invert_cholesky<'a>(dest: &mut Mf16, l: impl Into<Operand<'a, Mf16>>) {
    let l = l.into();
    let mut tmp = None;
    let (l, _) = fa_unalias(dest, l, l, &mut tmp);

    let n = prepare(dest, l, "mf16_invert_cholesky");
    inverse_upper(dest, l, n, "mf16_invert_cholesky");

    // Solve L^T * Y = L^-1 from the last row up. Y is symmetric, so each
    // value is stored on both sides of the diagonal.
    for i in (0..n).rev() {
        for j in 0..=i {
            let mut sum = dest.data[j][i];
            for k in i + 1..n {
                let product = fxp_mul(l.data[k][i], dest.data[j][k]);
                sum = fxp_sub(sum, track(&mut dest.errors, product));
                track(&mut dest.errors, sum);
            }

            let value = pivot_div(dest, sum, l.data[i][i], "mf16_invert_cholesky");
            dest.data[i][j] = value;
            dest.data[j][i] = value;
        }
    }
}

fn prepare(dest: &mut Mf16, matrix: &Mf16, op: &'static str) -> usize {
    dest.errors = matrix.errors;
    if !matrix.is_square() {
        raise(&mut dest.errors, ErrorFlags::DIMERR, op);
    }

    dest.rows = matrix.rows;
    dest.columns = matrix.rows;
    matrix.rows
}

/// Forward substitution of `L * X = I`, storing `X[i][j]` at `dest[j][i]`.
fn inverse_upper(dest: &mut Mf16, l: &Mf16, n: usize, op: &'static str) {
    for i in 0..n {
        for j in 0..=i {
            let mut sum = if i == j { Fix16::ONE } else { Fix16::ZERO };
            for k in j..i {
                let product = fxp_mul(l.data[i][k], dest.data[j][k]);
                sum = fxp_sub(sum, track(&mut dest.errors, product));
                track(&mut dest.errors, sum);
            }

            dest.data[j][i] = pivot_div(dest, sum, l.data[i][i], op);
        }
    }
}

fn pivot_div(dest: &mut Mf16, value: Fix16, pivot: Fix16, op: &'static str) -> Fix16 {
    if pivot == Fix16::ZERO {
        raise(&mut dest.errors, ErrorFlags::SINGULAR, op);
        return Fix16::ZERO;
    }
    track(&mut dest.errors, fxp_div(value, pivot))
}
