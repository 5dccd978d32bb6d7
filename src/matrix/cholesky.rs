// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::fxp::{fxp_div, fxp_mul, fxp_sqrt, fxp_sub};
use crate::math::{fa_unalias, Operand};
use crate::matrix::{raise, track};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::scalar::Fix16;

/// Radicands between this (raw units, about -0.001) and zero are rounding
/// noise and are floored to zero without a flag.
const NEGATIVE_TOLERANCE: i32 = -65;

/// Cholesky-Banachiewicz factorization: `dest = L` with `L * L^T = matrix`.
///
/// `matrix` must be square and symmetric positive definite; only its lower
/// triangle is read. The upper triangle of `dest` is zeroed.
pub fn mf16_cholesky<'a>(dest: &mut Mf16, matrix: impl Into<Operand<'a, Mf16>>) {
    let matrix = matrix.into();
    let mut tmp = None;
    let (matrix, _) = fa_unalias(dest, matrix, matrix, &mut tmp);

    dest.errors = matrix.errors;
    if !matrix.is_square() {
        raise(&mut dest.errors, ErrorFlags::DIMERR, "mf16_cholesky");
    }

    let n = matrix.rows;
    dest.rows = n;
    dest.columns = n;

    for row in 0..n {
        for column in 0..n {
            if row == column {
                // L[j][j] = sqrt(A[j][j] - sum(L[j][k]^2))
                let mut value = matrix.data[row][column];
                for k in 0..column {
                    let square = fxp_mul(dest.data[row][k], dest.data[row][k]);
                    value = fxp_sub(value, track(&mut dest.errors, square));
                    track(&mut dest.errors, value);
                }

                if value.0 < 0 {
                    if value.0 < NEGATIVE_TOLERANCE {
                        raise(&mut dest.errors, ErrorFlags::NEGATIVE, "mf16_cholesky");
                    }
                    value = Fix16::ZERO;
                }

                dest.data[row][column] = fxp_sqrt(value);
            } else if row < column {
                dest.data[row][column] = Fix16::ZERO;
            } else {
                // L[i][j] = (A[i][j] - sum(L[i][k] * L[j][k])) / L[j][j]
                let mut value = matrix.data[row][column];
                for k in 0..column {
                    let product = fxp_mul(dest.data[row][k], dest.data[column][k]);
                    value = fxp_sub(value, track(&mut dest.errors, product));
                    track(&mut dest.errors, value);
                }

                let value = fxp_div(value, dest.data[column][column]);
                dest.data[row][column] = track(&mut dest.errors, value);
            }
        }
    }
}
