// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! QR decomposition by modified Gram-Schmidt on the columns.

use crate::config::MAX_SIZE;
use crate::fxp::{fxp_add, fxp_div, fxp_mul, fxp_sub};
use crate::math::{fa_dot, fa_norm};
use crate::matrix::{raise, track};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::scalar::Fix16;

/// Input of `mf16_qr_decomposition`. `q` and `r` are separate `&mut`
/// borrows and can never alias each other, but either may hold the input.
#[derive(Clone, Copy, Debug)]
pub enum QrSource<'a> {
    Matrix(&'a Mf16),
    /// Decompose the current contents of `q`.
    InQ,
    /// Decompose the current contents of `r`.
    InR,
}

impl<'a> From<&'a Mf16> for QrSource<'a> {
    fn from(matrix: &'a Mf16) -> Self {
        QrSource::Matrix(matrix)
    }
}

/// Columns whose norm falls below this many raw units are flagged SINGULAR.
const SINGULAR_NORM: u32 = 5;

/// Norms below this (raw units) lose too many bits; the column is scaled up
/// by `PRESCALE` before normalizing.
const UNDERFLOW_NORM: u32 = 256;

const PRESCALE: Fix16 = Fix16::from_int(256);

/// Factors `matrix = q * r` with `q` orthonormal (same shape as `matrix`)
/// and `r` upper triangular of order `matrix.columns`.
///
/// `reorthogonalize` extra Gram-Schmidt passes tighten orthogonality; 0 is
/// fastest and 1 is usually enough. `r.errors` ends up equal to `q.errors`.
pub fn mf16_qr_decomposition<'a>(
    q: &mut Mf16,
    r: &mut Mf16,
    matrix: impl Into<QrSource<'a>>,
    reorthogonalize: u32,
) {
    *q = match matrix.into() {
        QrSource::Matrix(matrix) => *matrix,
        QrSource::InQ => *q,
        QrSource::InR => *r,
    };

    let rows = q.rows;
    let columns = q.columns;

    r.rows = columns;
    r.columns = columns;
    r.errors = ErrorFlags::NONE;
    r.data = [[Fix16::ZERO; MAX_SIZE]; MAX_SIZE];

    for j in 0..columns {
        for _ in 0..=reorthogonalize {
            for i in 0..j {
                let dot = fa_dot(q.column(j), MAX_SIZE, q.column(i), MAX_SIZE, rows);
                track(&mut q.errors, dot);

                for k in 0..rows {
                    let projection = fxp_mul(dot, q.data[k][i]);
                    let cell = fxp_sub(q.data[k][j], track(&mut q.errors, projection));
                    q.data[k][j] = track(&mut q.errors, cell);
                }

                r.data[i][j] = track(&mut q.errors, fxp_add(r.data[i][j], dot));
            }
        }

        let mut norm = fa_norm(q.column(j), MAX_SIZE, rows);
        r.data[j][j] = norm;

        if norm.is_overflow() {
            // The sum of squares does not fit; shrink the column first.
            trace_event!(column = j, "qr: prescaling column down");
            scale_column(q, j, rows, PRESCALE, fxp_div);
            norm = fa_norm(q.column(j), MAX_SIZE, rows);
            r.data[j][j] = track(&mut q.errors, fxp_mul(norm, PRESCALE));
        } else if norm.0.unsigned_abs() < UNDERFLOW_NORM {
            trace_event!(column = j, norm = norm.0, "qr: prescaling column up");
            scale_column(q, j, rows, PRESCALE, fxp_mul);
            norm = fa_norm(q.column(j), MAX_SIZE, rows);
            r.data[j][j] = fxp_div(norm, PRESCALE);

            if r.data[j][j].0.unsigned_abs() < SINGULAR_NORM {
                // Leave the column as it was before prescaling.
                scale_column(q, j, rows, PRESCALE, fxp_div);
            }
        }

        if r.data[j][j].0.unsigned_abs() < SINGULAR_NORM {
            raise(&mut q.errors, ErrorFlags::SINGULAR, "mf16_qr_decomposition");
            continue;
        }

        for k in 0..rows {
            let cell = fxp_div(q.data[k][j], norm);
            q.data[k][j] = track(&mut q.errors, cell);
        }
    }

    r.errors = q.errors;
}

fn scale_column(q: &mut Mf16, column: usize, rows: usize, scaler: Fix16, op: fn(Fix16, Fix16) -> Fix16) {
    for k in 0..rows {
        q.data[k][column] = op(q.data[k][column], scaler);
    }
}
