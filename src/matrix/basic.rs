// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Products, sums, transpose, scalar ops and fills.

use crate::config::MAX_SIZE;
use crate::fxp::{fxp_add, fxp_div, fxp_mul, fxp_sub};
use crate::math::{fa_dot, fa_unalias, Operand};
use crate::matrix::{raise, track};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::scalar::Fix16;

/// `dest = a * b`. Requires `a.columns == b.rows`.
pub fn mf16_mul<'a>(
    dest: &mut Mf16,
    a: impl Into<Operand<'a, Mf16>>,
    b: impl Into<Operand<'a, Mf16>>,
) {
    let mut tmp = None;
    let (a, b) = fa_unalias(dest, a.into(), b.into(), &mut tmp);

    dest.errors = a.errors | b.errors;
    if a.columns != b.rows {
        raise(&mut dest.errors, ErrorFlags::DIMERR, "mf16_mul");
    }

    dest.rows = a.rows;
    dest.columns = b.columns;

    for row in 0..dest.rows {
        for column in 0..dest.columns {
            let cell = fa_dot(a.row(row), 1, b.column(column), MAX_SIZE, a.columns);
            dest.data[row][column] = track(&mut dest.errors, cell);
        }
    }
}

/// `dest = at^T * b`. Requires `at.rows == b.rows`.
pub fn mf16_mul_at<'a>(
    dest: &mut Mf16,
    at: impl Into<Operand<'a, Mf16>>,
    b: impl Into<Operand<'a, Mf16>>,
) {
    let mut tmp = None;
    let (at, b) = fa_unalias(dest, at.into(), b.into(), &mut tmp);

    dest.errors = at.errors | b.errors;
    if at.rows != b.rows {
        raise(&mut dest.errors, ErrorFlags::DIMERR, "mf16_mul_at");
    }

    dest.rows = at.columns;
    dest.columns = b.columns;

    for row in 0..dest.rows {
        for column in 0..dest.columns {
            let cell = fa_dot(at.column(row), MAX_SIZE, b.column(column), MAX_SIZE, at.rows);
            dest.data[row][column] = track(&mut dest.errors, cell);
        }
    }
}

/// `dest = a * bt^T`. Requires `a.columns == bt.columns`.
pub fn mf16_mul_bt<'a>(
    dest: &mut Mf16,
    a: impl Into<Operand<'a, Mf16>>,
    bt: impl Into<Operand<'a, Mf16>>,
) {
    let mut tmp = None;
    let (a, bt) = fa_unalias(dest, a.into(), bt.into(), &mut tmp);

    dest.errors = a.errors | bt.errors;
    if a.columns != bt.columns {
        raise(&mut dest.errors, ErrorFlags::DIMERR, "mf16_mul_bt");
    }

    dest.rows = a.rows;
    dest.columns = bt.rows;

    for row in 0..dest.rows {
        for column in 0..dest.columns {
            let cell = fa_dot(a.row(row), 1, bt.row(column), 1, a.columns);
            dest.data[row][column] = track(&mut dest.errors, cell);
        }
    }
}

fn elementwise<'a>(
    dest: &mut Mf16,
    a: Operand<'a, Mf16>,
    b: Operand<'a, Mf16>,
    op: fn(Fix16, Fix16) -> Fix16,
    name: &'static str,
) {
    let mut tmp = None;
    let (a, b) = fa_unalias(dest, a, b, &mut tmp);

    dest.errors = a.errors | b.errors;
    if a.rows != b.rows || a.columns != b.columns {
        raise(&mut dest.errors, ErrorFlags::DIMERR, name);
    }

    dest.rows = a.rows;
    dest.columns = a.columns;

    for row in 0..dest.rows {
        for column in 0..dest.columns {
            let cell = op(a.data[row][column], b.data[row][column]);
            dest.data[row][column] = track(&mut dest.errors, cell);
        }
    }
}

/// `dest = a + b`. Shapes must match.
pub fn mf16_add<'a>(
    dest: &mut Mf16,
    a: impl Into<Operand<'a, Mf16>>,
    b: impl Into<Operand<'a, Mf16>>,
) {
    elementwise(dest, a.into(), b.into(), fxp_add, "mf16_add");
}

/// `dest = a - b`. Shapes must match.
pub fn mf16_sub<'a>(
    dest: &mut Mf16,
    a: impl Into<Operand<'a, Mf16>>,
    b: impl Into<Operand<'a, Mf16>>,
) {
    elementwise(dest, a.into(), b.into(), fxp_sub, "mf16_sub");
}

/// `dest = matrix^T`. In place, the square area covering both shapes is
/// swapped across the diagonal.
pub fn mf16_transpose<'a>(dest: &mut Mf16, matrix: impl Into<Operand<'a, Mf16>>) {
    match matrix.into() {
        Operand::Dest => {
            let n = dest.rows.max(dest.columns);
            for row in 0..n {
                for column in row + 1..n {
                    let upper = dest.data[row][column];
                    dest.data[row][column] = dest.data[column][row];
                    dest.data[column][row] = upper;
                }
            }
            core::mem::swap(&mut dest.rows, &mut dest.columns);
        }
        Operand::Value(matrix) => {
            dest.errors = matrix.errors;
            dest.rows = matrix.columns;
            dest.columns = matrix.rows;
            for row in 0..matrix.rows {
                for column in 0..matrix.columns {
                    dest.data[column][row] = matrix.data[row][column];
                }
            }
        }
    }
}

fn scalar_op(dest: &mut Mf16, matrix: Operand<'_, Mf16>, scalar: Fix16, op: fn(Fix16, Fix16) -> Fix16) {
    if let Operand::Value(matrix) = matrix {
        *dest = *matrix;
    }

    for row in 0..dest.rows {
        for column in 0..dest.columns {
            let cell = op(dest.data[row][column], scalar);
            dest.data[row][column] = track(&mut dest.errors, cell);
        }
    }
}

/// `dest = matrix * scalar`.
pub fn mf16_mul_s<'a>(dest: &mut Mf16, matrix: impl Into<Operand<'a, Mf16>>, scalar: Fix16) {
    scalar_op(dest, matrix.into(), scalar, fxp_mul);
}

/// `dest = matrix / scalar`.
pub fn mf16_div_s<'a>(dest: &mut Mf16, matrix: impl Into<Operand<'a, Mf16>>, scalar: Fix16) {
    scalar_op(dest, matrix.into(), scalar, fxp_div);
}

/// Sets every active cell to `value` and clears the flags. The caller picks
/// the shape beforehand.
pub fn mf16_fill(dest: &mut Mf16, value: Fix16) {
    for row in 0..dest.rows {
        for column in 0..dest.columns {
            dest.data[row][column] = value;
        }
    }
    dest.errors = ErrorFlags::NONE;
}

/// Sets the diagonal to `value`, everything else to zero, and clears the flags.
pub fn mf16_fill_diagonal(dest: &mut Mf16, value: Fix16) {
    for row in 0..dest.rows {
        for column in 0..dest.columns {
            dest.data[row][column] = if row == column { value } else { Fix16::ZERO };
        }
    }
    dest.errors = ErrorFlags::NONE;
}
