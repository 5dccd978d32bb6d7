// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::fxp::{fxp_div, fxp_mul, fxp_sub};
use crate::math::Operand;
use crate::matrix::basic::mf16_mul_at;
use crate::matrix::{raise, track};
use crate::types::flags::ErrorFlags;
use crate::types::matrix::Mf16;
use crate::types::scalar::Fix16;

/// Solves `A * x = b` for `x` given `A = q * r` from `mf16_qr_decomposition`.
///
/// Computes `dest = q^T * b` and back-substitutes through `r`, one column of
/// `b` at a time. For a tall `A` this is the least-squares solution.
///
/// `r` is read while `dest` is being written, so `r` as `Operand::Dest`
/// raises `USEERR` and leaves `dest` otherwise untouched. A non-square `r`,
/// or one that does not match the columns of `q`, raises `DIMERR`; the
/// result is still written. A zero pivot raises `SINGULAR` and yields 0 for
/// that unknown.
pub fn mf16_solve<'a>(
    dest: &mut Mf16,
    q: impl Into<Operand<'a, Mf16>>,
    r: impl Into<Operand<'a, Mf16>>,
    b: impl Into<Operand<'a, Mf16>>,
) {
    let r = match r.into() {
        Operand::Value(r) => r,
        Operand::Dest => {
            raise(&mut dest.errors, ErrorFlags::USEERR, "mf16_solve");
            return;
        }
    };

    let q = q.into();
    let q_columns = match q {
        Operand::Value(q) => q.columns,
        Operand::Dest => dest.columns,
    };

    let shapes_match = r.is_square() && r.columns == q_columns;

    mf16_mul_at(dest, q, b);
    dest.errors |= r.errors;
    if !shapes_match {
        raise(&mut dest.errors, ErrorFlags::DIMERR, "mf16_solve");
    }

    let rows = r.rows;
    for column in 0..dest.columns {
        for row in (0..rows).rev() {
            let mut value = dest.data[row][column];

            for variable in row + 1..rows {
                let known = fxp_mul(r.data[row][variable], dest.data[variable][column]);
                value = fxp_sub(value, track(&mut dest.errors, known));
                track(&mut dest.errors, value);
            }

            let divider = r.data[row][row];
            dest.data[row][column] = if divider == Fix16::ZERO {
                raise(&mut dest.errors, ErrorFlags::SINGULAR, "mf16_solve");
                Fix16::ZERO
            } else {
                track(&mut dest.errors, fxp_div(value, divider))
            };
        }
    }
}
