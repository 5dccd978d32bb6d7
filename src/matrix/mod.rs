// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Matrix engine.
//!
//! Every kernel writes `dest` and ORs the flags of its inputs into
//! `dest.errors`, plus whatever it raises itself. Kernels never stop early
//! on a flag (except `mf16_solve` on a misuse) so the output is always fully
//! written; callers inspect the flags at a checkpoint, e.g. `Mf16::check`.

pub mod basic;
pub mod cholesky;
pub mod invert;
pub mod qr;
pub mod solve;

pub use basic::{
    mf16_add, mf16_div_s, mf16_fill, mf16_fill_diagonal, mf16_mul, mf16_mul_at, mf16_mul_bt,
    mf16_mul_s, mf16_sub, mf16_transpose,
};
pub use cholesky::mf16_cholesky;
pub use invert::{mf16_invert_cholesky, mf16_invert_lt};
pub use qr::{mf16_qr_decomposition, QrSource};
pub use solve::mf16_solve;

use crate::config::OVERFLOW_DETECT;
use crate::types::flags::ErrorFlags;
use crate::types::scalar::Fix16;

/// Records `OVERFLOW` when `value` is the sentinel and passes it through.
#[inline]
pub(crate) fn track(errors: &mut ErrorFlags, value: Fix16) -> Fix16 {
    if OVERFLOW_DETECT && value.is_overflow() {
        errors.insert(ErrorFlags::OVERFLOW);
    }
    value
}

/// Raises a non-overflow flag.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn raise(errors: &mut ErrorFlags, flag: ErrorFlags, op: &'static str) {
    debug_event!(op, flag = flag.bits(), "matrix flag raised");
    errors.insert(flag);
}
