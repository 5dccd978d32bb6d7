// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.
//!
//! Kernels never return these. They report failure in-band (the overflow
//! sentinel, matrix error flags); `FixError` is what a caller converts those
//! into at a checkpoint.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixError {
    #[error("Fixed-point overflow")]
    Overflow,

    #[error("Operand dimensions are incompatible")]
    Dimension,

    #[error("Operation used in an unsupported way")]
    Usage,

    #[error("Matrix is singular")]
    Singular,

    #[error("Matrix is not positive definite")]
    NotPositiveDefinite,

    #[error("Dimension {0} exceeds maximum matrix size")]
    TooLarge(usize),

    #[error("Matrix must have at least one row and one column")]
    Empty,
}

pub type FixResult<T> = core::result::Result<T, FixError>;
