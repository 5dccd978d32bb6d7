// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Sticky error flags carried by matrices.

use core::ops::{BitOr, BitOrAssign};
use serde::{Deserialize, Serialize};

use crate::error::{FixError, FixResult};

/// Bit-set of failures accumulated by a matrix pipeline.
///
/// Every matrix operation ORs the flags of its inputs into its output, so a
/// flag raised early survives until an initializing call (`mf16_fill`,
/// `mf16_fill_diagonal`, QR on `r`) resets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    pub const NONE: ErrorFlags = ErrorFlags(0);
    /// An intermediate result was not representable.
    pub const OVERFLOW: ErrorFlags = ErrorFlags(0x01);
    /// Operand shapes are incompatible.
    pub const DIMERR: ErrorFlags = ErrorFlags(0x02);
    /// Operation used in a mode it does not support.
    pub const USEERR: ErrorFlags = ErrorFlags(0x04);
    /// Gram-Schmidt hit a near-zero column, or back-substitution a zero pivot.
    pub const SINGULAR: ErrorFlags = ErrorFlags(0x08);
    /// Cholesky saw a clearly negative radicand.
    pub const NEGATIVE: ErrorFlags = ErrorFlags(0x10);

    const ALL: u8 = 0x1F;

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        ErrorFlags(bits & Self::ALL)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is set.
    #[inline]
    pub const fn contains(self, other: ErrorFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: ErrorFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: ErrorFlags) {
        self.0 |= other.0;
    }

    /// Converts the lowest set flag into an error.
    pub fn into_result(self) -> FixResult<()> {
        if self.contains(Self::OVERFLOW) {
            Err(FixError::Overflow)
        } else if self.contains(Self::DIMERR) {
            Err(FixError::Dimension)
        } else if self.contains(Self::USEERR) {
            Err(FixError::Usage)
        } else if self.contains(Self::SINGULAR) {
            Err(FixError::Singular)
        } else if self.contains(Self::NEGATIVE) {
            Err(FixError::NotPositiveDefinite)
        } else {
            Ok(())
        }
    }
}

impl BitOr for ErrorFlags {
    type Output = ErrorFlags;

    fn bitor(self, rhs: ErrorFlags) -> ErrorFlags {
        ErrorFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ErrorFlags {
    fn bitor_assign(&mut self, rhs: ErrorFlags) {
        self.0 |= rhs.0;
    }
}
