// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.
//!
//! The arithmetic knobs are Cargo features; they are folded into constants
//! here so every kernel reads them the same way.

/// Number of fractional bits for Fixed-Point representation (Q16.16).
pub const FRAC_BITS: u32 = 16;

/// Scaling factor for Fixed-Point representation (1 << FRAC_BITS).
pub const SCALE: i32 = 1 << FRAC_BITS;

/// Maximum number of rows and columns of a matrix.
/// Storage for the full `MAX_SIZE x MAX_SIZE` area is always reserved.
pub const MAX_SIZE: usize = 8;

/// Round results to nearest (ties away from zero) instead of truncating.
pub const ROUNDING: bool = cfg!(feature = "rounding");

/// Return the overflow sentinel for unrepresentable results instead of wrapping.
pub const OVERFLOW_DETECT: bool = cfg!(feature = "overflow-detect");

/// Use the pure 32-bit scalar path.
pub const NO_64BIT: bool = cfg!(feature = "no-64bit");

/// Arithmetic mode shared by both scalar paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arith {
    pub rounding: bool,
    pub overflow_detect: bool,
}

impl Arith {
    /// All four rounding/overflow combinations, used by cross-path tests.
    pub const ALL: [Arith; 4] = [
        Arith { rounding: true, overflow_detect: true },
        Arith { rounding: true, overflow_detect: false },
        Arith { rounding: false, overflow_detect: true },
        Arith { rounding: false, overflow_detect: false },
    ];
}

/// The mode selected at compile time.
pub const ARITH: Arith = Arith {
    rounding: ROUNDING,
    overflow_detect: OVERFLOW_DETECT,
};
