// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q16.16 scalar kernel.
//!
//! `wide` and `narrow` are the two interchangeable implementations of
//! multiplication and division; `ops` dispatches to the one selected by the
//! `no-64bit` feature.

pub mod convert;
pub mod narrow;
pub mod ops;
pub mod sqrt;
pub mod trig;
pub mod wide;

pub use ops::{fxp_add, fxp_div, fxp_mul, fxp_sqrt, fxp_sub};
pub use trig::{fxp_acos, fxp_asin, fxp_atan, fxp_atan2, fxp_cos, fxp_sin, fxp_sq};
