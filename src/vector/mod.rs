// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 2D and 3D vector kernels.
//!
//! Each kernel writes its first argument. Inputs are `Operand`s so a result
//! can overwrite one of its inputs.

pub mod v2d;
pub mod v3d;

pub use v2d::*;
pub use v3d::*;
