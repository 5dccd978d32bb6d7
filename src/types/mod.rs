// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Plain value types. All of them are `Copy` and allocation free.

pub mod flags;
pub mod matrix;
pub mod quat;
pub mod scalar;
pub mod vector;

pub use flags::ErrorFlags;
pub use matrix::Mf16;
pub use quat::Qf16;
pub use scalar::Fix16;
pub use vector::{V2d, V3d};
