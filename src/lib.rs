// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! fixmatrix-kernel: deterministic, no_std Q16.16 fixed-point arithmetic with
//! 2D/3D vectors, quaternions and a small dense matrix engine.

#[cfg(test)]
#[macro_use]
extern crate std;

// Diagnostic events. They compile to nothing without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod digest;
pub mod display;
pub mod error;
pub mod fxp;
pub mod math;
pub mod matrix;
pub mod quat;
pub mod types;
pub mod vector;

pub use error::{FixError, FixResult};
pub use math::Operand;
pub use types::{ErrorFlags, Fix16, Mf16, Qf16, V2d, V3d};

#[cfg(test)]
pub mod tests;
