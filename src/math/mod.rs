// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Strided array primitives shared by the vector, matrix and quaternion code.

pub mod alias;
pub mod dot;
pub mod norm;

pub use alias::{fa_unalias, Operand};
pub use dot::fa_dot;
pub use norm::fa_norm;
