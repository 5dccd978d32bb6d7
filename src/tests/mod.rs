// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
// Expected values below assume the default arithmetic mode, except for the
// digest checks.
pub mod determinism_tests;
#[cfg(all(feature = "rounding", feature = "overflow-detect", not(feature = "no-64bit")))]
pub mod quat_tests;
#[cfg(all(feature = "rounding", feature = "overflow-detect", not(feature = "no-64bit")))]
pub mod vector_tests;
