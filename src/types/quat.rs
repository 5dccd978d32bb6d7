// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Quaternion type.

use serde::{Deserialize, Serialize};

use crate::types::scalar::Fix16;

/// The quaternion `a + b*i + c*j + d*k`. Rotations use unit quaternions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Qf16 {
    pub a: Fix16,
    pub b: Fix16,
    pub c: Fix16,
    pub d: Fix16,
}

impl Qf16 {
    pub const IDENTITY: Qf16 = Qf16 {
        a: Fix16::ONE,
        b: Fix16::ZERO,
        c: Fix16::ZERO,
        d: Fix16::ZERO,
    };

    pub const fn new(a: Fix16, b: Fix16, c: Fix16, d: Fix16) -> Self {
        Qf16 { a, b, c, d }
    }

    pub const fn as_array(&self) -> [Fix16; 4] {
        [self.a, self.b, self.c, self.d]
    }
}
