// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Two and three component vectors.

use serde::{Deserialize, Serialize};

use crate::types::scalar::Fix16;

/// 2D vector. Failure shows up as `Fix16::OVERFLOW` in a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct V2d {
    pub x: Fix16,
    pub y: Fix16,
}

/// 3D vector. Failure shows up as `Fix16::OVERFLOW` in a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct V3d {
    pub x: Fix16,
    pub y: Fix16,
    pub z: Fix16,
}

impl V2d {
    pub const ZERO: V2d = V2d { x: Fix16::ZERO, y: Fix16::ZERO };

    pub const fn new(x: Fix16, y: Fix16) -> Self {
        V2d { x, y }
    }

    pub const fn from_ints(x: i32, y: i32) -> Self {
        V2d { x: Fix16::from_int(x), y: Fix16::from_int(y) }
    }

    pub const fn as_array(&self) -> [Fix16; 2] {
        [self.x, self.y]
    }
}

impl V3d {
    pub const ZERO: V3d = V3d { x: Fix16::ZERO, y: Fix16::ZERO, z: Fix16::ZERO };

    pub const fn new(x: Fix16, y: Fix16, z: Fix16) -> Self {
        V3d { x, y, z }
    }

    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        V3d {
            x: Fix16::from_int(x),
            y: Fix16::from_int(y),
            z: Fix16::from_int(z),
        }
    }

    pub const fn as_array(&self) -> [Fix16; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[Fix16; 2]> for V2d {
    fn from(v: [Fix16; 2]) -> Self {
        V2d { x: v[0], y: v[1] }
    }
}

impl From<[Fix16; 3]> for V3d {
    fn from(v: [Fix16; 3]) -> Self {
        V3d { x: v[0], y: v[1], z: v[2] }
    }
}
