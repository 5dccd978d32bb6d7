// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Determinism digest.
//!
//! Hashes computed values so two builds or two platforms can be compared
//! with a single 32-byte value. Same inputs and configuration must give the
//! same digest on every architecture.
//!
//! # Hash Input Structure
//! ```text
//! Fix16:  raw (i32 LE)
//! V2d:    x, y
//! V3d:    x, y, z
//! Qf16:   a, b, c, d
//! Mf16:   rows (u8), columns (u8), errors (u8),
//!         then the active cells row by row
//! ```
//! Cells outside the active region of a matrix are not hashed.

use byteorder::{ByteOrder, LittleEndian};

use crate::types::{Fix16, Mf16, Qf16, V2d, V3d};

/// Values that can be fed into a `StateDigest`.
pub trait Digestible {
    fn feed(&self, digest: &mut StateDigest);
}

/// Incremental BLAKE3 hasher over Q16.16 values.
pub struct StateDigest {
    hasher: blake3::Hasher,
}

impl Default for StateDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl StateDigest {
    pub fn new() -> Self {
        Self {
            hasher: blake3::Hasher::new(),
        }
    }

    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, value);
        self.hasher.update(&buf);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.hasher.update(&[value]);
        self
    }

    pub fn update<T: Digestible + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.feed(self);
        self
    }

    pub fn finalize(&self) -> [u8; 32] {
        *self.hasher.finalize().as_bytes()
    }
}

/// Digest of a single value.
pub fn digest_of<T: Digestible + ?Sized>(value: &T) -> [u8; 32] {
    StateDigest::new().update(value).finalize()
}

impl Digestible for Fix16 {
    fn feed(&self, digest: &mut StateDigest) {
        digest.write_i32(self.0);
    }
}

impl Digestible for V2d {
    fn feed(&self, digest: &mut StateDigest) {
        digest.write_i32(self.x.0).write_i32(self.y.0);
    }
}

impl Digestible for V3d {
    fn feed(&self, digest: &mut StateDigest) {
        digest.write_i32(self.x.0).write_i32(self.y.0).write_i32(self.z.0);
    }
}

impl Digestible for Qf16 {
    fn feed(&self, digest: &mut StateDigest) {
        for component in self.as_array() {
            digest.write_i32(component.0);
        }
    }
}

impl Digestible for Mf16 {
    fn feed(&self, digest: &mut StateDigest) {
        digest
            .write_u8(self.rows as u8)
            .write_u8(self.columns as u8)
            .write_u8(self.errors.bits());
        for cell in self.cells() {
            digest.write_i32(cell.0);
        }
    }
}

impl<T: Digestible> Digestible for [T] {
    fn feed(&self, digest: &mut StateDigest) {
        for value in self {
            value.feed(digest);
        }
    }
}
