// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-capacity dense matrix.

use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::config::MAX_SIZE;
use crate::error::{FixError, FixResult};
use crate::types::flags::ErrorFlags;
use crate::types::scalar::Fix16;

/// Row-major matrix of at most `MAX_SIZE x MAX_SIZE` entries.
///
/// Storage for the full area is always present, which is what lets
/// `mf16_transpose` work in place on non-square shapes. Cells outside
/// `rows x columns` are never read by the kernels and are ignored by `==`.
///
/// `rows` and `columns` must stay within `[1, MAX_SIZE]`; kernels index the
/// backing store directly and panic on a larger shape.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Mf16 {
    pub rows: usize,
    pub columns: usize,
    pub errors: ErrorFlags,
    pub data: [[Fix16; MAX_SIZE]; MAX_SIZE],
}

fn check_dim(n: usize) -> FixResult<usize> {
    if n == 0 {
        Err(FixError::Empty)
    } else if n > MAX_SIZE {
        Err(FixError::TooLarge(n))
    } else {
        Ok(n)
    }
}

impl Mf16 {
    /// Zero-filled matrix of the given shape with no flags set.
    pub fn new(rows: usize, columns: usize) -> FixResult<Self> {
        Ok(Mf16 {
            rows: check_dim(rows)?,
            columns: check_dim(columns)?,
            errors: ErrorFlags::NONE,
            data: [[Fix16::ZERO; MAX_SIZE]; MAX_SIZE],
        })
    }

    pub fn identity(n: usize) -> FixResult<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i][i] = Fix16::ONE;
        }
        Ok(m)
    }

    pub fn from_array<const R: usize, const C: usize>(cells: &[[Fix16; C]; R]) -> FixResult<Self> {
        let mut m = Self::new(R, C)?;
        for (dst, src) in m.data.iter_mut().zip(cells.iter()) {
            dst[..C].copy_from_slice(src);
        }
        Ok(m)
    }

    /// Builds a matrix from integer cells. Each cell must lie in
    /// `[-32768, 32767]` to be exact.
    pub fn from_ints<const R: usize, const C: usize>(cells: &[[i32; C]; R]) -> FixResult<Self> {
        let mut m = Self::new(R, C)?;
        for (dst, src) in m.data.iter_mut().zip(cells.iter()) {
            for (d, &s) in dst.iter_mut().zip(src.iter()) {
                *d = Fix16::from_int(s);
            }
        }
        Ok(m)
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Fix16 {
        self.data[row][column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: Fix16) {
        self.data[row][column] = value;
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Checkpoint: validates the shape and converts accumulated flags.
    pub fn check(&self) -> FixResult<()> {
        check_dim(self.rows)?;
        check_dim(self.columns)?;
        self.errors.into_result()
    }

    /// Row `row`, to be read with stride 1.
    #[inline]
    pub fn row(&self, row: usize) -> &[Fix16] {
        &self.data[row]
    }

    /// Column `column`, to be read with stride `MAX_SIZE`.
    #[inline]
    pub fn column(&self, column: usize) -> &[Fix16] {
        &self.data.as_flattened()[column..]
    }

    /// Active cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Fix16> + '_ {
        self.data[..self.rows]
            .iter()
            .flat_map(move |row| row[..self.columns].iter().copied())
    }
}

impl Default for Mf16 {
    /// A 1x1 zero matrix.
    fn default() -> Self {
        Mf16 {
            rows: 1,
            columns: 1,
            errors: ErrorFlags::NONE,
            data: [[Fix16::ZERO; MAX_SIZE]; MAX_SIZE],
        }
    }
}

impl PartialEq for Mf16 {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.errors == other.errors
            && self.cells().eq(other.cells())
    }
}

impl Eq for Mf16 {}

impl Index<(usize, usize)> for Mf16 {
    type Output = Fix16;

    fn index(&self, (row, column): (usize, usize)) -> &Fix16 {
        &self.data[row][column]
    }
}

impl IndexMut<(usize, usize)> for Mf16 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Fix16 {
        &mut self.data[row][column]
    }
}
