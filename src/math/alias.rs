// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! In-place operation support.
//!
//! Outputs are `&mut`, so the borrow checker already rules out passing the
//! destination as a plain input. `Operand::Dest` is how a caller asks for
//! "the destination's current contents" instead, e.g. `A = A * B` is
//! `mf16_mul(&mut a, Operand::Dest, &b)`.

/// Input of an operation that writes to a destination of the same type.
#[derive(Debug)]
pub enum Operand<'a, T> {
    /// The destination's value before the operation.
    Dest,
    Value(&'a T),
}

impl<T> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operand<'_, T> {}

impl<'a, T> From<&'a T> for Operand<'a, T> {
    fn from(value: &'a T) -> Self {
        Operand::Value(value)
    }
}

impl<'a, T> Operand<'a, T> {
    #[inline]
    pub fn is_dest(&self) -> bool {
        matches!(self, Operand::Dest)
    }

    /// Resolves against a snapshot of the destination.
    #[inline]
    pub fn resolve<'r>(self, dest: &'r T) -> &'r T
    where
        'a: 'r,
    {
        match self {
            Operand::Dest => dest,
            Operand::Value(v) => v,
        }
    }
}

impl<T: Copy> Operand<'_, T> {
    /// Copies the operand out, reading `dest` for `Operand::Dest`.
    #[inline]
    pub fn value_or(self, dest: &T) -> T {
        match self {
            Operand::Dest => *dest,
            Operand::Value(v) => *v,
        }
    }
}

/// Makes sure neither input refers to `dest`.
///
/// When either operand is `Dest`, the destination is copied into `tmp` and
/// both `Dest` operands are redirected there; otherwise `tmp` is untouched.
/// The returned references never borrow `dest`, so the caller is free to
/// overwrite it while reading the inputs.
pub fn fa_unalias<'r, 'a: 'r, T: Copy>(
    dest: &T,
    a: Operand<'a, T>,
    b: Operand<'a, T>,
    tmp: &'r mut Option<T>,
) -> (&'r T, &'r T) {
    match (a, b) {
        (Operand::Value(a), Operand::Value(b)) => (a, b),
        (a, b) => {
            let copy: &'r T = Option::insert(tmp, *dest);
            (a.resolve(copy), b.resolve(copy))
        }
    }
}
