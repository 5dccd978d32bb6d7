// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decimal formatting.
//!
//! Works on the raw integer so no float support is needed.

use core::fmt::{self, Display, Formatter, Write};

use crate::types::{Fix16, Mf16, Qf16, V2d, V3d};

/// Q16.16 carries a little under 5 significant decimals of fraction.
pub const MAX_DECIMALS: usize = 5;

const DECIMAL_SCALES: [u64; MAX_DECIMALS + 1] = [1, 10, 100, 1_000, 10_000, 100_000];

/// Matrix cells are printed as `width.decimals`.
const MATRIX_CELL: (usize, usize) = (9, 4);

/// Writes `value` right aligned in `width` characters with `decimals`
/// fractional digits (at most `MAX_DECIMALS`), rounding half away from zero.
pub fn write_fix16<W: Write + ?Sized>(
    out: &mut W,
    value: Fix16,
    width: usize,
    decimals: usize,
) -> fmt::Result {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = DECIMAL_SCALES[decimals];

    let magnitude = value.0.unsigned_abs();
    let mut int_part = magnitude >> 16;
    let mut frac_part = ((magnitude & 0xFFFF) as u64 * scale + 0x8000) >> 16;
    if frac_part >= scale {
        int_part += 1;
        frac_part -= scale;
    }

    let negative = value.0 < 0 && (int_part != 0 || frac_part != 0);

    let mut len = int_digits(int_part) + usize::from(negative);
    if decimals > 0 {
        len += 1 + decimals;
    }
    for _ in len..width {
        out.write_char(' ')?;
    }

    if negative {
        out.write_char('-')?;
    }
    write!(out, "{}", int_part)?;
    if decimals > 0 {
        write!(out, ".{:0width$}", frac_part, width = decimals)?;
    }
    Ok(())
}

fn int_digits(mut n: u32) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Honours `{:width.precision}`; the default precision is `MAX_DECIMALS`.
impl Display for Fix16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        let decimals = f.precision().unwrap_or(MAX_DECIMALS);
        write_fix16(f, *self, width, decimals)
    }
}

fn write_components(f: &mut Formatter<'_>, components: &[Fix16]) -> fmt::Result {
    let decimals = f.precision().unwrap_or(MAX_DECIMALS);
    f.write_char('(')?;
    for (i, &c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_fix16(f, c, 0, decimals)?;
    }
    f.write_char(')')
}

impl Display for V2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_components(f, &self.as_array())
    }
}

impl Display for V3d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_components(f, &self.as_array())
    }
}

/// `a bi cj dk`, e.g. `1.00000 0.00000i -0.50000j 0.25000k`.
impl Display for Qf16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(MAX_DECIMALS);
        write_fix16(f, self.a, 0, decimals)?;
        for (value, unit) in [(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            f.write_char(' ')?;
            write_fix16(f, value, 0, decimals)?;
            f.write_char(unit)?;
        }
        Ok(())
    }
}

/// One row per line. Flags, if any, come first as `MATRIX ERRORS: n`.
impl Display for Mf16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "MATRIX ERRORS: {}", self.errors.bits())?;
        }

        let (width, decimals) = MATRIX_CELL;
        for row in 0..self.rows {
            for column in 0..self.columns {
                if column > 0 {
                    f.write_char(' ')?;
                }
                write_fix16(f, self.data[row][column], width, decimals)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
