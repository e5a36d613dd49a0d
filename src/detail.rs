// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! This module is not considered part of the public API.  Symbols here are
//! public for the codec modules and for testing.  They are not meant to
//! be used directly.

/// Sign bit of a half
pub const HALF_SIGN: u16 = 0x8000;

/// Exponent field of a half
pub const HALF_EXP: u16 = 0x7C00;

/// Mantissa field of a half
pub const HALF_MAN: u16 = 0x03FF;

/// Sign bit of a single
pub const SINGLE_SIGN: u32 = 0x8000_0000;

/// Exponent field of a single
pub const SINGLE_EXP: u32 = 0x7F80_0000;

/// Mantissa field of a single
pub const SINGLE_MAN: u32 = 0x007F_FFFF;

/// Difference between the single and half exponent biases, 127 - 15
pub const REBIAS: u32 = 112;

/// Explicit mantissa bits dropped when narrowing a single to a half
pub const DROPPED_BITS: u32 = f32::MANTISSA_DIGITS - 11;

/// Shift `m` right by `shift` bits, rounding to nearest, ties to even
///
/// Every discarded bit takes part in the decision, not only the highest one.
/// Shifts of 33 bits or more discard everything below one half and yield 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn shr_round_even(m: u32, shift: u32) -> u32 {
    if shift > 32 {
        return 0;
    }

    let m = m as u64;
    let kept = m >> shift;
    let half = (1 << shift) >> 1;
    let rest = m & ((1 << shift) - 1);

    let round_up = rest > half || (half != 0 && rest == half && kept & 1 == 1);
    (kept + round_up as u64) as u32
}

/// Widen the magnitude of a half with a zero exponent field to single bits
///
/// The mantissa `man` counts multiples of 2<sup>-24</sup>.  A nonzero value
/// becomes a normal single, as the single exponent range covers every half
/// subnormal.
#[must_use]
pub const fn widen_subnormal(man: u32) -> u32 {
    if man == 0 {
        return 0;
    }

    // Position of the leading set bit, 0..=9
    let lead = 31 - man.leading_zeros();
    let exp = REBIAS - 9 + lead;
    (exp << 23) | ((man << (23 - lead)) & SINGLE_MAN)
}

/// Narrow the magnitude of a finite single to half bits by rounding
///
/// The sign bit of `bits` is ignored.  The result is not clamped: it can
/// carry into the half exponent field and beyond, so callers apply their own
/// overflow policy to it.
#[must_use]
pub const fn narrow_finite(bits: u32) -> u32 {
    let exp = (bits & SINGLE_EXP) >> 23;
    let man = bits & SINGLE_MAN;

    if exp > REBIAS {
        // Normal half.  A rounding carry ripples into the exponent field.
        return shr_round_even(((exp - REBIAS) << 23) | man, DROPPED_BITS);
    }

    if exp == 0 {
        // Single subnormals are far below half the smallest half subnormal.
        return 0;
    }

    // Subnormal half, counting multiples of 2^-24 with the implicit one
    shr_round_even(man | 0x0080_0000, REBIAS + 1 + DROPPED_BITS - exp)
}

/// Narrow `f64` to `f32` by rounding to odd
///
/// Inexact results are truncated toward zero and get their lowest mantissa
/// bit set.  The lost bits survive as a sticky bit, so a further
/// round-to-nearest-even to any format with at least two fewer significant
/// bits is correctly rounded.
#[must_use]
pub fn narrow_round_odd(x: f64) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    let y = x as f32;

    if x.is_nan() || f64::from(y) == x {
        return y;
    }

    let magnitude = |v: f64| v.to_bits() & !(1 << 63);
    let mut bits = y.to_bits();

    if magnitude(f64::from(y)) > magnitude(x) {
        bits -= 1;
    }

    f32::from_bits(bits | 1)
}
