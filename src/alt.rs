// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Alternative half precision
//!
//! Same layout as IEEE binary16, but the exponent field 31 holds ordinary
//! normal numbers.  There is no infinity or NaN, and the largest finite
//! magnitude is 131008 instead of 65504.
//!
//! Narrowing saturates: anything above the largest finite magnitude,
//! including infinities and NaNs, becomes the largest finite magnitude of the
//! same sign.

use crate::detail::{
    narrow_finite, widen_subnormal, DROPPED_BITS, HALF_EXP, HALF_MAN, HALF_SIGN, REBIAS,
    SINGLE_EXP, SINGLE_SIGN,
};

/// Largest finite magnitude, 131008
const MAX: u16 = 0x7FFF;

/// Widen alternative half bits to the bits of the `f32` with the same value
#[must_use]
pub const fn alt_half_to_single_bits(h: u16) -> u32 {
    let sign = ((h & HALF_SIGN) as u32) << 16;
    let exp = ((h & HALF_EXP) >> 10) as u32;
    let man = (h & HALF_MAN) as u32;

    sign | match exp {
        0 => widen_subnormal(man),
        _ => ((exp + REBIAS) << 23) | (man << DROPPED_BITS),
    }
}

/// Widen alternative half bits to `f32`
#[must_use]
pub const fn alt_half_to_single_value(h: u16) -> f32 {
    f32::from_bits(alt_half_to_single_bits(h))
}

/// Round `f32` to alternative half bits
///
/// Finite values round to nearest, ties to even.  Magnitudes beyond the
/// largest finite alternative half, as well as infinities and NaNs, clamp
/// to `0x7FFF` with the sign bit of `x`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn single_to_alt_half_value(x: f32) -> u16 {
    let bits = x.to_bits();
    let sign = ((bits & SINGLE_SIGN) >> 16) as u16;

    if bits & SINGLE_EXP == SINGLE_EXP {
        return sign | MAX;
    }

    let magnitude = narrow_finite(bits);

    match magnitude {
        0..=0x7FFF => sign | magnitude as u16,
        _ => sign | MAX,
    }
}
