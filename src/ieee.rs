// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! IEEE 754 binary16
//!
//! The exponent field 31 is reserved for infinities and NaNs.  Conversions
//! to `f32` are exact.  Conversions from `f32` round to nearest, ties to
//! even, and saturate to infinity on overflow.

use crate::detail::{
    narrow_finite, widen_subnormal, DROPPED_BITS, HALF_EXP, HALF_MAN, HALF_SIGN, REBIAS,
    SINGLE_EXP, SINGLE_MAN, SINGLE_SIGN,
};

/// Quiet bit of a half NaN
const QUIET: u16 = 0x0200;

/// Widen IEEE half bits to the bits of the `f32` with the same value
///
/// NaN payloads are shifted into the top of the single mantissa, so the
/// result is still NaN and carries the same sign.
#[must_use]
pub const fn ieee_half_to_single_bits(h: u16) -> u32 {
    let sign = ((h & HALF_SIGN) as u32) << 16;
    let exp = ((h & HALF_EXP) >> 10) as u32;
    let man = (h & HALF_MAN) as u32;

    sign | match exp {
        0 => widen_subnormal(man),
        0x1F => SINGLE_EXP | (man << DROPPED_BITS),
        _ => ((exp + REBIAS) << 23) | (man << DROPPED_BITS),
    }
}

/// Widen IEEE half bits to `f32`
#[must_use]
pub const fn ieee_half_to_single_value(h: u16) -> f32 {
    f32::from_bits(ieee_half_to_single_bits(h))
}

/// Round `f32` to IEEE half bits
///
/// - Finite values round to nearest, ties to even, including into and out
///   of the subnormal range.
/// - Values that round beyond [`F16::MAX`](crate::F16::MAX) become infinity.
/// - Values that round below half the smallest subnormal become zero.
/// - NaNs stay NaN with the same sign, keeping the top of the payload.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn single_to_ieee_half_value(x: f32) -> u16 {
    let bits = x.to_bits();
    let sign = ((bits & SINGLE_SIGN) >> 16) as u16;

    if bits & SINGLE_EXP == SINGLE_EXP {
        let man = bits & SINGLE_MAN;

        return match man {
            0 => sign | HALF_EXP,
            _ => sign | HALF_EXP | QUIET | (man >> DROPPED_BITS) as u16,
        };
    }

    let magnitude = narrow_finite(bits);

    match magnitude {
        0..0x7C00 => sign | magnitude as u16,
        _ => sign | HALF_EXP,
    }
}
