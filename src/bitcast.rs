// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Raw reinterpretation between unsigned integers and floats of equal width
//!
//! These are not numeric casts.  `bits_to_single_value(0x7F80_0000)` is
//! positive infinity, whereas `0x7F80_0000 as f32` is 2139095040.0.  Every
//! bit pattern is preserved, including subnormals and NaN payloads.

/// Reinterpret a 32-bit pattern as `f32`
#[must_use]
#[inline]
pub const fn bits_to_single_value(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Reinterpret an `f32` as its 32-bit pattern
#[must_use]
#[inline]
pub const fn single_value_to_bits(x: f32) -> u32 {
    x.to_bits()
}

/// Reinterpret a 64-bit pattern as `f64`
#[must_use]
#[inline]
pub const fn bits_to_double_value(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Reinterpret an `f64` as its 64-bit pattern
#[must_use]
#[inline]
pub const fn double_value_to_bits(x: f64) -> u64 {
    x.to_bits()
}
