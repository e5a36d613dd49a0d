// This file is part of the fp16 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bit-exact half precision conversions without hardware support
//!
//! Two 16-bit formats share the layout of 1 sign bit, 5 exponent bits, and
//! 10 mantissa bits:
//!
//! - [`F16`] is IEEE 754 binary16.  The exponent field 31 encodes infinities
//!   and NaNs.
//! - [`AltF16`] has no special values.  The exponent field 31 holds ordinary
//!   normal numbers, doubling the range to ±131008.
//!
//! Widening to `f32` is exact.  Narrowing rounds to nearest, ties to even.
//! On overflow [`F16`] saturates to infinity and [`AltF16`] clamps to its
//! largest finite magnitude.  Every function is total and pure.
//!
//! The free functions in [`ieee`] and [`alt`] work on raw `u16` bits and are
//! `const`.  The wrapper types add comparison, formatting, and `num-traits`
//! conversions on top of them.
#![no_std]

pub mod alt;
pub mod bitcast;
#[doc(hidden)]
pub mod detail;
pub mod ieee;
mod num;

use core::cmp::Ordering;
use core::fmt;

pub use alt::{alt_half_to_single_bits, alt_half_to_single_value, single_to_alt_half_value};
pub use bitcast::{
    bits_to_double_value, bits_to_single_value, double_value_to_bits, single_value_to_bits,
};
pub use ieee::{ieee_half_to_single_bits, ieee_half_to_single_value, single_to_ieee_half_value};

/// Meaning of the all-ones exponent field
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Infinities and NaNs as in IEEE 754
    IEEE,
    /// Finite numbers only
    Alt,
}

/// Exponent bias shared by both formats
const BIAS: i32 = 15;

/// Common interface of the 16-bit formats
pub trait Half: Copy + PartialEq + PartialOrd {
    /// Meaning of the all-ones exponent field
    const FORMAT: Format;

    /// The radix or base of the internal representation
    const RADIX: u32 = 2;

    /// Number of significant digits in base 2, including the implicit bit
    const MANTISSA_DIGITS: u32 = 11;

    /// One greater than the maximum possible power of 2 exponent
    #[allow(clippy::cast_possible_wrap)]
    const MAX_EXP: i32 = (1 << 5) - BIAS - matches!(Self::FORMAT, Format::IEEE) as i32;

    /// One greater than the minimum possible normal power of 2 exponent
    const MIN_EXP: i32 = 2 - BIAS;

    /// Positive zero
    const ZERO: Self;

    /// Negative zero
    const NEG_ZERO: Self;

    /// One
    const ONE: Self;

    /// Largest finite value
    const MAX: Self;

    /// Smallest finite value
    const MIN: Self;

    /// Smallest positive normal value
    const MIN_POSITIVE: Self;

    /// Smallest positive subnormal value
    const MIN_POSITIVE_SUBNORMAL: Self;

    /// Difference between 1 and the next larger value
    const EPSILON: Self;

    /// Raw transmutation from `u16`
    #[must_use]
    fn from_bits(v: u16) -> Self;

    /// Raw transmutation to `u16`
    #[must_use]
    fn to_bits(self) -> u16;

    /// Round `f32` to the nearest representable value
    #[must_use]
    fn from_f32(x: f32) -> Self;

    /// Exact conversion to `f32`
    #[must_use]
    fn to_f32(self) -> f32;

    /// Round `f64` to the nearest representable value
    ///
    /// The result is rounded once.  The intermediate `f32` is rounded to odd
    /// so that its last bit remembers whether anything was discarded.
    #[must_use]
    fn from_f64(x: f64) -> Self {
        Self::from_f32(detail::narrow_round_odd(x))
    }

    /// Exact conversion to `f64`
    #[must_use]
    fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    /// Check if the value is NaN
    #[must_use]
    fn is_nan(self) -> bool {
        matches!(Self::FORMAT, Format::IEEE) && self.to_bits() & 0x7FFF > 0x7C00
    }

    /// Check if the value is positive or negative infinity
    #[must_use]
    fn is_infinite(self) -> bool {
        matches!(Self::FORMAT, Format::IEEE) && self.to_bits() & 0x7FFF == 0x7C00
    }

    /// Check if the value is neither infinite nor NaN
    #[must_use]
    fn is_finite(self) -> bool {
        matches!(Self::FORMAT, Format::Alt) || self.to_bits() & 0x7FFF < 0x7C00
    }

    /// Check if the sign bit is set
    #[must_use]
    fn is_sign_negative(self) -> bool {
        self.to_bits() & 0x8000 != 0
    }

    /// Absolute value
    #[must_use]
    fn abs(self) -> Self {
        Self::from_bits(self.to_bits() & 0x7FFF)
    }

    /// Magnitude of `self` with the sign of `sign`
    #[must_use]
    fn copysign(self, sign: Self) -> Self {
        Self::from_bits((self.to_bits() & 0x7FFF) | (sign.to_bits() & 0x8000))
    }
}

/// Define a 16-bit float type over a pair of codec functions
macro_rules! half {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($format:ident): $widen:path, $narrow:path, max = $max:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        #[repr(transparent)]
        $vis struct $name(u16);

        impl $name {
            /// Positive zero
            pub const ZERO: Self = Self(0);

            /// Negative zero
            pub const NEG_ZERO: Self = Self(0x8000);

            /// One
            pub const ONE: Self = Self(0x3C00);

            /// Largest finite value
            pub const MAX: Self = Self($max);

            /// Smallest finite value
            pub const MIN: Self = Self($max | 0x8000);

            /// Smallest positive normal value, 2<sup>-14</sup>
            pub const MIN_POSITIVE: Self = Self(0x0400);

            /// Smallest positive subnormal value, 2<sup>-24</sup>
            pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

            /// Difference between 1 and the next larger value, 2<sup>-10</sup>
            pub const EPSILON: Self = Self(0x1400);

            /// Raw transmutation from `u16`
            #[must_use]
            pub const fn from_bits(v: u16) -> Self {
                Self(v)
            }

            /// Raw transmutation to `u16`
            #[must_use]
            pub const fn to_bits(self) -> u16 {
                self.0
            }

            /// Round `f32` to the nearest representable value
            #[must_use]
            pub const fn from_f32(x: f32) -> Self {
                Self($narrow(x))
            }

            /// Exact conversion to `f32`
            #[must_use]
            pub const fn to_f32(self) -> f32 {
                $widen(self.0)
            }
        }

        impl Half for $name {
            const FORMAT: Format = Format::$format;
            const ZERO: Self = Self::ZERO;
            const NEG_ZERO: Self = Self::NEG_ZERO;
            const ONE: Self = Self::ONE;
            const MAX: Self = Self::MAX;
            const MIN: Self = Self::MIN;
            const MIN_POSITIVE: Self = Self::MIN_POSITIVE;
            const MIN_POSITIVE_SUBNORMAL: Self = Self::MIN_POSITIVE_SUBNORMAL;
            const EPSILON: Self = Self::EPSILON;

            fn from_bits(v: u16) -> Self {
                Self::from_bits(v)
            }

            fn to_bits(self) -> u16 {
                self.to_bits()
            }

            fn from_f32(x: f32) -> Self {
                Self::from_f32(x)
            }

            fn to_f32(self) -> f32 {
                self.to_f32()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                !self.is_nan()
                    && !other.is_nan()
                    && (self.0 == other.0 || (self.0 | other.0) & 0x7FFF == 0)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.to_f32().partial_cmp(&other.to_f32())
            }
        }

        impl From<$name> for f32 {
            fn from(x: $name) -> Self {
                x.to_f32()
            }
        }

        impl From<$name> for f64 {
            fn from(x: $name) -> Self {
                x.to_f64()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.to_f32(), f)
            }
        }

        impl fmt::LowerExp for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerExp::fmt(&self.to_f32(), f)
            }
        }
    };
}

half! {
    /// IEEE 754 binary16
    pub struct F16(IEEE): ieee::ieee_half_to_single_value, ieee::single_to_ieee_half_value, max = 0x7BFF
}

half! {
    /// Alternative half precision without infinities or NaNs
    pub struct AltF16(Alt): alt::alt_half_to_single_value, alt::single_to_alt_half_value, max = 0x7FFF
}

impl F16 {
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7C00);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(0xFC00);

    /// Canonical quiet NaN
    pub const NAN: Self = Self(0x7E00);
}
