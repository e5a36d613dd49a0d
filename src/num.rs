// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions from the `num-traits` crate
//!
//! Integer conversions go through the exact `f32` value, so they truncate
//! toward zero and give `None` for NaNs, infinities, and out-of-range
//! values.  Conversions into the 16-bit formats follow the rounding and
//! overflow policy of [`Half::from_f64`], hence never fail.

use crate::{AltF16, Half, F16};
use num_traits::{AsPrimitive, FromPrimitive, ToPrimitive};

macro_rules! impl_num_traits {
    ($name:ident) => {
        impl ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                $name::to_f32(*self).to_i64()
            }

            fn to_u64(&self) -> Option<u64> {
                $name::to_f32(*self).to_u64()
            }

            fn to_f32(&self) -> Option<f32> {
                Some($name::to_f32(*self))
            }

            fn to_f64(&self) -> Option<f64> {
                Some(Half::to_f64(*self))
            }
        }

        impl FromPrimitive for $name {
            #[allow(clippy::cast_precision_loss)]
            fn from_i64(n: i64) -> Option<Self> {
                Some(Half::from_f64(n as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_u64(n: u64) -> Option<Self> {
                Some(Half::from_f64(n as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_i128(n: i128) -> Option<Self> {
                Some(Half::from_f64(n as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_u128(n: u128) -> Option<Self> {
                Some(Half::from_f64(n as f64))
            }

            fn from_f32(x: f32) -> Option<Self> {
                Some($name::from_f32(x))
            }

            fn from_f64(x: f64) -> Option<Self> {
                Some(Half::from_f64(x))
            }
        }

        impl AsPrimitive<f32> for $name {
            fn as_(self) -> f32 {
                $name::to_f32(self)
            }
        }

        impl AsPrimitive<f64> for $name {
            fn as_(self) -> f64 {
                Half::to_f64(self)
            }
        }

        impl AsPrimitive<$name> for f32 {
            fn as_(self) -> $name {
                $name::from_f32(self)
            }
        }

        impl AsPrimitive<$name> for f64 {
            fn as_(self) -> $name {
                Half::from_f64(self)
            }
        }
    };
}

impl_num_traits!(F16);
impl_num_traits!(AltF16);
