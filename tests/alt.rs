// This file is part of the fp16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![allow(clippy::float_cmp)]

use fp16::alt::{alt_half_to_single_bits, alt_half_to_single_value, single_to_alt_half_value};
use fp16::ieee::{ieee_half_to_single_bits, single_to_ieee_half_value};
use fp16::{AltF16, Half};

#[test]
fn test_agrees_with_ieee_below_31() {
    for bits in (0..0x7C00).chain(0x8000..0xFC00) {
        assert_eq!(alt_half_to_single_bits(bits), ieee_half_to_single_bits(bits));
    }

    for x in [0.0, -0.0, 1.0, -1.25, 0.1, 65504.0, libm::ldexpf(1.0, -24), libm::ldexpf(3.0, -26)] {
        assert_eq!(single_to_alt_half_value(x), single_to_ieee_half_value(x));
    }
}

#[test]
fn test_exponent_31_is_finite() {
    for bits in (0x7C00..=0x7FFF).chain(0xFC00..=0xFFFF) {
        let x = alt_half_to_single_value(bits);
        assert!(x.is_finite(), "{bits:#06X}");
        assert!(x.abs() >= 65536.0);
        assert_eq!(x.is_sign_negative(), bits & 0x8000 != 0);
        assert_eq!(alt_half_to_single_bits(bits) & 0x7F80_0000, 0x4780_0000);
        assert_eq!(single_to_alt_half_value(x), bits);
    }

    assert_eq!(alt_half_to_single_value(0x7C00), 65536.0);
    assert_eq!(alt_half_to_single_value(0x7FFF), 131_008.0);
    assert_eq!(alt_half_to_single_value(0xFFFF), -131_008.0);
}

#[test]
fn test_no_saturation_to_infinity() {
    assert_eq!(single_to_alt_half_value(65536.0), 0x7C00);
    assert_eq!(single_to_alt_half_value(65520.0), 0x7C00);
    assert_eq!(single_to_alt_half_value(100_000.0), 0x7E1A);
    assert_eq!(single_to_alt_half_value(-131_008.0), 0xFFFF);
}

#[test]
fn test_clamp() {
    assert_eq!(single_to_alt_half_value(131_040.0), 0x7FFF);
    assert_eq!(single_to_alt_half_value(131_072.0), 0x7FFF);
    assert_eq!(single_to_alt_half_value(1.0e10), 0x7FFF);
    assert_eq!(single_to_alt_half_value(-1.0e10), 0xFFFF);
    assert_eq!(single_to_alt_half_value(f32::MAX), 0x7FFF);
    assert_eq!(single_to_alt_half_value(f32::MIN), 0xFFFF);
    assert_eq!(AltF16::from_f64(1.0e300), AltF16::MAX);
    assert_eq!(AltF16::from_f64(-1.0e300), AltF16::MIN);
}

#[test]
fn test_non_finite_inputs() {
    assert_eq!(single_to_alt_half_value(f32::INFINITY), 0x7FFF);
    assert_eq!(single_to_alt_half_value(f32::NEG_INFINITY), 0xFFFF);
    assert_eq!(single_to_alt_half_value(f32::NAN), 0x7FFF);
    assert_eq!(single_to_alt_half_value(-f32::NAN), 0xFFFF);
    assert_eq!(single_to_alt_half_value(f32::from_bits(0x7F80_0001)), 0x7FFF);
    assert_eq!(single_to_alt_half_value(f32::from_bits(0xFFFF_FFFF)), 0xFFFF);

    assert!(!AltF16::from_f32(f32::NAN).is_nan());
    assert!(!AltF16::from_f64(f64::INFINITY).is_infinite());
}

#[test]
fn test_ties_to_even() {
    // Halfway between 0x7C00 and 0x7C01
    assert_eq!(single_to_alt_half_value(65568.0), 0x7C00);
    // Halfway between 0x7C01 and 0x7C02
    assert_eq!(single_to_alt_half_value(65632.0), 0x7C02);
    // Halfway between 0x7FFE and 0x7FFF
    assert_eq!(single_to_alt_half_value(130_976.0), 0x7FFE);
    assert_eq!(single_to_alt_half_value(libm::nextafterf(130_976.0, f32::INFINITY)), 0x7FFF);
}
