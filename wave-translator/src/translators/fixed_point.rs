//! Fixed-point translators
//!
//! A raw sample carries no information about where its binary point is, so
//! these translators are built with an explicit number of fraction bits and
//! registered on request (see `DispatchConfig::add_fixed_point`).

use crate::translator::Translator;
use crate::types::{TranslationPreference, TranslationResult};
use crate::value::translate_numeric;
use num::{BigUint, One, Zero};

/// Exact decimal rendering of `bits / 2^fraction_bits`
fn ufixed_to_string(bits: &BigUint, fraction_bits: u32) -> String {
    if fraction_bits == 0 {
        return bits.to_string();
    }

    let mask = (BigUint::one() << fraction_bits) - 1u32;
    let integer = bits >> fraction_bits;
    let mut remainder = bits & &mask;
    if remainder.is_zero() {
        return integer.to_string();
    }

    // Every binary fraction terminates within `fraction_bits` decimal digits
    let mut fraction = String::new();
    while !remainder.is_zero() {
        remainder *= 10u32;
        fraction.push_str(&(&remainder >> fraction_bits).to_string());
        remainder &= &mask;
    }
    format!("{integer}.{fraction}")
}

/// Like [`ufixed_to_string`], reading `bits` as two's complement in `num_bits`
fn sfixed_to_string(bits: &BigUint, num_bits: u32, fraction_bits: u32) -> String {
    if num_bits > 0 && bits.bit(u64::from(num_bits - 1)) {
        let magnitude = (BigUint::one() << num_bits) - bits;
        format!("-{}", ufixed_to_string(&magnitude, fraction_bits))
    } else {
        ufixed_to_string(bits, fraction_bits)
    }
}

/// Unsigned value with a fixed number of fraction bits
#[derive(Debug)]
pub struct UnsignedFixedPointTranslator {
    name: String,
    fraction_bits: u32,
}

impl UnsignedFixedPointTranslator {
    pub fn new(fraction_bits: u32) -> Self {
        Self {
            name: format!("Unsigned fixed point ({fraction_bits} fraction bits)"),
            fraction_bits,
        }
    }
}

impl Translator for UnsignedFixedPointTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(ufixed_to_string(&bits, self.fraction_bits))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        if num_bits >= self.fraction_bits {
            TranslationPreference::Yes
        } else {
            TranslationPreference::No
        }
    }
}

/// Two's complement value with a fixed number of fraction bits
#[derive(Debug)]
pub struct SignedFixedPointTranslator {
    name: String,
    fraction_bits: u32,
}

impl SignedFixedPointTranslator {
    pub fn new(fraction_bits: u32) -> Self {
        Self {
            name: format!("Signed fixed point ({fraction_bits} fraction bits)"),
            fraction_bits,
        }
    }
}

impl Translator for SignedFixedPointTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            if bits.bits() > u64::from(num_bits) {
                return TranslationResult::warn(value);
            }
            TranslationResult::normal(sfixed_to_string(&bits, num_bits, self.fraction_bits))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        // At least one bit is left for the sign
        if num_bits > self.fraction_bits {
            TranslationPreference::Yes
        } else {
            TranslationPreference::No
        }
    }
}

/// The signed and unsigned fixed-point translators for `fraction_bits`
pub fn fixed_point_translators(fraction_bits: u32) -> Vec<Box<dyn Translator>> {
    vec![
        Box::new(UnsignedFixedPointTranslator::new(fraction_bits)),
        Box::new(SignedFixedPointTranslator::new(fraction_bits)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;

    fn ufixed(value: u64, fraction_bits: u32) -> String {
        ufixed_to_string(&BigUint::from(value), fraction_bits)
    }

    fn sfixed(value: u64, num_bits: u32, fraction_bits: u32) -> String {
        sfixed_to_string(&BigUint::from(value), num_bits, fraction_bits)
    }

    #[test]
    fn test_unsigned_fractions() {
        assert_eq!(ufixed(32, 0), "32");
        assert_eq!(ufixed(256, 8), "1");
        assert_eq!(ufixed(48225, 8), "188.37890625");
        assert_eq!(ufixed(100, 10), "0.09765625");
        assert_eq!(ufixed(1, 10), "0.0009765625");
        assert_eq!(ufixed(0, 16), "0");
        assert_eq!(
            ufixed(12345678901234567890, 20),
            "11773756886705.9401416778564453125"
        );
    }

    #[test]
    fn test_signed_fractions() {
        assert_eq!(sfixed(32, 6, 0), "-32");
        assert_eq!(sfixed(0x1E000, 17, 15), "-0.25");
        assert_eq!(sfixed(0x1FF, 9, 7), "-0.0078125");
        assert_eq!(sfixed(0xFCC, 12, 2), "-13");
        assert_eq!(sfixed(0x034, 12, 2), "13");
        assert_eq!(sfixed(0x0FF, 9, 7), "1.9921875");
    }

    #[test]
    fn test_translators() {
        let unsigned = UnsignedFixedPointTranslator::new(4);
        assert_eq!(unsigned.name(), "Unsigned fixed point (4 fraction bits)");
        assert_eq!(unsigned.translate(8, "40").display, "2.5");
        assert_eq!(unsigned.translate(8, "z").kind, ValueKind::HighImp);

        let signed = SignedFixedPointTranslator::new(4);
        assert_eq!(signed.translate(8, "-40").display, "-2.5");
        assert_eq!(signed.translate(8, "216").display, "-2.5");
        assert_eq!(signed.translate(8, "300").kind, ValueKind::Warn);
    }

    #[test]
    fn test_applicable_widths() {
        assert_eq!(UnsignedFixedPointTranslator::new(8).translates(8), TranslationPreference::Yes);
        assert_eq!(SignedFixedPointTranslator::new(8).translates(8), TranslationPreference::No);
        assert_eq!(SignedFixedPointTranslator::new(8).translates(9), TranslationPreference::Yes);
        assert_eq!(fixed_point_translators(3).len(), 2);
    }
}
