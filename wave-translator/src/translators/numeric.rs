//! Integer translators

use crate::translator::Translator;
use crate::types::TranslationResult;
use crate::value::translate_numeric;
use num::{BigUint, One};

/// Decimal value of the bit pattern
#[derive(Debug, Default)]
pub struct UnsignedTranslator;

impl Translator for UnsignedTranslator {
    fn name(&self) -> &str {
        "Unsigned"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(bits.to_string())
        })
    }
}

/// Decimal value of the bit pattern read as two's complement
#[derive(Debug, Default)]
pub struct SignedTranslator;

impl Translator for SignedTranslator {
    fn name(&self) -> &str {
        "Signed"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            if num_bits == 0 || bits.bits() > u64::from(num_bits) {
                return TranslationResult::warn(value);
            }

            let sign_weight = BigUint::one() << (num_bits - 1);
            if bits < sign_weight {
                TranslationResult::normal(bits.to_string())
            } else {
                TranslationResult::normal(format!("-{}", (sign_weight << 1u32) - bits))
            }
        })
    }
}
