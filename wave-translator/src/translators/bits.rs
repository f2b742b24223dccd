//! Single-bit and bit-counting translators

use super::radix::format_binary;
use crate::translator::Translator;
use crate::types::{TranslationPreference, TranslationResult};
use crate::value::{classify_logic, parse_integer, translate_numeric};
use num::BigUint;

/// Run `count` on the binary digits of the value padded to `num_bits`
///
/// Values wider than the signal have no meaningful leading bits and come
/// back as `Warn`.
fn count_leading(
    num_bits: u32,
    value: &str,
    count: impl FnOnce(&str) -> usize,
) -> TranslationResult {
    translate_numeric(num_bits, value, |bits| {
        if bits.bits() > u64::from(num_bits) {
            return TranslationResult::warn(value);
        }
        let digits = format_binary(num_bits, &bits);
        TranslationResult::normal(count(&digits).to_string())
    })
}

fn leading(digits: &str, digit: u8) -> usize {
    digits.bytes().take_while(|b| *b == digit).count()
}

/// Shows one-bit signals as `0`/`1`, keeping four-state characters as-is
#[derive(Debug, Default)]
pub struct BitTranslator;

impl Translator for BitTranslator {
    fn name(&self) -> &str {
        "Bit"
    }

    fn translate(&self, _num_bits: u32, value: &str) -> TranslationResult {
        if let Ok(parsed) = parse_integer(value) {
            let display = if !parsed.negative && parsed.magnitude.bits() <= 1 {
                parsed.magnitude.to_string()
            } else {
                "-".to_string()
            };
            return TranslationResult::normal(display);
        }

        match classify_logic(value) {
            Some((_, kind)) => TranslationResult::new(value.trim(), kind),
            None => TranslationResult::warn(value),
        }
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        if num_bits == 1 {
            TranslationPreference::Prefer
        } else {
            TranslationPreference::No
        }
    }
}

/// Population count of the bit pattern
#[derive(Debug, Default)]
pub struct NumberOfOnesTranslator;

impl Translator for NumberOfOnesTranslator {
    fn name(&self) -> &str {
        "Number of ones"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(bits.count_ones().to_string())
        })
    }
}

/// Zeros above the most significant set bit, within the signal width
#[derive(Debug, Default)]
pub struct LeadingZerosTranslator;

impl Translator for LeadingZerosTranslator {
    fn name(&self) -> &str {
        "Leading zeros"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        count_leading(num_bits, value, |digits| leading(digits, b'0'))
    }
}

/// Ones from the most significant bit down, within the signal width
#[derive(Debug, Default)]
pub struct LeadingOnesTranslator;

impl Translator for LeadingOnesTranslator {
    fn name(&self) -> &str {
        "Leading ones"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        count_leading(num_bits, value, |digits| leading(digits, b'1'))
    }
}

/// Length of the run of equal bits at the top of the signal
///
/// For a two's complement value this is the number of redundant sign bits
/// plus one.
#[derive(Debug, Default)]
pub struct IdenticalMsbsTranslator;

impl Translator for IdenticalMsbsTranslator {
    fn name(&self) -> &str {
        "Identical MSBs"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        count_leading(num_bits, value, |digits| {
            leading(digits, b'0').max(leading(digits, b'1'))
        })
    }
}

/// Zeros below the least significant set bit
#[derive(Debug, Default)]
pub struct TrailingZerosTranslator;

impl Translator for TrailingZerosTranslator {
    fn name(&self) -> &str {
        "Trailing zeros"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            let zeros = bits.trailing_zeros().unwrap_or(u64::from(num_bits));
            TranslationResult::normal(zeros.to_string())
        })
    }
}

/// Ones below the least significant cleared bit
#[derive(Debug, Default)]
pub struct TrailingOnesTranslator;

impl Translator for TrailingOnesTranslator {
    fn name(&self) -> &str {
        "Trailing ones"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits: BigUint| {
            TranslationResult::normal(bits.trailing_ones().to_string())
        })
    }
}
