//! IEEE 754 floating-point translators
//!
//! Each translator reinterprets the low bits of the value as a float of a
//! fixed width and only applies to signals of exactly that width.

use crate::translator::Translator;
use crate::types::{TranslationPreference, TranslationResult};
use crate::value::{low_u64, translate_numeric};
use half::{bf16, f16};
use std::fmt::{Display, LowerExp};

/// Plain decimal or scientific notation, whichever is shorter
fn shortest_float<T: Display + LowerExp>(v: T) -> String {
    let dec = format!("{v}");
    let exp = format!("{v:e}");
    if dec.len() > exp.len() {
        exp
    } else {
        dec
    }
}

fn exact_width(num_bits: u32, required: u32) -> TranslationPreference {
    if num_bits == required {
        TranslationPreference::Yes
    } else {
        TranslationPreference::No
    }
}

#[derive(Debug, Default)]
pub struct HalfPrecisionTranslator;

impl Translator for HalfPrecisionTranslator {
    fn name(&self) -> &str {
        "FP: 16-bit IEEE 754"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(shortest_float(f16::from_bits(low_u64(&bits) as u16)))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        exact_width(num_bits, 16)
    }
}

/// Brain floating point: the top half of an `f32`
#[derive(Debug, Default)]
pub struct BFloat16Translator;

impl Translator for BFloat16Translator {
    fn name(&self) -> &str {
        "FP: bfloat16"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(shortest_float(bf16::from_bits(low_u64(&bits) as u16)))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        exact_width(num_bits, 16)
    }
}

#[derive(Debug, Default)]
pub struct SinglePrecisionTranslator;

impl Translator for SinglePrecisionTranslator {
    fn name(&self) -> &str {
        "FP: 32-bit IEEE 754"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(shortest_float(f32::from_bits(low_u64(&bits) as u32)))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        exact_width(num_bits, 32)
    }
}

#[derive(Debug, Default)]
pub struct DoublePrecisionTranslator;

impl Translator for DoublePrecisionTranslator {
    fn name(&self) -> &str {
        "FP: 64-bit IEEE 754"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(shortest_float(f64::from_bits(low_u64(&bits))))
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        exact_width(num_bits, 64)
    }
}
