//! LEB128 translator

use super::radix::{format_binary, group_n_chars};
use crate::translator::Translator;
use crate::types::{TranslationPreference, TranslationResult};
use crate::value::translate_numeric;
use num::{BigUint, Zero};

/// Decode a little-endian base-128 varint stored in a signal
///
/// The least significant byte of the signal holds the final LEB byte, so
/// reading the bytes from the top gives the groups from most to least
/// significant. Leading zero bytes are allowed as padding.
fn decode_leb(bits: &BigUint) -> Result<BigUint, &'static str> {
    let bytes = bits.to_bytes_be();
    if bytes.first().is_some_and(|b| b & 0x80 != 0) {
        return Err("invalid MSB");
    }

    let first = BigUint::from(bytes.first().copied().unwrap_or(0));
    bytes.iter().skip(1).try_fold(first, |result, b| {
        if (b & 0x80 == 0) != result.is_zero() {
            Err("invalid flag")
        } else {
            Ok((result << 7u32) + (b & 0x7f))
        }
    })
}

/// Unsigned LEB128 (as used by WebAssembly and DWARF) of any byte width
#[derive(Debug, Default)]
pub struct LebTranslator;

impl Translator for LebTranslator {
    fn name(&self) -> &str {
        "LEBxxx"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| match decode_leb(&bits) {
            Ok(decoded) => TranslationResult::normal(decoded.to_string()),
            Err(reason) => {
                let digits = format_binary(num_bits, &bits);
                let grouped = group_n_chars(&digits, 4).join(" ");
                TranslationResult::warn(format!("{}: {}", reason, grouped))
            }
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        if num_bits > 0 && num_bits % 8 == 0 {
            TranslationPreference::Yes
        } else {
            TranslationPreference::No
        }
    }
}
