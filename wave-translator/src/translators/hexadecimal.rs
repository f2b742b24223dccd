//! Hexadecimal translator

use crate::translator::Translator;
use crate::types::TranslationResult;
use crate::value::parse_integer;

/// Formats integer samples as `0x`-prefixed lowercase hex
///
/// The digits are zero-padded to `num_bits / 4` characters. Values that are
/// not integers are passed through unchanged with `ValueKind::Warn`.
#[derive(Debug, Default)]
pub struct HexTranslator;

impl Translator for HexTranslator {
    fn name(&self) -> &str {
        "Hexadecimal"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        let bits = parse_integer(value)
            .ok()
            .and_then(|parsed| parsed.into_bits(num_bits));

        match bits {
            Some(bits) => TranslationResult::normal(format!(
                "0x{bits:0width$x}",
                width = (num_bits / 4) as usize
            )),
            None => {
                log::trace!("Not numeric, passing through: {:?}", value);
                TranslationResult::warn(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;

    fn hex(num_bits: u32, value: &str) -> (String, ValueKind) {
        let result = HexTranslator.translate(num_bits, value);
        (result.display, result.kind)
    }

    #[test]
    fn test_pads_to_quarter_width() {
        assert_eq!(hex(16, "255"), ("0x00ff".to_string(), ValueKind::Normal));
        assert_eq!(hex(4, "15"), ("0xf".to_string(), ValueKind::Normal));
        assert_eq!(hex(32, "0"), ("0x00000000".to_string(), ValueKind::Normal));
    }

    #[test]
    fn test_padding_truncates_width() {
        // 7 bits -> 1 digit of padding
        assert_eq!(hex(7, "3"), ("0x3".to_string(), ValueKind::Normal));
        assert_eq!(hex(1, "1"), ("0x1".to_string(), ValueKind::Normal));
    }

    #[test]
    fn test_never_truncates_value() {
        assert_eq!(hex(4, "255"), ("0xff".to_string(), ValueKind::Normal));
    }

    #[test]
    fn test_non_numeric_passes_through() {
        assert_eq!(hex(8, "abc"), ("abc".to_string(), ValueKind::Warn));
        assert_eq!(hex(8, "xx01"), ("xx01".to_string(), ValueKind::Warn));
        assert_eq!(hex(8, ""), (String::new(), ValueKind::Warn));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(hex(8, "-1"), ("0xff".to_string(), ValueKind::Normal));
        assert_eq!(hex(8, "-300"), ("-300".to_string(), ValueKind::Warn));
    }

    #[test]
    fn test_wide_values() {
        assert_eq!(
            hex(128, "340282366920938463463374607431768211455"),
            (format!("0x{}", "f".repeat(32)), ValueKind::Normal)
        );
        assert_eq!(
            hex(256, "1"),
            (format!("0x{}1", "0".repeat(63)), ValueKind::Normal)
        );
    }

    #[test]
    fn test_values_beyond_128_bits() {
        // 2^128
        assert_eq!(
            hex(256, "340282366920938463463374607431768211456"),
            (format!("0x{}1{}", "0".repeat(31), "0".repeat(32)), ValueKind::Normal)
        );
        assert_eq!(
            hex(8, "340282366920938463463374607431768211456"),
            (format!("0x1{}", "0".repeat(32)), ValueKind::Normal)
        );
    }

    #[test]
    fn test_negative_on_wide_signal() {
        assert_eq!(
            hex(256, "-1"),
            (format!("0x{}", "f".repeat(64)), ValueKind::Normal)
        );
        assert_eq!(
            hex(132, "-2"),
            (format!("0xf{}e", "f".repeat(31)), ValueKind::Normal)
        );
    }

    #[test]
    fn test_matches_zero_padded_hex_for_many_values() {
        for n in [1u32, 3, 4, 8, 12, 16, 33, 64] {
            for v in [0u128, 1, 9, 10, 255, 4096, 65535, u128::from(u64::MAX)] {
                let expected = format!("0x{v:0width$x}", width = (n / 4) as usize);
                assert_eq!(hex(n, &v.to_string()), (expected, ValueKind::Normal));
            }
        }
    }
}
