//! Binary and octal translators

use crate::translator::Translator;
use crate::types::TranslationResult;
use crate::value::{no_of_digits, translate_numeric};
use num::BigUint;

/// Split an ASCII string into chunks of `n`, aligned to the end so that
/// only the leading chunk may be short
pub(crate) fn group_n_chars(s: &str, n: usize) -> Vec<&str> {
    let num_extra_chars = s.len() % n;
    let (first_group, rest) = s.split_at(num_extra_chars);

    let mut groups = Vec::with_capacity(s.len() / n + 1);
    if !first_group.is_empty() {
        groups.push(first_group);
    }
    groups.extend((0..rest.len() / n).map(|i| &rest[i * n..(i + 1) * n]));
    groups
}

pub(crate) fn format_binary(num_bits: u32, bits: &BigUint) -> String {
    format!("{bits:0width$b}", width = num_bits as usize)
}

/// Binary digits, zero-padded to the signal width
#[derive(Debug, Default)]
pub struct BinaryTranslator;

impl Translator for BinaryTranslator {
    fn name(&self) -> &str {
        "Binary"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(format_binary(num_bits, &bits))
        })
    }
}

/// Binary digits in space-separated groups of four
#[derive(Debug, Default)]
pub struct GroupingBinaryTranslator;

impl Translator for GroupingBinaryTranslator {
    fn name(&self) -> &str {
        "Binary (with groups)"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            let digits = format_binary(num_bits, &bits);
            TranslationResult::normal(group_n_chars(&digits, 4).join(" "))
        })
    }
}

/// Octal digits, zero-padded to `ceil(num_bits / 3)` characters
#[derive(Debug, Default)]
pub struct OctalTranslator;

impl Translator for OctalTranslator {
    fn name(&self) -> &str {
        "Octal"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            TranslationResult::normal(format!(
                "{bits:0width$o}",
                width = no_of_digits(num_bits, 3)
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;

    #[test]
    fn test_group_n_chars() {
        assert_eq!(group_n_chars("0000111100", 4), vec!["00", "0011", "1100"]);
        assert_eq!(group_n_chars("00001111", 4), vec!["0000", "1111"]);
        assert!(group_n_chars("", 4).is_empty());
    }

    #[test]
    fn test_binary() {
        let result = BinaryTranslator.translate(8, "5");
        assert_eq!(result.display, "00000101");
        assert_eq!(result.kind, ValueKind::Normal);

        let negative = BinaryTranslator.translate(4, "-2");
        assert_eq!(negative.display, "1110");
    }

    #[test]
    fn test_grouping_binary() {
        let result = GroupingBinaryTranslator.translate(10, "1023");
        assert_eq!(result.display, "11 1111 1111");
    }

    #[test]
    fn test_octal() {
        assert_eq!(OctalTranslator.translate(8, "8").display, "010");
        assert_eq!(OctalTranslator.translate(9, "511").display, "777");
    }

    #[test]
    fn test_four_state_fallback() {
        let result = BinaryTranslator.translate(4, "1z01");
        assert_eq!(result.display, "HIGHIMP");
        assert_eq!(result.kind, ValueKind::HighImp);

        let result = OctalTranslator.translate(4, "garbage");
        assert_eq!(result.display, "garbage");
        assert_eq!(result.kind, ValueKind::Warn);
    }
}
