//! Raw value interpretation
//!
//! Hosts deliver samples as strings. Numeric samples are base-10 integer
//! literals; bit-vector samples from four-state logic may instead carry
//! characters such as `x` or `z`. This module turns those strings into bit
//! patterns or into the classification of the logic state they carry.

use crate::types::{Result, TranslationResult, TranslatorError, ValueKind};
use num::{BigUint, One};

/// A parsed base-10 integer literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInteger {
    /// True if the literal carried a `-` sign and a non-zero magnitude
    pub negative: bool,
    /// Absolute value
    pub magnitude: BigUint,
}

impl ParsedInteger {
    /// Bit pattern of this integer for a signal of `num_bits` bits
    ///
    /// Non-negative values are returned as-is, even when wider than the
    /// signal. Negative values become their two's complement in `num_bits`
    /// bits, or `None` if they do not fit.
    pub fn into_bits(self, num_bits: u32) -> Option<BigUint> {
        if !self.negative {
            return Some(self.magnitude);
        }
        if num_bits == 0 || self.magnitude > BigUint::one() << (num_bits - 1) {
            return None;
        }

        Some((BigUint::one() << num_bits) - self.magnitude)
    }
}

/// Parse an integer literal: optional surrounding whitespace, optional sign,
/// decimal digits with single `_` separators between them
///
/// Only ASCII digits are accepted; other Unicode decimal digits (e.g. `٣`)
/// are a parse failure.
pub fn parse_integer(value: &str) -> Result<ParsedInteger> {
    let failure = || TranslatorError::ParseFailure(value.to_string());

    let trimmed = value.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(failure());
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(failure());
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(failure)?;

    Ok(ParsedInteger {
        negative: negative && magnitude.bits() != 0,
        magnitude,
    })
}

/// Classify a four-state logic string that is not a plain binary number
///
/// Returns `None` for strings of only `0`/`1` and for strings containing
/// characters outside the logic alphabet.
pub fn classify_logic(value: &str) -> Option<(String, ValueKind)> {
    let s = value.trim().to_ascii_lowercase();
    if s.is_empty() || !s.chars().all(|c| "01xzuwhl-".contains(c)) {
        return None;
    }

    if s.contains('x') {
        Some(("UNDEF".to_string(), ValueKind::Undef))
    } else if s.contains('z') {
        Some(("HIGHIMP".to_string(), ValueKind::HighImp))
    } else if s.contains('-') {
        Some(("DON'T CARE".to_string(), ValueKind::DontCare))
    } else if s.contains('u') {
        Some(("UNDEF".to_string(), ValueKind::Undef))
    } else if s.contains('w') {
        Some(("UNDEF WEAK".to_string(), ValueKind::Undef))
    } else if s.contains('h') || s.contains('l') {
        Some(("WEAK".to_string(), ValueKind::Weak))
    } else {
        None
    }
}

/// Run `translate` on the bit pattern of `value`, or produce the fallback
/// result for values that are not integers
///
/// Four-state strings map to their logic classification. Everything else
/// that cannot be read as a bit pattern is passed through with `Warn`.
pub(crate) fn translate_numeric(
    num_bits: u32,
    value: &str,
    translate: impl FnOnce(BigUint) -> TranslationResult,
) -> TranslationResult {
    match parse_integer(value) {
        Ok(parsed) => match parsed.into_bits(num_bits) {
            Some(bits) => translate(bits),
            None => {
                log::trace!("Value {:?} does not fit in {} bits", value, num_bits);
                TranslationResult::warn(value)
            }
        },
        Err(_) => match classify_logic(value) {
            Some((label, kind)) => TranslationResult::new(label, kind),
            None => TranslationResult::warn(value),
        },
    }
}

/// Lowest 64 bits of a bit pattern
pub(crate) fn low_u64(bits: &BigUint) -> u64 {
    bits.iter_u64_digits().next().unwrap_or(0)
}

/// Number of digits of `digit_size` bits needed for `num_bits`, rounded up
pub(crate) fn no_of_digits(num_bits: u32, digit_size: u32) -> usize {
    num_bits.div_ceil(digit_size) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: &str, num_bits: u32) -> Option<BigUint> {
        parse_integer(value).unwrap().into_bits(num_bits)
    }

    #[test]
    fn test_parse_plain_decimal() {
        let parsed = parse_integer("255").unwrap();
        assert_eq!(parsed.magnitude, BigUint::from(255u32));
        assert!(!parsed.negative);
    }

    #[test]
    fn test_parse_literal_forms() {
        assert_eq!(parse_integer("  42\n").unwrap().magnitude, BigUint::from(42u32));
        assert_eq!(parse_integer("+7").unwrap().magnitude, BigUint::from(7u32));
        assert_eq!(parse_integer("1_000").unwrap().magnitude, BigUint::from(1000u32));
        assert_eq!(parse_integer("007").unwrap().magnitude, BigUint::from(7u32));
        assert!(!parse_integer("-0").unwrap().negative);
    }

    #[test]
    fn test_parse_rejects_non_decimal() {
        for bad in ["", "abc", "0x10", "1__0", "_1", "1_", "-", "1.5", "1 2", "+-1"] {
            assert!(parse_integer(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_ascii_digits_only() {
        // ARABIC-INDIC DIGIT THREE
        assert!(matches!(
            parse_integer("\u{0663}"),
            Err(TranslatorError::ParseFailure(_))
        ));
    }

    #[test]
    fn test_parse_beyond_128_bits() {
        let parsed = parse_integer("340282366920938463463374607431768211456").unwrap(); // 2^128
        assert_eq!(parsed.magnitude, BigUint::one() << 128u32);
    }

    #[test]
    fn test_twos_complement() {
        assert_eq!(bits("-1", 8), Some(BigUint::from(0xFFu32)));
        assert_eq!(bits("-128", 8), Some(BigUint::from(0x80u32)));
        assert_eq!(bits("-129", 8), None);
        assert_eq!(bits("-1", 0), None);
        assert_eq!(bits("300", 8), Some(BigUint::from(300u32)));
    }

    #[test]
    fn test_twos_complement_wide() {
        assert_eq!(bits("-1", 256), Some((BigUint::one() << 256u32) - 1u32));
        assert_eq!(bits("-1", 128), Some(BigUint::from(u128::MAX)));
    }

    #[test]
    fn test_classify_logic() {
        assert_eq!(
            classify_logic("01x0"),
            Some(("UNDEF".to_string(), ValueKind::Undef))
        );
        assert_eq!(
            classify_logic("Z"),
            Some(("HIGHIMP".to_string(), ValueKind::HighImp))
        );
        assert_eq!(
            classify_logic("1-"),
            Some(("DON'T CARE".to_string(), ValueKind::DontCare))
        );
        assert_eq!(
            classify_logic("HL"),
            Some(("WEAK".to_string(), ValueKind::Weak))
        );
        assert_eq!(classify_logic("0101"), None);
        assert_eq!(classify_logic("hello"), None);
    }

    #[test]
    fn test_low_u64() {
        assert_eq!(low_u64(&BigUint::from(0u32)), 0);
        assert_eq!(low_u64(&((BigUint::one() << 64u32) + 5u32)), 5);
    }

    #[test]
    fn test_no_of_digits() {
        assert_eq!(no_of_digits(8, 3), 3);
        assert_eq!(no_of_digits(9, 3), 3);
        assert_eq!(no_of_digits(1, 4), 1);
    }
}
