//! ASCII translator

use crate::translator::Translator;
use crate::types::TranslationResult;
use crate::value::translate_numeric;

/// Renders the big-endian bytes of the value as characters
///
/// Leading zero bytes are dropped. Bytes outside printable ASCII are shown
/// as `\xNN`.
#[derive(Debug, Default)]
pub struct AsciiTranslator;

impl Translator for AsciiTranslator {
    fn name(&self) -> &str {
        "ASCII"
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| {
            let text: String = bits
                .to_bytes_be()
                .iter()
                .map(|b| match b {
                    0x20..=0x7e => char::from(*b).to_string(),
                    _ => format!("\\x{b:02x}"),
                })
                .collect();
            TranslationResult::normal(text)
        })
    }
}
