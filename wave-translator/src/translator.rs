//! The [`Translator`] trait
//!
//! A translator turns one raw sample into a display string and a
//! [`ValueKind`](crate::ValueKind). Implementations are stateless and must not
//! panic; values they cannot interpret are returned as classified results.

use crate::types::{TranslationPreference, TranslationResult};

/// A named conversion applied to raw sample values for display
pub trait Translator: Send + Sync {
    /// Name under which the translator is registered and selected
    fn name(&self) -> &str;

    /// Translate `value`, a sample of a signal that is `num_bits` wide
    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult;

    /// Whether this translator applies to signals of `num_bits` bits
    fn translates(&self, num_bits: u32) -> TranslationPreference {
        let _ = num_bits;
        TranslationPreference::Yes
    }
}

impl std::fmt::Debug for dyn Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("name", &self.name()).finish()
    }
}
