//! Built-in translators and user-defined value tables
//!
//! `builtin_translators()` is the static registration table the registry is
//! populated from at startup.

pub mod ascii;
pub mod bits;
pub mod fixed_point;
pub mod float;
pub mod hexadecimal;
pub mod leb;
pub mod numeric;
pub mod radix;
pub mod value_table;

// Re-export key types for convenience
pub use ascii::AsciiTranslator;
pub use bits::{
    BitTranslator, IdenticalMsbsTranslator, LeadingOnesTranslator, LeadingZerosTranslator,
    NumberOfOnesTranslator, TrailingOnesTranslator, TrailingZerosTranslator,
};
pub use fixed_point::{
    fixed_point_translators, SignedFixedPointTranslator, UnsignedFixedPointTranslator,
};
pub use float::{
    BFloat16Translator, DoublePrecisionTranslator, HalfPrecisionTranslator,
    SinglePrecisionTranslator,
};
pub use hexadecimal::HexTranslator;
pub use leb::LebTranslator;
pub use numeric::{SignedTranslator, UnsignedTranslator};
pub use radix::{BinaryTranslator, GroupingBinaryTranslator, OctalTranslator};
pub use value_table::ValueTableTranslator;

use crate::translator::Translator;

/// Every translator that ships with the library
pub fn builtin_translators() -> Vec<Box<dyn Translator>> {
    vec![
        Box::new(HexTranslator),
        Box::new(BitTranslator),
        Box::new(OctalTranslator),
        Box::new(GroupingBinaryTranslator),
        Box::new(BinaryTranslator),
        Box::new(AsciiTranslator),
        Box::new(UnsignedTranslator),
        Box::new(SignedTranslator),
        Box::new(HalfPrecisionTranslator),
        Box::new(BFloat16Translator),
        Box::new(SinglePrecisionTranslator),
        Box::new(DoublePrecisionTranslator),
        Box::new(LebTranslator),
        Box::new(NumberOfOnesTranslator),
        Box::new(LeadingZerosTranslator),
        Box::new(LeadingOnesTranslator),
        Box::new(TrailingZerosTranslator),
        Box::new(TrailingOnesTranslator),
        Box::new(IdenticalMsbsTranslator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let translators = builtin_translators();
        let names: HashSet<&str> = translators.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), translators.len());
        assert!(names.contains("Hexadecimal"));
        assert!(names.contains("FP: 32-bit IEEE 754"));
        assert!(names.contains("LEBxxx"));
        assert!(names.contains("Identical MSBs"));
    }
}
