//! Core types for the wave translator library
//!
//! This module defines the values handed to translators and the results they
//! produce. Translators are stateless: a result depends only on the bit width
//! and the raw value string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for translator library operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Errors that can occur at the library API surface
///
/// None of these escape `Translator::translate`; inside a translation every
/// failure is turned into a classified `TranslationResult`.
#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("Value is not an integer: {0:?}")]
    ParseFailure(String),

    #[error("Translator not found: {0}")]
    UnknownTranslator(String),

    #[error("Invalid bit width: {0} (must be at least 1)")]
    InvalidBitWidth(u32),

    #[error("Failed to parse value table: {0}")]
    ValueTableParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Classification of a translated value, used by the host for visual distinction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Value translated with full confidence
    Normal,
    /// Value could not be interpreted; the display string is a best effort
    Warn,
    /// Translation failed outright (unknown or misbehaving translator)
    Error,
    /// Undefined logic state (x, u, w)
    Undef,
    /// High impedance (z)
    HighImp,
    /// Don't care (-)
    DontCare,
    /// Weakly driven (h, l)
    Weak,
}

impl ValueKind {
    /// True for every kind that should be drawn as anything other than normal
    pub fn is_degraded(&self) -> bool {
        !matches!(self, ValueKind::Normal)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Normal => write!(f, "normal"),
            ValueKind::Warn => write!(f, "warn"),
            ValueKind::Error => write!(f, "error"),
            ValueKind::Undef => write!(f, "undef"),
            ValueKind::HighImp => write!(f, "highimp"),
            ValueKind::DontCare => write!(f, "dontcare"),
            ValueKind::Weak => write!(f, "weak"),
        }
    }
}

/// How strongly a translator claims a signal of a given width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationPreference {
    /// Selected by default for signals of this width
    Prefer,
    /// Usable, but only when explicitly selected
    Yes,
    /// Not applicable to signals of this width
    No,
}

/// Display string plus classification produced by a translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Text shown to the user
    pub display: String,
    /// Classification of the value
    pub kind: ValueKind,
}

impl TranslationResult {
    /// Create a result with an explicit kind
    pub fn new(display: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            display: display.into(),
            kind,
        }
    }

    /// Create a normally classified result
    pub fn normal(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Normal)
    }

    /// Pass a value through unchanged, flagged as not understood
    pub fn warn(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Warn)
    }

    /// Pass a value through unchanged, flagged as a failed translation
    pub fn error(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Error)
    }
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// A raw signal sample together with the width of its signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleValue {
    num_bits: u32,
    raw: String,
}

impl SampleValue {
    /// Create a sample; the bit width must be at least 1
    pub fn new(num_bits: u32, raw: impl Into<String>) -> Result<Self> {
        if num_bits == 0 {
            return Err(TranslatorError::InvalidBitWidth(num_bits));
        }
        Ok(Self {
            num_bits,
            raw: raw.into(),
        })
    }

    /// Width of the signal this sample came from
    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Raw value string as delivered by the host
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
