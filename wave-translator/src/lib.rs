//! Wave Translator Library
//!
//! A stateless, reusable library that turns raw signal samples from a
//! waveform viewer into display strings.
//!
//! # Architecture
//!
//! - A [`Translator`] maps (bit width, raw value string) to a display string
//!   and a [`ValueKind`] classification
//! - Built-in translators are listed in a static registration table and
//!   loaded into a [`TranslatorRegistry`] at startup
//! - Value-table translators are loaded from user TOML files
//! - The [`Dispatcher`] routes values to the selected translator
//!
//! Translation never fails past its boundary: values a translator cannot
//! interpret come back as `Warn`, and unknown or panicking translators come
//! back as `Error`.
//!
//! The library does NOT:
//! - Load or parse waveform files
//! - Render anything
//!
//! Those belong to the host application.
//!
//! # Example Usage
//!
//! ```
//! use wave_translator::{Dispatcher, ValueKind};
//!
//! let dispatcher = Dispatcher::default();
//!
//! let hex = dispatcher.translate("Hexadecimal", 16, "255");
//! assert_eq!(hex.display, "0x00ff");
//! assert_eq!(hex.kind, ValueKind::Normal);
//!
//! let text = dispatcher.translate("Hexadecimal", 8, "abc");
//! assert_eq!(text.display, "abc");
//! assert_eq!(text.kind, ValueKind::Warn);
//! ```

// Public modules
pub mod config;
pub mod dispatcher;
pub mod registry;
pub mod translator;
pub mod translators;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use registry::{RegistryStats, TranslatorRegistry, DEFAULT_TRANSLATOR};
pub use translator::Translator;
pub use translators::{builtin_translators, ValueTableTranslator};
pub use types::{
    Result, SampleValue, TranslationPreference, TranslationResult, TranslatorError, ValueKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
