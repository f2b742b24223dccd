//! Main dispatcher API
//!
//! The Dispatcher is the entry point for translating values. It owns the
//! translator registry, remembers which translator is selected for each
//! signal, and guarantees that every call produces a classified result.

use crate::config::DispatchConfig;
use crate::registry::TranslatorRegistry;
use crate::translator::Translator;
use crate::translators::{fixed_point_translators, ValueTableTranslator};
use crate::types::{Result, SampleValue, TranslationResult, TranslatorError};
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Routes values to translators
#[derive(Debug)]
pub struct Dispatcher {
    /// Registered translators
    registry: TranslatorRegistry,
    /// Signal name -> selected translator name
    selections: HashMap<String, String>,
    /// Fall back to the width-preferred translator before the default
    prefer_by_width: bool,
}

impl Dispatcher {
    /// Create a dispatcher from a registry and a configuration
    ///
    /// Value tables from the configured directories and fixed-point
    /// translators are registered first, so the default translator and the
    /// signal selections may name them.
    ///
    /// # Example
    /// ```
    /// use wave_translator::{DispatchConfig, Dispatcher, TranslatorRegistry, ValueKind};
    ///
    /// let config = DispatchConfig::new().with_signal_translator("top.count", "Unsigned");
    /// let dispatcher = Dispatcher::new(TranslatorRegistry::with_builtins(), &config).unwrap();
    ///
    /// let result = dispatcher.translate_signal("top.count", 8, "200");
    /// assert_eq!(result.display, "200");
    /// assert_eq!(result.kind, ValueKind::Normal);
    /// ```
    pub fn new(registry: TranslatorRegistry, config: &DispatchConfig) -> Result<Self> {
        let mut dispatcher = Self::from_registry(registry);
        dispatcher.prefer_by_width = config.prefer_by_width;

        for dir in &config.value_table_dirs {
            dispatcher.add_value_tables(dir);
        }
        for &fraction_bits in &config.fixed_point_fractions {
            for translator in fixed_point_translators(fraction_bits) {
                log::debug!("Registering {}", translator.name());
                dispatcher.registry.register(translator);
            }
        }

        if let Some(default) = &config.default_translator {
            dispatcher.registry.set_default(default)?;
        }

        for (signal, translator) in &config.signal_translators {
            dispatcher.select(signal, translator)?;
        }

        Ok(dispatcher)
    }

    /// Create a dispatcher with no selections and default settings
    pub fn from_registry(registry: TranslatorRegistry) -> Self {
        Self {
            registry,
            selections: HashMap::new(),
            prefer_by_width: true,
        }
    }

    /// Register every value table found in `dir`
    ///
    /// Returns the number of tables registered.
    pub fn add_value_tables(&mut self, dir: &Path) -> usize {
        log::info!("Loading value tables from: {:?}", dir);

        let tables = ValueTableTranslator::discover(dir);
        let count = tables.len();
        for table in tables {
            log::debug!(
                "Registering value table '{}' ({} bits, from {})",
                table.name(),
                table.width(),
                table.source()
            );
            self.registry.register(Box::new(table));
        }
        count
    }

    /// The underlying registry
    pub fn registry(&self) -> &TranslatorRegistry {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to register custom translators
    pub fn registry_mut(&mut self) -> &mut TranslatorRegistry {
        &mut self.registry
    }

    /// Translate `value` with the translator called `translator`
    ///
    /// An unknown translator, or a translator that panics, yields the input
    /// value classified as `ValueKind::Error`.
    pub fn translate(&self, translator: &str, num_bits: u32, value: &str) -> TranslationResult {
        let Some(t) = self.registry.get(translator) else {
            log::warn!("No translator called '{}'", translator);
            return TranslationResult::error(value);
        };

        match catch_unwind(AssertUnwindSafe(|| t.translate(num_bits, value))) {
            Ok(result) => result,
            Err(_) => {
                log::error!(
                    "Translator '{}' panicked on {:?} ({} bits)",
                    translator,
                    value,
                    num_bits
                );
                TranslationResult::error(value)
            }
        }
    }

    /// Translate a sample with the translator called `translator`
    pub fn translate_sample(&self, translator: &str, sample: &SampleValue) -> TranslationResult {
        self.translate(translator, sample.num_bits(), sample.raw())
    }

    /// Translate a sample of `signal` with whichever translator applies to it
    pub fn translate_signal(&self, signal: &str, num_bits: u32, value: &str) -> TranslationResult {
        let translator = self.translator_for_signal(signal, num_bits);
        log::trace!("{} ({} bits) -> {}", signal, num_bits, translator);
        self.translate(translator, num_bits, value)
    }

    /// Name of the translator used for `signal`
    ///
    /// An explicit selection wins, then the translator preferring the width
    /// (if enabled), then the registry default.
    pub fn translator_for_signal(&self, signal: &str, num_bits: u32) -> &str {
        if let Some(selected) = self.selected(signal) {
            return selected;
        }
        if self.prefer_by_width {
            self.registry.preferred(num_bits)
        } else {
            self.registry.default_name()
        }
    }

    /// Select a translator for a signal
    pub fn select(&mut self, signal: &str, translator: &str) -> Result<()> {
        if !self.registry.contains(translator) {
            return Err(TranslatorError::UnknownTranslator(translator.to_string()));
        }
        self.selections
            .insert(signal.to_string(), translator.to_string());
        Ok(())
    }

    /// Translator explicitly selected for a signal, if any
    pub fn selected(&self, signal: &str) -> Option<&str> {
        self.selections.get(signal).map(String::as_str)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_registry(TranslatorRegistry::with_builtins())
    }
}
