//! Translator registry
//!
//! Holds every registered translator keyed by name, plus the name of the
//! translator used when nothing else is selected.

use crate::translator::Translator;
use crate::translators::builtin_translators;
use crate::types::{Result, TranslationPreference, TranslatorError};
use std::collections::{HashMap, HashSet};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Translator selected when a signal has no explicit or preferred translator
pub const DEFAULT_TRANSLATOR: &str = "Hexadecimal";

/// The translator registry
#[derive(Debug)]
pub struct TranslatorRegistry {
    /// All translators by name
    translators: HashMap<String, Box<dyn Translator>>,

    /// Names that currently resolve to a built-in translator
    builtin: HashSet<String>,

    /// Name of the default translator
    default: String,
}

impl TranslatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            translators: HashMap::new(),
            builtin: HashSet::new(),
            default: DEFAULT_TRANSLATOR.to_string(),
        }
    }

    /// Create a registry holding every built-in translator
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for translator in builtin_translators() {
            registry.builtin.insert(translator.name().to_string());
            registry.insert(translator);
        }
        log::debug!("Registered {} built-in translators", registry.len());
        registry
    }

    /// Add a translator, replacing any translator with the same name
    ///
    /// Returns the replaced translator, if any.
    pub fn register(&mut self, translator: Box<dyn Translator>) -> Option<Box<dyn Translator>> {
        self.builtin.remove(translator.name());
        let replaced = self.insert(translator);
        if let Some(old) = &replaced {
            log::info!("Replaced translator: {}", old.name());
        }
        replaced
    }

    fn insert(&mut self, translator: Box<dyn Translator>) -> Option<Box<dyn Translator>> {
        self.translators
            .insert(translator.name().to_string(), translator)
    }

    /// Look up a translator by name
    pub fn get(&self, name: &str) -> Option<&dyn Translator> {
        self.translators.get(name).map(|t| t.as_ref())
    }

    /// True if a translator with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.translators.contains_key(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.translators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered translators
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    /// True if no translators are registered
    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// Name of the default translator
    pub fn default_name(&self) -> &str {
        &self.default
    }

    /// Change the default translator; it must be registered
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(TranslatorError::UnknownTranslator(name.to_string()));
        }
        self.default = name.to_string();
        Ok(())
    }

    /// Names of translators usable for signals of `num_bits` bits, sorted
    pub fn candidates(&self, num_bits: u32) -> Vec<&str> {
        self.names()
            .into_iter()
            .filter(|name| self.is_valid_translator(name, num_bits))
            .collect()
    }

    /// Translator to use for a `num_bits` signal when none is selected
    ///
    /// The first translator (by name) that prefers the width wins; otherwise
    /// the default.
    pub fn preferred(&self, num_bits: u32) -> &str {
        self.names()
            .into_iter()
            .find(|name| self.preference(name, num_bits) == TranslationPreference::Prefer)
            .unwrap_or(self.default.as_str())
    }

    /// True if `name` is registered and accepts signals of `num_bits` bits
    pub fn is_valid_translator(&self, name: &str, num_bits: u32) -> bool {
        self.preference(name, num_bits) != TranslationPreference::No
    }

    /// How `name` treats signals of `num_bits` bits
    ///
    /// Unknown translators, and translators that panic while answering,
    /// report `No`.
    pub fn preference(&self, name: &str, num_bits: u32) -> TranslationPreference {
        let Some(translator) = self.get(name) else {
            return TranslationPreference::No;
        };

        catch_unwind(AssertUnwindSafe(|| translator.translates(num_bits))).unwrap_or_else(|_| {
            log::error!(
                "Translator '{}' panicked checking {}-bit signals",
                name,
                num_bits
            );
            TranslationPreference::No
        })
    }

    /// Get registry statistics
    pub fn stats(&self) -> RegistryStats {
        let num_translators = self.translators.len();
        let num_builtin = self.builtin.len();

        RegistryStats {
            num_translators,
            num_builtin,
            num_user: num_translators - num_builtin,
        }
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total number of translators
    pub num_translators: usize,
    /// Translators from the built-in table
    pub num_builtin: usize,
    /// Translators registered by the user (value tables and custom code)
    pub num_user: usize,
}
