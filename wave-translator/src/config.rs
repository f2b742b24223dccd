//! Dispatcher configuration types
//!
//! This module defines the configuration the dispatcher needs: which
//! translator is the default, per-signal overrides, and where to find
//! value-table files. Loading it from disk is left to the application layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration for the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Translator used when a signal has no selection (None = library default)
    #[serde(default)]
    pub default_translator: Option<String>,

    /// Explicit translator per signal name
    #[serde(default)]
    pub signal_translators: HashMap<String, String>,

    /// Directories scanned for value-table TOML files
    #[serde(default)]
    pub value_table_dirs: Vec<PathBuf>,

    /// Fraction-bit counts to register fixed-point translators for
    #[serde(default)]
    pub fixed_point_fractions: Vec<u32>,

    /// Pick the translator that prefers the signal width before the default
    #[serde(default = "default_true")]
    pub prefer_by_width: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_translator: None,
            signal_translators: HashMap::new(),
            value_table_dirs: Vec::new(),
            fixed_point_fractions: Vec::new(),
            prefer_by_width: true,
        }
    }
}

impl DispatchConfig {
    /// Create a new dispatcher configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the default translator
    pub fn with_default_translator(mut self, name: impl Into<String>) -> Self {
        self.default_translator = Some(name.into());
        self
    }

    /// Builder method: select a translator for one signal
    pub fn with_signal_translator(
        mut self,
        signal: impl Into<String>,
        translator: impl Into<String>,
    ) -> Self {
        self.signal_translators
            .insert(signal.into(), translator.into());
        self
    }

    /// Builder method: add a value-table directory
    pub fn add_value_table_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.value_table_dirs.push(dir.into());
        self
    }

    /// Builder method: register fixed-point translators with `fraction_bits`
    pub fn add_fixed_point(mut self, fraction_bits: u32) -> Self {
        self.fixed_point_fractions.push(fraction_bits);
        self
    }

    /// Builder method: enable or disable width-based translator preference
    pub fn with_prefer_by_width(mut self, enabled: bool) -> Self {
        self.prefer_by_width = enabled;
        self
    }

    /// Translator configured for a signal, if any
    pub fn translator_for(&self, signal: &str) -> Option<&str> {
        self.signal_translators.get(signal).map(String::as_str)
    }
}
