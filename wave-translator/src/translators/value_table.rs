//! Value-table translators
//!
//! User-defined translators that map integer values of a fixed-width signal
//! to names, e.g. the states of a state machine. Each table lives in its own
//! TOML file:
//!
//! ```toml
//! name = "FSM state"
//! width = 2
//!
//! [values]
//! 0 = "IDLE"
//! 1 = "RUN"
//! ```

use crate::translator::Translator;
use crate::types::{Result, TranslationPreference, TranslationResult, TranslatorError};
use crate::value::{parse_integer, translate_numeric};
use num::BigUint;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// On-disk layout of a value-table file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValueTableFile {
    name: String,
    width: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Translator backed by a value → name table
#[derive(Debug, Clone)]
pub struct ValueTableTranslator {
    name: String,
    width: u32,
    values: HashMap<BigUint, String>,
    /// Source file (or "<inline>")
    source: String,
}

impl ValueTableTranslator {
    /// Build a table directly
    pub fn new(
        name: impl Into<String>,
        width: u32,
        values: impl IntoIterator<Item = (u128, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            values: values
                .into_iter()
                .map(|(bits, label)| (BigUint::from(bits), label))
                .collect(),
            source: "<inline>".to_string(),
        }
    }

    /// Parse a table from TOML text; `source` names it in error messages
    pub fn from_toml_str(content: &str, source: &str) -> Result<Self> {
        let file: ValueTableFile = toml::from_str(content).map_err(|e| {
            TranslatorError::ValueTableParseError(format!("{}: {}", source, e))
        })?;

        if file.width == 0 {
            return Err(TranslatorError::ValueTableParseError(format!(
                "{}: width must be at least 1",
                source
            )));
        }
        if file.name.trim().is_empty() {
            return Err(TranslatorError::ValueTableParseError(format!(
                "{}: name must not be empty",
                source
            )));
        }

        let mut values = HashMap::with_capacity(file.values.len());
        for (key, label) in file.values {
            let bits = parse_integer(&key)
                .ok()
                .and_then(|parsed| parsed.into_bits(file.width))
                .ok_or_else(|| {
                    TranslatorError::ValueTableParseError(format!(
                        "{}: key {:?} is not an integer of width {}",
                        source, key, file.width
                    ))
                })?;
            values.insert(bits, label);
        }

        Ok(Self {
            name: file.name,
            width: file.width,
            values,
            source: source.to_string(),
        })
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading value table: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.toml");

        Self::from_toml_str(&content, source)
    }

    /// Load every `*.toml` table in `dir`
    ///
    /// Files that fail to load are logged and skipped. A missing directory
    /// yields no tables.
    pub fn discover(dir: &Path) -> Vec<Self> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    log::debug!("No value table directory at {:?}", dir);
                } else {
                    log::warn!("Cannot read value table directory {:?}: {}", dir, e);
                }
                return Vec::new();
            }
        };

        let mut paths: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut tables = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::load(&path) {
                Ok(table) => tables.push(table),
                Err(e) => log::warn!("Skipping value table {:?}: {}", path, e),
            }
        }

        log::info!("Loaded {} value tables from {:?}", tables.len(), dir);
        tables
    }

    /// Bit width the table applies to
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of named values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the table names no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// File the table was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Translator for ValueTableTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, num_bits: u32, value: &str) -> TranslationResult {
        translate_numeric(num_bits, value, |bits| match self.values.get(&bits) {
            Some(label) => TranslationResult::normal(label.clone()),
            None => TranslationResult::warn(format!("ERROR ({})", value.trim())),
        })
    }

    fn translates(&self, num_bits: u32) -> TranslationPreference {
        if num_bits == self.width {
            TranslationPreference::Prefer
        } else {
            TranslationPreference::No
        }
    }
}
