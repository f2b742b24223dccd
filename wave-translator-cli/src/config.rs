//! Job file loading and parsing

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wave_translator::DispatchConfig;

/// Translation job (loaded from a TOML file)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobConfig {
    #[serde(default)]
    pub translators: TranslatorsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "signal")]
    pub signals: Vec<SignalConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslatorsConfig {
    pub default: Option<String>,
    /// Value-table directories, relative to the job file
    #[serde(default)]
    pub tables: Vec<PathBuf>,
    /// Fraction-bit counts for fixed-point translators
    #[serde(default)]
    pub fixed_point: Vec<u32>,
    #[serde(default = "default_true")]
    pub prefer_by_width: bool,
}

impl Default for TranslatorsConfig {
    fn default() -> Self {
        Self {
            default: None,
            tables: Vec::new(),
            fixed_point: Vec::new(),
            prefer_by_width: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignalConfig {
    pub name: String,
    pub bits: u32,
    pub translator: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl JobConfig {
    /// Dispatcher configuration for this job
    ///
    /// `base_dir` is the directory of the job file; relative table
    /// directories are resolved against it.
    pub fn dispatch_config(&self, base_dir: &Path) -> DispatchConfig {
        let mut config = DispatchConfig::new().with_prefer_by_width(self.translators.prefer_by_width);

        if let Some(default) = &self.translators.default {
            config = config.with_default_translator(default.clone());
        }
        for dir in &self.translators.tables {
            config = config.add_value_table_dir(base_dir.join(dir));
        }
        for &fraction_bits in &self.translators.fixed_point {
            config = config.add_fixed_point(fraction_bits);
        }
        for signal in &self.signals {
            if let Some(translator) = &signal.translator {
                config = config.with_signal_translator(signal.name.clone(), translator.clone());
            }
        }
        config
    }

    fn validate(&self) -> Result<()> {
        for (idx, signal) in self.signals.iter().enumerate() {
            if signal.name.trim().is_empty() {
                bail!("Signal #{} has an empty name", idx + 1);
            }
            if signal.bits == 0 {
                bail!("Signal '{}' has a bit width of 0", signal.name);
            }
        }
        Ok(())
    }
}

/// Load a job from a TOML file
pub fn load_config(path: &Path) -> Result<JobConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {:?}", path))?;

    let config: JobConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse job file: {:?}", path))?;

    config
        .validate()
        .with_context(|| format!("Invalid job file: {:?}", path))?;

    Ok(config)
}
