//! Generator configuration types
//!
//! Configuration is optional. Without an `aerogen.toml` every value falls
//! back to the namespaces and helper names the FAA data handler expects.

use crate::{GenError, GenResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "aerogen.toml";

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Initial log level (overridden by `-v` and `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory generated files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Fixed-width (CIFP section) generator settings
    #[serde(default)]
    pub cifp: CifpConfig,

    /// Multi-file (NASR CSV domain) generator settings
    #[serde(default)]
    pub nasr: NasrConfig,
}

/// Settings for the fixed-width section generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CifpConfig {
    pub model_namespace: String,
    pub parser_namespace: String,

    /// Name of the distribution file quoted in the class summary
    pub source_title: String,

    /// Lines shorter than this are skipped by the generated parser
    pub min_line_length: usize,
}

/// Settings for the multi-file domain generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NasrConfig {
    pub model_namespace: String,
    pub parser_namespace: String,

    /// Static helper class the generated parser calls for line splitting and coercion
    pub helper_class: String,

    /// File-name suffix identifying the structure-description CSV
    pub structure_suffix: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CifpConfig {
    fn default() -> Self {
        Self {
            model_namespace: "FAA_DATA_HANDLER.Models.CIFP".to_string(),
            parser_namespace: "FAA_DATA_HANDLER.Parsers.CIFP".to_string(),
            source_title: "FAACIFP18".to_string(),
            min_line_length: 4,
        }
    }
}

impl Default for NasrConfig {
    fn default() -> Self {
        Self {
            model_namespace: "FAA_DATA_HANDLER.Models.NASR.CSV".to_string(),
            parser_namespace: "FAA_DATA_HANDLER.Parsers.NASR.CSV".to_string(),
            helper_class: "FebCsvHelper".to_string(),
            structure_suffix: "_CSV_DATA_STRUCTURE.csv".to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_dir: default_output_dir(),
            cifp: CifpConfig::default(),
            nasr: NasrConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every default applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> GenResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GenError::MissingFile(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicitly named file must exist. Otherwise `aerogen.toml` in the
    /// working directory is used when present, and defaults when not.
    pub fn load(explicit: Option<&Path>) -> GenResult<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenResult<()> {
        self.level()?;

        let required = [
            ("cifp.model_namespace", &self.cifp.model_namespace),
            ("cifp.parser_namespace", &self.cifp.parser_namespace),
            ("nasr.model_namespace", &self.nasr.model_namespace),
            ("nasr.parser_namespace", &self.nasr.parser_namespace),
            ("nasr.helper_class", &self.nasr.helper_class),
            ("nasr.structure_suffix", &self.nasr.structure_suffix),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(GenError::Config(format!("{key} cannot be empty")));
            }
        }

        if self.cifp.min_line_length == 0 {
            return Err(GenError::Config(
                "cifp.min_line_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> GenResult<LogLevel> {
        self.log_level.parse()
    }
}
