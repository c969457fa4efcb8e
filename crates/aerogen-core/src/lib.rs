//! aerogen-core - Schema loading, naming and type resolution
//!
//! This crate turns FAA field-definition CSVs into a language-neutral
//! intermediate representation that the `aerogen` CLI renders to C#:
//! - [`loader`] reads CSV files with UTF-8 / Windows-1252 fallback
//! - [`section`] validates CIFP section layouts into [`FieldSpec`]s and builds a [`SectionModel`]
//! - [`structure`] loads the NASR structure description into a [`Schema`]
//! - [`naming`], [`types`] and [`duplicates`] resolve identifiers and target types
//! - [`domain`] builds a [`DomainModel`] for a whole NASR data domain
//! - [`fixed_width`] is a reference implementation of the generated fixed-width parser
//! - [`GeneratorConfig`] and [`GenError`] are the ambient configuration and error types

mod config;
mod error;

pub mod domain;
pub mod duplicates;
pub mod fixed_width;
pub mod loader;
pub mod naming;
pub mod section;
pub mod structure;
pub mod types;

pub use config::{CifpConfig, GeneratorConfig, NasrConfig};
pub use domain::{DomainModel, GenerationWarning};
pub use error::{GenError, GenResult};
pub use section::{FieldSpec, SectionModel};
pub use structure::Schema;

use std::str::FromStr;

/// Log levels accepted by the configuration file and CLI
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Level selected by repeated `-v` flags, if any were given
    pub fn from_verbosity(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(GenError::Config(format!("unknown log level '{other}'"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}
