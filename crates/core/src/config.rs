//! Configuration.
//!
//! This module defines the settings shared by the CLI and library callers:
//! 1. **Defaults:** Trace output and the default verification range.
//! 2. **Structures:** `general` (trace on/off, output format) and `verify` (range).
//! 3. **Loading:** JSON from a string or a file; validation can be deferred
//!    until overrides are applied.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration values.
mod defaults {
    /// Print the per-instruction trace.
    pub const TRACE: bool = true;

    /// First dividend of the default verification range.
    pub const VERIFY_START: i32 = -1000;

    /// End (exclusive) of the default verification range.
    pub const VERIFY_END: i32 = 1000;
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Verification settings.
    #[serde(default)]
    pub verify: VerifyConfig,
}

impl Config {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidRange`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// As [`Config::load`], plus [`ConfigError::InvalidRange`] if validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file without validating it.
    ///
    /// Callers that layer overrides on top of the file call
    /// [`Config::validate`] once the overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] for malformed JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(serde_json::from_str(&json)?)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] if `verify.start > verify.end`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verify.start > self.verify.end {
            return Err(ConfigError::InvalidRange {
                start: self.verify.start,
                end: self.verify.end,
            });
        }
        Ok(())
    }
}

/// Trace output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// One JSON object per division.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print the per-instruction trace; when false only quotients are printed.
    #[serde(default = "GeneralConfig::default_trace")]
    pub trace: bool,

    /// Trace output format.
    #[serde(default)]
    pub format: TraceFormat,
}

impl GeneralConfig {
    const fn default_trace() -> bool {
        defaults::TRACE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
            format: TraceFormat::default(),
        }
    }
}

/// Verification settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyConfig {
    /// First dividend checked.
    #[serde(default = "VerifyConfig::default_start")]
    pub start: i32,

    /// End of the range (exclusive).
    #[serde(default = "VerifyConfig::default_end")]
    pub end: i32,
}

impl VerifyConfig {
    const fn default_start() -> i32 {
        defaults::VERIFY_START
    }

    const fn default_end() -> i32 {
        defaults::VERIFY_END
    }

    /// The configured half-open range.
    pub const fn range(&self) -> Range<i32> {
        self.start..self.end
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            start: defaults::VERIFY_START,
            end: defaults::VERIFY_END,
        }
    }
}
