//! Configuration for the key codec
//!
//! The codec itself is stateless. This module only selects how strictly keys
//! are parsed and whether formatter arguments are checked.

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::{Result, Error};

/// How strictly the parser checks the fields of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ParseMode {
    /// Only segment counts are checked; numeric fields may be out of range
    /// and are normalized by the calendar
    Lenient,
    /// Field widths, calendar ranges and the file suffix are checked
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::Lenient
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ParseMode {
    /// Parse a parse mode from a string
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::config(format!("Unknown parse mode: {}", s))),
        }
    }

    /// Get the name of the parse mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Check if this mode validates field widths and ranges
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Configuration options for a key codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CodecConfig {
    /// How keys are parsed
    pub parse_mode: ParseMode,
    /// Whether the formatter rejects instances and types that would
    /// produce an unparseable key
    pub check_inputs: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            check_inputs: true,
        }
    }
}

impl CodecConfig {
    /// Create a new codec configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse mode
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Set whether formatter arguments are checked
    pub fn with_check_inputs(mut self, check: bool) -> Self {
        self.check_inputs = check;
        self
    }

    /// Validate the configuration
    ///
    /// Strict parsing only makes sense for keys that were generated with
    /// checked inputs.
    pub fn validate(&self) -> Result<()> {
        if self.parse_mode.is_strict() && !self.check_inputs {
            return Err(Error::config(
                "Strict parsing requires input checks on the formatter"
            ));
        }

        Ok(())
    }

    /// Create a human-readable string representation of the configuration
    pub fn to_string_pretty(&self) -> String {
        let mut result = String::new();

        result.push_str("=== Key Codec Configuration ===\n\n");
        result.push_str(&format!("  Parse Mode: {}\n", self.parse_mode));
        result.push_str(&format!("  Check Inputs: {}\n", self.check_inputs));

        result
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
