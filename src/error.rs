//! Error handling for the key codec
//!
//! This module provides error types and result aliases for key generation
//! and key parsing.

use std::io;
use thiserror::Error;

/// Errors that can occur in key codec operations
#[derive(Error, Debug)]
pub enum Error {
    /// A key does not have the shape produced by the codec
    #[error("Unknown key format: {key} ({reason})")]
    InvalidKey {
        key: String,
        reason: String,
    },

    /// The stack instance number does not fit in nine digits
    #[error("Stack instance number out of range: {0}")]
    InstanceOutOfRange(u32),

    /// The object type cannot be embedded as a single key segment
    #[error("Invalid object type: {0:?}")]
    InvalidType(String),

    /// Errors related to timestamp conversion
    #[error("Timestamp error: {0}")]
    Timestamp(String),

    /// Errors related to configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for key codec operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid key error
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid type error
    pub fn invalid_type(object_type: impl Into<String>) -> Self {
        Self::InvalidType(object_type.into())
    }

    /// Create a new timestamp error
    pub fn timestamp(message: impl Into<String>) -> Self {
        Self::Timestamp(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an invalid key error
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }

    /// Check if this error was caused by a bad formatter argument
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InstanceOutOfRange(_) | Self::InvalidType(_) | Self::Timestamp(_))
    }

    /// The offending key, for invalid key errors
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidKey { .. } => {
                Some("Only keys created by this codec can be parsed".to_string())
            }
            Self::InstanceOutOfRange(_) => {
                Some("Stack instance numbers must be below 1000000000".to_string())
            }
            Self::InvalidType(_) => {
                Some("Object types must be non-empty and must not contain '/'".to_string())
            }
            Self::Io(err) if err.kind() == io::ErrorKind::NotFound => {
                Some("The specified configuration file does not exist".to_string())
            }
            _ => None,
        }
    }
}
