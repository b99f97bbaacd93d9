//! Configured key codec
//!
//! `KeyCodec` applies a `CodecConfig` to the free functions in
//! [`crate::key`]. It holds no mutable state and can be shared freely
//! between threads.

use crate::config::CodecConfig;
use crate::error::Result;
use crate::key::{self, KeyData};

/// Key formatter and parser bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct KeyCodec {
    config: CodecConfig,
}

impl KeyCodec {
    /// Create a codec with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom configuration
    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a new key with a fresh random identifier
    pub fn create_new_key(
        &self,
        instance: u32,
        object_type: Option<&str>,
        time_ms: i64,
        rolling: bool,
    ) -> Result<String> {
        key::generate_key(instance, object_type, time_ms, rolling, self.config.check_inputs)
    }

    /// Create a new access-record key with a fresh random identifier
    pub fn create_new_access_record_key(&self, instance: u32, time_ms: i64, rolling: bool) -> Result<String> {
        self.create_new_key(instance, None, time_ms, rolling)
    }

    /// Parse a key using the configured parse mode
    pub fn parse_key(&self, key: &str) -> Result<KeyData> {
        key::parse_key_with_mode(key, self.config.parse_mode)
    }

    /// Get the codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}
