//! Node settings

use crate::error::{BhError, BhResult};
use bh_core::CodecSettings;
use serde::{Deserialize, Serialize};

/// Default capacity of the inbound and outbound message channels
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Node settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSettings {
    pub codec: CodecSettings,
    pub channel_capacity: usize,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            codec: CodecSettings::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl NodeSettings {
    /// Parse and validate settings from JSON
    ///
    /// Missing keys take their defaults.
    pub fn from_json(json: &str) -> BhResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| BhError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> BhResult<()> {
        if self.channel_capacity == 0 {
            return Err(BhError::Settings(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_codec(mut self, codec: CodecSettings) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let settings = NodeSettings::from_json("{}").unwrap();
        assert_eq!(settings, NodeSettings::default());
        assert_eq!(settings.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_from_json_nested_codec() {
        let settings = NodeSettings::from_json(
            r#"{"codec": {"accept_lowercase_checksum": true}, "channel_capacity": 4}"#,
        )
        .unwrap();
        assert!(settings.codec.accept_lowercase_checksum);
        assert_eq!(settings.channel_capacity, 4);
    }

    #[test]
    fn test_from_json_rejects_zero_capacity() {
        assert!(matches!(
            NodeSettings::from_json(r#"{"channel_capacity": 0}"#),
            Err(BhError::Settings(_))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            NodeSettings::from_json("{"),
            Err(BhError::Settings(_))
        ));
    }
}
