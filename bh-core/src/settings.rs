//! Codec settings

use serde::{Deserialize, Serialize};

/// Settings that relax or tighten the telegram codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Accept `a`-`f` in the checksum trailer.
    ///
    /// Encoders of this protocol only emit uppercase, so the trailer is
    /// parsed case-sensitively unless this is set.
    pub accept_lowercase_checksum: bool,
}

impl CodecSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether lowercase checksum digits are accepted
    pub fn with_lowercase_checksum(mut self, accept: bool) -> Self {
        self.accept_lowercase_checksum = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert!(!CodecSettings::default().accept_lowercase_checksum);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: CodecSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CodecSettings::new());

        let settings: CodecSettings =
            serde_json::from_str(r#"{"accept_lowercase_checksum": true}"#).unwrap();
        assert!(settings.accept_lowercase_checksum);
    }
}
