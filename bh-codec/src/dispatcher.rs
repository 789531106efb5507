//! Telegram dispatcher
//!
//! Routes a payload to the handler for its type tag on decode, and a
//! [`Telegram`] to the handler for its variant on encode.

use crate::error::{BhError, BhResult};
use crate::frame::FrameEnvelope;
use crate::layout::TAG;
use crate::telegram::{addressing, measurement, status};
use bh_core::{CodecSettings, Telegram, TelegramType};

/// Stateless telegram codec
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramCodec {
    settings: CodecSettings,
}

impl TelegramCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Decode a complete frame (STX ... ETX + checksum)
    pub fn decode(&self, frame: &[u8]) -> BhResult<Telegram> {
        let payload = FrameEnvelope::decode(frame, &self.settings)?;
        let telegram = Self::decode_payload(payload)?;
        log::debug!(
            "Decoded {} telegram ({} payload bytes)",
            telegram.telegram_type(),
            payload.len()
        );
        Ok(telegram)
    }

    /// Decode the text between STX and ETX
    pub fn decode_payload(payload: &str) -> BhResult<Telegram> {
        let tag = TAG
            .slice(payload)
            .map_err(|_| BhError::UnknownTelegramType(payload.to_string()))?;

        match tag.parse::<TelegramType>()? {
            TelegramType::Addressing => addressing::decode(payload),
            TelegramType::Status => status::decode(payload),
            TelegramType::Measurement => measurement::decode(payload),
        }
    }

    /// Encode a telegram into a complete frame
    pub fn encode(&self, telegram: &Telegram) -> BhResult<String> {
        let payload = Self::encode_payload(telegram)?;
        let frame = FrameEnvelope::encode(&payload)?;
        log::debug!(
            "Encoded {} telegram ({} frame bytes)",
            telegram.telegram_type(),
            frame.len()
        );
        Ok(frame)
    }

    /// Encode a telegram's payload without framing
    pub fn encode_payload(telegram: &Telegram) -> BhResult<String> {
        match telegram {
            Telegram::Addressing { component } => addressing::encode(*component),
            Telegram::Status { component, command } => status::encode(*component, command),
            Telegram::Measurement { components } => measurement::encode(components),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;
    use bh_core::ComponentReading;

    fn frame(payload: &str) -> Vec<u8> {
        let mut frame = vec![crate::STX];
        frame.extend_from_slice(payload.as_bytes());
        frame.push(crate::ETX);
        let cs = checksum::checksum(&frame, frame.len());
        frame.extend_from_slice(&checksum::to_hex(cs));
        frame
    }

    #[test]
    fn test_decode_dispatches_on_tag() {
        let codec = TelegramCodec::default();
        assert_eq!(codec.decode(&frame("DA123")), Ok(Telegram::addressing(123)));
        assert_eq!(codec.decode(&frame("ST001OFF")), Ok(Telegram::status(1, "OFF")));
        assert_eq!(
            codec.decode(&frame("MD01 001 +0000+00 00 00 005 000000 ")),
            Ok(Telegram::measurement(vec![ComponentReading::new(1, 0.0, 5)]))
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        let codec = TelegramCodec::default();
        assert_eq!(
            codec.decode(&frame("XX123")),
            Err(BhError::UnknownTelegramType("XX".to_string()))
        );
        assert_eq!(
            codec.decode(&frame("D")),
            Err(BhError::UnknownTelegramType("D".to_string()))
        );
        assert_eq!(
            codec.decode(&frame("")),
            Err(BhError::UnknownTelegramType(String::new()))
        );
    }

    #[test]
    fn test_encode_status_frame() {
        let codec = TelegramCodec::default();
        let encoded = codec.encode(&Telegram::status(7, "ON")).unwrap();
        assert_eq!(encoded.as_bytes(), frame("ST007ON").as_slice());
    }

    #[test]
    fn test_encode_payload_variants() {
        assert_eq!(
            TelegramCodec::encode_payload(&Telegram::broadcast()).unwrap(),
            "DA"
        );
        assert_eq!(
            TelegramCodec::encode_payload(&Telegram::addressing(42)).unwrap(),
            "DA042"
        );
        assert_eq!(
            TelegramCodec::encode_payload(&Telegram::measurement(vec![])).unwrap(),
            "MD00 "
        );
    }

    #[test]
    fn test_settings_are_applied() {
        let codec = TelegramCodec::new(CodecSettings::new().with_lowercase_checksum(true));
        assert!(codec.settings().accept_lowercase_checksum);

        // trailer is "6E"
        let mut raw = frame("ST123X");
        let len = raw.len();
        raw[len - 2..].make_ascii_lowercase();
        assert_eq!(codec.decode(&raw), Ok(Telegram::status(123, "X")));
    }
}
