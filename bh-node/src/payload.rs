//! Message payloads

use crate::error::{BhError, BhResult};
use bh_core::{Telegram, TelegramType};
use bytes::Bytes;
use serde_json::{Map, Value};

const TELEGRAM_TYPE_KEY: &str = "telegramtype";

/// Payload carried by a message through the node
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Framed telegram as ASCII text
    Text(String),
    /// Framed telegram as raw bytes
    Bytes(Bytes),
    /// Structured telegram record
    Telegram(Telegram),
}

impl Payload {
    /// Classify a JSON message payload
    ///
    /// - an object with a string `telegramtype` is a telegram record
    /// - a string is a framed telegram
    /// - an array of byte values, or a `{"type": "Buffer", "data": [...]}`
    ///   object, is a framed telegram as bytes
    pub fn from_json(value: Value) -> BhResult<Self> {
        match value {
            Value::String(text) => Ok(Payload::Text(text)),
            Value::Array(items) => bytes_from_json(&items).map(Payload::Bytes),
            Value::Object(map) => Self::from_json_object(map),
            other => Err(BhError::InvalidPayloadType(format!(
                "expected text, bytes or telegram object, got {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_json_object(map: Map<String, Value>) -> BhResult<Self> {
        match map.get(TELEGRAM_TYPE_KEY) {
            Some(Value::String(tag)) => {
                tag.parse::<TelegramType>()?;
            }
            Some(other) => {
                return Err(BhError::InvalidPayloadType(format!(
                    "{} must be a string, got {}",
                    TELEGRAM_TYPE_KEY,
                    json_kind(other)
                )));
            }
            None => {
                let is_buffer = map.get("type").and_then(Value::as_str) == Some("Buffer");
                return match map.get("data") {
                    Some(Value::Array(items)) if is_buffer => {
                        bytes_from_json(items).map(Payload::Bytes)
                    }
                    _ => Err(BhError::InvalidPayloadType(format!(
                        "object without {}",
                        TELEGRAM_TYPE_KEY
                    ))),
                };
            }
        }

        serde_json::from_value(Value::Object(map))
            .map(Payload::Telegram)
            .map_err(|e| BhError::InvalidPayloadType(e.to_string()))
    }

    /// JSON form of this payload
    ///
    /// Bytes become an array of numbers, telegrams their record object.
    pub fn to_json(&self) -> BhResult<Value> {
        match self {
            Payload::Text(text) => Ok(Value::String(text.clone())),
            Payload::Bytes(bytes) => Ok(Value::Array(
                bytes.iter().map(|&b| Value::from(b)).collect(),
            )),
            Payload::Telegram(telegram) => serde_json::to_value(telegram)
                .map_err(|e| BhError::InvalidPayloadType(e.to_string())),
        }
    }

    /// Short name of the payload kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Bytes(_) => "bytes",
            Payload::Telegram(_) => "telegram",
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(bytes))
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Telegram> for Payload {
    fn from(telegram: Telegram) -> Self {
        Payload::Telegram(telegram)
    }
}

fn bytes_from_json(items: &[Value]) -> BhResult<Bytes> {
    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| {
                    BhError::InvalidPayloadType(format!("not a byte value: {}", item))
                })
        })
        .collect::<BhResult<Vec<u8>>>()
        .map(Bytes::from)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
