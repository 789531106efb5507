//! Telegram data model
//!
//! A telegram is one of three shapes, selected by its two-character type tag.
//! The serde representation mirrors the message objects exchanged with the
//! surrounding flow: `{"telegramtype": "MD", "components": [...]}`.

use crate::error::{BhError, BhResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest component or serial number that fits three decimal digits
pub const MAX_COMPONENT: u16 = 999;

/// Largest reading count that fits the two-digit `MD` count field
pub const MAX_READINGS: usize = 99;

/// Telegram type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelegramType {
    /// `DA` - addressing
    Addressing,
    /// `ST` - status/command
    Status,
    /// `MD` - measurement data
    Measurement,
}

impl TelegramType {
    /// Wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TelegramType::Addressing => "DA",
            TelegramType::Status => "ST",
            TelegramType::Measurement => "MD",
        }
    }
}

impl FromStr for TelegramType {
    type Err = BhError;

    fn from_str(s: &str) -> BhResult<Self> {
        match s {
            "DA" => Ok(TelegramType::Addressing),
            "ST" => Ok(TelegramType::Status),
            "MD" => Ok(TelegramType::Measurement),
            other => Err(BhError::UnknownTelegramType(other.to_string())),
        }
    }
}

impl fmt::Display for TelegramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading inside an `MD` telegram
///
/// Absent or `null` fields deserialize to zero, which is also what the
/// encoder emits for them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentReading {
    #[serde(default, deserialize_with = "null_as_default")]
    pub component: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opsts: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errsts: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub serial: u16,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ComponentReading {
    /// Create a reading with zeroed status bytes
    pub fn new(component: u16, value: f64, serial: u16) -> Self {
        Self {
            component,
            value,
            serial,
            ..Default::default()
        }
    }

    /// Set operating and error status bytes
    pub fn with_status(mut self, opsts: u8, errsts: u8) -> Self {
        self.opsts = opsts;
        self.errsts = errsts;
        self
    }
}

/// Decoded or to-be-encoded telegram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "telegramtype")]
pub enum Telegram {
    /// Addressing telegram; a missing component is a bare query/broadcast
    #[serde(rename = "DA")]
    Addressing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component: Option<u16>,
    },
    /// Status/command telegram; the command text is opaque
    #[serde(rename = "ST")]
    Status { component: u16, command: String },
    /// Measurement data telegram; readings keep wire order
    #[serde(rename = "MD")]
    Measurement { components: Vec<ComponentReading> },
}

impl Telegram {
    /// Addressing telegram for a single component
    pub fn addressing(component: u16) -> Self {
        Telegram::Addressing {
            component: Some(component),
        }
    }

    /// Bare addressing telegram without a component
    pub fn broadcast() -> Self {
        Telegram::Addressing { component: None }
    }

    pub fn status(component: u16, command: impl Into<String>) -> Self {
        Telegram::Status {
            component,
            command: command.into(),
        }
    }

    pub fn measurement(components: Vec<ComponentReading>) -> Self {
        Telegram::Measurement { components }
    }

    /// Type tag of this telegram
    pub fn telegram_type(&self) -> TelegramType {
        match self {
            Telegram::Addressing { .. } => TelegramType::Addressing,
            Telegram::Status { .. } => TelegramType::Status,
            Telegram::Measurement { .. } => TelegramType::Measurement,
        }
    }
}
