//! Core types and utilities for the Bavaria-Hessia protocol
//!
//! This crate provides the telegram data model, the error taxonomy shared by
//! the codec and the message pump, and the codec settings.

pub mod error;
pub mod settings;
pub mod telegram;

pub use error::{BhError, BhResult, LengthRule};
pub use settings::CodecSettings;
pub use telegram::{ComponentReading, Telegram, TelegramType};
