//! Rust implementation of the Bavaria-Hessia telegram protocol
//!
//! Bavaria-Hessia telegrams exchange addressing, command and measurement
//! data with meters and controllers over a serial-style link. A telegram is
//! framed as `STX payload ETX` followed by a two-character hex XOR checksum.
//!
//! # Architecture
//!
//! - `bh-core`: telegram data model, errors, codec settings
//! - `bh-codec`: checksum, frame envelope, numeric format, per-type handlers
//! - `bh-node`: message-processing node with an explicit error sink
//!
//! # Usage
//!
//! ```
//! use bh::{decode, encode, Telegram};
//!
//! let frame = encode(&Telegram::status(7, "ON")).unwrap();
//! assert_eq!(decode(frame.as_bytes()).unwrap(), Telegram::status(7, "ON"));
//! ```

pub use bh_codec::{
    checksum, decode_value, encode_value, FrameEnvelope, TelegramCodec, ETX, STX,
    UNDERFLOW_SENTINEL,
};
pub use bh_core::{
    BhError, BhResult, CodecSettings, ComponentReading, LengthRule, Telegram, TelegramType,
};

/// Processing node API
pub mod node {
    pub use bh_node::*;
}

/// Decode a complete frame with default settings
pub fn decode(frame: &[u8]) -> BhResult<Telegram> {
    TelegramCodec::default().decode(frame)
}

/// Encode a telegram into a complete frame with default settings
pub fn encode(telegram: &Telegram) -> BhResult<String> {
    TelegramCodec::default().encode(telegram)
}
