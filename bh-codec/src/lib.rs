//! Telegram codec for the Bavaria-Hessia protocol
//!
//! Decoding runs raw bytes through the frame envelope (markers and
//! checksum), then dispatches the payload on its two-character type tag to
//! the matching telegram handler. Encoding runs the same path backwards.
//!
//! Every operation is a pure function of its input and the
//! [`CodecSettings`] it was given; the codec can be shared freely between
//! threads.

pub mod checksum;
pub mod dispatcher;
pub mod error;
pub mod frame;
pub mod layout;
pub mod numeric;
pub mod telegram;

pub use bh_core::{CodecSettings, ComponentReading, Telegram, TelegramType};
pub use checksum::{checksum, XorChecksum};
pub use dispatcher::TelegramCodec;
pub use error::{BhError, BhResult, LengthRule};
pub use frame::{FrameEnvelope, ETX, STX};
pub use numeric::{decode_value, encode_value, UNDERFLOW_SENTINEL};
