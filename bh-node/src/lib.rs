//! Message-processing node for Bavaria-Hessia telegrams
//!
//! The node sits between a transport that delivers raw telegrams and the
//! rest of an automation flow. Each inbound message is classified by its
//! payload: raw text or bytes are decoded into a [`Telegram`], a telegram
//! record is encoded into a framed string. A failure is reported to the
//! caller's [`ErrorSink`] and only that message is dropped.

pub mod error;
pub mod node;
pub mod payload;
pub mod settings;
pub mod sink;

pub use bh_core::Telegram;
pub use error::{BhError, BhResult};
pub use node::TelegramNode;
pub use payload::Payload;
pub use settings::NodeSettings;
pub use sink::{ErrorSink, LogSink};
