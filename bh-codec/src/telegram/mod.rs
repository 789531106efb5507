//! Per-type telegram handlers
//!
//! Each handler maps a payload (the text between STX and ETX, tag included)
//! to a [`Telegram`](bh_core::Telegram) and back.

pub mod addressing;
pub mod measurement;
pub mod status;
