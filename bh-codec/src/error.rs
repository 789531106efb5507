//! Error types for the codec crate

pub use bh_core::error::{BhError, BhResult, LengthRule};
