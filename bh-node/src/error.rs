//! Error types for the node crate

pub use bh_core::error::{BhError, BhResult};
