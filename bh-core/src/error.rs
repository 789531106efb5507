use std::fmt;
use thiserror::Error;

/// Length constraint a telegram payload failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Exactly(usize),
    OneOf(usize, usize),
    AtLeast(usize),
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRule::Exactly(n) => write!(f, "{}", n),
            LengthRule::OneOf(a, b) => write!(f, "{} or {}", a, b),
            LengthRule::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Main error type for Bavaria-Hessia codec operations
///
/// Every variant is terminal for the telegram being processed and nothing
/// else: the codec keeps no state, so the next call starts clean.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BhError {
    #[error("Frame too short: {len} bytes, need at least 4")]
    FrameTooShort { len: usize },

    #[error("Missing STX at start of frame, found 0x{found:02X}")]
    MissingStartMarker { found: u8 },

    #[error("Missing ETX before checksum trailer, found 0x{found:02X}")]
    MissingEndMarker { found: u8 },

    #[error("Invalid checksum digit: 0x{found:02X}")]
    InvalidChecksumDigit { found: u8 },

    #[error("Invalid checksum, got {got:02X} but expected {expected:02X}")]
    ChecksumMismatch { got: u8, expected: u8 },

    #[error("Invalid {telegram} telegram length, expected {expected} but got {actual} (excluding STX, ETX, checksum)")]
    InvalidLength {
        telegram: &'static str,
        expected: LengthRule,
        actual: usize,
    },

    #[error("Unknown telegram type: {0:?}")]
    UnknownTelegramType(String),

    #[error("Numeric format error: {0}")]
    NumericFormat(String),

    #[error("Value too large for mantissa/exponent field: {0}")]
    ValueTooLarge(f64),

    #[error("Invalid payload type: {0}")]
    InvalidPayloadType(String),

    #[error("Invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("{field} out of range: {value} (max {max})")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Non-ASCII byte at position {position}")]
    NonAscii { position: usize },

    #[error("Invalid settings: {0}")]
    Settings(String),
}

/// Result type alias for Bavaria-Hessia operations
pub type BhResult<T> = Result<T, BhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_renders_uppercase_hex() {
        let err = BhError::ChecksumMismatch {
            got: 0x0a,
            expected: 0xfe,
        };
        assert_eq!(err.to_string(), "Invalid checksum, got 0A but expected FE");
    }

    #[test]
    fn test_invalid_length_message() {
        let err = BhError::InvalidLength {
            telegram: "MD",
            expected: LengthRule::Exactly(65),
            actual: 35,
        };
        assert_eq!(
            err.to_string(),
            "Invalid MD telegram length, expected 65 but got 35 (excluding STX, ETX, checksum)"
        );
    }

    #[test]
    fn test_length_rule_display() {
        assert_eq!(LengthRule::OneOf(2, 5).to_string(), "2 or 5");
        assert_eq!(LengthRule::AtLeast(6).to_string(), "at least 6");
    }
}
