//! Checksum trailer calculation
//!
//! The trailer is the XOR of every preceding frame byte, transmitted as two
//! hex ASCII characters.

use crate::error::{BhError, BhResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// XOR of `data[..length]`
///
/// A `length` beyond the end of `data` covers the whole slice.
pub fn checksum(data: &[u8], length: usize) -> u8 {
    let mut calc = XorChecksum::new();
    calc.update_slice(data, length);
    calc.value()
}

/// Running XOR checksum
#[derive(Debug, Clone, Copy, Default)]
pub struct XorChecksum {
    value: u8,
}

impl XorChecksum {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Update the checksum with a single byte
    pub fn update(&mut self, data: u8) {
        self.value ^= data;
    }

    /// Update the checksum with multiple bytes
    pub fn update_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.update(byte);
        }
    }

    /// Update the checksum with the first `length` bytes of a slice
    pub fn update_slice(&mut self, data: &[u8], length: usize) {
        for &byte in data.iter().take(length) {
            self.update(byte);
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Current value as two uppercase hex characters
    pub fn to_hex(&self) -> [u8; 2] {
        to_hex(self.value)
    }
}

/// Format a byte as two uppercase hex ASCII characters
pub fn to_hex(value: u8) -> [u8; 2] {
    [
        HEX_DIGITS[(value >> 4) as usize],
        HEX_DIGITS[(value & 0x0F) as usize],
    ]
}

/// Parse one checksum trailer character
///
/// Only `0-9` and `A-F` are accepted unless `accept_lowercase` is set.
pub fn hex_digit_value(digit: u8, accept_lowercase: bool) -> BhResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' if accept_lowercase => Ok(digit - b'a' + 10),
        _ => Err(BhError::InvalidChecksumDigit { found: digit }),
    }
}

/// Parse the two-character checksum trailer
pub fn parse_trailer(trailer: [u8; 2], accept_lowercase: bool) -> BhResult<u8> {
    let high = hex_digit_value(trailer[0], accept_lowercase)?;
    let low = hex_digit_value(trailer[1], accept_lowercase)?;
    Ok((high << 4) | low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[], 0), 0);
        assert_eq!(checksum(&[0x55, 0xAA], 0), 0);
    }

    #[test]
    fn test_checksum_prefix_only() {
        let data = [0x02, b'D', b'A', 0x03, 0xFF];
        assert_eq!(checksum(&data, 4), 0x02 ^ b'D' ^ b'A' ^ 0x03);
        assert_eq!(checksum(&data, 100), checksum(&data, data.len()));
    }

    #[test]
    fn test_running_checksum_matches_oneshot() {
        let data = b"\x02ST007ON\x03";
        let mut calc = XorChecksum::new();
        calc.update(data[0]);
        calc.update_bytes(&data[1..]);
        assert_eq!(calc.value(), checksum(data, data.len()));
    }

    #[test]
    fn test_to_hex_uppercase() {
        assert_eq!(&to_hex(0x0A), b"0A");
        assert_eq!(&to_hex(0xFE), b"FE");
        assert_eq!(&to_hex(0x00), b"00");
    }

    #[test]
    fn test_parse_trailer_case_sensitivity() {
        assert_eq!(parse_trailer(*b"3F", false), Ok(0x3F));
        assert_eq!(
            parse_trailer(*b"3f", false),
            Err(BhError::InvalidChecksumDigit { found: b'f' })
        );
        assert_eq!(parse_trailer(*b"3f", true), Ok(0x3F));
        assert!(parse_trailer(*b"G0", true).is_err());
    }
}
