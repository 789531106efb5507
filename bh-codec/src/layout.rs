//! Wire field layouts
//!
//! Each telegram payload is a fixed arrangement of ASCII fields. A [`Field`]
//! names one of them by offset and width so decoders and encoders agree on
//! where every character lives.

use crate::error::{BhError, BhResult};

/// One fixed-width ASCII field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Offset one past the last character
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Largest value a decimal field of this width can hold
    pub fn max_decimal(&self) -> u64 {
        10u64.pow(self.width as u32) - 1
    }

    /// Borrow this field's characters out of `text`
    pub fn slice<'a>(&self, text: &'a str) -> BhResult<&'a str> {
        text.get(self.offset..self.end())
            .ok_or_else(|| BhError::InvalidField {
                field: self.name,
                value: text.get(self.offset..).unwrap_or_default().to_string(),
            })
    }

    /// Parse this field as unsigned decimal digits
    pub fn decimal(&self, text: &str) -> BhResult<u16> {
        let raw = self.slice(text)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid(raw));
        }
        raw.parse().map_err(|_| self.invalid(raw))
    }

    /// Parse this field as hex digits, either case
    pub fn hex(&self, text: &str) -> BhResult<u8> {
        let raw = self.slice(text)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.invalid(raw));
        }
        u8::from_str_radix(raw, 16).map_err(|_| self.invalid(raw))
    }

    /// Format a value as zero-padded decimal digits of this width
    pub fn format_decimal(&self, value: u64) -> BhResult<String> {
        let max = self.max_decimal();
        if value > max {
            return Err(BhError::FieldOutOfRange {
                field: self.name,
                value,
                max,
            });
        }
        Ok(format!("{:0width$}", value, width = self.width))
    }

    /// Format a byte as uppercase hex of this width
    pub fn format_hex(&self, value: u8) -> String {
        format!("{:0width$X}", value, width = self.width)
    }

    /// Copy already formatted text into place within `buf`
    pub fn write(&self, buf: &mut [u8], text: &str) -> BhResult<()> {
        if text.len() != self.width || buf.len() < self.end() {
            return Err(self.invalid(text));
        }
        buf[self.offset..self.end()].copy_from_slice(text.as_bytes());
        Ok(())
    }

    fn invalid(&self, raw: &str) -> BhError {
        BhError::InvalidField {
            field: self.name,
            value: raw.to_string(),
        }
    }
}

/// Two-character type tag leading every payload
pub const TAG: Field = Field::new("telegramtype", 0, 2);

/// `DA` payload layout
pub mod addressing {
    use super::Field;

    pub const COMPONENT: Field = Field::new("component", 2, 3);

    /// Bare tag
    pub const QUERY_LENGTH: usize = 2;
    /// Tag and component
    pub const ADDRESSED_LENGTH: usize = 5;
}

/// `ST` payload layout
pub mod status {
    use super::Field;

    pub const COMPONENT: Field = Field::new("component", 2, 3);

    /// Command text runs from here to the end of the payload
    pub const COMMAND_OFFSET: usize = 5;
    pub const MIN_LENGTH: usize = 6;
}

/// `MD` payload layout
///
/// ```text
/// MDnn_ccc_±MMMM±EE_oo_ee_sss_000000_ ...
/// ^    \_____________ block ________/
/// ```
pub mod measurement {
    use super::Field;

    pub const COUNT: Field = Field::new("count", 2, 2);

    /// Tag, count and one separator
    pub const HEADER_LENGTH: usize = 5;
    pub const BLOCK_LENGTH: usize = 30;

    // Offsets within one block
    pub const COMPONENT: Field = Field::new("component", 0, 3);
    pub const VALUE: Field = Field::new("value", 4, 8);
    pub const OPSTS: Field = Field::new("opsts", 13, 2);
    pub const ERRSTS: Field = Field::new("errsts", 16, 2);
    pub const SERIAL: Field = Field::new("serial", 19, 3);
    pub const RESERVED: Field = Field::new("reserved", 23, 6);

    pub const RESERVED_FILL: &str = "000000";
    pub const SEPARATOR: u8 = b' ';

    /// Payload length for `count` readings
    pub const fn payload_length(count: usize) -> usize {
        HEADER_LENGTH + BLOCK_LENGTH * count
    }

    /// Range of block `index` within the payload
    pub const fn block_range(index: usize) -> std::ops::Range<usize> {
        let start = HEADER_LENGTH + BLOCK_LENGTH * index;
        start..start + BLOCK_LENGTH
    }
}
