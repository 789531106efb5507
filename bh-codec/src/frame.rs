//! Frame envelope: STX, payload, ETX, checksum trailer

use crate::checksum::{self, XorChecksum};
use crate::error::{BhError, BhResult};
use bh_core::CodecSettings;

/// Start of text
pub const STX: u8 = 0x02;

/// End of text
pub const ETX: u8 = 0x03;

/// Checksum trailer length
pub const TRAILER_LENGTH: usize = 2;

/// STX + ETX + trailer
pub const MIN_FRAME_LENGTH: usize = 2 + TRAILER_LENGTH;

/// Frame envelope codec
pub struct FrameEnvelope;

impl FrameEnvelope {
    /// Validate a raw frame and return its payload text
    ///
    /// The checksum covers everything up to and including ETX. The payload is
    /// what lies strictly between STX and ETX and must be ASCII.
    pub fn decode<'a>(frame: &'a [u8], settings: &CodecSettings) -> BhResult<&'a str> {
        if frame.len() < MIN_FRAME_LENGTH {
            return Err(BhError::FrameTooShort { len: frame.len() });
        }
        if frame[0] != STX {
            return Err(BhError::MissingStartMarker { found: frame[0] });
        }

        let etx_pos = frame.len() - TRAILER_LENGTH - 1;
        if frame[etx_pos] != ETX {
            return Err(BhError::MissingEndMarker {
                found: frame[etx_pos],
            });
        }

        let trailer_pos = frame.len() - TRAILER_LENGTH;
        let got = checksum::parse_trailer(
            [frame[trailer_pos], frame[trailer_pos + 1]],
            settings.accept_lowercase_checksum,
        )?;
        let expected = checksum::checksum(frame, trailer_pos);
        if got != expected {
            return Err(BhError::ChecksumMismatch { got, expected });
        }

        let payload = &frame[1..etx_pos];
        if let Some(pos) = payload.iter().position(|b| !b.is_ascii()) {
            return Err(BhError::NonAscii { position: pos + 1 });
        }
        std::str::from_utf8(payload).map_err(|e| BhError::NonAscii {
            position: e.valid_up_to() + 1,
        })
    }

    /// Wrap a payload in STX/ETX and append the checksum trailer
    pub fn encode(payload: &str) -> BhResult<String> {
        if let Some(pos) = payload.bytes().position(|b| !b.is_ascii()) {
            return Err(BhError::NonAscii { position: pos + 1 });
        }

        let mut calc = XorChecksum::new();
        let mut frame = String::with_capacity(payload.len() + MIN_FRAME_LENGTH);

        frame.push(char::from(STX));
        frame.push_str(payload);
        frame.push(char::from(ETX));
        calc.update_bytes(frame.as_bytes());

        let trailer = calc.to_hex();
        frame.push(char::from(trailer[0]));
        frame.push(char::from(trailer[1]));
        Ok(frame)
    }
}
