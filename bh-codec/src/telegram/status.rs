//! `ST` status/command telegrams

use crate::error::{BhError, BhResult, LengthRule};
use crate::layout::status::{COMMAND_OFFSET, COMPONENT, MIN_LENGTH};
use bh_core::{Telegram, TelegramType};

/// Decode an `ST` payload
///
/// Everything after the component is the command, taken verbatim.
pub fn decode(payload: &str) -> BhResult<Telegram> {
    if payload.len() < MIN_LENGTH {
        return Err(BhError::InvalidLength {
            telegram: TelegramType::Status.as_str(),
            expected: LengthRule::AtLeast(MIN_LENGTH),
            actual: payload.len(),
        });
    }

    let component = COMPONENT.decimal(payload)?;
    let command = payload.get(COMMAND_OFFSET..).unwrap_or_default();
    Ok(Telegram::status(component, command))
}

/// Encode an `ST` payload
///
/// The command must not be empty; a bare `STccc` payload is too short to
/// decode.
pub fn encode(component: u16, command: &str) -> BhResult<String> {
    if command.is_empty() {
        return Err(BhError::InvalidLength {
            telegram: TelegramType::Status.as_str(),
            expected: LengthRule::AtLeast(MIN_LENGTH),
            actual: COMMAND_OFFSET,
        });
    }
    if let Some(pos) = command.bytes().position(|b| !b.is_ascii()) {
        return Err(BhError::NonAscii {
            position: COMMAND_OFFSET + pos + 1,
        });
    }

    let mut payload = String::with_capacity(COMMAND_OFFSET + command.len());
    payload.push_str(TelegramType::Status.as_str());
    payload.push_str(&COMPONENT.format_decimal(u64::from(component))?);
    payload.push_str(command);
    Ok(payload)
}
