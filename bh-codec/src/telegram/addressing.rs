//! `DA` addressing telegrams

use crate::error::{BhError, BhResult, LengthRule};
use crate::layout::addressing::{ADDRESSED_LENGTH, COMPONENT, QUERY_LENGTH};
use bh_core::{Telegram, TelegramType};

/// Decode a `DA` payload
pub fn decode(payload: &str) -> BhResult<Telegram> {
    match payload.len() {
        QUERY_LENGTH => Ok(Telegram::broadcast()),
        ADDRESSED_LENGTH => Ok(Telegram::addressing(COMPONENT.decimal(payload)?)),
        actual => Err(BhError::InvalidLength {
            telegram: TelegramType::Addressing.as_str(),
            expected: LengthRule::OneOf(QUERY_LENGTH, ADDRESSED_LENGTH),
            actual,
        }),
    }
}

/// Encode a `DA` payload
pub fn encode(component: Option<u16>) -> BhResult<String> {
    let mut payload = String::from(TelegramType::Addressing.as_str());
    if let Some(component) = component {
        payload.push_str(&COMPONENT.format_decimal(u64::from(component))?);
    }
    Ok(payload)
}
