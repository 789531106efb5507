//! `MD` measurement data telegrams
//!
//! A two-digit count is followed by that many 30-character blocks, one per
//! component reading, in wire order.

use crate::error::{BhError, BhResult, LengthRule};
use crate::layout::measurement::{
    block_range, payload_length, BLOCK_LENGTH, COMPONENT, COUNT, ERRSTS, HEADER_LENGTH, OPSTS,
    RESERVED, RESERVED_FILL, SEPARATOR, SERIAL, VALUE,
};
use crate::numeric;
use bh_core::telegram::MAX_READINGS;
use bh_core::{ComponentReading, Telegram, TelegramType};

/// Decode an `MD` payload
pub fn decode(payload: &str) -> BhResult<Telegram> {
    if payload.len() < HEADER_LENGTH {
        return Err(invalid_length(LengthRule::AtLeast(HEADER_LENGTH), payload.len()));
    }

    let count = usize::from(COUNT.decimal(payload)?);
    let expected = payload_length(count);
    if payload.len() != expected {
        return Err(invalid_length(LengthRule::Exactly(expected), payload.len()));
    }

    let components = (0..count)
        .map(|i| {
            let block = payload.get(block_range(i)).ok_or_else(|| {
                invalid_length(LengthRule::Exactly(expected), payload.len())
            })?;
            decode_block(block)
        })
        .collect::<BhResult<Vec<_>>>()?;

    Ok(Telegram::measurement(components))
}

/// Decode a single 30-character reading block
///
/// Separators and the reserved field are not checked.
pub fn decode_block(block: &str) -> BhResult<ComponentReading> {
    Ok(ComponentReading {
        component: COMPONENT.decimal(block)?,
        value: numeric::decode_value(VALUE.slice(block)?)?,
        opsts: OPSTS.hex(block)?,
        errsts: ERRSTS.hex(block)?,
        serial: SERIAL.decimal(block)?,
    })
}

/// Encode an `MD` payload
pub fn encode(components: &[ComponentReading]) -> BhResult<String> {
    if components.len() > MAX_READINGS {
        return Err(BhError::FieldOutOfRange {
            field: COUNT.name,
            value: components.len() as u64,
            max: MAX_READINGS as u64,
        });
    }

    let mut payload = String::with_capacity(payload_length(components.len()));
    payload.push_str(TelegramType::Measurement.as_str());
    payload.push_str(&COUNT.format_decimal(components.len() as u64)?);
    payload.push(char::from(SEPARATOR));

    for reading in components {
        payload.push_str(&encode_block(reading)?);
    }
    Ok(payload)
}

/// Encode one reading as a 30-character block, trailing separator included
pub fn encode_block(reading: &ComponentReading) -> BhResult<String> {
    let mut block = [SEPARATOR; BLOCK_LENGTH];

    COMPONENT.write(&mut block, &COMPONENT.format_decimal(u64::from(reading.component))?)?;
    VALUE.write(&mut block, &numeric::encode_value(reading.value)?)?;
    OPSTS.write(&mut block, &OPSTS.format_hex(reading.opsts))?;
    ERRSTS.write(&mut block, &ERRSTS.format_hex(reading.errsts))?;
    SERIAL.write(&mut block, &SERIAL.format_decimal(u64::from(reading.serial))?)?;
    RESERVED.write(&mut block, RESERVED_FILL)?;

    // every byte written above is ASCII
    Ok(block.iter().map(|&b| char::from(b)).collect())
}

fn invalid_length(expected: LengthRule, actual: usize) -> BhError {
    BhError::InvalidLength {
        telegram: TelegramType::Measurement.as_str(),
        expected,
        actual,
    }
}
