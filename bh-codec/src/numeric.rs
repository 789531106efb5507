//! Mantissa/exponent value format
//!
//! Measured values travel as eight ASCII characters `±MMMM±EE`: a signed
//! four-digit mantissa with an implicit decimal point after its first digit,
//! followed by a signed two-digit power of ten. Pi is sent as `+3142+00`.
//!
//! Values too small for a two-digit exponent are sent as
//! [`UNDERFLOW_SENTINEL`]; values too large are rejected.

use crate::error::{BhError, BhResult};

/// Width of an encoded value
pub const VALUE_WIDTH: usize = 8;

/// Significant mantissa digits
pub const MANTISSA_DIGITS: usize = 4;

/// Stand-in for values below the smallest representable exponent
pub const UNDERFLOW_SENTINEL: &str = "+0000-99";

const MAX_EXPONENT: i32 = 99;

// Enough digits that the rounding digit is exact for any f64: the nearest
// double to a rounding tie is either the tie itself or visibly off it here.
const EXACT_DIGITS: usize = 30;

/// Encode a value as `±MMMM±EE`
///
/// The value is rounded half away from zero to four significant digits.
pub fn encode_value(value: f64) -> BhResult<String> {
    if value.is_nan() {
        return Err(BhError::NumericFormat("value is NaN".to_string()));
    }
    if value.is_infinite() {
        return Err(BhError::ValueTooLarge(value));
    }

    let (mantissa, exponent) = round_significant(value.abs())?;

    if exponent < -MAX_EXPONENT {
        log::warn!(
            "Value {} underflows the exponent range, sending {}",
            value,
            UNDERFLOW_SENTINEL
        );
        return Ok(UNDERFLOW_SENTINEL.to_string());
    }
    if exponent > MAX_EXPONENT {
        return Err(BhError::ValueTooLarge(value));
    }

    let sign = if value < 0.0 { '-' } else { '+' };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    Ok(format!(
        "{}{:04}{}{:02}",
        sign,
        mantissa,
        exponent_sign,
        exponent.unsigned_abs()
    ))
}

/// Decode an `±MMMM±EE` field
pub fn decode_value(field: &str) -> BhResult<f64> {
    let bytes = field.as_bytes();
    if bytes.len() != VALUE_WIDTH {
        return Err(BhError::NumericFormat(format!(
            "value field must be {} characters: {:?}",
            VALUE_WIDTH, field
        )));
    }
    if !matches!(bytes[0], b'+' | b'-') {
        return Err(BhError::NumericFormat(format!(
            "mantissa sign not found as expected: {:?}",
            field
        )));
    }
    if !matches!(bytes[5], b'+' | b'-') {
        return Err(BhError::NumericFormat(format!(
            "exponent sign not found as expected: {:?}",
            field
        )));
    }
    let digits_ok = bytes[1..5]
        .iter()
        .chain(&bytes[6..8])
        .all(u8::is_ascii_digit);
    if !digits_ok {
        return Err(BhError::NumericFormat(format!(
            "non-digit in value field: {:?}",
            field
        )));
    }

    let literal = format!("{}.{}e{}", &field[0..2], &field[2..5], &field[5..8]);
    literal
        .parse::<f64>()
        .map_err(|e| BhError::NumericFormat(format!("{}: {:?}", e, literal)))
}

/// Round a non-negative finite value to four significant digits
///
/// Returns the mantissa as an integer in `1000..=9999` (or 0 for zero) and
/// the power of ten that applies to its first digit.
fn round_significant(magnitude: f64) -> BhResult<(u16, i32)> {
    let formatted = format!("{:.*e}", EXACT_DIGITS, magnitude);

    let (mantissa, exponent) = formatted.split_once('e').ok_or_else(|| {
        BhError::NumericFormat(format!("exponent not found as expected: {}", formatted))
    })?;
    let mut exponent: i32 = exponent.parse().map_err(|_| {
        BhError::NumericFormat(format!("exponent not numeric: {}", formatted))
    })?;
    let (lead, fraction) = mantissa.split_once('.').ok_or_else(|| {
        BhError::NumericFormat(format!(
            "decimal point not found where expected: {}",
            mantissa
        ))
    })?;

    let digits: Vec<u8> = lead.bytes().chain(fraction.bytes()).collect();
    if digits.len() <= MANTISSA_DIGITS || !digits.iter().all(u8::is_ascii_digit) {
        return Err(BhError::NumericFormat(format!(
            "unexpected mantissa: {}",
            mantissa
        )));
    }

    let mut kept = digits[..MANTISSA_DIGITS]
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
    if digits[MANTISSA_DIGITS] >= b'5' {
        kept += 1;
        if kept == 10_000 {
            kept = 1_000;
            exponent += 1;
        }
    }

    Ok((kept, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pi() {
        assert_eq!(encode_value(3.14159).unwrap(), "+3142+00");
        assert_eq!(encode_value(std::f64::consts::PI).unwrap(), "+3142+00");
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_value(0.0).unwrap(), "+0000+00");
        assert_eq!(encode_value(-0.0).unwrap(), "+0000+00");
    }

    #[test]
    fn test_encode_powers_of_ten() {
        assert_eq!(encode_value(1.0).unwrap(), "+1000+00");
        assert_eq!(encode_value(10.0).unwrap(), "+1000+01");
        assert_eq!(encode_value(0.001).unwrap(), "+1000-03");
        assert_eq!(encode_value(1e99).unwrap(), "+1000+99");
        assert_eq!(encode_value(1e-99).unwrap(), "+1000-99");
    }

    #[test]
    fn test_encode_negative() {
        assert_eq!(encode_value(-273.16).unwrap(), "-2732+02");
        assert_eq!(encode_value(-0.5).unwrap(), "-5000-01");
    }

    #[test]
    fn test_encode_rounding_carries_into_exponent() {
        assert_eq!(encode_value(9.9996).unwrap(), "+1000+01");
        assert_eq!(encode_value(99999.0).unwrap(), "+1000+05");
    }

    #[test]
    fn test_encode_exact_tie_rounds_away_from_zero() {
        assert_eq!(encode_value(1.0625).unwrap(), "+1063+00");
        assert_eq!(encode_value(-1.0625).unwrap(), "-1063+00");
        // 1.0005 is stored slightly below the tie
        assert_eq!(encode_value(1.0005).unwrap(), "+1000+00");
    }

    #[test]
    fn test_encode_underflow_sentinel() {
        assert_eq!(encode_value(1e-100).unwrap(), UNDERFLOW_SENTINEL);
        assert_eq!(encode_value(-4.2e-150).unwrap(), UNDERFLOW_SENTINEL);
        assert_eq!(encode_value(f64::MIN_POSITIVE).unwrap(), UNDERFLOW_SENTINEL);
    }

    #[test]
    fn test_encode_rounds_up_out_of_underflow() {
        assert_eq!(encode_value(9.9996e-100).unwrap(), "+1000-99");
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(encode_value(1e100), Err(BhError::ValueTooLarge(1e100)));
        assert_eq!(encode_value(-5e200), Err(BhError::ValueTooLarge(-5e200)));
        assert!(matches!(
            encode_value(f64::INFINITY),
            Err(BhError::ValueTooLarge(_))
        ));
        assert!(matches!(
            encode_value(9.9996e99),
            Err(BhError::ValueTooLarge(_))
        ));
    }

    #[test]
    fn test_encode_nan() {
        assert!(matches!(
            encode_value(f64::NAN),
            Err(BhError::NumericFormat(_))
        ));
    }

    #[test]
    fn test_decode_value() {
        assert_eq!(decode_value("+3142+00").unwrap(), 3.142);
        assert_eq!(decode_value("-2732+02").unwrap(), -273.2);
        assert_eq!(decode_value("+1000-03").unwrap(), 0.001);
    }

    #[test]
    fn test_decode_sentinel_is_zero() {
        assert_eq!(decode_value(UNDERFLOW_SENTINEL).unwrap(), 0.0);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_value("+3142+0").is_err());
        assert!(decode_value("3142+000").is_err());
        assert!(decode_value("+3142 00").is_err());
        assert!(decode_value("+31A2+00").is_err());
    }

    #[test]
    fn test_roundtrip_within_precision() {
        let samples = [
            1.23456e-98,
            -7.777e-42,
            0.000123456,
            42.0,
            -1234.5678,
            6.02214076e23,
            9.87654e97,
        ];
        for &x in &samples {
            let decoded = decode_value(&encode_value(x).unwrap()).unwrap();
            let tolerance = x.abs() * 5e-4;
            assert!(
                (decoded - x).abs() <= tolerance,
                "{} decoded as {}",
                x,
                decoded
            );
        }
    }
}
