use bigdecimal::{
    num_bigint::{BigInt, Sign},
    BigDecimal, ParseBigDecimalError,
};
use std::str::FromStr;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum AmountError {
    #[error("invalid decimal amount `{value}`: {source}")]
    InvalidDecimal {
        value: String,
        #[source]
        source: ParseBigDecimalError,
    },

    #[error("fractional component of `{value}` exceeds {units} decimals")]
    FractionTooLong { value: String, units: u8 },

    /// Signs other than a leading `-`, exponents and the like
    #[error("malformed amount `{value}`")]
    Malformed { value: String },
}


/// Format a fixed-point amount (eg. wei) to readable units
///
/// The result always carries a fractional part (`"1.0"`, `"1.5"`) except for zero which is `"0"`.
/// An empty `value` is also formatted as `"0"`.
///
/// `value` is a decimal integer or a `0x` prefixed hex one, both optionally negative.
///
/// If `decimals` is `Some(n)` with `n > 0` the fractional part is truncated (not rounded) to `n` digits
pub fn format_currency_amount(value: &str, units: u8, decimals: Option<u32>) -> Result<String, AmountError> {
    if value.is_empty() {
        return Ok("0".to_string());
    }

    let amount = parse_integer(value)?;

    let result = format_units(&amount, units);
    if result == "0.0" {
        return Ok("0".to_string());
    }

    match decimals {
        Some(decimals) if decimals > 0 => Ok(truncate_decimal_value(&result, decimals).unwrap_or(result)),
        _ => Ok(result),
    }
}

/// Parse a readable amount into its fixed-point representation
///
/// Returns an empty string if `value` is empty or `units` is zero
pub fn parse_currency_amount(value: &str, units: u8) -> Result<String, AmountError> {
    if value.is_empty() || units == 0 {
        return Ok(String::new());
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(AmountError::InvalidDecimal {
            value: value.to_string(),
            source: ParseBigDecimalError::Other(format!("unexpected character in `{}`", value)),
        });
    }

    let amount = BigDecimal::from_str(value).map_err(|source| AmountError::InvalidDecimal {
        value: value.to_string(),
        source,
    })?;

    // 10^units
    let multiplier = BigDecimal::new(BigInt::from(1), -(units as i64));
    let scaled = amount * multiplier;
    let whole = scaled.with_scale(0);

    if whole != scaled {
        return Err(AmountError::FractionTooLong {
            value: value.to_string(),
            units,
        });
    }

    let (int, _) = whole.as_bigint_and_exponent();
    Ok(int.to_string())
}

/// Truncate a decimal string to at most `decimals` fractional digits
///
/// Works on the text only, `"1.999"` with 2 decimals is `"1.99"`.
/// `decimals == 0` keeps the integer part.
///
/// Returns `None` if `value` does not start with an (optionally negative) integer
pub fn truncate_decimal_value(value: &str, decimals: u32) -> Option<String> {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let sign_len = value.len() - unsigned.len();

    let int_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if int_len == 0 {
        return None;
    }

    let mut end = sign_len + int_len;
    if decimals == 0 {
        return Some(value[..end].to_string());
    }

    let mut rest = value[end..].chars();
    if let Some(separator) = rest.next() {
        if !is_line_terminator(separator) {
            end += separator.len_utf8();
            let digits = rest
                .take(decimals as usize)
                .take_while(|c| c.is_ascii_digit())
                .count();
            end += digits;
        }
    }

    Some(value[..end].to_string())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// `-?[0-9]+` or `-?0x[0-9a-fA-F]+`
fn parse_integer(value: &str) -> Result<BigInt, AmountError> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let (digits, radix) = match unsigned.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AmountError::Malformed { value: value.to_string() });
    }

    let amount = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| AmountError::Malformed { value: value.to_string() })?;
    Ok(if negative { -amount } else { amount })
}

fn format_units(amount: &BigInt, units: u8) -> String {
    let units = units as usize;
    let mut digits = amount.magnitude().to_string();

    if digits.len() <= units {
        digits = format!("{:0>width$}", digits, width = units + 1);
    }

    let (whole, fraction) = digits.split_at(digits.len() - units);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    let sign = if amount.sign() == Sign::Minus { "-" } else { "" };
    format!("{}{}.{}", sign, whole, fraction)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_empty_format_as_zero() {
        assert_eq!(format_currency_amount("0", 18, None).unwrap(), "0");
        assert_eq!(format_currency_amount("", 18, None).unwrap(), "0");
        assert_eq!(format_currency_amount("0", 6, Some(2)).unwrap(), "0");
    }

    #[test]
    fn format_keeps_one_fractional_digit() {
        assert_eq!(format_currency_amount("1000000", 6, None).unwrap(), "1.0");
        assert_eq!(format_currency_amount("1500000000000000000", 18, None).unwrap(), "1.5");
        assert_eq!(format_currency_amount("1", 18, None).unwrap(), "0.000000000000000001");
        assert_eq!(format_currency_amount("-2500", 3, None).unwrap(), "-2.5");
        assert_eq!(format_currency_amount("42", 0, None).unwrap(), "42.0");
    }

    #[test]
    fn display_decimals_truncate_instead_of_rounding() {
        assert_eq!(format_currency_amount("1234567", 6, Some(2)).unwrap(), "1.23");
        assert_eq!(format_currency_amount("1999", 3, Some(2)).unwrap(), "1.99");
        assert_eq!(format_currency_amount("1000000", 6, Some(4)).unwrap(), "1.0");
        // zero display decimals means "no truncation"
        assert_eq!(format_currency_amount("1234567", 6, Some(0)).unwrap(), "1.234567");
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(matches!(
            format_currency_amount("12abc", 18, None),
            Err(AmountError::Malformed { .. })
        ));
        assert!(matches!(
            parse_currency_amount("1.2.3", 18),
            Err(AmountError::InvalidDecimal { .. })
        ));
        assert!(matches!(
            parse_currency_amount("1.2345", 2),
            Err(AmountError::FractionTooLong { units: 2, .. })
        ));
    }

    #[test]
    fn signs_and_exponents_are_rejected() {
        assert!(matches!(parse_currency_amount("1e5", 18), Err(AmountError::InvalidDecimal { .. })));
        assert!(matches!(parse_currency_amount("+1.5", 6), Err(AmountError::InvalidDecimal { .. })));
        assert!(matches!(parse_currency_amount("--1", 6), Err(AmountError::InvalidDecimal { .. })));
        assert!(matches!(format_currency_amount("+5", 0, None), Err(AmountError::Malformed { .. })));
        assert!(matches!(format_currency_amount("1e5", 0, None), Err(AmountError::Malformed { .. })));
        assert!(matches!(format_currency_amount("-", 0, None), Err(AmountError::Malformed { .. })));
        assert_eq!(parse_currency_amount("-1.5", 6).unwrap(), "-1500000");
    }

    #[test]
    fn hex_amounts_are_formatted() {
        assert_eq!(format_currency_amount("0xde0b6b3a7640000", 18, None).unwrap(), "1.0");
        assert_eq!(format_currency_amount("-0x3e8", 3, None).unwrap(), "-1.0");
        assert!(matches!(format_currency_amount("0x", 18, None), Err(AmountError::Malformed { .. })));
        assert!(matches!(format_currency_amount("0xzz", 18, None), Err(AmountError::Malformed { .. })));
    }

    #[test]
    fn parse_scales_by_units() {
        assert_eq!(parse_currency_amount("1.5", 18).unwrap(), "1500000000000000000");
        assert_eq!(parse_currency_amount("0.000001", 6).unwrap(), "1");
        assert_eq!(parse_currency_amount("25", 6).unwrap(), "25000000");
        assert_eq!(parse_currency_amount("1.2300", 2).unwrap(), "123");
    }

    #[test]
    fn parse_short_circuits_on_empty_input() {
        assert_eq!(parse_currency_amount("", 18).unwrap(), "");
        assert_eq!(parse_currency_amount("1.5", 0).unwrap(), "");
    }

    #[test]
    fn parse_then_format_returns_the_input() {
        for (value, units) in [("1.5", 18u8), ("0.000123", 6), ("1000.25", 8), ("7.0", 6)] {
            let fixed = parse_currency_amount(value, units).unwrap();
            assert_eq!(format_currency_amount(&fixed, units, None).unwrap(), value);
        }
    }

    #[test]
    fn truncate_is_textual() {
        assert_eq!(truncate_decimal_value("1.23456", 3).as_deref(), Some("1.234"));
        assert_eq!(truncate_decimal_value("-0.98765", 2).as_deref(), Some("-0.98"));
        assert_eq!(truncate_decimal_value("12", 2).as_deref(), Some("12"));
        assert_eq!(truncate_decimal_value("12.5", 0).as_deref(), Some("12"));
        assert_eq!(truncate_decimal_value("abc", 2), None);
        assert_eq!(truncate_decimal_value(".5", 2), None);
    }

    #[test]
    fn line_terminators_are_not_separators() {
        assert_eq!(truncate_decimal_value("1\n23", 2).as_deref(), Some("1"));
        assert_eq!(truncate_decimal_value("1\r23", 2).as_deref(), Some("1"));
        assert_eq!(truncate_decimal_value("1\u{2028}23", 2).as_deref(), Some("1"));
        assert_eq!(truncate_decimal_value("1\u{2029}23", 2).as_deref(), Some("1"));
        assert_eq!(truncate_decimal_value("1,23", 2).as_deref(), Some("1,23"));
    }
}
