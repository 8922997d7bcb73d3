//! Conversion between form text and typed Modbus payloads
//!
//! Write values follow a fixed policy: text that starts with `[` must be a
//! JSON array; otherwise single-value kinds (`coil`, `register`) coerce the text
//! to an integer where `"true"` means 1 and anything unparseable means 0, and
//! multi-value kinds forward the text untouched. Identifier and size fields
//! (slave id, addresses, quantities, ports, baud rates) are strict base-10
//! integers and are rejected rather than coerced.

use serde_json::Value;

use crate::errors::{PanelError, Result};
use crate::models::{ModbusScalar, ReadKind, ReadRequest, WriteKind, WriteRequest, WriteValue};

/// Parse the value field of a write form.
pub fn parse_write_value(input: &str, kind: WriteKind) -> Result<WriteValue> {
    let trimmed = input.trim();

    if trimmed.starts_with('[') {
        return parse_array(trimmed).map(WriteValue::Sequence);
    }

    if kind.is_single() {
        Ok(WriteValue::Scalar(coerce_scalar(trimmed)))
    } else {
        Ok(WriteValue::Text(input.to_string()))
    }
}

fn parse_array(text: &str) -> Result<Vec<ModbusScalar>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| PanelError::Validation(format!("malformed JSON array: {}", e)))?;

    serde_json::from_value(value).map_err(|_| {
        PanelError::Validation("array elements must be integers or booleans".to_string())
    })
}

/// Numeric/boolean coercion for single-value writes.
///
/// Text that reads as a number (decimal, exponent, or `0x` hex) keeps its
/// leading integer: `"12.5"` is 12, `"1e3"` is 1, `"0x10"` is 16. Otherwise
/// `"true"` is 1 and everything else is 0; only a warning is logged.
pub fn coerce_scalar(text: &str) -> i64 {
    if is_numeric_literal(text) {
        if let Some(number) = integer_prefix(text) {
            return number;
        }
        log::warn!("Write value {:?} has no integer part, sending 0", text);
        return 0;
    }
    if text.eq_ignore_ascii_case("true") {
        return 1;
    }
    if !text.eq_ignore_ascii_case("false") {
        log::warn!("Write value {:?} is not a number or boolean, sending 0", text);
    }
    0
}

/// Whether trimmed `text` is a complete numeric literal: an optionally signed
/// decimal with fraction and exponent, `Infinity`, or an unsigned `0x`/`0o`/`0b`
/// integer. Empty text counts as the number zero.
fn is_numeric_literal(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    let radix_digits = |prefix_len: usize, radix: u32| {
        let digits = &text[prefix_len..];
        !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
    };
    let lower = text.to_ascii_lowercase();
    if lower.starts_with("0x") {
        return radix_digits(2, 16);
    }
    if lower.starts_with("0o") {
        return radix_digits(2, 8);
    }
    if lower.starts_with("0b") {
        return radix_digits(2, 2);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return false;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

/// Leading integer of `text`: an optional sign followed by decimal digits,
/// or a `0x` hex literal. Saturates instead of overflowing.
fn integer_prefix(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, body) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let digits: Vec<u32> = body.chars().map_while(|c| c.to_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(i64::from(radix)).saturating_add(i64::from(d))
    });
    Some(if negative { magnitude.saturating_neg() } else { magnitude })
}

/// Strict base-10 parse of an identifier or size field.
pub fn parse_field<T>(field: &str, text: &str) -> Result<T>
where
    T: TryFrom<i64>,
{
    let trimmed = text.trim();
    let number: i64 = trimmed.parse().map_err(|_| {
        PanelError::Validation(format!("{} must be a whole number, got {:?}", field, trimmed))
    })?;

    if number < 0 {
        return Err(PanelError::Validation(format!(
            "{} must not be negative, got {}",
            field, number
        )));
    }

    T::try_from(number)
        .map_err(|_| PanelError::Validation(format!("{} is out of range: {}", field, number)))
}

/// Build a read request from form text.
pub fn build_read_request(
    slave: &str,
    kind: ReadKind,
    start: &str,
    quantity: &str,
) -> Result<ReadRequest> {
    Ok(ReadRequest {
        slave_id: parse_field("Slave ID", slave)?,
        kind,
        start_addr: parse_field("Start address", start)?,
        quantity: parse_field("Quantity", quantity)?,
    })
}

/// Build a write request from form text.
///
/// Identifier fields are validated before the value so a bad slave id is
/// reported even when the value is also malformed.
pub fn build_write_request(
    slave: &str,
    kind: WriteKind,
    addr: &str,
    value: &str,
) -> Result<WriteRequest> {
    let slave_id = parse_field("Slave ID", slave)?;
    let addr = parse_field("Address", addr)?;
    let value = parse_write_value(value, kind)?;

    Ok(WriteRequest {
        slave_id,
        kind,
        addr,
        value,
    })
}

/// Render a read result verbatim as compact JSON text.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => Value::Null.to_string(),
    }
}
