//! Field coercion for registry columns.
//!
//! Each coercion takes an already trimmed raw value and returns either a
//! typed value or a single [`ValidationError`], never both. Coercion never
//! panics on bad input.

use rust_decimal::Decimal;

use crate::models::{EmployeeId, ValidationError, ValidationErrorType};

use super::schema::{FieldSchema, FieldType};

/// Outcome of coercing a single column.
pub type FieldResult<T> = Result<T, ValidationError>;

/// A successfully coerced column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text column.
    Text(String),
    /// Integer column; `None` when an optional column was blank.
    Integer(Option<EmployeeId>),
    /// Decimal column; `None` when an optional column was blank.
    Decimal(Option<Decimal>),
}

/// Coerces a raw column value according to the field's type.
///
/// # Examples
///
/// ```
/// use employee_reporting::registry::{coerce_field, FieldValue, EMPLOYEE_SCHEMA};
///
/// let id = EMPLOYEE_SCHEMA.field("id").unwrap();
/// assert_eq!(coerce_field("42", id, 2).unwrap(), FieldValue::Integer(Some(42)));
///
/// let error = coerce_field("-1", id, 2).unwrap_err();
/// assert_eq!(error.message, "Invalid value [-1] for field [id] on line 2");
/// ```
pub fn coerce_field(raw: &str, field: &FieldSchema, line_number: usize) -> FieldResult<FieldValue> {
    match field.field_type {
        FieldType::String => parse_string_field(raw, field, line_number).map(FieldValue::Text),
        FieldType::IntegerAbs => {
            parse_int_abs_field(raw, field, line_number).map(FieldValue::Integer)
        }
        FieldType::DecimalAbs => {
            parse_decimal_abs_field(raw, field, line_number).map(FieldValue::Decimal)
        }
    }
}

/// Accepts any text, except a blank value in a required column.
pub fn parse_string_field(raw: &str, field: &FieldSchema, line_number: usize) -> FieldResult<String> {
    if raw.trim().is_empty() && field.required {
        return Err(invalid_field(raw, field, line_number));
    }
    Ok(raw.to_string())
}

/// Parses a non-negative integer.
///
/// A blank optional column yields `Ok(None)`. Any other unparsable or
/// negative value is an error, even in an optional column.
pub fn parse_int_abs_field(
    raw: &str,
    field: &FieldSchema,
    line_number: usize,
) -> FieldResult<Option<EmployeeId>> {
    let parsed = raw
        .parse::<i32>()
        .ok()
        .and_then(|value| EmployeeId::try_from(value).ok());

    match parsed {
        Some(value) => Ok(Some(value)),
        None => blank_or_invalid(raw, field, line_number),
    }
}

/// Parses a non-negative decimal, accepting plain and scientific notation.
///
/// The accepted syntax is an optional sign, digits with an optional decimal
/// point, and an optional `e`/`E` exponent. Values that cannot be held
/// exactly are rejected rather than rounded. Blank handling matches
/// [`parse_int_abs_field`].
pub fn parse_decimal_abs_field(
    raw: &str,
    field: &FieldSchema,
    line_number: usize,
) -> FieldResult<Option<Decimal>> {
    let parsed = parse_exact_decimal(raw).filter(|value| *value >= Decimal::ZERO);

    match parsed {
        Some(value) => Ok(Some(value)),
        None => blank_or_invalid(raw, field, line_number),
    }
}

/// Largest number of digits a [`Decimal`] mantissa can hold.
const MAX_DECIMAL_DIGITS: usize = 29;

fn parse_exact_decimal(raw: &str) -> Option<Decimal> {
    let (negative, unsigned) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], parse_exponent(&unsigned[at + 1..])?),
        None => (unsigned, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
        return None;
    }

    // Shift the exponent into the scale, then drop zeros that carry no value.
    let mut digits = format!("{}{}", integer, fraction);
    let mut scale = fraction.len() as i64 - exponent;
    while scale > 0 && digits.ends_with('0') {
        digits.pop();
        scale -= 1;
    }
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    let plain = if scale <= 0 {
        let zeros = usize::try_from(-scale).ok()?;
        if digits.len() + zeros > MAX_DECIMAL_DIGITS {
            return None;
        }
        format!("{}{}", digits, "0".repeat(zeros))
    } else {
        let scale = usize::try_from(scale).ok()?;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fractional) = padded.split_at(padded.len() - scale);
        format!("{}.{}", whole, fractional)
    };

    let value = Decimal::from_str_exact(&plain).ok()?;
    Some(if negative { -value } else { value })
}

fn parse_exponent(raw: &str) -> Option<i64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().map(i64::from)
}

fn blank_or_invalid<T>(raw: &str, field: &FieldSchema, line_number: usize) -> FieldResult<Option<T>> {
    if raw.trim().is_empty() && !field.required {
        Ok(None)
    } else {
        Err(invalid_field(raw, field, line_number))
    }
}

fn invalid_field(raw: &str, field: &FieldSchema, line_number: usize) -> ValidationError {
    ValidationError::new(
        ValidationErrorType::InvalidField,
        format!(
            "Invalid value [{}] for field [{}] on line {}",
            raw, field.name, line_number
        ),
    )
}
