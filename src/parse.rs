//! Read values back from text
//!
//! Numbers follow one fixed convention: any whitespace (including no-break
//! space) is a digit-group separator and is ignored, and `,` is accepted as
//! the decimal point. Date/time text is the ISO basic (compact) form written
//! by [`crate::literal`].

use crate::error::{ConvertError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Width of a full `YYYYMMDDHHMMSS` value
const COMPACT_DATETIME_LEN: usize = 14;

/// Drop group separators and turn a decimal comma into a point
fn clean_number(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parse a decimal number.
///
/// ```
/// use rust_decimal::Decimal;
/// use sqlconvert::str_to_decimal;
///
/// assert_eq!(str_to_decimal("1 234,50").unwrap(), Decimal::new(123_450, 2));
/// ```
pub fn str_to_decimal(text: &str) -> Result<Decimal> {
    let cleaned = clean_number(text);
    let unsigned = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    let parsed = if unsigned.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(unsigned)
    } else {
        Decimal::from_str(unsigned)
    };

    parsed.map_err(|_| ConvertError::InvalidNumber {
        input: text.to_string(),
        target: "decimal",
    })
}

/// Parse a decimal number, returning `default` for empty text
pub fn str_to_decimal_or(text: &str, default: Decimal) -> Result<Decimal> {
    if text.is_empty() {
        return Ok(default);
    }
    str_to_decimal(text)
}

/// Parse a binary float under the same convention as [`str_to_decimal`]
pub fn str_to_f64(text: &str) -> Result<f64> {
    clean_number(text)
        .parse()
        .map_err(|_| ConvertError::InvalidNumber {
            input: text.to_string(),
            target: "f64",
        })
}

/// Parse a binary float, returning `default` for empty text
pub fn str_to_f64_or(text: &str, default: f64) -> Result<f64> {
    if text.is_empty() {
        return Ok(default);
    }
    str_to_f64(text)
}

/// Parse a 32-bit integer, `None` if the text is not one
pub fn str_to_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

fn field(text: &str, start: usize) -> Option<u32> {
    text.get(start..start + 2)?.parse().ok()
}

/// Parse an ISO-compact date/time.
///
/// An 8-character `HH:MM:SS` value is a time on `0001-01-01`. Anything else
/// is right-padded with zeros to `YYYYMMDDHHMMSS`, so `20201225` is midnight
/// of that day.
pub fn str_to_datetime(text: &str) -> Result<NaiveDateTime> {
    let invalid = || ConvertError::InvalidDateTime {
        input: text.to_string(),
    };

    if text.len() == 8 && text.find(':').is_some_and(|i| i > 0) {
        let time = NaiveTime::parse_from_str(text, "%H:%M:%S").map_err(|_| invalid())?;
        let min_date = NaiveDate::from_ymd_opt(1, 1, 1).ok_or_else(invalid)?;
        return Ok(min_date.and_time(time));
    }

    if text.len() > COMPACT_DATETIME_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let padded = format!("{text:0<width$}", width = COMPACT_DATETIME_LEN);

    let year: i32 = padded[..4].parse().map_err(|_| invalid())?;
    let date = field(&padded, 4)
        .zip(field(&padded, 6))
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(invalid)?;
    let time = field(&padded, 8)
        .zip(field(&padded, 10))
        .zip(field(&padded, 12))
        .and_then(|((hour, minute), second)| NaiveTime::from_hms_opt(hour, minute, second))
        .ok_or_else(invalid)?;

    Ok(date.and_time(time))
}

/// Parse an ISO-compact date/time, returning `default` for empty text
pub fn str_to_datetime_or(text: &str, default: NaiveDateTime) -> Result<NaiveDateTime> {
    if text.is_empty() {
        return Ok(default);
    }
    str_to_datetime(text)
}
