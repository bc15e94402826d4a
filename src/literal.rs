//! Render values as text that can be spliced into SQL statements
//!
//! Numbers use `.` as the decimal point with no group separators; dates use
//! the ISO basic (compact) form; booleans are `1`/`0`.

use crate::collection::collection_to_str;
use crate::error::{ConvertError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of fractional digits a `Decimal` can carry
const MAX_DECIMAL_SCALE: i32 = 28;

/// Largest number of fractional digits rendered for an `f64`
const MAX_FLOAT_SCALE: i32 = 340;

/// Render a decimal for SQL.
///
/// Produces the value's own representation and the value rounded (midpoint
/// away from zero) to `scale` places, keeps the longer of the two and trims
/// it: trailing fractional zeros, a dangling `.` and leading integer zeros
/// are removed. A negative `scale` is treated as 0.
///
/// ```
/// use rust_decimal::Decimal;
/// use sqlconvert::decimal_to_sql_literal;
///
/// assert_eq!(decimal_to_sql_literal(Decimal::new(12_500, 3), 2), "12.5");
/// assert_eq!(decimal_to_sql_literal(Decimal::new(-7, 0), 4), "-7");
/// ```
pub fn decimal_to_sql_literal(value: Decimal, scale: i32) -> String {
    let scale = scale.clamp(0, MAX_DECIMAL_SCALE) as u32;
    let full = value.to_string();
    if scale == 0 {
        return trim_number(&full);
    }

    let mut scaled = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(scale);
    let scaled = scaled.to_string();

    trim_number(if full.len() > scaled.len() { &full } else { &scaled })
}

/// Render an optional decimal as initial-value text.
///
/// When rounding to `scale` places leaves the value unchanged it is shown
/// with exactly `scale` fractional digits (its own representation for scale
/// 0). Otherwise, and for `None`, the shortest exact form is used: trailing
/// zeros dropped, scientific notation (`1.2E-06`) below `1E-05`. `scale` is
/// clamped to `0..=28`.
///
/// ```
/// use rust_decimal::Decimal;
/// use sqlconvert::decimal_to_init_str;
///
/// assert_eq!(decimal_to_init_str(Some(Decimal::new(15, 1)), 2), "1.50");
/// assert_eq!(decimal_to_init_str(Some(Decimal::new(1234, 3)), 2), "1.234");
/// assert_eq!(decimal_to_init_str(None, 2), "0");
/// ```
pub fn decimal_to_init_str(value: Option<Decimal>, scale: i32) -> String {
    let scale = scale.clamp(0, MAX_DECIMAL_SCALE) as u32;
    let Some(value) = value else {
        return general_text(Decimal::ZERO);
    };

    if value.round_dp(scale) != value {
        return general_text(value);
    }
    if scale == 0 {
        return value.to_string();
    }

    let mut padded = value;
    padded.rescale(scale);
    padded.to_string()
}

/// Shortest exact text of a decimal, switching to `dE-XX` below `1E-05`
fn general_text(value: Decimal) -> String {
    let value = value.normalize();
    let digits = value.mantissa().unsigned_abs().to_string();
    let exponent = digits.len() as i64 - 1 - i64::from(value.scale());
    if value.is_zero() || exponent >= -5 {
        return value.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let (lead, rest) = digits.split_at(1);
    let point = if rest.is_empty() { "" } else { "." };
    format!("{sign}{lead}{point}{rest}E-{:02}", -exponent)
}

/// Render a binary float for SQL, following the same rule as
/// [`decimal_to_sql_literal`]. The full representation is the shortest text
/// that round-trips.
pub fn f64_to_sql_literal(value: f64, scale: i32) -> String {
    let scale = scale.clamp(0, MAX_FLOAT_SCALE) as usize;
    let full = value.to_string();
    if scale == 0 {
        return trim_number(&full);
    }

    let scaled = format!("{value:.scale$}");
    trim_number(if full.len() > scaled.len() { &full } else { &scaled })
}

/// Strip trailing fractional zeros, a dangling point, and redundant leading zeros
fn trim_number(text: &str) -> String {
    let mut text = text;
    if text.contains('.') {
        text = text.trim_end_matches('0');
        text = text.strip_suffix('.').unwrap_or(text);
    }

    let (sign, body) = match text.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", text),
    };
    let zeros = body.bytes().take_while(|&b| b == b'0').count();
    let int_digits = body.bytes().take_while(u8::is_ascii_digit).count();
    // keep at least one integer digit
    let strip = zeros.min(int_digits.saturating_sub(1));

    format!("{sign}{}", &body[strip..])
}

/// `YYYYMMDD`
pub fn date_to_iso_compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDDHHMMSS`, or `YYYYMMDD` when the time is midnight
pub fn datetime_to_iso_compact(value: NaiveDateTime) -> String {
    let text = value.format("%Y%m%d%H%M%S").to_string();
    match text.strip_suffix("000000") {
        Some(date) => date.to_string(),
        None => text,
    }
}

/// `"1"` for true, `"0"` for false
pub fn bool_to_digit_char(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// `1` for true, `0` for false
pub fn bool_to_byte(value: bool) -> u8 {
    u8::from(value)
}

/// Render a second count as `H:MM:SS`; hours are neither padded nor wrapped
pub fn seconds_to_time_format(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Pack a `major.minor[.build[.revision]]` version into one integer.
///
/// Major, minor and build are each right-padded with zeros to six digits and
/// summed; the revision is added as is. Missing components count as 0,
/// unlike .NET `Version`, where an absent build or revision is -1 and so
/// `"1.2"` packs to 289999 there instead of 300000.
///
/// ```
/// use sqlconvert::version_to_int;
///
/// assert_eq!(version_to_int("1.2.3.4").unwrap(), 100_000 + 200_000 + 300_000 + 4);
/// ```
pub fn version_to_int(version: &str) -> Result<i64> {
    let invalid = || ConvertError::InvalidVersion {
        input: version.to_string(),
    };

    let parts: Vec<&str> = version.trim().split('.').collect();
    if !(2..=4).contains(&parts.len()) {
        return Err(invalid());
    }

    let mut components = [0u32; 4];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
    }

    let [major, minor, build, revision] = components;
    let mut total = i64::from(revision);
    for component in [major, minor, build] {
        let padded = format!("{component:0<6}");
        total += padded.parse::<i64>().map_err(|_| invalid())?;
    }
    Ok(total)
}

/// Values that have a canonical SQL literal rendering
pub trait SqlLiteral {
    fn to_sql_literal(&self) -> String;
}

impl SqlLiteral for bool {
    fn to_sql_literal(&self) -> String {
        bool_to_digit_char(*self).to_string()
    }
}

impl SqlLiteral for Decimal {
    fn to_sql_literal(&self) -> String {
        decimal_to_sql_literal(*self, 0)
    }
}

impl SqlLiteral for f64 {
    fn to_sql_literal(&self) -> String {
        f64_to_sql_literal(*self, 0)
    }
}

impl SqlLiteral for f32 {
    fn to_sql_literal(&self) -> String {
        trim_number(&self.to_string())
    }
}

impl SqlLiteral for NaiveDate {
    fn to_sql_literal(&self) -> String {
        date_to_iso_compact(*self)
    }
}

impl SqlLiteral for NaiveDateTime {
    fn to_sql_literal(&self) -> String {
        datetime_to_iso_compact(*self)
    }
}

impl SqlLiteral for str {
    fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

impl SqlLiteral for String {
    fn to_sql_literal(&self) -> String {
        self.clone()
    }
}

impl<S: AsRef<str>> SqlLiteral for [S] {
    fn to_sql_literal(&self) -> String {
        collection_to_str(self)
    }
}

impl<S: AsRef<str>> SqlLiteral for Vec<S> {
    fn to_sql_literal(&self) -> String {
        collection_to_str(self)
    }
}
