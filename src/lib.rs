//! # sqlconvert
//!
//! Value conversions tuned for SQL literal text, plus recovery of a calendar
//! date from ambiguous, loosely-delimited input.
//!
//! The date resolver does not need to know the field order. `05.12.2020`,
//! `051220`, `13-05-21` and `20201225` all resolve: every way of cutting the
//! digits into three fields is tried under every day/month/year order, each
//! reading is scored, and the best-scoring valid date wins.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sqlconvert::{date_to_iso_compact, parse_date};
//!
//! let date = parse_date("05.12.2020").unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2020, 12, 5).unwrap());
//! assert_eq!(date_to_iso_compact(date), "20201205");
//! ```

mod collection;
mod error;
mod literal;
mod normalizer;
mod parse;
mod resolver;
mod round;
mod scoring;

pub use collection::{
    collection_to_str, default_pattern, int_pattern, key_pattern, str_to_collection,
    str_to_collection_with,
};
pub use error::{ConvertError, Result};
pub use literal::{
    bool_to_byte, bool_to_digit_char, date_to_iso_compact, datetime_to_iso_compact,
    decimal_to_init_str, decimal_to_sql_literal, f64_to_sql_literal, seconds_to_time_format, version_to_int,
    SqlLiteral,
};
pub use parse::{
    str_to_datetime, str_to_datetime_or, str_to_decimal, str_to_decimal_or, str_to_f64,
    str_to_f64_or, str_to_int,
};
pub use round::{round_decimal, round_f32, round_f64};

use chrono::{Local, NaiveDate};
use normalizer::normalize;
use resolver::resolve;
use tracing::debug;

/// Configuration options for date resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Date whose day, month and year fill in fields that are missing or
    /// zero (default: the local date at call time)
    pub reference_date: Option<NaiveDate>,
}

impl ResolveOptions {
    /// Options with a fixed reference date
    pub fn with_reference_date(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Resolve a date from loosely-delimited text.
///
/// # Arguments
///
/// * `input` - Any text; non-digits act as separators
///
/// # Returns
///
/// * `Ok(NaiveDate)` - The best-scoring valid reading, with a year in
///   1951..=2049
/// * `Err(ConvertError::EmptyDate)` - No digits, or only zeros
/// * `Err(ConvertError::NoValidFormat)` - No reading is a valid date
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sqlconvert::parse_date;
///
/// assert_eq!(parse_date("13-05-21").unwrap(), NaiveDate::from_ymd_opt(2021, 5, 13).unwrap());
/// assert!(parse_date("n/a").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_date_with_options(input, &ResolveOptions::default())
}

/// Resolve a date with custom options.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sqlconvert::{parse_date_with_options, ResolveOptions};
///
/// let options = ResolveOptions::with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// // day only: month and year come from the reference date
/// let date = parse_date_with_options("15", &options).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// ```
pub fn parse_date_with_options(input: &str, options: &ResolveOptions) -> Result<NaiveDate> {
    let normalized = normalize(input).map_err(|e| {
        debug!(input, "no digits to resolve");
        e
    })?;

    match resolve(&normalized, options.today()) {
        Some(best) => {
            debug!(input, date = %best.date, priority = best.priority, "resolved date");
            Ok(best.date)
        }
        None => {
            debug!(input, digits = %normalized.digits, "no valid date reading");
            Err(ConvertError::NoValidFormat {
                input: input.to_string(),
            })
        }
    }
}

#[cfg(feature = "python")]
mod python;
