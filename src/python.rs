//! Python bindings for sqlconvert via PyO3

use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::{parse_date_with_options, ConvertError, ResolveOptions};

fn to_py_err(e: ConvertError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Resolve a date from loosely-delimited text.
///
/// Args:
///     text: Date text with any (or no) separators, e.g. "05.12.2020", "051220"
///     reference_date: Date used for missing fields (default: today)
///
/// Returns:
///     datetime.date
///
/// Raises:
///     ValueError: If the text holds no date or no valid reading exists
///
/// Example:
///     >>> import sqlconvert
///     >>> sqlconvert.parse_date("13-05-21")
///     datetime.date(2021, 5, 13)
#[pyfunction]
#[pyo3(signature = (text, reference_date=None))]
fn parse_date(text: &str, reference_date: Option<NaiveDate>) -> PyResult<NaiveDate> {
    let options = ResolveOptions { reference_date };
    parse_date_with_options(text, &options).map_err(to_py_err)
}

/// Resolve many dates in parallel.
///
/// Args:
///     texts: List of date strings
///     reference_date: Date used for missing fields (default: today)
///
/// Returns:
///     List of datetime.date, in input order
///
/// Raises:
///     ValueError: On the first text that cannot be resolved
#[pyfunction]
#[pyo3(signature = (texts, reference_date=None))]
fn parse_dates(
    py: Python<'_>,
    texts: Vec<String>,
    reference_date: Option<NaiveDate>,
) -> PyResult<Vec<NaiveDate>> {
    let options = ResolveOptions { reference_date };
    py.allow_threads(|| {
        texts
            .par_iter()
            .map(|text| parse_date_with_options(text, &options))
            .collect::<crate::Result<Vec<_>>>()
    })
    .map_err(to_py_err)
}

/// Render a decimal.Decimal as SQL literal text.
#[pyfunction]
#[pyo3(signature = (value, scale=0))]
fn decimal_to_sql_literal(value: Decimal, scale: i32) -> String {
    crate::decimal_to_sql_literal(value, scale)
}

/// Render an optional decimal.Decimal as initial-value text.
#[pyfunction]
#[pyo3(signature = (value, scale=0))]
fn decimal_to_init_str(value: Option<Decimal>, scale: i32) -> String {
    crate::decimal_to_init_str(value, scale)
}

/// Render a date as YYYYMMDD.
#[pyfunction]
fn date_to_iso_compact(date: NaiveDate) -> String {
    crate::date_to_iso_compact(date)
}

/// Render a bool as "1" or "0".
#[pyfunction]
fn bool_to_digit_char(value: bool) -> &'static str {
    crate::bool_to_digit_char(value)
}

/// SQL literal conversions and ambiguous date resolution.
///
/// Example:
///     >>> import sqlconvert
///     >>> sqlconvert.parse_date("20201225")
///     datetime.date(2020, 12, 25)
///     >>> sqlconvert.date_to_iso_compact(sqlconvert.parse_date("05.12.2020"))
///     '20201205'
#[pymodule]
fn sqlconvert(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_date, m)?)?;
    m.add_function(wrap_pyfunction!(parse_dates, m)?)?;
    m.add_function(wrap_pyfunction!(decimal_to_sql_literal, m)?)?;
    m.add_function(wrap_pyfunction!(decimal_to_init_str, m)?)?;
    m.add_function(wrap_pyfunction!(date_to_iso_compact, m)?)?;
    m.add_function(wrap_pyfunction!(bool_to_digit_char, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
