//! Scoring weights and per-candidate validation for date resolution
//!
//! A candidate is one assignment of the three split fields to the day, month
//! and year roles. Its priority is a weighted sum of small integer bonuses;
//! the weights fix the precedence of the evidence:
//!
//! 1. separators that landed where the user typed them (`SEPARATOR_WEIGHT`)
//! 2. a day field one or two digits long (`DAY_LENGTH_WEIGHT`)
//! 3. the conventional day-month-year role order (`ROLE_ORDER_WEIGHT`)
//! 4. a month field one or two digits long (`MONTH_LENGTH_WEIGHT`)
//! 5. a year field one, two or four digits long (`YEAR_LENGTH_WEIGHT`)

use chrono::{Datelike, NaiveDate};

/// Weight per separator anchor hit
pub const SEPARATOR_WEIGHT: i32 = 1000;
/// Weight of the role-order bonus
pub const ROLE_ORDER_WEIGHT: i32 = 50;
/// Weight of the day-length bonus
pub const DAY_LENGTH_WEIGHT: i32 = 100;
/// Weight of the month-length bonus
pub const MONTH_LENGTH_WEIGHT: i32 = 30;
/// Weight of the year-length bonus
pub const YEAR_LENGTH_WEIGHT: i32 = 10;

/// Resolved years must be strictly greater than this
pub const MIN_YEAR: i64 = 1950;
/// Resolved years must be strictly less than this
pub const MAX_YEAR: i64 = 2050;

/// Two-digit years below this land in the 2000s, the rest in the 1900s
const CENTURY_PIVOT: i64 = 50;

/// One contiguous piece of the digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Parsed value; 0 for an empty field
    pub value: u32,
    /// Number of digits the field spans
    pub len: usize,
}

impl Field {
    /// Parse a digit-only slice.
    ///
    /// Overflow saturates to `u32::MAX`, which is out of range for every role.
    pub fn parse(digits: &str) -> Self {
        let value = if digits.is_empty() {
            0
        } else {
            digits.parse().unwrap_or(u32::MAX)
        };
        Self {
            value,
            len: digits.len(),
        }
    }
}

/// Which split field plays each role, and how much that order is preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleOrder {
    /// Index of the split field read as the day
    pub day: usize,
    /// Index of the split field read as the month
    pub month: usize,
    /// Index of the split field read as the year
    pub year: usize,
    /// Preference for this order, scaled by `ROLE_ORDER_WEIGHT`
    pub bonus: i32,
}

const fn order(day: usize, month: usize, year: usize, bonus: i32) -> RoleOrder {
    RoleOrder {
        day,
        month,
        year,
        bonus,
    }
}

/// Role orders in evaluation order, most preferred first.
///
/// Evaluation order breaks ties, so the order of this table is observable.
pub const ROLE_ORDERS: [RoleOrder; 6] = [
    order(0, 1, 2, 6), // d m y
    order(1, 0, 2, 5), // m d y
    order(2, 1, 0, 4), // y m d
    order(2, 0, 1, 3), // m y d
    order(1, 2, 0, 2), // y d m
    order(0, 2, 1, 1), // d y m
];

/// A validated date with its priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The calendar date this reading produces
    pub date: NaiveDate,
    /// Weighted score; higher wins, the earlier candidate wins ties
    pub priority: i32,
}

/// Length bonus: the digit count itself when it is a plausible width, else 0
fn length_bonus(len: usize, plausible: &[usize]) -> i32 {
    if plausible.contains(&len) {
        len as i32
    } else {
        0
    }
}

/// Expand a two-digit year around the century pivot
fn expand_year(year: i64) -> i64 {
    if year >= 100 {
        year
    } else if year < CENTURY_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

/// Validate one role assignment and compute its priority.
///
/// Zero fields default to the matching component of `today`. Length bonuses
/// are taken from the fields as split, before defaulting. Returns `None` when
/// the assignment is not a real calendar date inside the year window.
pub fn evaluate(
    fields: &[Field; 3],
    order: &RoleOrder,
    separator_hits: i32,
    today: NaiveDate,
) -> Option<Candidate> {
    let (day, month, year) = (fields[order.day], fields[order.month], fields[order.year]);

    let day_bonus = length_bonus(day.len, &[1, 2]);
    let month_bonus = length_bonus(month.len, &[1, 2]);
    let year_bonus = length_bonus(year.len, &[1, 2, 4]);

    let d = if day.value == 0 { today.day() } else { day.value };
    let m = if month.value == 0 { today.month() } else { month.value };
    let y = if year.value == 0 {
        i64::from(today.year())
    } else {
        i64::from(year.value)
    };
    let y = expand_year(y);

    if y > MAX_YEAR || y < MIN_YEAR || m > 12 || d > 31 {
        return None;
    }

    // chrono rejects rather than normalizes out-of-month days, so a built
    // date always echoes its inputs
    let date = NaiveDate::from_ymd_opt(y as i32, m, d)?;
    let y = i64::from(date.year());
    if y <= MIN_YEAR || y >= MAX_YEAR {
        return None;
    }

    let priority = separator_hits * SEPARATOR_WEIGHT
        + order.bonus * ROLE_ORDER_WEIGHT
        + day_bonus * DAY_LENGTH_WEIGHT
        + month_bonus * MONTH_LENGTH_WEIGHT
        + year_bonus * YEAR_LENGTH_WEIGHT;

    Some(Candidate { date, priority })
}
