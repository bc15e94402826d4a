//! Exhaustive search for the best reading of a normalized date
//!
//! Every way of cutting the digit run into three contiguous (possibly empty)
//! fields is tried, and every split is scored under all six role orders. The
//! highest priority wins; on equal priority the first candidate found is kept,
//! so the enumeration order below is part of the observable behavior:
//! outer cut `i` from `len` down to 0, inner cut `j` from `len` down to 0,
//! then [`ROLE_ORDERS`] in table order.

use crate::normalizer::NormalizedDigits;
use crate::scoring::{evaluate, Candidate, Field, ROLE_ORDERS};
use chrono::NaiveDate;
use tracing::trace;

/// Cut `digits` at `lo` and `hi` (`lo <= hi`) into three fields
fn split_fields(digits: &str, lo: usize, hi: usize) -> [Field; 3] {
    [
        Field::parse(&digits[..lo]),
        Field::parse(&digits[lo..hi]),
        Field::parse(&digits[hi..]),
    ]
}

/// 1 if `cut` sits on the user's separator, ignoring cuts at either end
fn anchor_hit(cut: usize, anchor: Option<usize>, len: usize) -> i32 {
    i32::from(anchor == Some(cut) && cut != 0 && cut != len)
}

/// Best candidate seen so far; replaced only on strict improvement
#[derive(Debug, Default)]
struct Best(Option<Candidate>);

impl Best {
    fn offer(&mut self, candidate: Candidate) -> bool {
        let improves = self
            .0
            .map_or(true, |best| candidate.priority > best.priority);
        if improves {
            self.0 = Some(candidate);
        }
        improves
    }
}

/// Find the highest-priority valid candidate, or `None` if nothing validates.
///
/// `today` supplies day, month and year for fields that parse as zero.
pub fn resolve(normalized: &NormalizedDigits, today: NaiveDate) -> Option<Candidate> {
    let digits = normalized.digits.as_str();
    let len = digits.len();
    let mut best = Best::default();

    for i in (0..=len).rev() {
        for j in (0..=len).rev() {
            let fields = split_fields(digits, i.min(j), i.max(j));
            let separator_hits = anchor_hit(i, normalized.first_anchor, len)
                + anchor_hit(j, normalized.second_anchor, len);

            for order in &ROLE_ORDERS {
                let Some(candidate) = evaluate(&fields, order, separator_hits, today) else {
                    continue;
                };
                if best.offer(candidate) {
                    trace!(
                        i,
                        j,
                        role_bonus = order.bonus,
                        priority = candidate.priority,
                        date = %candidate.date,
                        "new best date candidate"
                    );
                }
            }
        }
    }

    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn resolve_str(input: &str) -> Option<Candidate> {
        resolve(&normalize(input).unwrap(), today())
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_split_fields() {
        let f = split_fields("05122020", 2, 4);
        assert_eq!([f[0].value, f[1].value, f[2].value], [5, 12, 2020]);
        assert_eq!([f[0].len, f[1].len, f[2].len], [2, 2, 4]);

        // equal cuts leave the middle field empty
        let f = split_fields("1225", 2, 2);
        assert_eq!([f[0].value, f[1].value, f[2].value], [12, 0, 25]);
        assert_eq!(f[1].len, 0);

        let f = split_fields("1225", 0, 4);
        assert_eq!([f[0].len, f[1].len, f[2].len], [0, 4, 0]);
    }

    #[test]
    fn test_anchor_hit_ignores_ends() {
        assert_eq!(anchor_hit(2, Some(2), 8), 1);
        assert_eq!(anchor_hit(3, Some(2), 8), 0);
        assert_eq!(anchor_hit(0, Some(0), 8), 0);
        assert_eq!(anchor_hit(8, Some(8), 8), 0);
        assert_eq!(anchor_hit(2, None, 8), 0);
    }

    #[test]
    fn test_best_keeps_first_on_tie() {
        let mut best = Best::default();
        assert!(best.offer(Candidate { date: ymd(2020, 1, 1), priority: 10 }));
        assert!(!best.offer(Candidate { date: ymd(2021, 1, 1), priority: 10 }));
        assert!(!best.offer(Candidate { date: ymd(2022, 1, 1), priority: 5 }));
        assert!(best.offer(Candidate { date: ymd(2023, 1, 1), priority: 11 }));
        assert_eq!(best.0.unwrap().date, ymd(2023, 1, 1));
    }

    #[test]
    fn test_separators_dominate() {
        let c = resolve_str("05.12.2020").unwrap();
        assert_eq!(c.date, ymd(2020, 12, 5));
        assert_eq!(c.priority, 2600);
    }

    #[test]
    fn test_compact_four_digit_year() {
        let c = resolve_str("20201225").unwrap();
        assert_eq!(c.date, ymd(2020, 12, 25));
        assert_eq!(c.priority, 500);
    }

    #[test]
    fn test_day_above_twelve_forces_day_first() {
        let c = resolve_str("13-05-21").unwrap();
        assert_eq!(c.date, ymd(2021, 5, 13));
        assert_eq!(c.priority, 2580);
    }

    #[test]
    fn test_day_length_outweighs_role_order() {
        // two-digit 12 as day beats one-digit 5 as day
        assert_eq!(resolve_str("5-12-20").unwrap().date, ymd(2020, 5, 12));
        assert_eq!(resolve_str("12.5.2020").unwrap().date, ymd(2020, 5, 12));
    }

    #[test]
    fn test_compact_two_digit_year() {
        assert_eq!(resolve_str("051220").unwrap().date, ymd(2020, 12, 5));
        assert_eq!(resolve_str("311299").unwrap().date, ymd(1999, 12, 31));
    }

    #[test]
    fn test_no_candidate() {
        assert!(resolve_str("99999999").is_none());
        assert!(resolve_str("29.02.2021").is_none());
        assert!(resolve_str("31.04.2021").is_none());
        assert!(resolve_str("2050-01-01").is_none());
        assert!(resolve_str("123456789012345678901234").is_none());
    }

    #[test]
    fn test_enumeration_order_breaks_ties() {
        // each input has equal-priority readings reached from different cuts;
        // the descending i, then descending j, walk decides which is kept
        assert_eq!(resolve_str("301300").unwrap().date, ymd(2030, 10, 13));
        assert_eq!(resolve_str("331030").unwrap().date, ymd(2033, 10, 30));
        assert_eq!(resolve_str("301312").unwrap().date, ymd(2030, 12, 13));
    }

    #[test]
    fn test_partial_dates_default_to_today() {
        assert_eq!(resolve_str("12").unwrap().date, ymd(2026, 10, 12));
        assert_eq!(resolve_str("07.03").unwrap().date, ymd(2026, 3, 7));
    }
}
