//! Normalizer for loosely-delimited date strings
//!
//! Reduces arbitrary text to a single run of ASCII digits and remembers where
//! the user's own punctuation fell. Every non-digit character counts as a
//! separator; runs of separators collapse to one and leading/trailing ones
//! are dropped.

use crate::error::{ConvertError, Result};
use smallvec::SmallVec;

/// Digit runs of a typical date string (inline up to 4 runs, no heap allocation)
type DigitRuns<'a> = SmallVec<[&'a str; 4]>;

/// A date string reduced to digits plus the positions of its separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDigits {
    /// ASCII digits only, never empty and never all zeros
    pub digits: String,
    /// Index in `digits` where the first separator stood
    pub first_anchor: Option<usize>,
    /// Index in `digits` where the second separator stood
    pub second_anchor: Option<usize>,
}

/// Normalize a raw date string.
///
/// Anchors are measured in digit-string coordinates: the first anchor is the
/// length of the first digit run, the second is the combined length of the
/// first two runs (the first separator no longer occupies a position once
/// the runs are concatenated).
///
/// Fails with [`ConvertError::EmptyDate`] when no digits remain or all of
/// them are zero.
pub fn normalize(input: &str) -> Result<NormalizedDigits> {
    let runs: DigitRuns<'_> = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect();

    let digits = runs.concat();
    if digits.bytes().all(|b| b == b'0') {
        return Err(ConvertError::EmptyDate {
            input: input.to_string(),
        });
    }

    let first_anchor = (runs.len() > 1).then(|| runs[0].len());
    let second_anchor = (runs.len() > 2).then(|| runs[0].len() + runs[1].len());

    Ok(NormalizedDigits {
        digits,
        first_anchor,
        second_anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_dotted() {
        let n = normalize("05.12.2020").unwrap();
        assert_eq!(n.digits, "05122020");
        assert_eq!(n.first_anchor, Some(2));
        assert_eq!(n.second_anchor, Some(4));
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        let n = normalize("  13 -- 05 // 21 ").unwrap();
        assert_eq!(n.digits, "130521");
        assert_eq!(n.first_anchor, Some(2));
        assert_eq!(n.second_anchor, Some(4));
    }

    #[test]
    fn test_normalize_single_separator() {
        let n = normalize("12.5").unwrap();
        assert_eq!(n.digits, "125");
        assert_eq!(n.first_anchor, Some(2));
        assert_eq!(n.second_anchor, None);
    }

    #[test]
    fn test_normalize_no_separator() {
        let n = normalize("20201225").unwrap();
        assert_eq!(n.digits, "20201225");
        assert_eq!(n.first_anchor, None);
        assert_eq!(n.second_anchor, None);
    }

    #[test]
    fn test_normalize_non_ascii_text_is_separator() {
        let n = normalize("1 января 2021").unwrap();
        assert_eq!(n.digits, "12021");
        assert_eq!(n.first_anchor, Some(1));
        assert_eq!(n.second_anchor, None);
    }

    #[test]
    fn test_normalize_extra_runs_keep_first_two_anchors() {
        let n = normalize("1.2.3.4").unwrap();
        assert_eq!(n.digits, "1234");
        assert_eq!(n.first_anchor, Some(1));
        assert_eq!(n.second_anchor, Some(2));
    }

    #[test]
    fn test_normalize_empty() {
        for input in ["", "abcd", "..-//", "000", "0.0.0"] {
            assert!(
                matches!(normalize(input), Err(ConvertError::EmptyDate { .. })),
                "{input:?} should be empty"
            );
        }
    }

    #[test]
    fn test_normalize_error_keeps_input() {
        let err = normalize("n/a").unwrap_err();
        assert_eq!(err, ConvertError::EmptyDate { input: "n/a".to_string() });
    }

    proptest! {
        #[test]
        fn prop_digits_are_ascii_and_anchors_inside(input in "\\PC{0,24}") {
            if let Ok(n) = normalize(&input) {
                prop_assert!(n.digits.bytes().all(|b| b.is_ascii_digit()));
                prop_assert!(n.digits.bytes().any(|b| b != b'0'));
                if let Some(first) = n.first_anchor {
                    prop_assert!(first > 0 && first < n.digits.len());
                }
                if let Some(second) = n.second_anchor {
                    prop_assert!(second > n.first_anchor.unwrap_or(0) && second < n.digits.len());
                }
            }
        }

        #[test]
        fn prop_non_digit_text_is_empty(input in "[^0-9]{0,24}") {
            let is_empty_date = matches!(normalize(&input), Err(ConvertError::EmptyDate { .. }));
            prop_assert!(is_empty_date);
        }
    }
}
