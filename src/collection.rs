//! Comma-joined lists and pattern-based list extraction

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Join items with `,`
pub fn collection_to_str<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Default extraction pattern: signed integers and identifier-like words
/// (Latin or Cyrillic), case-insensitive
pub fn default_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"(?i)-?\d+|[_a-z0-9]+|[_а-я0-9]+"))
}

/// Signed integers only
pub fn int_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"-?\d+"))
}

/// Collection keys: letters, digits and underscore, case-insensitive
pub fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"(?i)[A-ZА-Я0-9_]+"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// Extract list items from text with [`default_pattern`]
pub fn str_to_collection(text: &str) -> Vec<String> {
    str_to_collection_with(text, default_pattern())
}

/// Extract every match of `pattern`, dropping repeats but keeping first-seen order
pub fn str_to_collection_with(text: &str, pattern: &Regex) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_to_str() {
        assert_eq!(collection_to_str(["a", "b", "c"]), "a,b,c");
        assert_eq!(collection_to_str(Vec::<String>::new()), "");
        assert_eq!(collection_to_str(&vec!["x".to_string()]), "x");
    }

    #[test]
    fn test_str_to_collection_default() {
        assert_eq!(str_to_collection("12, -3; abc_1 12"), vec!["12", "-3", "abc_1"]);
        assert_eq!(str_to_collection("Код, код, КОД"), vec!["Код", "код", "КОД"]);
        assert!(str_to_collection(" ,;. ").is_empty());
    }

    #[test]
    fn test_str_to_collection_ints() {
        assert_eq!(
            str_to_collection_with("1,2,x,-4,2", int_pattern()),
            vec!["1", "2", "-4"]
        );
    }

    #[test]
    fn test_key_pattern() {
        assert!(key_pattern().is_match("Ключ_1"));
        assert_eq!(
            str_to_collection_with("a-b a", key_pattern()),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_custom_pattern_roundtrip() {
        let items = str_to_collection_with("7,8,9", int_pattern());
        assert_eq!(collection_to_str(&items), "7,8,9");
    }
}
