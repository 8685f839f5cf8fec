//! Locale-style title ordering for score ties.
//!
//! Approximates root-locale collation in three levels:
//! 1. base letters with diacritics stripped and case folded, where
//!    whitespace and punctuation sort before digits and digits before letters
//! 2. diacritics (unaccented first)
//! 3. case (lowercase first)

use std::cmp::{Ordering, Reverse};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed sort key for one title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TitleKey {
    primary: Vec<(CharClass, char)>,
    secondary: String,
    tertiary: Reverse<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Separator
        }
    }
}

impl TitleKey {
    pub fn new(title: &str) -> Self {
        let primary = title
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .map(|c| (CharClass::of(c), c))
            .collect();
        let secondary = title.nfd().flat_map(char::to_lowercase).collect();

        Self {
            primary,
            secondary,
            tertiary: Reverse(title.to_string()),
        }
    }
}

/// Title ordering used to break score ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleKey::new(a).cmp(&TitleKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple", "Banana")]
    #[case("banana", "Cherry")]
    #[case("Énergie physics", "Fusion physics")]
    #[case("école", "ecole 2")]
    #[case("energie", "énergie")]
    #[case("Math: intro", "Math1 intro")]
    #[case("Math intro", "Math1 intro")]
    #[case("Math 9", "Matha")]
    #[case("abc", "ABC")]
    fn test_orders_before(#[case] first: &str, #[case] second: &str) {
        assert_eq!(compare_titles(first, second), Ordering::Less);
        assert_eq!(compare_titles(second, first), Ordering::Greater);
    }

    #[test]
    fn test_equal_titles() {
        assert_eq!(compare_titles("Same", "Same"), Ordering::Equal);
        assert_eq!(TitleKey::new("Café"), TitleKey::new("Café"));
    }

    #[test]
    fn test_composed_and_decomposed_agree() {
        // U+00E9 vs "e" + U+0301
        let composed = TitleKey::new("caf\u{e9}");
        let decomposed = TitleKey::new("cafe\u{301}");
        assert_eq!(composed.primary, decomposed.primary);
        assert_eq!(composed.secondary, decomposed.secondary);
    }
}
