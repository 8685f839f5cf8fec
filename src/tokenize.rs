//! Query tokenization.

/// Splits text into lower-cased word tokens.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lower-casing) is
/// a separator. Empty tokens are dropped; order and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when `query` holds nothing but whitespace.
///
/// U+FEFF (byte order mark) also counts, matching ECMAScript `trim`.
pub fn is_blank(query: &str) -> bool {
    query.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A, B  C!", vec!["a", "b", "c"])]
    #[case("World War 2", vec!["world", "war", "2"])]
    #[case("essay-writing", vec!["essay", "writing"])]
    #[case("WW2", vec!["ww2"])]
    #[case("  leading and trailing  ", vec!["leading", "and", "trailing"])]
    fn test_tokenize(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    #[case("!?-_,")]
    fn test_no_tokens(#[case] input: &str) {
        assert!(tokenize(input).is_empty());
    }

    #[rstest]
    #[case("", true)]
    #[case(" \t\r\n", true)]
    #[case("\u{FEFF}", true)]
    #[case("\u{A0}\u{2003}\u{FEFF}", true)]
    #[case(" a ", false)]
    #[case("!!!", false)]
    fn test_is_blank(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_blank(input), expected);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(tokenize("war war WAR"), vec!["war", "war", "war"]);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        // Non-ASCII letters are not token characters, even after lower-casing.
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
        assert!(tokenize("日本").is_empty());
    }
}
