// WHY: the single string primitive the modernization pipeline is built from
// Pure over strings; the only decision per match is the case of the first
// character of the matched span.

use regex_automata::meta::Regex;
use std::borrow::Cow;

/// Replace every non-overlapping match of `pattern` in `text` with `replacement`,
/// carrying over the case of the first matched character
///
/// An uppercase first character upper-cases the replacement's first character,
/// anything else lower-cases it; the rest of the replacement is emitted as
/// written. An empty replacement is a no-op and returns `text` untouched.
/// Returns `Cow::Borrowed` when nothing was replaced.
pub fn replace_case<'a>(text: &'a str, pattern: &Regex, replacement: &str) -> Cow<'a, str> {
    if replacement.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut matches = pattern.find_iter(text).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let upper = with_first_char(replacement, true);
    let lower = with_first_char(replacement, false);

    let mut result = String::with_capacity(text.len() + replacement.len());
    let mut last_end = 0;
    for mat in matches {
        result.push_str(&text[last_end..mat.start()]);
        let starts_upper = text[mat.range()]
            .chars()
            .next()
            .is_some_and(char::is_uppercase);
        result.push_str(if starts_upper { &upper } else { &lower });
        last_end = mat.end();
    }
    result.push_str(&text[last_end..]);

    Cow::Owned(result)
}

/// Re-case only the first character of `s`
pub fn with_first_char(s: &str, uppercase: bool) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if uppercase => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(key: &str) -> Regex {
        Regex::new(&format!(r"(?im)\b(?:{key})\b")).unwrap()
    }

    #[test]
    fn test_replace_case_preserves_leading_capital() {
        let pattern = word("thou");
        assert_eq!(replace_case("Thou art wise", &pattern, "you"), "You art wise");
        assert_eq!(replace_case("and thou art wise", &pattern, "you"), "and you art wise");
    }

    #[test]
    fn test_replace_case_lowercases_capitalized_replacement() {
        // A capitalized replacement still follows the match's case signal
        let pattern = word("lord");
        assert_eq!(replace_case("the lord said", &pattern, "Master"), "the master said");
        assert_eq!(replace_case("The Lord said", &pattern, "master"), "The Master said");
    }

    #[test]
    fn test_replace_case_multi_word_uses_single_signal() {
        let pattern = word("whence");
        assert_eq!(
            replace_case("Whence comest thou", &pattern, "from where"),
            "From where comest thou"
        );
        // Only the first character of the match counts, so an all-caps match
        // does not upper-case the whole replacement
        assert_eq!(replace_case("WHENCE", &pattern, "from where"), "From where");
    }

    #[test]
    fn test_replace_case_every_match() {
        let pattern = word("thee");
        assert_eq!(
            replace_case("Thee I bless, and thee I keep; THEE", &pattern, "you"),
            "You I bless, and you I keep; You"
        );
    }

    #[test]
    fn test_replace_case_respects_word_boundaries() {
        let pattern = word("art");
        assert_eq!(replace_case("thou art a party to art", &pattern, "are"), "thou are a party to are");
        assert_eq!(replace_case("smart start", &pattern, "are"), "smart start");
    }

    #[test]
    fn test_replace_case_no_match_borrows() {
        let pattern = word("thou");
        let text = "nothing archaic here";
        assert!(matches!(replace_case(text, &pattern, "you"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_case_empty_replacement_is_noop() {
        let pattern = word("thou");
        let result = replace_case("Thou art", &pattern, "");
        assert!(matches!(result, Cow::Borrowed("Thou art")));
    }

    #[test]
    fn test_replace_case_unicode_context() {
        let pattern = word("thou");
        assert_eq!(replace_case("«Thou» — thou…", &pattern, "you"), "«You» — you…");
    }

    #[test]
    fn test_with_first_char() {
        assert_eq!(with_first_char("you are", true), "You are");
        assert_eq!(with_first_char("You Are", false), "you Are");
        assert_eq!(with_first_char("éden", true), "Éden");
        assert_eq!(with_first_char("", true), "");
    }
}
