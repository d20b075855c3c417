//! Character-level helpers shared across the casing and contraction modules

use std::collections::HashSet;

/// Straight and curly apostrophe variants.
pub(crate) const APOSTROPHES: [char; 3] = ['\'', '\u{2019}', '\u{2018}'];

pub(crate) fn is_apostrophe(ch: char) -> bool {
    APOSTROPHES.contains(&ch)
}

/// Word characters for boundary checks (letters, digits, underscore).
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Convert curly quotes to their straight equivalents.
pub(crate) fn curly_to_straight(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Byte index of the first alphabetic character, if any.
pub(crate) fn first_alphabetic(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|(_, ch)| ch.is_alphabetic())
        .map(|(idx, _)| idx)
}

/// True when the first alphabetic character is uppercase.
pub(crate) fn starts_capitalized(text: &str) -> bool {
    text.chars()
        .find(|ch| ch.is_alphabetic())
        .is_some_and(|ch| ch.is_uppercase())
}

/// Change the case of the first alphabetic character, leaving the rest as-is.
pub(crate) fn set_first_alphabetic(text: &str, uppercase: bool) -> String {
    match first_alphabetic(text) {
        Some(idx) => {
            let ch = text[idx..].chars().next().expect("index from char_indices");
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..idx]);
            if uppercase {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            out.push_str(&text[idx + ch.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}

/// Uppercase the first alphabetic character of an already-lowercase word.
pub(crate) fn capitalize(lower: &str) -> String {
    set_first_alphabetic(lower, true)
}

/// True when the word contains both uppercase and lowercase letters.
pub(crate) fn is_mixed_case(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && word.chars().any(char::is_lowercase)
}

/// True when every alphabetic character is uppercase (and one exists).
pub(crate) fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when the first alphabetic character is uppercase and the remaining
/// alphabetic characters are lowercase.
pub(crate) fn is_title_word(word: &str) -> bool {
    let Some(idx) = first_alphabetic(word) else {
        return false;
    };
    let mut chars = word[idx..].chars();
    let first = chars.next().expect("first alphabetic exists");
    first.is_uppercase() && !chars.any(char::is_uppercase)
}

/// Remove apostrophes that sit inside a word, in an elision ("'em"), or in a
/// decade abbreviation ("'90s"), without touching single quotes.
pub(crate) fn remove_apostrophes(text: &str, elisions: &HashSet<String>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        if !is_apostrophe(ch) {
            out.push(ch);
            continue;
        }
        let prev_alpha = i > 0 && chars[i - 1].is_alphabetic();
        let next_alpha = chars.get(i + 1).is_some_and(|c| c.is_alphabetic());
        if prev_alpha && next_alpha {
            continue;
        }
        if follows_elision(&chars[i + 1..], elisions) || follows_decade(&chars[i + 1..]) {
            continue;
        }
        out.push(ch);
    }

    out
}

fn follows_elision(rest: &[char], elisions: &HashSet<String>) -> bool {
    let word: String = rest
        .iter()
        .take_while(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    !word.is_empty() && elisions.contains(&word)
}

fn follows_decade(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[0].is_ascii_digit()
        && rest[1].is_ascii_digit()
        && rest[2] == 's'
        && !rest.get(3).is_some_and(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elisions() -> HashSet<String> {
        ["em", "tis", "twas"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_curly_to_straight() {
        assert_eq!(curly_to_straight("it\u{2019}s \u{201C}fine\u{201D}"), "it's \"fine\"");
    }

    #[test]
    fn test_set_first_alphabetic_skips_punctuation() {
        assert_eq!(set_first_alphabetic("'twas", true), "'Twas");
        assert_eq!(set_first_alphabetic("123", true), "123");
    }

    #[test]
    fn test_remove_apostrophes_keeps_quotes() {
        let e = elisions();
        assert_eq!(remove_apostrophes("it's 'quoted'", &e), "its 'quoted'");
        assert_eq!(remove_apostrophes("'em and the '90s", &e), "em and the 90s");
    }

    #[test]
    fn test_title_word() {
        assert!(is_title_word("Hello"));
        assert!(is_title_word("'Twas"));
        assert!(!is_title_word("McDonald"));
        assert!(!is_title_word("HELLO"));
    }
}
