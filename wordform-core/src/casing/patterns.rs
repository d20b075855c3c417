//! Case-shape detection and camel/Pascal word splitting

use std::sync::OnceLock;

use regex::Regex;

/// Compiled patterns identifying programmatic case shapes
#[derive(Debug)]
pub(crate) struct CasePatterns {
    camel: Regex,
    pascal: Regex,
    snake: Regex,
    kebab: Regex,
    dot: Regex,
}

pub(crate) fn case_patterns() -> &'static CasePatterns {
    static PATTERNS: OnceLock<CasePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CasePatterns {
        camel: Regex::new(r"^[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*$").expect("camel pattern"),
        pascal: Regex::new(r"^[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*$").expect("pascal pattern"),
        snake: Regex::new(r"^_?[A-Za-z][A-Za-z0-9]*(?:_[A-Za-z0-9]+)+$").expect("snake pattern"),
        kebab: Regex::new(r"^[A-Za-z][A-Za-z0-9]*(?:-[A-Za-z0-9]+)+$").expect("kebab pattern"),
        dot: Regex::new(r"^[A-Za-z][A-Za-z0-9]*(?:\.[A-Za-z0-9]+)+$").expect("dot pattern"),
    })
}

impl CasePatterns {
    pub(crate) fn is_camel(&self, word: &str) -> bool {
        self.camel.is_match(word)
    }

    pub(crate) fn is_pascal(&self, word: &str) -> bool {
        self.pascal.is_match(word)
    }

    pub(crate) fn is_snake(&self, word: &str) -> bool {
        self.snake.is_match(word)
    }

    pub(crate) fn is_kebab(&self, word: &str) -> bool {
        self.kebab.is_match(word)
    }

    pub(crate) fn is_dot(&self, word: &str) -> bool {
        self.dot.is_match(word)
    }

    /// True when the word is in any separator case other than the one named
    /// by `separator`.
    pub(crate) fn is_other_separator_case(&self, word: &str, separator: char) -> bool {
        let shapes: [(char, bool); 3] = [
            ('_', self.is_snake(word)),
            ('-', self.is_kebab(word)),
            ('.', self.is_dot(word)),
        ];
        shapes.iter().any(|&(sep, matched)| sep != separator && matched)
    }
}

/// Split a camel or Pascal word into constituent words.
///
/// Boundaries: lowercase to uppercase, the end of an uppercase acronym run,
/// and letter/digit transitions. "URLSuffix" splits to ["URL", "Suffix"].
pub(crate) fn split_camel_pascal(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !current.is_empty() && is_split_boundary(&chars, i) {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_split_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let curr = chars[i];

    // Lowercase to uppercase.
    if prev.is_lowercase() && curr.is_uppercase() {
        return true;
    }
    // End of an acronym: uppercase followed by uppercase-then-lowercase.
    if prev.is_uppercase()
        && curr.is_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
    {
        return true;
    }
    // Letter/digit transitions.
    if prev.is_alphabetic() && curr.is_ascii_digit() {
        return true;
    }
    if prev.is_ascii_digit() && curr.is_alphabetic() {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_detection() {
        let patterns = case_patterns();
        assert!(patterns.is_camel("camelWord"));
        assert!(!patterns.is_camel("lowercase"));
        assert!(patterns.is_pascal("PascalWord"));
        assert!(!patterns.is_pascal("HTML"));
        assert!(patterns.is_snake("snake_word"));
        assert!(patterns.is_kebab("kebab-word"));
        assert!(patterns.is_dot("dot.word"));
    }

    #[test]
    fn test_other_separator_case() {
        let patterns = case_patterns();
        assert!(patterns.is_other_separator_case("snake_word", '-'));
        assert!(!patterns.is_other_separator_case("snake_word", '_'));
        assert!(!patterns.is_other_separator_case("plain", '-'));
    }

    #[test]
    fn test_split_camel_pascal() {
        assert_eq!(split_camel_pascal("camelWord"), vec!["camel", "Word"]);
        assert_eq!(split_camel_pascal("URLSuffix"), vec!["URL", "Suffix"]);
        assert_eq!(split_camel_pascal("utf8Codec"), vec!["utf", "8", "Codec"]);
        assert_eq!(split_camel_pascal("plain"), vec!["plain"]);
    }
}
