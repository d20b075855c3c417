//! Runtime word-casing table

use std::collections::{HashMap, HashSet};

use crate::rules::config::CasingConfig;

/// Immutable word-casing lookup tables, compiled once from configuration
#[derive(Debug, Clone)]
pub struct CasingTable {
    absolute: HashMap<String, String>,
    lowercase_abbreviations: HashSet<String>,
    surname_prefixes: Vec<String>,
    prefix_exceptions: Vec<String>,
    prefix_overrides: HashMap<String, String>,
    suffix_exceptions: Vec<String>,
    minor_words: HashSet<String>,
}

impl CasingTable {
    pub(crate) fn from_config(config: CasingConfig) -> Self {
        let mut surname_prefixes = config.prefixes.surname;
        // Longest prefix first, so "mac" wins over "mc"-style overlaps.
        surname_prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let mut suffix_exceptions = config.suffixes.exceptions;
        suffix_exceptions.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        CasingTable {
            absolute: config.absolute,
            lowercase_abbreviations: config.abbreviations.lowercase.into_iter().collect(),
            surname_prefixes,
            prefix_exceptions: config.prefixes.exceptions,
            prefix_overrides: config.prefixes.overrides,
            suffix_exceptions,
            minor_words: config.title.minor_words.into_iter().collect(),
        }
    }

    /// Absolute casing for a lowercase key, trying the bare key, the key
    /// with a trailing period stripped, and a suffix-exception split whose
    /// base is in the map.
    pub fn absolute(&self, lower: &str) -> Option<String> {
        if let Some(mapped) = self.absolute.get(lower) {
            return Some(mapped.clone());
        }
        if let Some(bare) = lower.strip_suffix('.') {
            if let Some(mapped) = self.absolute.get(bare) {
                return Some(format!("{mapped}."));
            }
        }
        if let Some((base, suffix)) = self.split_suffix_exception(lower) {
            if let Some(mapped) = self.absolute.get(base) {
                return Some(format!("{mapped}{suffix}"));
            }
        }
        None
    }

    /// Iterate absolute-map entries (used by property tests).
    pub fn absolute_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.absolute.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Membership in the forced-lowercase abbreviation set, with any
    /// trailing period stripped.
    pub fn is_lowercase_abbreviation(&self, lower: &str) -> bool {
        self.lowercase_abbreviations
            .contains(lower.trim_end_matches('.'))
    }

    /// The surname prefix the word starts with, if any.
    pub fn surname_prefix(&self, lower: &str) -> Option<&str> {
        self.surname_prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| lower.starts_with(prefix) && lower.len() > prefix.len())
    }

    /// True when the word is (or extends) a known non-surname lookalike.
    pub fn is_prefix_exception(&self, lower: &str) -> bool {
        self.prefix_exceptions
            .iter()
            .any(|exception| lower == exception || lower.starts_with(exception.as_str()))
    }

    /// Irregular casing for a prefixed name.
    pub fn prefix_override(&self, lower: &str) -> Option<&str> {
        self.prefix_overrides.get(lower).map(String::as_str)
    }

    /// Split a trailing suffix-exception fragment off a lowercase word.
    pub fn split_suffix_exception<'a>(&self, lower: &'a str) -> Option<(&'a str, &'a str)> {
        for suffix in &self.suffix_exceptions {
            if lower.len() > suffix.len() && lower.ends_with(suffix.as_str()) {
                let split = lower.len() - suffix.len();
                return Some((&lower[..split], &lower[split..]));
            }
        }
        None
    }

    /// Minor-word membership for title case without tag information.
    pub fn is_minor_word(&self, lower: &str) -> bool {
        self.minor_words.contains(lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CasingTable {
        let config: CasingConfig = toml::from_str(
            r#"
            [metadata]
            id = "casing"
            name = "Word casing"

            [absolute]
            nasa = "NASA"
            ipad = "iPad"

            [abbreviations]
            lowercase = ["etc"]

            [prefixes]
            surname = ["mc", "mac", "o'"]
            exceptions = ["macabre", "mace"]

            [prefixes.overrides]
            macy = "Macy"

            [suffixes]
            exceptions = ["s", "like"]

            [title]
            minor_words = ["the", "of"]
            "#,
        )
        .unwrap();
        CasingTable::from_config(config)
    }

    #[test]
    fn test_absolute_with_suffix_split() {
        let table = table();
        assert_eq!(table.absolute("nasa"), Some("NASA".to_string()));
        assert_eq!(table.absolute("ipads"), Some("iPads".to_string()));
        assert_eq!(table.absolute("nasa."), Some("NASA.".to_string()));
        assert_eq!(table.absolute("unknown"), None);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = table();
        assert_eq!(table.surname_prefix("macdonald"), Some("mac"));
        assert_eq!(table.surname_prefix("mcdonald"), Some("mc"));
        assert_eq!(table.surname_prefix("mac"), None);
    }

    #[test]
    fn test_prefix_exception_extends() {
        let table = table();
        assert!(table.is_prefix_exception("macabre"));
        assert!(table.is_prefix_exception("maces"));
        assert!(!table.is_prefix_exception("macdonald"));
    }

    #[test]
    fn test_lowercase_abbreviation_strips_period() {
        let table = table();
        assert!(table.is_lowercase_abbreviation("etc"));
        assert!(table.is_lowercase_abbreviation("etc."));
        assert!(!table.is_lowercase_abbreviation("nasa"));
    }
}
