//! Runtime contraction table

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::rules::config::{ContractionConfig, FamilyConfig};
use crate::rules::keys_pattern;

/// Disambiguation family for an ambiguous contraction
///
/// A closed set: one handler exists per variant, tried in the fixed priority
/// negation > `'s` > `'d` > whatcha when classification could overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Family {
    /// "n't" contractions ("ain't")
    Negation,
    /// "'s" contractions ("it's", "what's")
    AposS,
    /// "'d" contractions ("I'd", "where'd")
    AposD,
    /// "whatcha"
    Whatcha,
}

impl From<FamilyConfig> for Family {
    fn from(config: FamilyConfig) -> Self {
        match config {
            FamilyConfig::Negation => Family::Negation,
            FamilyConfig::S => Family::AposS,
            FamilyConfig::D => Family::AposD,
            FamilyConfig::Whatcha => Family::Whatcha,
        }
    }
}

/// An ambiguous contraction's family and ordered candidate expansions
#[derive(Debug, Clone)]
pub struct AmbiguousEntry {
    /// Handling family
    pub family: Family,
    /// Candidate expansions; the first is the deterministic default
    pub candidates: Vec<String>,
}

/// Immutable contraction lookup tables, compiled once from configuration
#[derive(Debug, Clone)]
pub struct ContractionTable {
    unambiguous: HashMap<String, String>,
    ambiguous: HashMap<String, AmbiguousEntry>,
    pattern: Option<Regex>,
    wh_words: HashSet<String>,
    singular_pronouns: HashSet<String>,
    preference_adverbs: HashSet<String>,
    preference_verbs: HashSet<String>,
    whatcha_are_words: HashSet<String>,
    whatcha_have_words: HashSet<String>,
    elision_words: HashSet<String>,
}

impl ContractionTable {
    pub(crate) fn from_config(config: ContractionConfig) -> Result<Self, String> {
        let ambiguous: HashMap<String, AmbiguousEntry> = config
            .ambiguous
            .into_iter()
            .map(|entry| {
                (
                    entry.key,
                    AmbiguousEntry {
                        family: entry.family.into(),
                        candidates: entry.candidates,
                    },
                )
            })
            .collect();

        let pattern = keys_pattern(
            config
                .unambiguous
                .keys()
                .map(String::as_str)
                .chain(ambiguous.keys().map(String::as_str)),
        )?;

        let context = config.context;
        Ok(ContractionTable {
            unambiguous: config.unambiguous,
            ambiguous,
            pattern,
            wh_words: context.wh_words.into_iter().collect(),
            singular_pronouns: context.singular_pronouns.into_iter().collect(),
            preference_adverbs: context.preference_adverbs.into_iter().collect(),
            preference_verbs: context.preference_verbs.into_iter().collect(),
            whatcha_are_words: context.whatcha_are_words.into_iter().collect(),
            whatcha_have_words: context.whatcha_have_words.into_iter().collect(),
            elision_words: context.elision_words.into_iter().collect(),
        })
    }

    /// The single long form of an unambiguous contraction key.
    pub fn unambiguous(&self, key: &str) -> Option<&str> {
        self.unambiguous.get(key).map(String::as_str)
    }

    /// The ambiguous entry for a contraction key.
    pub fn ambiguous(&self, key: &str) -> Option<&AmbiguousEntry> {
        self.ambiguous.get(key)
    }

    /// The compiled pattern matching every known contraction, longest first.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Interrogative that can head an inverted question.
    pub fn is_wh_word(&self, lower: &str) -> bool {
        self.wh_words.contains(lower)
    }

    /// Third-person singular subject pronoun.
    pub fn is_singular_pronoun(&self, lower: &str) -> bool {
        self.singular_pronouns.contains(lower)
    }

    /// Adverb after "'d" that forces "would".
    pub fn is_preference_adverb(&self, lower: &str) -> bool {
        self.preference_adverbs.contains(lower)
    }

    /// Verb lemma after a wh-"'d" that forces "would".
    pub fn is_preference_verb(&self, lower: &str) -> bool {
        self.preference_verbs.contains(lower)
    }

    /// Word after "whatcha" implying "what are you".
    pub fn is_whatcha_are_word(&self, lower: &str) -> bool {
        self.whatcha_are_words.contains(lower)
    }

    /// Word after "whatcha" implying "what have you".
    pub fn is_whatcha_have_word(&self, lower: &str) -> bool {
        self.whatcha_have_words.contains(lower)
    }

    /// Elision set used by apostrophe-aware word splitting.
    pub fn elision_words(&self) -> &HashSet<String> {
        &self.elision_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ContractionTable {
        let config: ContractionConfig = toml::from_str(
            r#"
            [metadata]
            id = "contractions"
            name = "Contractions"

            [unambiguous]
            "can't" = "cannot"
            "can't've" = "cannot have"

            [[ambiguous]]
            key = "it's"
            family = "s"
            candidates = ["it is", "it has"]

            [context]
            wh_words = ["what", "where"]
            "#,
        )
        .unwrap();
        ContractionTable::from_config(config).unwrap()
    }

    #[test]
    fn test_longest_contraction_matched_first() {
        let table = table();
        let pattern = table.pattern().unwrap();
        let m = pattern.find("she can't've known").unwrap();
        assert_eq!(m.as_str(), "can't've");
    }

    #[test]
    fn test_pattern_matches_curly_apostrophes() {
        let table = table();
        let pattern = table.pattern().unwrap();
        assert!(pattern.is_match("it\u{2019}s"));
        assert!(pattern.is_match("IT'S"));
    }

    #[test]
    fn test_family_mapping() {
        let table = table();
        assert_eq!(table.ambiguous("it's").unwrap().family, Family::AposS);
        assert!(table.ambiguous("can't").is_none());
    }
}
