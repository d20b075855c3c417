//! Runtime entity-casing table

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::rules::config::EntityConfig;
use crate::rules::keys_pattern;
use crate::text;

/// One context-gated casing rule
///
/// A rule with neither POS sequences nor n-grams matches unconditionally.
#[derive(Debug, Clone)]
pub struct ContextRule {
    /// Coarse POS sequences the entity span may match
    pub pos_sequences: Vec<Vec<String>>,
    /// N-grams searched around the entity
    pub ngrams: Vec<String>,
    /// Token window checked on each side
    pub context_window: usize,
    /// Casing applied when the rule matches
    pub casing: String,
}

/// A raw-text occurrence of a known entity key
#[derive(Debug, Clone)]
pub struct EntityMatch {
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
    /// Normalized lowercase key
    pub key: String,
}

/// Immutable entity-casing lookup tables, compiled once from configuration
#[derive(Debug, Clone)]
pub struct EntityTable {
    absolute: HashMap<String, String>,
    contextual: HashMap<String, Vec<ContextRule>>,
    particles: HashSet<String>,
    contraction_suffixes: Vec<String>,
    key_pattern: Option<Regex>,
}

impl EntityTable {
    pub(crate) fn from_config(config: EntityConfig) -> Result<Self, String> {
        let contextual: HashMap<String, Vec<ContextRule>> = config
            .contextual
            .into_iter()
            .map(|entity| {
                let rules = entity
                    .rules
                    .into_iter()
                    .map(|rule| ContextRule {
                        pos_sequences: rule.pos_sequences,
                        ngrams: rule.ngrams,
                        context_window: rule.context_window,
                        casing: rule.casing,
                    })
                    .collect();
                (entity.key, rules)
            })
            .collect();

        let key_pattern = keys_pattern(
            config
                .absolute
                .keys()
                .map(String::as_str)
                .chain(contextual.keys().map(String::as_str)),
        )?;

        Ok(EntityTable {
            absolute: config.absolute,
            contextual,
            particles: config.particles.lowercase.into_iter().collect(),
            contraction_suffixes: config.contractions.suffixes,
            key_pattern,
        })
    }

    /// Fixed casing for an entity key.
    pub fn absolute(&self, key: &str) -> Option<&str> {
        self.absolute.get(key).map(String::as_str)
    }

    /// Ordered context rules for an entity key.
    pub fn contextual(&self, key: &str) -> Option<&[ContextRule]> {
        self.contextual.get(key).map(Vec::as_slice)
    }

    /// Particle membership (lowercase except at entity start).
    pub fn is_particle(&self, lower: &str) -> bool {
        self.particles.contains(lower)
    }

    /// True when the word is an attached contraction suffix.
    pub fn is_contraction_suffix(&self, word: &str) -> bool {
        let normalized = text::curly_to_straight(word).to_lowercase();
        self.contraction_suffixes
            .iter()
            .any(|suffix| *suffix == normalized)
    }

    /// Scan raw text for entity-key occurrences, longest key first, with
    /// word boundaries verified around each match.
    pub fn find_matches(&self, source: &str) -> Vec<EntityMatch> {
        let Some(pattern) = &self.key_pattern else {
            return Vec::new();
        };

        pattern
            .find_iter(source)
            .filter(|m| {
                let before = source[..m.start()].chars().next_back();
                let after = source[m.end()..].chars().next();
                !before.is_some_and(text::is_word_char) && !after.is_some_and(text::is_word_char)
            })
            .map(|m| EntityMatch {
                start: m.start(),
                end: m.end(),
                key: text::curly_to_straight(m.as_str()).to_lowercase(),
            })
            .collect()
    }
}
