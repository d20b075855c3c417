//! Serde representations of the TOML rule tables
//!
//! These types mirror the on-disk format exactly; the runtime tables in the
//! sibling modules are compiled from them once at load time.

use std::collections::HashMap;

use serde::Deserialize;

/// Common metadata block shared by all rule tables
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// Stable table identifier ("casing", "entities", "contractions")
    pub id: String,
    /// Human-readable name
    pub name: String,
}

/// Word-level casing table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CasingConfig {
    pub metadata: TableMetadata,
    /// Lowercase key to fixed casing
    #[serde(default)]
    pub absolute: HashMap<String, String>,
    #[serde(default)]
    pub abbreviations: AbbreviationSection,
    #[serde(default)]
    pub prefixes: PrefixSection,
    #[serde(default)]
    pub suffixes: SuffixSection,
    #[serde(default)]
    pub title: TitleSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbbreviationSection {
    /// Abbreviations forced lowercase
    #[serde(default)]
    pub lowercase: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixSection {
    /// Surname prefixes taking the capitalize-prefix-and-remainder rule
    #[serde(default)]
    pub surname: Vec<String>,
    /// Words that merely begin with a prefix string
    #[serde(default)]
    pub exceptions: Vec<String>,
    /// Prefixed names with irregular conventional casing
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuffixSection {
    /// Trailing fragments split off and re-resolved independently
    #[serde(default)]
    pub exceptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleSection {
    /// Minor words kept lowercase in title case without tag information
    #[serde(default)]
    pub minor_words: Vec<String>,
}

/// Entity casing table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EntityConfig {
    pub metadata: TableMetadata,
    /// Lowercase entity key to fixed casing
    #[serde(default)]
    pub absolute: HashMap<String, String>,
    /// Context-gated entities, rules evaluated in order
    #[serde(default)]
    pub contextual: Vec<ContextualEntityConfig>,
    #[serde(default)]
    pub particles: ParticleSection,
    #[serde(default)]
    pub contractions: ContractionSuffixSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextualEntityConfig {
    /// Lowercase entity key
    pub key: String,
    /// Ordered predicate rules; first satisfied rule wins
    pub rules: Vec<ContextRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextRuleConfig {
    /// Coarse POS sequences the entity span may match
    #[serde(default)]
    pub pos_sequences: Vec<Vec<String>>,
    /// N-grams searched in the surrounding token window
    #[serde(default)]
    pub ngrams: Vec<String>,
    /// Token window checked on each side of the entity
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    /// Casing applied when the rule matches
    pub casing: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticleSection {
    /// Name particles kept lowercase except at entity start
    #[serde(default)]
    pub lowercase: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractionSuffixSection {
    /// Suffixes excluded from entity casing decisions
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Contraction table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContractionConfig {
    pub metadata: TableMetadata,
    /// Contraction to its single long form
    #[serde(default)]
    pub unambiguous: HashMap<String, String>,
    /// Context-dependent contractions
    #[serde(default)]
    pub ambiguous: Vec<AmbiguousConfig>,
    #[serde(default)]
    pub context: ContextWordsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmbiguousConfig {
    /// Lowercase contraction key with straight apostrophes
    pub key: String,
    /// Disambiguation family handling this contraction
    pub family: FamilyConfig,
    /// Ordered candidate expansions; the first is the default
    pub candidates: Vec<String>,
}

/// Closed set of disambiguation families as spelled in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FamilyConfig {
    #[serde(rename = "negation")]
    Negation,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "whatcha")]
    Whatcha,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextWordsConfig {
    #[serde(default)]
    pub wh_words: Vec<String>,
    #[serde(default)]
    pub singular_pronouns: Vec<String>,
    #[serde(default)]
    pub preference_adverbs: Vec<String>,
    #[serde(default)]
    pub preference_verbs: Vec<String>,
    #[serde(default)]
    pub whatcha_are_words: Vec<String>,
    #[serde(default)]
    pub whatcha_have_words: Vec<String>,
    #[serde(default)]
    pub elision_words: Vec<String>,
}

impl CasingConfig {
    /// Reject structurally invalid tables before they become runtime state.
    pub fn validate(&self) -> Result<(), String> {
        for key in self.absolute.keys() {
            if key.chars().any(char::is_uppercase) {
                return Err(format!("absolute key '{key}' must be lowercase"));
            }
        }
        for prefix in &self.prefixes.surname {
            if prefix.is_empty() {
                return Err("empty surname prefix".to_string());
            }
        }
        Ok(())
    }
}

impl EntityConfig {
    pub fn validate(&self) -> Result<(), String> {
        for entity in &self.contextual {
            if entity.rules.is_empty() {
                return Err(format!("contextual entity '{}' has no rules", entity.key));
            }
            for rule in &entity.rules {
                if rule.casing.is_empty() {
                    return Err(format!("contextual entity '{}' has an empty casing", entity.key));
                }
            }
        }
        Ok(())
    }
}

impl ContractionConfig {
    pub fn validate(&self) -> Result<(), String> {
        for entry in &self.ambiguous {
            if entry.candidates.is_empty() {
                return Err(format!("ambiguous contraction '{}' has no candidates", entry.key));
            }
        }
        Ok(())
    }
}

fn default_context_window() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casing_config_deserialize() {
        let toml_str = r#"
            [metadata]
            id = "casing"
            name = "Word casing"

            [absolute]
            nasa = "NASA"
            ebay = "eBay"

            [abbreviations]
            lowercase = ["etc", "vs"]

            [prefixes]
            surname = ["mac", "o'"]
            exceptions = ["macabre"]

            [prefixes.overrides]
            macy = "Macy"

            [suffixes]
            exceptions = ["s", "like"]

            [title]
            minor_words = ["a", "the", "of"]
        "#;

        let config: CasingConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.absolute["nasa"], "NASA");
        assert_eq!(config.prefixes.surname.len(), 2);
        assert_eq!(config.prefixes.overrides["macy"], "Macy");
    }

    #[test]
    fn test_contraction_config_deserialize() {
        let toml_str = r#"
            [metadata]
            id = "contractions"
            name = "Contractions"

            [unambiguous]
            "don't" = "do not"

            [[ambiguous]]
            key = "it's"
            family = "s"
            candidates = ["it is", "it has"]

            [context]
            wh_words = ["what"]
        "#;

        let config: ContractionConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.unambiguous["don't"], "do not");
        assert_eq!(config.ambiguous[0].family, FamilyConfig::S);
    }

    #[test]
    fn test_context_window_default() {
        let toml_str = r#"
            [metadata]
            id = "entities"
            name = "Entities"

            [[contextual]]
            key = "apple"

            [[contextual.rules]]
            ngrams = ["iphone"]
            casing = "Apple"
        "#;

        let config: EntityConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.contextual[0].rules[0].context_window, 4);
    }
}
