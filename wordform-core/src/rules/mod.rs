//! Rule tables: configuration loaded once into immutable lookup structures
//!
//! Every resolver takes an explicit [`RuleSet`] reference; there is no hidden
//! process-wide state beyond the lazily-initialized shared instance, which is
//! read-only after load and safe for concurrent use.

pub(crate) mod config;

mod casing;
mod contractions;
mod entities;
mod loader;

use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use crate::error::{CoreError, Result};
use config::{CasingConfig, ContractionConfig, EntityConfig};

pub use casing::CasingTable;
pub use contractions::{AmbiguousEntry, ContractionTable, Family};
pub use entities::{ContextRule, EntityMatch, EntityTable};

/// The full set of loaded rule tables
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Word-level casing rules
    pub casing: CasingTable,
    /// Entity casing rules
    pub entities: EntityTable,
    /// Contraction expansion rules
    pub contractions: ContractionTable,
}

impl RuleSet {
    /// The process-wide rule set built from the embedded tables.
    ///
    /// Loaded lazily exactly once; subsequent calls are lookups.
    pub fn shared() -> Result<Arc<RuleSet>> {
        loader::shared()
    }

    /// Build a fresh rule set from the embedded tables.
    pub fn from_embedded() -> Result<RuleSet> {
        loader::load_embedded()
    }

    /// Load rule tables from a directory containing `casing.toml`,
    /// `entities.toml`, and `contractions.toml`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<RuleSet> {
        loader::load_dir(dir.as_ref())
    }

    pub(crate) fn from_sources(
        casing: &str,
        entities: &str,
        contractions: &str,
    ) -> Result<RuleSet> {
        let casing: CasingConfig = loader::parse_table("casing", casing)?;
        let entities: EntityConfig = loader::parse_table("entities", entities)?;
        let contractions: ContractionConfig = loader::parse_table("contractions", contractions)?;
        RuleSet::from_configs(casing, entities, contractions)
    }

    pub(crate) fn from_configs(
        casing: CasingConfig,
        entities: EntityConfig,
        contractions: ContractionConfig,
    ) -> Result<RuleSet> {
        casing.validate().map_err(data_error("casing"))?;
        entities.validate().map_err(data_error("entities"))?;
        contractions.validate().map_err(data_error("contractions"))?;

        Ok(RuleSet {
            casing: CasingTable::from_config(casing),
            entities: EntityTable::from_config(entities).map_err(data_error("entities"))?,
            contractions: ContractionTable::from_config(contractions)
                .map_err(data_error("contractions"))?,
        })
    }
}

fn data_error(table: &'static str) -> impl Fn(String) -> CoreError {
    move |reason| CoreError::DataLoad {
        table: table.to_string(),
        reason,
    }
}

/// Compile a case-insensitive alternation of literal keys, longest first,
/// with apostrophes matching both straight and curly variants.
pub(crate) fn keys_pattern<'a>(
    keys: impl Iterator<Item = &'a str>,
) -> std::result::Result<Option<Regex>, String> {
    let mut keys: Vec<&str> = keys.collect();
    if keys.is_empty() {
        return Ok(None);
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation: Vec<String> = keys.iter().map(|key| literal_pattern(key)).collect();
    let pattern = format!("(?i)(?:{})", alternation.join("|"));
    Regex::new(&pattern).map(Some).map_err(|err| err.to_string())
}

fn literal_pattern(key: &str) -> String {
    let mut out = String::new();
    for ch in key.chars() {
        if ch == '\'' {
            out.push_str("['\u{2019}\u{2018}]");
        } else if ch.is_alphanumeric() || ch == ' ' {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        let rules = RuleSet::from_embedded().unwrap();
        assert_eq!(rules.casing.absolute("nasa"), Some("NASA".to_string()));
        assert_eq!(rules.entities.absolute("new york"), Some("New York"));
        assert_eq!(rules.contractions.unambiguous("don't"), Some("do not"));
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let first = RuleSet::shared().unwrap();
        let second = RuleSet::shared().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_malformed_table_is_data_load_error() {
        let err = RuleSet::from_sources("not valid toml [", "", "").unwrap_err();
        match err {
            CoreError::DataLoad { table, .. } => assert_eq!(table, "casing"),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }
}
