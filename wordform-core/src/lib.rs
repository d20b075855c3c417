//! Deterministic text normalization: casing resolution and contraction
//! expansion
//!
//! This crate layers static dictionary lookups, exception lists, affix rules,
//! and limited part-of-speech context into a single deterministic resolution
//! pipeline:
//!
//! - **Rules layer**: immutable rule tables loaded once ([`rules::RuleSet`])
//! - **Token layer**: the consumed tokenization/tagging capability
//!   ([`token::Annotator`]) with a degraded built-in default
//! - **Casing layer**: word, entity, and structural-format resolution
//! - **Contractions layer**: expansion with per-family disambiguation
//!
//! # Example
//!
//! ```
//! use wordform_core::{convert, expand, CaseFormat, PlainAnnotator, RuleSet};
//!
//! let rules = RuleSet::shared().expect("embedded tables load");
//! let annotator = PlainAnnotator::new();
//!
//! let title = convert(&rules, &annotator, CaseFormat::Title, "the lord of the rings");
//! assert_eq!(title, "The Lord of the Rings");
//!
//! let expanded = expand(&rules, &annotator, "I don't know");
//! assert_eq!(expanded, "I do not know");
//! ```

#![warn(missing_docs)]

pub mod casing;
pub mod contractions;
pub mod error;
pub mod rules;
pub mod token;

mod text;

pub use casing::{convert, resolve, resolve_entity_casing, resolve_opts, CaseFormat, WordOpts};
pub use contractions::expand;
pub use error::{CoreError, Result};
pub use rules::RuleSet;
pub use token::{Annotator, PlainAnnotator, Pos, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let rules = RuleSet::shared().unwrap();
        let annotator = PlainAnnotator::new();

        assert_eq!(resolve(&rules, "macbook"), "MacBook");
        assert_eq!(
            resolve_entity_casing(&rules, &annotator, "new york"),
            "New York"
        );
        assert_eq!(
            convert(&rules, &annotator, CaseFormat::Snake, "Hello World"),
            "hello_world"
        );
        assert_eq!(expand(&rules, &annotator, "it's fine"), "it is fine");
    }
}
