//! Public API for wordform text normalization
//!
//! This crate provides a stable surface over the core pipeline: a
//! [`Normalizer`] owning the loaded rule tables and the annotation
//! capability, plus free convenience functions over a default normalizer.
//! All operations are synchronous, side-effect-free, and return a new
//! `String` without mutating shared state.
//!
//! # Example
//!
//! ```
//! use wordform_api::{CaseFormat, Normalizer};
//!
//! let normalizer = Normalizer::new().expect("embedded rules load");
//! let title = normalizer
//!     .convert_case(CaseFormat::Title, "the lord of the rings")
//!     .unwrap();
//! assert_eq!(title, "The Lord of the Rings");
//! ```

#![warn(missing_docs)]

pub mod error;

use std::path::PathBuf;
use std::sync::Arc;

pub use error::{Error, Result};
pub use wordform_core::{Annotator, CaseFormat, PlainAnnotator, Pos, RuleSet, Token};

/// Main entry point for text normalization
///
/// Owns the loaded rule tables and the annotation capability; conversions
/// borrow both and never mutate them, so a `Normalizer` can be shared across
/// threads.
pub struct Normalizer {
    rules: Arc<RuleSet>,
    annotator: Arc<dyn Annotator>,
}

impl Normalizer {
    /// Create a normalizer with the embedded rule tables and the built-in
    /// degraded annotator.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a normalizer with a custom annotator or rule source.
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Convert text to a structural case format.
    pub fn convert_case(&self, format: CaseFormat, text: &str) -> Result<String> {
        validate(text)?;
        Ok(wordform_core::convert(
            &self.rules,
            self.annotator.as_ref(),
            format,
            text,
        ))
    }

    /// Expand every contraction in the text to its canonical long form.
    pub fn expand_contractions(&self, text: &str) -> Result<String> {
        validate(text)?;
        Ok(wordform_core::expand(
            &self.rules,
            self.annotator.as_ref(),
            text,
        ))
    }

    /// Resolve the casing of known entities, leaving other text unchanged.
    pub fn resolve_entity_casing(&self, text: &str) -> Result<String> {
        validate(text)?;
        Ok(wordform_core::resolve_entity_casing(
            &self.rules,
            self.annotator.as_ref(),
            text,
        ))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new().expect("default normalizer creation should not fail")
    }
}

/// Builder for [`Normalizer`]
#[derive(Default)]
pub struct NormalizerBuilder {
    annotator: Option<Arc<dyn Annotator>>,
    rules: Option<Arc<RuleSet>>,
    rules_dir: Option<PathBuf>,
}

impl NormalizerBuilder {
    /// Use a custom tokenization/tagging capability.
    pub fn annotator(mut self, annotator: impl Annotator + 'static) -> Self {
        self.annotator = Some(Arc::new(annotator));
        self
    }

    /// Use an already-built rule set.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(Arc::new(rules));
        self
    }

    /// Load rule tables from a directory instead of the embedded data.
    pub fn rules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = Some(dir.into());
        self
    }

    /// Build the normalizer, loading rule tables as configured.
    pub fn build(self) -> Result<Normalizer> {
        let rules = match (self.rules, self.rules_dir) {
            (Some(rules), _) => rules,
            (None, Some(dir)) => Arc::new(RuleSet::from_dir(&dir)?),
            (None, None) => RuleSet::shared()?,
        };
        let annotator = self
            .annotator
            .unwrap_or_else(|| Arc::new(PlainAnnotator::new()));
        Ok(Normalizer { rules, annotator })
    }
}

fn validate(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput(
            "text must contain at least one non-whitespace character".to_string(),
        ));
    }
    Ok(())
}

// Convenience functions

/// Convert text with a default normalizer.
pub fn convert_case(format: CaseFormat, text: &str) -> Result<String> {
    Normalizer::new()?.convert_case(format, text)
}

/// Expand contractions with a default normalizer.
pub fn expand_contractions(text: &str) -> Result<String> {
    Normalizer::new()?.expand_contractions(text)
}

/// Resolve entity casing with a default normalizer.
pub fn resolve_entity_casing(text: &str) -> Result<String> {
    Normalizer::new()?.resolve_entity_casing(text)
}
