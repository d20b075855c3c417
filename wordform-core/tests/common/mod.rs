//! Shared test doubles for the integration suites

#![allow(dead_code)]

use std::collections::HashMap;

use wordform_core::{Annotator, CoreError, PlainAnnotator, Pos, Token};

/// Annotator substituting fixture tags for the external tagging capability.
///
/// Tokenizes like the plain annotator, then assigns each word the tag from
/// the lexicon (case-insensitive); unlisted words stay untagged.
pub struct TaggedAnnotator {
    lexicon: HashMap<String, Pos>,
}

impl TaggedAnnotator {
    pub fn new(entries: &[(&str, Pos)]) -> Self {
        TaggedAnnotator {
            lexicon: entries
                .iter()
                .map(|(word, pos)| (word.to_lowercase(), *pos))
                .collect(),
        }
    }
}

impl Annotator for TaggedAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, CoreError> {
        let mut tokens = PlainAnnotator::new().annotate(text)?;
        for token in &mut tokens {
            if !token.is_word() {
                continue;
            }
            let key = token.text.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase();
            if let Some(&pos) = self.lexicon.get(&key) {
                token.pos = pos;
            }
        }
        Ok(tokens)
    }
}

/// Annotator standing in for an unavailable tagging capability.
pub struct FailingAnnotator;

impl Annotator for FailingAnnotator {
    fn annotate(&self, _text: &str) -> Result<Vec<Token>, CoreError> {
        Err(CoreError::UnsupportedContext(
            "tagging model unavailable".to_string(),
        ))
    }
}
