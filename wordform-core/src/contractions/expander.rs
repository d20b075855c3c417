//! Contraction expansion over raw text
//!
//! Occurrences are found by a single scan of the compiled contraction
//! pattern with word boundaries verified in code, so tokenizer differences
//! cannot change what counts as a contraction. The annotator is invoked once
//! per input; when it is unavailable the ambiguous cases fall back to their
//! deterministic table defaults. Every recognized occurrence produces exactly
//! one output: its expansion, or (for a possessive "'s") the original text.

use crate::contractions::disambiguate::{self, ContextWindow};
use crate::contractions::apply_expansion_casing;
use crate::rules::RuleSet;
use crate::text;
use crate::token::{self, Annotator};

/// Expand every contraction in `source`, preserving all other text.
pub fn expand(rules: &RuleSet, annotator: &dyn Annotator, source: &str) -> String {
    let Some(pattern) = rules.contractions.pattern() else {
        return source.to_string();
    };

    let matches: Vec<(usize, usize)> = pattern
        .find_iter(source)
        .filter(|m| {
            let before = source[..m.start()].chars().next_back();
            let after = source[m.end()..].chars().next();
            !before.is_some_and(text::is_word_char) && !after.is_some_and(text::is_word_char)
        })
        .map(|m| (m.start(), m.end()))
        .collect();
    if matches.is_empty() {
        return source.to_string();
    }

    // One batched annotation per conversion.
    let tokens = token::try_annotate(annotator, source);

    let mut out = String::with_capacity(source.len() + source.len() / 4);
    let mut last = 0;
    for (start, end) in matches {
        out.push_str(&source[last..start]);
        let surface = &source[start..end];
        let key = text::curly_to_straight(surface).to_lowercase();

        let replacement = if let Some(entry) = rules.contractions.ambiguous(&key) {
            let ctx = ContextWindow::new(tokens.as_deref(), start, end);
            disambiguate::resolve(rules, entry, &key, surface, &ctx)
        } else {
            rules
                .contractions
                .unambiguous(&key)
                .map(|long_form| apply_expansion_casing(surface, long_form))
        };

        match replacement {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(surface),
        }
        last = end;
    }
    out.push_str(&source[last..]);
    out
}
