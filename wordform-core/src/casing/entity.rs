//! Entity casing resolution
//!
//! Entities are matched over the raw text against the absolute and contextual
//! entity maps; an absolute hit wins unconditionally, contextual hits are
//! gated on predicates over the surrounding tokens, and unmatched spans fall
//! back to per-word resolution with particle handling.

use std::ops::Range;

use crate::casing::word::{self, WordOpts};
use crate::rules::{ContextRule, EntityMatch, RuleSet};
use crate::text;
use crate::token::{self, Annotator, Token};

/// Resolve the casing of known entities in `text`, leaving everything else
/// untouched.
pub fn resolve_entity_casing(rules: &RuleSet, annotator: &dyn Annotator, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let tokens = token::try_annotate(annotator, text);
    let resolved = resolve_matches(rules, text, tokens.as_deref());

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (entity, casing) in resolved {
        out.push_str(&text[last..entity.start]);
        out.push_str(&casing);
        last = entity.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Resolve the casing of a token span as a single entity.
///
/// Absolute map first, then contextual rules in table order, then per-token
/// resolution: particles stay lowercase except at the span start, and
/// attached contraction suffixes pass through unchanged.
pub fn resolve_span(rules: &RuleSet, tokens: &[Token], span: Range<usize>) -> String {
    let words: Vec<&Token> = tokens[span.clone()].iter().filter(|t| t.is_word()).collect();
    let key = words
        .iter()
        .map(|t| text::curly_to_straight(&t.text).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(mapped) = rules.entities.absolute(&key) {
        return mapped.to_string();
    }
    if let Some(context_rules) = rules.entities.contextual(&key) {
        let sequence: Vec<String> = words.iter().map(|t| t.pos.coarse().to_string()).collect();
        for rule in context_rules {
            if rule.pos_sequences.is_empty() && rule.ngrams.is_empty() {
                return rule.casing.clone();
            }
            if rule.pos_sequences.iter().any(|s| *s == sequence) {
                return rule.casing.clone();
            }
        }
    }

    let mut out = String::new();
    for (offset, token) in tokens[span.clone()].iter().enumerate() {
        let is_last = offset + 1 == span.len();
        out.push_str(&resolve_entity_token(rules, token, offset == 0));
        if !is_last {
            out.push_str(&token.trailing_ws);
        }
    }
    out
}

fn resolve_entity_token(rules: &RuleSet, token: &Token, first: bool) -> String {
    if !token.is_word() || rules.entities.is_contraction_suffix(&token.text) {
        return token.text.clone();
    }
    let lower = text::curly_to_straight(&token.text).to_lowercase();
    if !first && rules.entities.is_particle(&lower) {
        return lower;
    }
    word::resolve(rules, &token.text)
}

/// Match every known entity key in `text` and resolve each match's casing.
///
/// Contextual entities whose rules all fail are dropped (their spans are
/// treated as ordinary words by the caller).
pub(crate) fn resolve_matches(
    rules: &RuleSet,
    text: &str,
    tokens: Option<&[Token]>,
) -> Vec<(EntityMatch, String)> {
    rules
        .entities
        .find_matches(text)
        .into_iter()
        .filter_map(|entity| {
            if let Some(mapped) = rules.entities.absolute(&entity.key) {
                return Some((entity, mapped.to_string()));
            }
            let context_rules = rules.entities.contextual(&entity.key)?;
            let casing = eval_contextual(context_rules, &entity, tokens)?;
            Some((entity, casing))
        })
        .collect()
}

fn eval_contextual(
    context_rules: &[ContextRule],
    entity: &EntityMatch,
    tokens: Option<&[Token]>,
) -> Option<String> {
    for rule in context_rules {
        if rule.pos_sequences.is_empty() && rule.ngrams.is_empty() {
            return Some(rule.casing.clone());
        }
        let Some(tokens) = tokens else {
            continue;
        };
        if !rule.pos_sequences.is_empty() {
            let sequence = span_pos_sequence(tokens, entity);
            if rule.pos_sequences.iter().any(|s| *s == sequence) {
                return Some(rule.casing.clone());
            }
        }
        if !rule.ngrams.is_empty() {
            let (before, after) = window_texts(tokens, entity, rule.context_window);
            let found = rule
                .ngrams
                .iter()
                .any(|ngram| window_contains(&before, ngram) || window_contains(&after, ngram));
            if found {
                return Some(rule.casing.clone());
            }
        }
    }
    None
}

fn span_pos_sequence(tokens: &[Token], entity: &EntityMatch) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.is_word() && t.start >= entity.start && t.end() <= entity.end)
        .map(|t| t.pos.coarse().to_string())
        .collect()
}

fn window_texts(tokens: &[Token], entity: &EntityMatch, window: usize) -> (String, String) {
    let before: Vec<&str> = tokens
        .iter()
        .filter(|t| !t.is_space() && t.end() <= entity.start)
        .map(|t| t.text.as_str())
        .collect();
    let after: Vec<&str> = tokens
        .iter()
        .filter(|t| !t.is_space() && t.start >= entity.end)
        .map(|t| t.text.as_str())
        .collect();

    let start = before.len().saturating_sub(window);
    let before_text = text::curly_to_straight(&before[start..].join(" ")).to_lowercase();
    let end = window.min(after.len());
    let after_text = text::curly_to_straight(&after[..end].join(" ")).to_lowercase();
    (before_text, after_text)
}

fn window_contains(window: &str, ngram: &str) -> bool {
    let needle = ngram.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    for (idx, _) in window.match_indices(&needle) {
        let before_ok = window[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !text::is_word_char(c));
        let after_ok = window[idx + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !text::is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
    }
    false
}
