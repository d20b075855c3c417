//! Structural case conversion
//!
//! Title and sentence case are token-driven and entity-aware; the
//! programmatic formats (camel, pascal, snake, kebab, dot) are string-driven
//! with case-shape detection so already-converted text passes through
//! unchanged. Unresolvable or empty segments pass through; this module never
//! fails on valid text.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::casing::entity;
use crate::casing::patterns::{case_patterns, split_camel_pascal};
use crate::casing::word::{self, WordOpts};
use crate::error::CoreError;
use crate::rules::RuleSet;
use crate::text;
use crate::token::{self, Annotator, Pos, Token};

/// Words shorter than this take the minor-word rules in title case;
/// anything at or above it is always capitalized.
const TITLE_CAP_LEN: usize = 5;

/// Supported structural formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFormat {
    /// Capitalize words except minor words ("The Lord of the Rings")
    Title,
    /// Capitalize the first word of each sentence
    Sentence,
    /// "camelCase"
    Camel,
    /// "PascalCase"
    Pascal,
    /// "snake_case"
    Snake,
    /// "kebab-case"
    Kebab,
    /// "dot.case"
    Dot,
}

impl CaseFormat {
    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            CaseFormat::Title => "title",
            CaseFormat::Sentence => "sentence",
            CaseFormat::Camel => "camel",
            CaseFormat::Pascal => "pascal",
            CaseFormat::Snake => "snake",
            CaseFormat::Kebab => "kebab",
            CaseFormat::Dot => "dot",
        }
    }

    fn separator(self) -> Option<char> {
        match self {
            CaseFormat::Snake => Some('_'),
            CaseFormat::Kebab => Some('-'),
            CaseFormat::Dot => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseFormat {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "title" => Ok(CaseFormat::Title),
            "sentence" => Ok(CaseFormat::Sentence),
            "camel" => Ok(CaseFormat::Camel),
            "pascal" => Ok(CaseFormat::Pascal),
            "snake" => Ok(CaseFormat::Snake),
            "kebab" => Ok(CaseFormat::Kebab),
            "dot" => Ok(CaseFormat::Dot),
            other => Err(CoreError::InvalidInput(format!(
                "unknown case format '{other}'"
            ))),
        }
    }
}

/// Convert `text` to the requested structural format.
pub fn convert(rules: &RuleSet, annotator: &dyn Annotator, format: CaseFormat, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match format {
        CaseFormat::Title => token_case(rules, annotator, text, TokenMode::Title),
        CaseFormat::Sentence => token_case(rules, annotator, text, TokenMode::Sentence),
        CaseFormat::Camel => camel_or_pascal(rules, text, true),
        CaseFormat::Pascal => camel_or_pascal(rules, text, false),
        CaseFormat::Snake | CaseFormat::Kebab | CaseFormat::Dot => {
            separator_case(rules, text, format.separator().expect("separator format"))
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum TokenMode {
    Title,
    Sentence,
}

fn token_case(rules: &RuleSet, annotator: &dyn Annotator, source: &str, mode: TokenMode) -> String {
    let tokens = token::annotate_or_plain(annotator, source);
    let entities = entity::resolve_matches(rules, source, Some(&tokens));
    let cap_idxs = match mode {
        TokenMode::Title => title_cap_indices(rules, &tokens),
        TokenMode::Sentence => sentence_start_indices(&tokens),
    };
    let flatten_idxs = match mode {
        TokenMode::Sentence => uniform_sentence_indices(&tokens),
        TokenMode::Title => HashSet::new(),
    };

    let mut out = String::with_capacity(source.len());
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];

        if tok.is_word() {
            if let Some((span, casing)) = entities.iter().find(|(e, _)| e.start == tok.start) {
                out.push_str(casing);
                let mut j = i;
                while j < tokens.len() && tokens[j].start < span.end {
                    j += 1;
                }
                let last = &tokens[j - 1];
                if last.end() > span.end {
                    out.push_str(&source[span.end..last.end()]);
                }
                out.push_str(&last.trailing_ws);
                i = j;
                continue;
            }
        }

        if !tok.is_word() || rules.entities.is_contraction_suffix(&tok.text) {
            out.push_str(&tok.text);
            out.push_str(&tok.trailing_ws);
            i += 1;
            continue;
        }

        let cased = if cap_idxs.contains(&i) {
            word::resolve(rules, &tok.text)
        } else if flatten_idxs.contains(&i) {
            word::resolve_opts(rules, &tok.text, WordOpts::flatten())
        } else {
            word::resolve_opts(rules, &tok.text, WordOpts::lowercase())
        };
        out.push_str(&cased);
        out.push_str(&tok.trailing_ws);
        i += 1;
    }
    out
}

fn title_cap_indices(rules: &RuleSet, tokens: &[Token]) -> HashSet<usize> {
    let mut idxs = HashSet::new();

    for (i, tok) in tokens.iter().enumerate() {
        if tok.is_word() && tok.sent_start {
            idxs.insert(i);
        }
        if tok.is_punct() && (tok.text == ":" || is_open_quote(&tok.text)) {
            if let Some(j) = next_word_idx(tokens, i + 1) {
                idxs.insert(j);
            }
        }
    }
    if let Some(last) = tokens.iter().rposition(Token::is_word) {
        idxs.insert(last);
    }

    for (i, tok) in tokens.iter().enumerate() {
        if !tok.is_word() || idxs.contains(&i) {
            continue;
        }
        let lower = text::curly_to_straight(&tok.text).to_lowercase();
        if rules.entities.is_particle(&lower) || rules.entities.is_contraction_suffix(&tok.text) {
            continue;
        }
        if tok.text.chars().count() >= TITLE_CAP_LEN {
            idxs.insert(i);
            continue;
        }
        let minor = match tok.pos {
            Pos::Unknown => rules.casing.is_minor_word(&lower),
            pos => pos.is_title_minor(),
        };
        if !minor {
            idxs.insert(i);
        }
    }
    idxs
}

fn sentence_start_indices(tokens: &[Token]) -> HashSet<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_word() && t.sent_start)
        .map(|(i, _)| i)
        .collect()
}

/// Word indices of sentences written uniformly in ALL CAPS or Title Case;
/// those sentences are flattened to lowercase instead of preserving their
/// mid-word capitalization.
fn uniform_sentence_indices(tokens: &[Token]) -> HashSet<usize> {
    let mut result = HashSet::new();
    let mut current: Vec<usize> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        if !tok.is_word() {
            continue;
        }
        if tok.sent_start && !current.is_empty() {
            extend_if_uniform(&mut result, &current, tokens);
            current.clear();
        }
        current.push(i);
    }
    extend_if_uniform(&mut result, &current, tokens);
    result
}

fn extend_if_uniform(result: &mut HashSet<usize>, idxs: &[usize], tokens: &[Token]) {
    let alpha: Vec<&str> = idxs
        .iter()
        .map(|&i| tokens[i].text.as_str())
        .filter(|w| w.chars().any(char::is_alphabetic))
        .collect();
    if alpha.is_empty() {
        return;
    }
    let all_upper = alpha.iter().all(|w| text::is_all_upper(w));
    let all_title = alpha.len() > 1 && alpha.iter().all(|w| text::is_title_word(w));
    if all_upper || all_title {
        result.extend(idxs.iter().copied());
    }
}

fn next_word_idx(tokens: &[Token], from: usize) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(Token::is_word)
        .map(|offset| from + offset)
}

fn is_open_quote(text: &str) -> bool {
    matches!(text, "\"" | "'" | "\u{201C}" | "\u{2018}")
}

// --- programmatic formats -------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Seg {
    Word(String),
    Gap(String),
}

/// Segment text into word runs (alphanumerics with internal `.`/`-`/`_`
/// separators) and the gaps between them.
fn segment(source: &str) -> Vec<Seg> {
    let chars: Vec<char> = source.chars().collect();
    let mut segs = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_alphanumeric() {
            let mut word = String::new();
            while i < chars.len() {
                let ch = chars[i];
                if ch.is_alphanumeric() {
                    word.push(ch);
                    i += 1;
                } else if matches!(ch, '.' | '-' | '_')
                    && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric())
                    && chars[i - 1].is_alphanumeric()
                {
                    word.push(ch);
                    i += 1;
                } else {
                    break;
                }
            }
            segs.push(Seg::Word(word));
        } else {
            let mut gap = String::new();
            while i < chars.len() && !chars[i].is_alphanumeric() {
                gap.push(chars[i]);
                i += 1;
            }
            segs.push(Seg::Gap(gap));
        }
    }
    segs
}

fn word_at(segs: &[Seg], idx: Option<usize>) -> bool {
    idx.and_then(|i| segs.get(i))
        .is_some_and(|seg| matches!(seg, Seg::Word(_)))
}

fn camel_or_pascal(rules: &RuleSet, source: &str, camel: bool) -> String {
    let cleaned = text::remove_apostrophes(source, rules.contractions.elision_words());
    let segs = segment(&cleaned);
    let mut out = String::with_capacity(cleaned.len());
    let mut first_word = camel;

    for (i, seg) in segs.iter().enumerate() {
        match seg {
            Seg::Gap(gap) => {
                let joinable = gap == " "
                    && word_at(&segs, i.checked_sub(1))
                    && word_at(&segs, Some(i + 1));
                if !joinable {
                    out.push_str(gap);
                }
            }
            Seg::Word(w) => {
                if !w.chars().any(char::is_alphabetic) {
                    out.push_str(w);
                    continue;
                }
                let mut subwords = w.split(['.', '-', '_']);
                if first_word {
                    if let Some(first) = subwords.next() {
                        out.push_str(&camel_first_word(first));
                    }
                    first_word = false;
                }
                for sub in subwords {
                    out.push_str(&pascal_word(rules, sub));
                }
            }
        }
    }
    out
}

/// The first camel word is lowercased entirely unless it is already a
/// camel compound (kept) or a Pascal compound (first letter lowered).
fn camel_first_word(word: &str) -> String {
    let patterns = case_patterns();
    if patterns.is_camel(word) {
        word.to_string()
    } else if patterns.is_pascal(word) {
        text::set_first_alphabetic(word, false)
    } else {
        word.to_lowercase()
    }
}

fn pascal_word(rules: &RuleSet, word: &str) -> String {
    if !word.chars().any(char::is_alphabetic) {
        return word.to_string();
    }
    let patterns = case_patterns();
    if patterns.is_pascal(word) {
        return word.to_string();
    }
    if patterns.is_camel(word) {
        return text::set_first_alphabetic(word, true);
    }
    let resolved = word::resolve(rules, word);
    text::set_first_alphabetic(&resolved, true)
}

fn separator_case(rules: &RuleSet, source: &str, sep: char) -> String {
    let cleaned = text::remove_apostrophes(source, rules.contractions.elision_words());
    let segs = segment(&cleaned);
    let patterns = case_patterns();
    let mut out = String::with_capacity(cleaned.len());

    for (i, seg) in segs.iter().enumerate() {
        match seg {
            Seg::Gap(gap) => {
                let joinable = gap == " "
                    && word_at(&segs, i.checked_sub(1))
                    && word_at(&segs, Some(i + 1));
                if joinable {
                    out.push(sep);
                } else {
                    out.push_str(gap);
                }
            }
            Seg::Word(w) => {
                if !w.chars().any(char::is_alphabetic) {
                    out.push_str(w);
                } else if matches_separator(patterns, w, sep) {
                    out.push_str(&w.to_lowercase());
                } else if patterns.is_other_separator_case(w, sep) {
                    let swapped: String = w
                        .chars()
                        .map(|c| if matches!(c, '.' | '-' | '_') { sep } else { c })
                        .collect();
                    out.push_str(&swapped.to_lowercase());
                } else if patterns.is_camel(w) || patterns.is_pascal(w) {
                    let joined = split_camel_pascal(w).join(&sep.to_string());
                    out.push_str(&joined.to_lowercase());
                } else {
                    out.push_str(&w.to_lowercase());
                }
            }
        }
    }
    out
}

fn matches_separator(patterns: &crate::casing::patterns::CasePatterns, word: &str, sep: char) -> bool {
    match sep {
        '_' => patterns.is_snake(word),
        '-' => patterns.is_kebab(word),
        '.' => patterns.is_dot(word),
        _ => false,
    }
}
