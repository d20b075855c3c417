//! Single-word casing resolution
//!
//! Layered dictionary and affix rules applied in a fixed order; the first
//! matching rule wins. The resolver is a pure function of the word and the
//! loaded tables.

use crate::rules::RuleSet;
use crate::text;

/// Options controlling resolution defaults
#[derive(Debug, Clone, Copy)]
pub struct WordOpts {
    /// Lowercase words with no applicable rule instead of capitalizing them.
    /// This is the mode used for non-capitalized positions in title and
    /// sentence casing.
    pub lowercase_by_default: bool,
    /// Keep words that already carry mid-word capitalization
    pub keep_mixed_case: bool,
}

impl Default for WordOpts {
    fn default() -> Self {
        WordOpts {
            lowercase_by_default: false,
            keep_mixed_case: true,
        }
    }
}

impl WordOpts {
    /// Lowercase-by-default resolution with mixed-case preservation
    pub fn lowercase() -> Self {
        WordOpts {
            lowercase_by_default: true,
            keep_mixed_case: true,
        }
    }

    /// Lowercase-by-default resolution that also flattens mixed casing
    pub fn flatten() -> Self {
        WordOpts {
            lowercase_by_default: true,
            keep_mixed_case: false,
        }
    }
}

/// Resolve the canonical casing of a single word, capitalizing by default.
pub fn resolve(rules: &RuleSet, word: &str) -> String {
    resolve_opts(rules, word, WordOpts::default())
}

/// Resolve the canonical casing of a single word with explicit defaults.
pub fn resolve_opts(rules: &RuleSet, word: &str, opts: WordOpts) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };
    if !first.is_alphabetic() {
        return word.to_string();
    }

    let lower = text::curly_to_straight(word).to_lowercase();
    let table = &rules.casing;

    if lower == "i" {
        return "I".to_string();
    }
    if let Some(mapped) = table.absolute(&lower) {
        return mapped;
    }
    if table.is_lowercase_abbreviation(&lower) {
        return lower;
    }
    if let Some(initialism) = period_initialism(&lower) {
        return initialism;
    }
    if let Some(mapped) = table.prefix_override(&lower) {
        return mapped.to_string();
    }
    if let Some(cased) = prefixed_name(rules, &lower) {
        return cased;
    }
    if opts.keep_mixed_case && text::is_mixed_case(word) {
        return word.to_string();
    }
    if opts.lowercase_by_default {
        lower
    } else {
        text::capitalize(&lower)
    }
}

/// Apply the surname-prefix rule: capitalize the prefix and the first letter
/// of the remainder. A trailing suffix-exception fragment is split off and
/// resolved on its own so the affix rule cannot mis-capitalize it.
fn prefixed_name(rules: &RuleSet, lower: &str) -> Option<String> {
    let table = &rules.casing;
    if table.is_prefix_exception(lower) {
        return None;
    }
    let prefix = table.surname_prefix(lower)?;
    let remainder = &lower[prefix.len()..];
    if !remainder.chars().next().is_some_and(|c| c.is_alphabetic()) {
        return None;
    }

    if let Some((base, suffix)) = table.split_suffix_exception(lower) {
        if base.len() >= prefix.len() {
            let cased = format!(
                "{}{}",
                text::capitalize(prefix),
                text::capitalize(&base[prefix.len()..])
            );
            let suffix_cased = resolve_opts(rules, suffix, WordOpts::flatten());
            return Some(format!("{cased}{suffix_cased}"));
        }
    }

    Some(format!(
        "{}{}",
        text::capitalize(prefix),
        text::capitalize(remainder)
    ))
}

/// Uppercase a period-separated initialism ("u.s.a." -> "U.S.A.").
fn period_initialism(lower: &str) -> Option<String> {
    let parts: Vec<&str> = lower.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    let well_formed = parts.iter().enumerate().all(|(i, part)| {
        let single_letter = part.len() == 1 && part.chars().all(|c| c.is_alphabetic());
        if i == parts.len() - 1 {
            part.is_empty() || single_letter
        } else {
            single_letter
        }
    });
    if !well_formed {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|part| part.to_uppercase())
            .collect::<Vec<_>>()
            .join("."),
    )
}
