//! Contraction detection, expansion, and disambiguation

pub mod disambiguate;
pub mod expander;

pub use expander::expand;

use crate::text;

/// Re-apply the original contraction's casing pattern to its expansion:
/// all-caps stays all-caps, a leading capital stays a leading capital, and
/// anything else takes the expansion verbatim.
pub(crate) fn apply_expansion_casing(original: &str, expansion: &str) -> String {
    if original.is_empty() || expansion.is_empty() {
        return expansion.to_string();
    }
    if text::is_all_upper(original) {
        return expansion.to_uppercase();
    }
    if text::starts_capitalized(original) {
        return text::set_first_alphabetic(expansion, true);
    }
    expansion.to_string()
}
