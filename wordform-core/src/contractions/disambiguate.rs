//! Context-driven disambiguation of ambiguous contractions
//!
//! One handler exists per [`Family`]; each consumes a bounded window of
//! neighboring tokens and yields exactly one outcome. When no handler
//! condition holds, the contraction's first table candidate applies, so
//! resolution is deterministic with or without tag information.

use crate::rules::{AmbiguousEntry, Family, RuleSet};
use crate::text;
use crate::token::{Pos, Token};

/// Bounded token context around a contraction match
pub(crate) struct ContextWindow<'a> {
    tokens: Option<&'a [Token]>,
    start: usize,
    end: usize,
}

/// Handler outcome for one contraction occurrence
enum Resolution {
    /// Use this expansion
    Expand(String),
    /// The token is not a contraction here (e.g. a possessive)
    Keep,
    /// No condition held; use the table's first candidate
    Default,
}

impl<'a> ContextWindow<'a> {
    pub(crate) fn new(tokens: Option<&'a [Token]>, start: usize, end: usize) -> Self {
        ContextWindow { tokens, start, end }
    }

    /// The first non-space token after the match.
    fn next_token(&self) -> Option<&'a Token> {
        self.tokens?
            .iter()
            .find(|t| !t.is_space() && t.start >= self.end)
    }

    /// The token containing the match start.
    fn head_token(&self) -> Option<&'a Token> {
        self.tokens?
            .iter()
            .find(|t| t.start <= self.start && t.end() > self.start)
    }

    /// The verb inspected in a wh-question: the next token, skipping one
    /// interposed subject ("What's she want?" inspects "want").
    fn wh_target(&self) -> Option<&'a Token> {
        let next = self.next_token()?;
        if !next.pos.is_subject_like() {
            return Some(next);
        }
        self.tokens?
            .iter()
            .find(|t| !t.is_space() && t.start >= next.end())
            .or(Some(next))
    }

    /// Locate the subject a contracted verb agrees with: scan left to the
    /// nearest subject-like token, then right for inverted order, stopping
    /// at verbs and punctuation either way.
    fn find_subject(&self) -> Option<&'a Token> {
        let tokens = self.tokens?;

        let before: Vec<&Token> = tokens
            .iter()
            .filter(|t| !t.is_space() && t.end() <= self.start)
            .collect();
        for &tok in before.iter().rev() {
            if tok.pos.is_subject_like() {
                return Some(tok);
            }
            if tok.pos == Pos::Determiner || tok.pos == Pos::Punct || tok.pos.is_verb() {
                break;
            }
        }

        for tok in tokens
            .iter()
            .filter(|t| !t.is_space() && t.start >= self.end)
            .take(6)
        {
            if tok.pos.is_subject_like() {
                return Some(tok);
            }
            if tok.pos == Pos::Punct || tok.pos.is_verb() {
                break;
            }
        }
        None
    }
}

/// Resolve one ambiguous contraction occurrence.
///
/// Returns the cased replacement text, or `None` when the occurrence should
/// pass through unchanged (possessive "'s", "whatcha" deferring to a
/// trailing "ain't").
pub(crate) fn resolve(
    rules: &RuleSet,
    entry: &AmbiguousEntry,
    key: &str,
    surface: &str,
    ctx: &ContextWindow<'_>,
) -> Option<String> {
    let resolution = match entry.family {
        Family::Negation => negation(rules, key, ctx),
        Family::AposS => apos_s(rules, key, ctx),
        Family::AposD => apos_d(rules, key, ctx),
        Family::Whatcha => whatcha(rules, ctx),
    };

    let expansion = match resolution {
        Resolution::Expand(expansion) => expansion,
        Resolution::Keep => return None,
        Resolution::Default => entry.candidates.first()?.clone(),
    };
    Some(super::apply_expansion_casing(surface, &expansion))
}

/// "ain't": pick the suppressed verb from the subject, and has/have when a
/// participle follows.
fn negation(rules: &RuleSet, key: &str, ctx: &ContextWindow<'_>) -> Resolution {
    if !key.starts_with("ai") {
        return Resolution::Default;
    }
    let perfect = ctx.next_token().is_some_and(|t| t.pos.is_participle());
    let Some(subject) = ctx.find_subject() else {
        return Resolution::Default;
    };
    let subject_lower = text::curly_to_straight(&subject.text).to_lowercase();
    let singular = rules.contractions.is_singular_pronoun(&subject_lower)
        || matches!(subject.pos, Pos::Noun | Pos::ProperNoun);

    let base = if perfect {
        if singular {
            "has"
        } else {
            "have"
        }
    } else if subject_lower == "i" {
        "am"
    } else if singular {
        "is"
    } else {
        "are"
    };
    Resolution::Expand(format!("{base} not"))
}

fn apos_s(rules: &RuleSet, key: &str, ctx: &ContextWindow<'_>) -> Resolution {
    let Some(head) = key.strip_suffix("'s") else {
        return Resolution::Default;
    };
    if head == "let" {
        return Resolution::Expand("let us".to_string());
    }

    if rules.contractions.is_wh_word(head) {
        if let Some(target) = ctx.wh_target() {
            if target.pos == Pos::VerbBase {
                return Resolution::Expand(format!("{head} does"));
            }
            if target.pos.is_participle() {
                return Resolution::Expand(format!("{head} has"));
            }
        }
    }

    if let Some(next) = ctx.next_token() {
        if next.pos.is_participle() {
            return Resolution::Expand(format!("{head} has"));
        }
        // A noun-attached "'s" with no verb context is a possessive.
        let noun_head = ctx
            .head_token()
            .is_some_and(|t| matches!(t.pos, Pos::Noun | Pos::ProperNoun));
        if noun_head && !next.pos.is_verb() {
            return Resolution::Keep;
        }
        if next.pos != Pos::Unknown {
            return Resolution::Expand(format!("{head} is"));
        }
    }
    Resolution::Default
}

fn apos_d(rules: &RuleSet, key: &str, ctx: &ContextWindow<'_>) -> Resolution {
    let Some(head) = key.strip_suffix("'d") else {
        return Resolution::Default;
    };
    let Some(next) = ctx.next_token() else {
        return Resolution::Default;
    };
    let next_lower = text::curly_to_straight(&next.text).to_lowercase();

    // Idioms: "'d better" is "had"; "'d rather/sooner" is "would".
    if next_lower == "better" {
        return Resolution::Expand(format!("{head} had"));
    }
    if rules.contractions.is_preference_adverb(&next_lower) {
        return Resolution::Expand(format!("{head} would"));
    }

    if rules.contractions.is_wh_word(head) {
        if let Some(target) = ctx.wh_target() {
            if target.pos.is_participle() {
                return Resolution::Expand(format!("{head} had"));
            }
            if target.pos == Pos::VerbBase {
                if rules.contractions.is_preference_verb(&target.lemma) {
                    return Resolution::Expand(format!("{head} would"));
                }
                return Resolution::Expand(format!("{head} did"));
            }
            if target.pos != Pos::Unknown {
                return Resolution::Expand(format!("{head} did"));
            }
        }
        return Resolution::Default;
    }

    if next.pos.is_participle() {
        return Resolution::Expand(format!("{head} had"));
    }
    if next.pos != Pos::Unknown {
        return Resolution::Expand(format!("{head} would"));
    }
    Resolution::Default
}

fn whatcha(rules: &RuleSet, ctx: &ContextWindow<'_>) -> Resolution {
    let Some(next) = ctx.next_token() else {
        return Resolution::Default;
    };
    let next_lower = text::curly_to_straight(&next.text).to_lowercase();

    // "whatcha ain't" defers to the negation family on the next match.
    if next_lower == "ai" || next_lower == "ain't" {
        return Resolution::Keep;
    }
    if rules.contractions.is_whatcha_are_word(&next_lower) || next.pos == Pos::VerbGerund {
        return Resolution::Expand("what are you".to_string());
    }
    if rules.contractions.is_whatcha_have_word(&next_lower) || next.pos.is_participle() {
        return Resolution::Expand("what have you".to_string());
    }
    if next.pos != Pos::Unknown {
        return Resolution::Expand("what do you".to_string());
    }
    Resolution::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    fn rules() -> RuleSet {
        RuleSet::from_embedded().unwrap()
    }

    fn tokens(entries: &[(&str, Pos)]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut offset = 0;
        for (word, pos) in entries {
            let mut token = Token::word(*word, *pos, offset);
            token.trailing_ws = " ".to_string();
            offset += word.len() + 1;
            out.push(token);
        }
        out
    }

    #[test]
    fn test_apos_d_participle_vs_base() {
        let rules = rules();
        let entry = rules.contractions.ambiguous("i'd").unwrap();

        let toks = tokens(&[("I'd", Pos::Unknown), ("eaten", Pos::VerbParticiple)]);
        let ctx = ContextWindow::new(Some(&toks), 0, 3);
        assert_eq!(
            resolve(&rules, entry, "i'd", "I'd", &ctx),
            Some("I had".to_string())
        );

        let toks = tokens(&[("I'd", Pos::Unknown), ("go", Pos::VerbBase)]);
        let ctx = ContextWindow::new(Some(&toks), 0, 3);
        assert_eq!(
            resolve(&rules, entry, "i'd", "I'd", &ctx),
            Some("I would".to_string())
        );
    }

    #[test]
    fn test_apos_d_idioms() {
        let rules = rules();
        let entry = rules.contractions.ambiguous("you'd").unwrap();
        let toks = tokens(&[("you'd", Pos::Unknown), ("rather", Pos::Adverb), ("stay", Pos::VerbBase)]);
        let ctx = ContextWindow::new(Some(&toks), 0, 5);
        assert_eq!(
            resolve(&rules, entry, "you'd", "you'd", &ctx),
            Some("you would".to_string())
        );
    }

    #[test]
    fn test_wh_d_skips_subject() {
        let rules = rules();
        let entry = rules.contractions.ambiguous("where'd").unwrap();
        let toks = tokens(&[("Where'd", Pos::Unknown), ("they", Pos::Pronoun), ("go", Pos::VerbBase)]);
        let ctx = ContextWindow::new(Some(&toks), 0, 7);
        assert_eq!(
            resolve(&rules, entry, "where'd", "Where'd", &ctx),
            Some("Where did".to_string())
        );
    }

    #[test]
    fn test_aint_subject_agreement() {
        let rules = rules();
        let entry = rules.contractions.ambiguous("ain't").unwrap();

        let toks = tokens(&[("I", Pos::Pronoun), ("ain't", Pos::Unknown), ("done", Pos::VerbParticiple)]);
        let ctx = ContextWindow::new(Some(&toks), 2, 7);
        assert_eq!(
            resolve(&rules, entry, "ain't", "ain't", &ctx),
            Some("have not".to_string())
        );

        let toks = tokens(&[("she", Pos::Pronoun), ("ain't", Pos::Unknown), ("here", Pos::Adverb)]);
        let ctx = ContextWindow::new(Some(&toks), 4, 9);
        assert_eq!(
            resolve(&rules, entry, "ain't", "ain't", &ctx),
            Some("is not".to_string())
        );
    }

    #[test]
    fn test_defaults_without_context() {
        let rules = rules();
        let entry = rules.contractions.ambiguous("it's").unwrap();
        let ctx = ContextWindow::new(None, 0, 4);
        assert_eq!(
            resolve(&rules, entry, "it's", "It's", &ctx),
            Some("It is".to_string())
        );
    }
}
