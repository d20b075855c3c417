//! Token model and the external annotation boundary
//!
//! Tokenization and part-of-speech tagging are consumed capabilities, not
//! implemented ones: the pipeline talks to a [`Annotator`] trait object and
//! works with whatever tags it is given. [`PlainAnnotator`] is the shipped
//! degraded default, sufficient for structural casing and the documented
//! default expansions.

use crate::error::Result;
use crate::text;

/// Part-of-speech tag for a token
///
/// A closed set covering exactly the distinctions the resolution rules
/// consume. Annotators map their native tag sets onto these variants;
/// anything without a counterpart becomes [`Pos::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Pronoun
    Pronoun,
    /// Base/infinitive verb form ("go")
    VerbBase,
    /// Present-tense verb form ("goes", "go" after a subject)
    VerbPresent,
    /// Past-tense verb form ("went")
    VerbPast,
    /// Past participle ("gone", "eaten")
    VerbParticiple,
    /// Gerund or present participle ("going")
    VerbGerund,
    /// Modal verb ("would", "can")
    Modal,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Determiner ("a", "the")
    Determiner,
    /// Wh-determiner ("what", "which")
    WhDeterminer,
    /// Preposition or subordinating conjunction
    Preposition,
    /// Coordinating conjunction ("and", "or")
    CoordConj,
    /// Particle ("up" in "give up")
    Particle,
    /// Infinitive marker "to"
    InfinitiveTo,
    /// Numeral
    Number,
    /// Interjection
    Interjection,
    /// Punctuation
    Punct,
    /// Whitespace-only token
    Space,
    /// No tag available
    Unknown,
}

impl Pos {
    /// Past or past-participle verb form
    pub fn is_participle(self) -> bool {
        matches!(self, Pos::VerbPast | Pos::VerbParticiple)
    }

    /// Any verb form, including modals
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            Pos::VerbBase
                | Pos::VerbPresent
                | Pos::VerbPast
                | Pos::VerbParticiple
                | Pos::VerbGerund
                | Pos::Modal
        )
    }

    /// Tags that can head a subject phrase
    pub fn is_subject_like(self) -> bool {
        matches!(self, Pos::Pronoun | Pos::ProperNoun | Pos::Noun)
    }

    /// Tags lowercased in title case unless position dictates otherwise
    pub fn is_title_minor(self) -> bool {
        matches!(
            self,
            Pos::Determiner
                | Pos::WhDeterminer
                | Pos::Preposition
                | Pos::CoordConj
                | Pos::Particle
                | Pos::InfinitiveTo
        )
    }

    /// Coarse class string used by rule-table POS sequences
    pub fn coarse(self) -> &'static str {
        match self {
            Pos::Noun => "NOUN",
            Pos::ProperNoun => "PROPN",
            Pos::Pronoun => "PRON",
            Pos::VerbBase
            | Pos::VerbPresent
            | Pos::VerbPast
            | Pos::VerbParticiple
            | Pos::VerbGerund
            | Pos::Modal => "VERB",
            Pos::Adjective => "ADJ",
            Pos::Adverb => "ADV",
            Pos::Determiner | Pos::WhDeterminer => "DET",
            Pos::Preposition => "ADP",
            Pos::CoordConj => "CCONJ",
            Pos::Particle | Pos::InfinitiveTo => "PART",
            Pos::Number => "NUM",
            Pos::Interjection => "INTJ",
            Pos::Punct => "PUNCT",
            Pos::Space => "SPACE",
            Pos::Unknown => "X",
        }
    }
}

/// A single annotated token
///
/// Ephemeral: created per conversion call and owned by the annotation result.
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Lemma (lowercased surface when the annotator has nothing better)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: Pos,
    /// Byte offset of the token start in the source text
    pub start: usize,
    /// True for the first word token of each sentence
    pub sent_start: bool,
    /// Whitespace between this token and the next
    pub trailing_ws: String,
}

impl Token {
    /// Build a word token
    pub fn word(text: impl Into<String>, pos: Pos, start: usize) -> Self {
        let text = text.into();
        Token {
            lemma: text.to_lowercase(),
            text,
            pos,
            start,
            sent_start: false,
            trailing_ws: String::new(),
        }
    }

    /// Byte offset one past the token end in the source text
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whitespace-only token
    pub fn is_space(&self) -> bool {
        self.pos == Pos::Space
    }

    /// Punctuation token
    pub fn is_punct(&self) -> bool {
        self.pos == Pos::Punct || (self.pos == Pos::Unknown && !self.text.chars().any(text::is_word_char))
    }

    /// Word token (not whitespace, not punctuation)
    pub fn is_word(&self) -> bool {
        !self.is_space() && !self.is_punct()
    }
}

/// External tokenization and tagging capability
///
/// Implementations must be deterministic for identical input. A test double
/// substituting fixture tags is enough to drive every context-gated rule.
pub trait Annotator: Send + Sync {
    /// Tokenize `text` and annotate each token with lemma, tag, sentence
    /// start, and trailing whitespace.
    fn annotate(&self, text: &str) -> Result<Vec<Token>>;
}

/// Degraded built-in annotator
///
/// Deterministic segmentation along whitespace and punctuation with
/// apostrophes kept inside words, sentence starts after terminal punctuation,
/// and no part-of-speech information. Context-gated rules fall back to their
/// documented defaults under this annotator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAnnotator;

impl PlainAnnotator {
    /// Create a new plain annotator
    pub fn new() -> Self {
        PlainAnnotator
    }
}

impl Annotator for PlainAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut pending_sentence = true;
        let mut i = 0;

        while i < chars.len() {
            let (start, ch) = chars[i];

            if ch.is_whitespace() {
                let mut j = i;
                while j < chars.len() && chars[j].1.is_whitespace() {
                    j += 1;
                }
                let end = slice_end(text, &chars, j);
                match tokens.last_mut() {
                    Some(last) => last.trailing_ws.push_str(&text[start..end]),
                    None => tokens.push(Token {
                        text: text[start..end].to_string(),
                        lemma: String::new(),
                        pos: Pos::Space,
                        start,
                        sent_start: false,
                        trailing_ws: String::new(),
                    }),
                }
                i = j;
                continue;
            }

            if ch.is_alphanumeric() {
                let mut j = i + 1;
                while j < chars.len() {
                    let c = chars[j].1;
                    if c.is_alphanumeric() {
                        j += 1;
                    } else if text::is_apostrophe(c)
                        && chars[j - 1].1.is_alphanumeric()
                        && chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric())
                    {
                        j += 1;
                    } else {
                        break;
                    }
                }
                let end = slice_end(text, &chars, j);
                let surface = &text[start..end];
                let pos = if surface.chars().all(|c| c.is_ascii_digit()) {
                    Pos::Number
                } else {
                    Pos::Unknown
                };
                let mut token = Token::word(surface, pos, start);
                token.sent_start = pending_sentence;
                pending_sentence = false;
                tokens.push(token);
                i = j;
                continue;
            }

            // Single punctuation character.
            let end = slice_end(text, &chars, i + 1);
            if matches!(ch, '.' | '!' | '?' | '\u{2026}') {
                pending_sentence = true;
            }
            tokens.push(Token {
                text: text[start..end].to_string(),
                lemma: text[start..end].to_lowercase(),
                pos: Pos::Punct,
                start,
                sent_start: false,
                trailing_ws: String::new(),
            });
            i += 1;
        }

        Ok(tokens)
    }
}

fn slice_end(text: &str, chars: &[(usize, char)], idx: usize) -> usize {
    chars.get(idx).map_or(text.len(), |&(offset, _)| offset)
}

/// Annotate, degrading to `None` when the capability is unavailable.
pub(crate) fn try_annotate(annotator: &dyn Annotator, text: &str) -> Option<Vec<Token>> {
    match annotator.annotate(text) {
        Ok(tokens) => Some(tokens),
        Err(err) => {
            let err = crate::error::CoreError::UnsupportedContext(err.to_string());
            tracing::warn!(%err, "degrading to context-free defaults");
            None
        }
    }
}

/// Annotate, degrading to the plain annotator when the capability is
/// unavailable.
pub(crate) fn annotate_or_plain(annotator: &dyn Annotator, text: &str) -> Vec<Token> {
    try_annotate(annotator, text)
        .or_else(|| PlainAnnotator::new().annotate(text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokenization() {
        let tokens = PlainAnnotator::new().annotate("Don't stop.").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Don't", "stop", "."]);
        assert!(tokens[0].sent_start);
        assert!(!tokens[1].sent_start);
        assert_eq!(tokens[0].trailing_ws, " ");
    }

    #[test]
    fn test_sentence_starts() {
        let tokens = PlainAnnotator::new().annotate("One. Two! three").unwrap();
        let starts: Vec<(&str, bool)> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| (t.text.as_str(), t.sent_start))
            .collect();
        assert_eq!(starts, vec![("One", true), ("Two", true), ("three", true)]);
    }

    #[test]
    fn test_offsets_reconstruct_text() {
        let text = "  leading, and trailing  ";
        let tokens = PlainAnnotator::new().annotate(text).unwrap();
        let rebuilt: String = tokens
            .iter()
            .map(|t| format!("{}{}", t.text, t.trailing_ws))
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_quote_not_joined() {
        let tokens = PlainAnnotator::new().annotate("said 'hello'").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["said", "'", "hello", "'"]);
    }
}
