//! Integration tests for the public API surface

use wordform_api::{
    convert_case, expand_contractions, resolve_entity_casing, Annotator, CaseFormat, Error,
    Normalizer, PlainAnnotator, Pos, Token,
};

#[test]
fn test_convert_case() {
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(
        normalizer
            .convert_case(CaseFormat::Title, "the lord of the rings")
            .unwrap(),
        "The Lord of the Rings"
    );
    assert_eq!(
        normalizer
            .convert_case(CaseFormat::Snake, "Hello Brave World")
            .unwrap(),
        "hello_brave_world"
    );
}

#[test]
fn test_expand_contractions() {
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(
        normalizer.expand_contractions("I don't know").unwrap(),
        "I do not know"
    );
    assert_eq!(
        normalizer.expand_contractions("It's fine").unwrap(),
        "It is fine"
    );
}

#[test]
fn test_resolve_entity_casing() {
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(
        normalizer.resolve_entity_casing("new york").unwrap(),
        "New York"
    );
}

#[test]
fn test_empty_input_is_rejected() {
    let normalizer = Normalizer::new().unwrap();
    for text in ["", "   ", "\n\t"] {
        assert!(matches!(
            normalizer.convert_case(CaseFormat::Title, text),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            normalizer.expand_contractions(text),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            normalizer.resolve_entity_casing(text),
            Err(Error::InvalidInput(_))
        ));
    }
}

/// Annotator double tagging a fixed set of words.
struct ParticipleAnnotator;

impl Annotator for ParticipleAnnotator {
    fn annotate(&self, text: &str) -> wordform_core::Result<Vec<Token>> {
        let mut tokens = PlainAnnotator::new().annotate(text)?;
        for token in &mut tokens {
            if token.lemma == "eaten" {
                token.pos = Pos::VerbParticiple;
            }
        }
        Ok(tokens)
    }
}

#[test]
fn test_builder_custom_annotator() {
    let normalizer = Normalizer::builder()
        .annotator(ParticipleAnnotator)
        .build()
        .unwrap();
    assert_eq!(
        normalizer.expand_contractions("I'd eaten").unwrap(),
        "I had eaten"
    );
}

#[test]
fn test_builder_missing_rules_dir_fails() {
    let result = Normalizer::builder()
        .rules_dir("/nonexistent/rules/path")
        .build();
    assert!(matches!(result, Err(Error::Core(_))));
}

#[test]
fn test_convenience_functions() {
    assert_eq!(
        convert_case(CaseFormat::Kebab, "hello world").unwrap(),
        "hello-world"
    );
    assert_eq!(expand_contractions("can't stop").unwrap(), "cannot stop");
    assert_eq!(
        resolve_entity_casing("visit san francisco").unwrap(),
        "visit San Francisco"
    );
}

#[test]
fn test_case_format_parsing_and_serialization() {
    let format: CaseFormat = "kebab".parse().unwrap();
    assert_eq!(format, CaseFormat::Kebab);

    let json = serde_json::to_string(&CaseFormat::Snake).unwrap();
    assert_eq!(json, "\"snake\"");
    let back: CaseFormat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, CaseFormat::Snake);
}
