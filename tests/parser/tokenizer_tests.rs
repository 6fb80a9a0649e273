//! Tokenizer tests.
//!
//! Tests for converting raw addresses to token streams.

use streetlink_parser::{TokenKind, Tokenizer};

fn texts(input: &str) -> Vec<String> {
    Tokenizer::default()
        .tokenize(input)
        .into_iter()
        .map(|t| t.text)
        .collect()
}

#[test]
fn tokenize_full_address() {
    assert_eq!(
        texts("162600, г. Череповец, пр-кт Победы, д. 10А/5Б, кв. 15"),
        [
            "162600", "г", "Череповец", "пр-кт", "Победы", "д", "10", "А", "/", "5", "Б", "кв",
            "15"
        ]
    );
}

#[test]
fn tokenize_kinds() {
    let tokens = Tokenizer::default().tokenize("50-летия ул 7");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [TokenKind::AlphaNumeric, TokenKind::Word, TokenKind::Integer]
    );
}

#[test]
fn separators_are_dropped() {
    assert_eq!(texts("ул.,Ленина;;д.5"), ["ул", "Ленина", "д", "5"]);
}

#[test]
fn numbers_have_values_and_no_readings() {
    let tokens = Tokenizer::default().tokenize("ул 64");
    assert_eq!(tokens[1].value(), Some(64));
    assert!(tokens[1].parses.is_empty());
    assert!(!tokens[0].parses.is_empty());
}
