//! Grammar combinator tests.
//!
//! Builds small grammars from predicates and rules and matches them against
//! tokenized input.

use streetlink_parser::grammar::{alt, seq};
use streetlink_parser::{Predicate, Rule, TokenKind, Tokenizer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Word,
    Number,
    Tag,
}

fn tokens(input: &str) -> Vec<streetlink_parser::Token> {
    Tokenizer::default().tokenize(input)
}

fn word_then_number() -> Rule<Slot> {
    seq([
        Predicate::Kind(TokenKind::Word)
            .rule()
            .repeat(1, None)
            .capture(Slot::Word),
        Predicate::Kind(TokenKind::Integer).rule().capture(Slot::Number),
    ])
}

#[test]
fn prefix_match_leaves_rest() {
    let input = tokens("Карла Маркса 12 кв 4");
    let m = word_then_number().match_prefix(&input).unwrap();
    assert_eq!(m.len, 3);
    let words = m.get(Slot::Word).unwrap();
    let texts: Vec<_> = words.tokens(&input).iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Карла", "Маркса"]);
}

#[test]
fn exact_match_needs_every_token() {
    let rule = word_then_number();
    assert!(rule.match_exact(&tokens("Карла Маркса 12")).is_some());
    assert!(rule.match_exact(&tokens("Карла Маркса 12 кв 4")).is_none());
}

#[test]
fn optional_and_constant() {
    let rule = seq([
        Predicate::Caseless("д").rule().optional(),
        Predicate::Kind(TokenKind::Integer).rule().capture(Slot::Number),
    ])
    .constant(Slot::Tag, "HOUSE");

    for input in ["д 5", "5"] {
        let m = rule.match_exact(&tokens(input)).unwrap();
        assert_eq!(m.get(Slot::Tag).unwrap().value, Some("HOUSE"), "{input}");
        assert!(m.has(Slot::Number));
    }
}

#[test]
fn alternatives_prefer_longest() {
    let rule: Rule<Slot> = alt([
        Predicate::Kind(TokenKind::Word).rule(),
        seq([
            Predicate::Kind(TokenKind::Word).rule(),
            Predicate::Kind(TokenKind::Word).rule(),
        ]),
    ]);
    assert_eq!(rule.match_prefix(&tokens("Карла Маркса")).unwrap().len, 2);
}

#[test]
fn negated_predicates() {
    let not_number = Predicate::Kind(TokenKind::Integer).negate();
    let rule: Rule<Slot> = not_number.rule().repeat(1, None);
    assert_eq!(rule.match_prefix(&tokens("ул Ленина 5")).unwrap().len, 2);
    assert!(rule.match_prefix(&tokens("5 Ленина")).is_none());
}
