//! Full address parsing tests.

use streetlink_foundation::ErrorKind;
use streetlink_parser::{AddressFact, AddressParser};

fn parse(input: &str) -> AddressFact {
    AddressParser::new()
        .parse(input)
        .unwrap_or_else(|e| panic!("{input:?}: {e}"))
}

fn street_of(fact: &AddressFact) -> (String, Option<String>) {
    let street = fact.street.clone().unwrap();
    (street.name, street.street_type)
}

#[test]
fn every_type_keyword_before_the_name() {
    let cases = [
        ("ул. Ленина 5", "УЛ."),
        ("пр-кт Победы 10", "ПР-КТ"),
        ("б-р Доменщиков 12", "Б-Р"),
        ("пер. Советский 3", "ПЕР."),
        ("ш. Кирилловское 50", "Ш."),
        ("пл. Металлургов 5", "ПЛ."),
    ];
    for (input, expected) in cases {
        let fact = parse(input);
        assert_eq!(street_of(&fact).1.as_deref(), Some(expected), "{input}");
    }
}

#[test]
fn full_postal_form() {
    let fact = parse("162600, Россия, Вологодская обл., г. Череповец, пр-кт Победы, д. 10А/5Б, кв. 15");
    assert_eq!(fact.index.as_deref(), Some("162600"));
    assert_eq!(fact.city.as_deref(), Some("Череповец"));
    assert_eq!(
        street_of(&fact),
        ("Победы".to_string(), Some("ПР-КТ".to_string()))
    );
    assert_eq!(fact.house.as_deref(), Some("10А/5Б"));
    assert_eq!(fact.flat_number(), Ok(Some(15)));
}

#[test]
fn untyped_short_form() {
    let fact = parse("Металлургов 2 48");
    assert_eq!(street_of(&fact), ("Металлургов".to_string(), None));
    assert_eq!(fact.full_house().as_deref(), Some("2"));
    assert_eq!(fact.flat_number(), Ok(Some(48)));
}

#[test]
fn multi_word_names_keep_single_spaces() {
    let fact = parse("ул.   имени    Карла Маркса,  д. 12");
    assert_eq!(street_of(&fact).0, "имени Карла Маркса");
}

#[test]
fn non_addresses_are_rejected() {
    for input in ["", "   ", "просто текст", "12345"] {
        let err = AddressParser::new().parse(input).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Unparseable { .. }),
            "{input:?}"
        );
    }
}
