//! Integration tests for Address
//!
//! Tests parsing raw text into addresses and rendering them back.

use proptest::prelude::*;
use streetlink_foundation::ErrorKind;
use streetlink_model::{Address, Street, StreetType};

#[test]
fn parse_full_postal_address() {
    let address: Address = "162600, Россия, Вологодская обл., г. Череповец, пр-кт Победы, д. 10А/5Б, кв. 15"
        .parse()
        .unwrap();
    assert_eq!(address.street, Street::typed("Победы", StreetType::Avenue));
    assert_eq!(address.house, "10А/5Б");
    assert_eq!(address.flat, Some(15));
}

#[test]
fn parse_without_flat() {
    let address: Address = "пл. Металлургов, д. 5".parse().unwrap();
    assert_eq!(address.street, Street::typed("Металлургов", StreetType::Square));
    assert_eq!(address.house, "5");
    assert_eq!(address.flat, None);
}

#[test]
fn non_address_is_unparseable() {
    for raw in ["", "просто текст", "кв. 5"] {
        let err = raw.parse::<Address>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unparseable { .. }), "{raw:?}");
    }
}

#[test]
fn clones_are_independent() {
    let original: Address = "Металлургов 2 48".parse().unwrap();
    let mut copy = original.clone();
    copy.street.name.push('!');
    copy.flat = None;
    assert_eq!(original.street.name, "Металлургов");
    assert_eq!(original.flat, Some(48));
}

#[test]
fn rendering() {
    let address = Address::new(Street::typed("Ленина", StreetType::Street), "5 К. 2", Some(7));
    assert_eq!(address.to_string(), "УЛ., Ленина, 5 К. 2, 7");
    let untyped = Address::new(Street::untyped("Металлургов"), "2", None);
    assert_eq!(untyped.to_string(), "Металлургов, 2");
}

const NAMES: &[&str] = &["Ленина", "Металлургов", "Победы", "Гагарина", "Мира"];

proptest! {
    #[test]
    fn parsing_a_rendering_is_idempotent(
        name in prop::sample::select(NAMES),
        street_type in prop::option::of(prop::sample::select(StreetType::ALL.to_vec())),
        house in 1u32..=300,
        flat in prop::option::of(1u32..=500),
    ) {
        let address = Address::new(Street::new(name, street_type), house.to_string(), flat);
        let once: Address = address.to_string().parse().unwrap();
        let twice: Address = once.to_string().parse().unwrap();
        prop_assert_eq!(&once, &address);
        prop_assert_eq!(once, twice);
    }
}
