//! Integration tests for StreetType
//!
//! Tests parsing of written type keywords and their canonical forms.

use streetlink_foundation::ErrorKind;
use streetlink_model::StreetType;

#[test]
fn written_forms() {
    let cases = [
        ("улица", StreetType::Street),
        ("УЛ.", StreetType::Street),
        ("шоссе", StreetType::Highway),
        ("Бульвар", StreetType::Boulevard),
        ("линия", StreetType::Line),
        ("переулок", StreetType::Lane),
        ("площади", StreetType::Square),
        ("проезд", StreetType::Passage),
        ("проспект", StreetType::Avenue),
        ("территория", StreetType::Territory),
    ];
    for (raw, expected) in cases {
        assert_eq!(raw.parse::<StreetType>().unwrap(), expected, "{raw}");
    }
}

#[test]
fn short_names_are_canonical() {
    let shorts: Vec<_> = StreetType::short_names().collect();
    assert_eq!(
        shorts,
        ["Б-Р", "УЛ.", "ЛН.", "ПЕР.", "ПЛ.", "ПР-Д", "ПР-КТ", "Ш.", "ТЕР."]
    );
    for t in StreetType::ALL {
        assert_eq!(t.to_string(), t.short_name());
    }
}

#[test]
fn not_a_type() {
    for raw in ["аллея", "Ленина", "5"] {
        let err = raw.parse::<StreetType>().unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::UnrecognizedStreetType { .. }),
            "{raw}"
        );
    }
}
