//! Resolution tests.
//!
//! Raw and structured addresses resolved to keys.

use streetlink_foundation::ErrorKind;
use streetlink_linker::{Linker, LinkerConfig, ReferenceRow};
use streetlink_model::{Address, Street, StreetType};

use crate::city;

#[test]
fn metallurgov_scenario() {
    let linker = Linker::from_rows(
        [
            ReferenceRow::new(Some(StreetType::Street), "МЕТАЛЛУРГОВ", "2", 101).with_flats(1, 48),
            ReferenceRow::new(Some(StreetType::Square), "МЕТАЛЛУРГОВ", "5", 202).with_flats(1, 60),
        ],
        LinkerConfig::default(),
    );
    let address: Address = "Металлургов 2 48".parse().unwrap();
    assert_eq!(linker.link(&address, true).unwrap(), 101);
}

#[test]
fn canonical_rows_round_trip() {
    let linker = city();
    for row in linker.table().rows() {
        let address = Address::new(row.street(), row.house.clone(), None);
        if linker.table().lookup(&row.name, &row.house).len() == 1 {
            assert_eq!(linker.link(&address, false).unwrap(), row.key, "{address}");
        }
        let flat = row.flat_start.map(|f| u32::try_from(f).unwrap());
        assert_eq!(
            linker.link(&address.with_flat(flat), true).unwrap(),
            row.key,
            "{address}"
        );
    }
}

#[test]
fn flat_range_bounds() {
    let linker = city();
    let at = |flat| Address::new(Street::untyped("Ленина"), "5", Some(flat));
    assert_eq!(linker.link(&at(21), true).unwrap(), 302);
    assert_eq!(linker.link(&at(30), true).unwrap(), 302);
    assert_eq!(linker.link(&at(40), true).unwrap(), 302);
    assert_eq!(linker.link(&at(20), true).unwrap(), 301);
    assert_eq!(
        linker.link(&at(41), true).unwrap_err().kind,
        ErrorKind::NoSuitableFlatRange { flat: 41 }
    );
}

#[test]
fn flat_outside_a_single_range() {
    let linker = city();
    let at = |flat| Address::new(Street::typed("Металлургов", StreetType::Street), "2", Some(flat));
    assert_eq!(linker.link(&at(1), true).unwrap(), 101);
    assert_eq!(linker.link(&at(48), true).unwrap(), 101);
    assert!(linker.link(&at(49), true).unwrap_err().kind.is_not_in_reference());
    assert_eq!(linker.link(&at(49), false).unwrap(), 101);
    assert!(linker.link(&at(0), true).is_err());
}

#[test]
fn resolve_keeps_the_written_flat() {
    let resolution = city().resolve("ул. Ленина, д. 5, кв. 25", true).unwrap();
    assert_eq!(resolution.key, 302);
    assert_eq!(resolution.address.street.name, "ЛЕНИНА");
    assert_eq!(resolution.address.flat, Some(25));
}

#[test]
fn resolve_full_postal_form() {
    let resolution = city()
        .resolve(
            "162600, Россия, Вологодская обл., г. Череповец, пр-кт Победы, д. 10А/5Б, кв. 15",
            true,
        )
        .unwrap();
    assert_eq!(resolution.key, 401);
}

#[test]
fn resolve_territory() {
    let resolution = city().resolve("территор Промзона 4", true).unwrap();
    assert_eq!(resolution.key, 601);
    assert_eq!(resolution.address.street.street_type, Some(StreetType::Territory));
}

#[test]
fn house_case_follows_the_dataset() {
    let address = Address::new(Street::untyped("Победы"), "10а/5б", Some(3));
    assert_eq!(city().link(&address, true).unwrap(), 401);
}

#[test]
fn ambiguity_without_a_flat() {
    let address = Address::new(Street::untyped("Ленина"), "5", None);
    let err = city().link(&address, true).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnresolvedAmbiguity { candidates: 2 });
}

#[test]
fn ambiguity_without_a_type() {
    // Both Металлургов streets have house 7 and no flat pins either down.
    let linker = Linker::from_rows(
        [
            ReferenceRow::new(Some(StreetType::Street), "МЕТАЛЛУРГОВ", "7", 1),
            ReferenceRow::new(Some(StreetType::Square), "МЕТАЛЛУРГОВ", "7", 2),
        ],
        LinkerConfig::default(),
    );
    let untyped = Address::new(Street::untyped("Металлургов"), "7", None);
    let err = linker.link(&untyped, true).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnresolvedAmbiguity { candidates: 2 });

    let typed = untyped.with_street(Street::typed("Металлургов", StreetType::Square));
    assert_eq!(linker.link(&typed, true).unwrap(), 2);
}

#[test]
fn flat_disambiguates_types_without_a_type() {
    let linker = Linker::from_rows(
        [
            ReferenceRow::new(Some(StreetType::Street), "ПОБЕДЫ", "7", 1).with_flats(1, 10),
            ReferenceRow::new(Some(StreetType::Avenue), "ПОБЕДЫ", "7", 2).with_flats(11, 20),
        ],
        LinkerConfig::default(),
    );
    let at = |flat| Address::new(Street::untyped("Победы"), "7", flat);
    assert_eq!(linker.link(&at(Some(3)), true).unwrap(), 1);
    assert_eq!(linker.link(&at(Some(15)), true).unwrap(), 2);
    assert_eq!(
        linker.link(&at(None), true).unwrap_err().kind,
        ErrorKind::UnresolvedAmbiguity { candidates: 2 }
    );

    // A flat outside every range is reported the same way with or without
    // a type.
    let untyped = linker.link(&at(Some(30)), true).unwrap_err();
    assert_eq!(untyped.kind, ErrorKind::NoSuitableFlatRange { flat: 30 });
    assert!(untyped.kind.is_not_in_reference());
    let typed = at(Some(30)).with_street(Street::typed("Победы", StreetType::Avenue));
    assert_eq!(linker.link(&typed, true).unwrap_err().kind, untyped.kind);
}

#[test]
fn flat_too_large_is_not_dropped() {
    let linker = city();
    assert_eq!(
        linker.resolve("ул. Ленина, д. 5, кв. 45", true).unwrap_err().kind,
        ErrorKind::NoSuitableFlatRange { flat: 45 }
    );
    assert_eq!(
        linker.resolve("ул. Ленина, д. 5, кв. 5000000000", true).unwrap_err().kind,
        ErrorKind::Unparseable {
            input: "5000000000".into()
        }
    );
}

#[test]
fn several_streets_heuristic_takes_the_only_unique_one() {
    // Heuristic: with several canonical streets, candidates matching more
    // than one row are dropped before counting. Here УЛ. has two rows for
    // house 3 and ПЛ. has one, so ПЛ. wins even though УЛ. also matched.
    let linker = Linker::from_rows(
        [
            ReferenceRow::new(Some(StreetType::Street), "МЕТАЛЛУРГОВ", "3", 1),
            ReferenceRow::new(Some(StreetType::Street), "МЕТАЛЛУРГОВ", "3", 2),
            ReferenceRow::new(Some(StreetType::Square), "МЕТАЛЛУРГОВ", "3", 3),
        ],
        LinkerConfig::default(),
    );
    let address = Address::new(Street::untyped("Металлургов"), "3", None);
    assert_eq!(linker.link(&address, true).unwrap(), 3);
}

#[test]
fn several_streets_without_any_unique_row() {
    let address = Address::new(Street::untyped("Металлургов"), "99", None);
    let err = city().link(&address, true).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotInReference);
}

#[test]
fn typed_query_with_no_such_type() {
    let address = Address::new(Street::typed("Металлургов", StreetType::Avenue), "2", None);
    let err = city().link(&address, true).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NormalizationFailed { .. }));
}

#[test]
fn failures_are_typed() {
    let linker = city();
    let unknown = Address::new(Street::untyped("Щорса"), "1", None);
    assert!(matches!(
        linker.link(&unknown, true).unwrap_err().kind,
        ErrorKind::NormalizationFailed { .. }
    ));
    assert!(matches!(
        linker.resolve("совсем не адрес", true).unwrap_err().kind,
        ErrorKind::Unparseable { .. }
    ));
    assert_eq!(linker.get_key(&unknown, true), None);
    assert_eq!(linker.get_key_or(&unknown, true, 0), 0);
}

#[test]
fn get_value_by_key() {
    let linker = city();
    let value = linker.get_value(501).unwrap();
    assert_eq!(value.to_string(), "УЛ., ИМЕНИ КАРЛА МАРКСА, 12 К. 2");
    assert_eq!(linker.get_value(0), None);
}
