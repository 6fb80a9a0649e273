//! Abbreviated and misspelled street names.

use streetlink_foundation::CasePolicy;
use streetlink_linker::{Abbreviations, StreetsFinder};
use streetlink_model::{Address, Street, StreetType};

use crate::city;

#[test]
fn abbreviated_spellings_find_the_same_street() {
    let linker = city();
    let canonical = Street::typed("ИМЕНИ КАРЛА МАРКСА", StreetType::Street);
    for written in [
        "Имени Карла Маркса",
        "им. Карла Маркса",
        "им Карла Маркса",
        "Карла Маркса",
        "имени К. Маркса",
    ] {
        let found = linker
            .finder()
            .find(&Street::untyped(written), CasePolicy::Upper);
        assert_eq!(found, [canonical.clone()], "{written}");
    }
}

#[test]
fn abbreviated_spelling_links() {
    let address = Address::new(Street::untyped("им. К. Маркса"), "12 к. 2", Some(5));
    assert_eq!(city().link(&address, true).unwrap(), 501);
}

#[test]
fn raw_abbreviated_address_resolves() {
    let resolution = city()
        .resolve("ул. Карла Маркса, д. 12, корп. 2, кв. 5", true)
        .unwrap();
    assert_eq!(resolution.key, 501);
}

#[test]
fn misspellings_within_cutoff() {
    let linker = city();
    for written in ["Металургов", "Металлургав", "МЕТАЛЛУРГОВ "] {
        let found = linker
            .finder()
            .get_variants(written, CasePolicy::Upper);
        assert_eq!(found.len(), 2, "{written}");
    }
}

#[test]
fn custom_abbreviation_table() {
    let abbreviations = Abbreviations::from_table(&[("ПОБЕДЫ", &["ПОБ."])]);
    let mut finder = StreetsFinder::with_abbreviations(&Default::default(), abbreviations.into());
    finder.append(&Street::typed("ПОБЕДЫ", StreetType::Avenue));
    assert_eq!(
        finder.find(&Street::untyped("поб."), CasePolicy::Upper),
        [Street::typed("ПОБЕДЫ", StreetType::Avenue)]
    );
}
