//! The address grammar.
//!
//! ```text
//! ADDRESS  = HIGHLEVEL? STREET BUILDING
//! STREET   = TYPE NAME | NAME | NAME TYPE | TERRITORY NAME
//! BUILDING = FULL | FULL FLAT | HOUSE "-" FLAT | FLAT HOUSE
//! FULL     = HOUSE STROENIE? KORPUS? | HOUSE KORPUS STROENIE
//! ```
//!
//! Both grammars are built once and shared.

use std::sync::LazyLock;

use crate::fact::AddressSlot as Slot;
use crate::grammar::{Predicate as P, Rule, alt, seq};
use crate::morph::Grammeme;
use crate::token::TokenKind;

type R = Rule<Slot>;

static ADDRESS: LazyLock<R> = LazyLock::new(build_address);
static STREET_TYPE: LazyLock<R> = LazyLock::new(street_type);

/// The full address grammar.
#[must_use]
pub fn address() -> &'static Rule<Slot> {
    &ADDRESS
}

/// The street type keyword grammar. Fills [`Slot::StreetType`] with the
/// canonical short form.
#[must_use]
pub fn street_type_keyword() -> &'static Rule<Slot> {
    &STREET_TYPE
}

const HOUSE_LETTERS: &[&str] = &["а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и", "й"];

const INITIALS: &[&str] = &[
    "а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и", "к", "л", "м", "н", "о", "п", "р", "с",
    "т", "у", "ф", "х", "ш", "щ", "э", "ю", "я",
];

/// Words that may follow "имени" before the rest of a name.
const SPECIAL_PREFIXES: &[&str] = &[
    "имени",
    "им",
    "протоиерея",
    "партизана",
    "космонавта",
    "карла",
    "розы",
    "максима",
    "командарма",
    "сергея",
    "городского",
    "набережная",
    "соловецких",
    "подстанции",
];

const TERRITORY_PREFIXES: &[&str] = &["тер", "территор", "территория"];

fn ulitsa() -> P {
    P::Normalized("улица").or(P::InCaseless(&["ул", "у"]))
}

fn shosse() -> P {
    P::Normalized("шоссе").or(P::Caseless("ш"))
}

fn bulvar() -> P {
    P::Normalized("бульвар").or(P::InCaseless(&["б-р", "бр", "б"]))
}

fn liniya() -> P {
    P::Normalized("линия").or(P::InCaseless(&["л-н", "лн", "л"]))
}

fn pereulok() -> P {
    P::Normalized("переулок").or(P::InCaseless(&["пер", "пр"]))
}

fn prospect() -> P {
    P::Normalized("проспект").or(P::InCaseless(&["пр-кт", "пр", "пркт"]))
}

fn proezd() -> P {
    P::Normalized("проезд").or(P::InCaseless(&["пр-д", "прд", "пр"]))
}

fn ploshad() -> P {
    P::Normalized("площадь").or(P::InCaseless(&["плщ", "пл"]))
}

fn territoria() -> P {
    P::Normalized("территория").or(P::Caseless("тер"))
}

/// Type keywords in matching order with the short form each stands for.
/// `пр` is claimed by the first keyword that accepts it, the avenue.
const TYPE_KEYWORDS: [(fn() -> P, &str); 9] = [
    (ulitsa, "УЛ."),
    (shosse, "Ш."),
    (bulvar, "Б-Р"),
    (liniya, "ЛН."),
    (prospect, "ПР-КТ"),
    (pereulok, "ПЕР."),
    (proezd, "ПР-Д"),
    (ploshad, "ПЛ."),
    (territoria, "ТЕР."),
];

fn street_type() -> R {
    alt(TYPE_KEYWORDS
        .iter()
        .map(|&(predicate, short)| predicate().rule().constant(Slot::StreetType, short)))
}

fn dom_word() -> P {
    P::Normalized("дом").or(P::Caseless("д"))
}

fn kvartira_word() -> P {
    P::Normalized("квартира").or(P::Caseless("кв"))
}

fn city_word() -> P {
    P::Normalized("город")
        .or(P::Normalized("гор"))
        .or(P::Caseless("г"))
}

fn city_name() -> P {
    P::Normalized("череповец")
}

/// Street type keywords, the territory prefix, house, flat and city markers
/// never belong to a street name.
fn not_keyword() -> P {
    let mut keywords: Vec<P> = TYPE_KEYWORDS.iter().map(|(p, _)| p()).collect();
    keywords.extend([
        P::Dictionary(TERRITORY_PREFIXES),
        dom_word(),
        kvartira_word(),
        city_word(),
        city_name(),
    ]);
    P::Or(keywords).negate()
}

fn number() -> R {
    P::IntRange(0, 1001).rule()
}

fn highlevel() -> R {
    let index = || P::IntRange(100_000, 999_999).rule().capture(Slot::Index);
    let country = || {
        P::Dictionary(&["россия"])
            .or(P::InCaseless(&["рф"]))
            .rule()
            .constant(Slot::Country, "Россия")
    };
    let region_word = || P::Dictionary(&["область", "обл"]).rule();
    let region_name = || P::Dictionary(&["вологодский", "во"]).rule().capture(Slot::Region);
    let region = || {
        alt([
            region_name(),
            seq([region_name(), region_word()]),
            seq([region_word(), region_name()]),
        ])
    };
    let city = || city_name().rule().constant(Slot::City, "Череповец");
    let full_city = || {
        alt([
            seq([city(), city_word().rule()]),
            seq([city_word().rule(), city()]),
            city(),
        ])
    };

    alt([
        seq([index(), country(), region(), full_city()]),
        seq([country(), index(), region(), full_city()]),
        seq([index(), country(), full_city()]),
        seq([index(), region(), full_city()]),
        seq([index(), country()]),
        seq([country(), region(), full_city()]),
        seq([index(), full_city()]),
        seq([region(), full_city()]),
        index(),
        country(),
        full_city(),
        region(),
    ])
}

fn street_name() -> R {
    let noun = || P::Gram(Grammeme::Noun).and(not_keyword()).rule();
    let adjf = || P::Gram(Grammeme::Adjective).and(not_keyword()).rule();
    let anum = || P::Kind(TokenKind::AlphaNumeric).rule();
    let imeni = || P::Dictionary(&["имени", "им"]).rule();
    let special = || P::Dictionary(SPECIAL_PREFIXES).rule();
    let surname = || P::Gram(Grammeme::Surname).rule();
    let first_name = || P::Gram(Grammeme::FirstName).rule();
    let initial = || P::InCaseless(INITIALS).rule();
    let person = || {
        alt([
            seq([initial(), surname()]),
            seq([first_name(), surname()]),
            seq([surname(), first_name()]),
            surname(),
        ])
    };

    alt([
        seq([anum(), alt([adjf(), noun()])]),
        seq([adjf(), noun()]),
        noun(),
        seq([imeni(), person()]),
        seq([person(), imeni()]),
        seq([noun(), noun()]),
        seq([adjf(), adjf()]),
        adjf(),
        anum(),
        person(),
        seq([noun(), adjf()]),
        seq([adjf(), noun()]),
        seq([imeni(), special(), noun()]),
        seq([imeni(), special(), adjf()]),
        seq([imeni(), special(), noun(), noun()]),
        seq([imeni(), special(), adjf(), noun()]),
        seq([imeni(), special(), noun(), adjf()]),
        seq([imeni(), special(), adjf(), adjf()]),
    ])
    .capture(Slot::StreetName)
}

fn street() -> R {
    let territory = P::Dictionary(TERRITORY_PREFIXES)
        .rule()
        .constant(Slot::Territory, "");
    alt([
        seq([street_type(), street_name()]),
        street_name(),
        seq([street_name(), street_type()]),
        seq([territory, street_name()]),
    ])
}

fn building() -> R {
    let letter = || P::InCaseless(HOUSE_LETTERS).rule().optional();
    let dom_number = || {
        alt([
            seq([number(), letter(), P::Eq("/").rule(), number(), letter()]),
            seq([number(), letter()]),
        ])
        .capture(Slot::House)
    };
    let dom = || {
        alt([
            dom_number(),
            seq([dom_word().rule(), dom_number()]),
            seq([dom_number(), dom_word().rule()]),
        ])
    };
    let korpus = || {
        seq([
            P::InCaseless(&["корпус", "корп", "кор", "к"]).rule(),
            number().capture(Slot::Corpus),
        ])
    };
    let stroenie = || {
        seq([
            P::InCaseless(&["строение", "стр", "с"]).rule(),
            number().capture(Slot::Stroenie),
        ])
    };
    let kvartira = || {
        let flat = || number().capture(Slot::Flat);
        // After an explicit flat word any integer is the flat, however large.
        let marked = P::Kind(TokenKind::Integer).rule().capture(Slot::Flat);
        alt([
            flat(),
            seq([kvartira_word().rule(), marked]),
            seq([flat(), kvartira_word().rule()]),
        ])
    };
    let full = || {
        alt([
            seq([dom(), stroenie().optional(), korpus().optional()]),
            seq([dom(), korpus(), stroenie()]),
        ])
    };

    alt([
        full(),
        seq([full(), kvartira()]),
        seq([dom(), P::Eq("-").rule(), kvartira()]),
        seq([kvartira(), dom()]),
    ])
}

fn build_address() -> R {
    seq([highlevel().optional(), street(), building()])
}
