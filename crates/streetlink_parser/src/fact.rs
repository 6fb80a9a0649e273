//! Structured parse output.
//!
//! A grammar [`Match`] only records token ranges. [`AddressFact`] turns those
//! ranges into text: multi-word street names are joined with single spaces,
//! house numbers are glued together without spaces (`10А/5Б`).

use streetlink_foundation::{Error, Result};

use crate::grammar::Match;
use crate::token::Token;

/// Slots filled by the address grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressSlot {
    /// Postal index.
    Index,
    /// Country, always the constant `Россия`.
    Country,
    /// Region name as written.
    Region,
    /// City, always the constant `Череповец`.
    City,
    /// Street name.
    StreetName,
    /// Canonical street type short form, e.g. `УЛ.`.
    StreetType,
    /// Territory prefix seen before the street name.
    Territory,
    /// House number with letter and slash parts.
    House,
    /// Corpus number.
    Corpus,
    /// Stroenie number.
    Stroenie,
    /// Flat number.
    Flat,
}

/// Short form the territory prefix stands for.
pub const TERRITORY_TYPE: &str = "ТЕР.";

/// Street part of an address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreetFact {
    /// Street name as written, words joined by single spaces.
    pub name: String,
    /// Canonical type short form, if any.
    pub street_type: Option<String>,
}

/// Every part the address grammar can recognize.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressFact {
    /// Postal index.
    pub index: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Region.
    pub region: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street.
    pub street: Option<StreetFact>,
    /// House number, without corpus and stroenie.
    pub house: Option<String>,
    /// Corpus number.
    pub corpus: Option<String>,
    /// Stroenie number.
    pub stroenie: Option<String>,
    /// Flat number.
    pub flat: Option<String>,
}

impl AddressFact {
    /// Builds a fact from a match over `tokens`.
    #[must_use]
    pub fn from_match(m: &Match<AddressSlot>, tokens: &[Token]) -> Self {
        let spaced = |slot| slot_text(m, tokens, slot, " ");
        let glued = |slot| slot_text(m, tokens, slot, "");

        let street = spaced(AddressSlot::StreetName).map(|name| {
            let street_type = glued(AddressSlot::StreetType).or_else(|| {
                m.has(AddressSlot::Territory)
                    .then(|| TERRITORY_TYPE.to_string())
            });
            StreetFact { name, street_type }
        });

        Self {
            index: glued(AddressSlot::Index),
            country: glued(AddressSlot::Country),
            region: spaced(AddressSlot::Region),
            city: glued(AddressSlot::City),
            street,
            house: glued(AddressSlot::House),
            corpus: glued(AddressSlot::Corpus),
            stroenie: glued(AddressSlot::Stroenie),
            flat: glued(AddressSlot::Flat),
        }
    }

    /// House text with corpus and stroenie folded in: `10 К. 2 СТР. 1`.
    #[must_use]
    pub fn full_house(&self) -> Option<String> {
        let mut house = self.house.clone()?;
        if let Some(corpus) = &self.corpus {
            house.push_str(" К. ");
            house.push_str(corpus);
        }
        if let Some(stroenie) = &self.stroenie {
            house.push_str(" СТР. ");
            house.push_str(stroenie);
        }
        Some(house)
    }

    /// Flat as a number.
    ///
    /// # Errors
    ///
    /// [`Error::unparseable`] when the captured flat does not fit a `u32`.
    pub fn flat_number(&self) -> Result<Option<u32>> {
        self.flat
            .as_deref()
            .map(|flat| flat.parse().map_err(|_| Error::unparseable(flat)))
            .transpose()
    }
}

fn slot_text(
    m: &Match<AddressSlot>,
    tokens: &[Token],
    slot: AddressSlot,
    separator: &str,
) -> Option<String> {
    let capture = m.get(slot)?;
    if let Some(value) = capture.value {
        return Some(value.to_string());
    }
    let words: Vec<&str> = capture
        .tokens(tokens)
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    Some(words.join(separator))
}
