//! Main parser pipeline.
//!
//! Tokenizes raw text, runs the address grammar and turns the match into an
//! [`AddressFact`].

use streetlink_foundation::{Error, Result, is_blank};
use tracing::{debug, trace};

use crate::fact::{AddressFact, AddressSlot};
use crate::rules;
use crate::tokenizer::Tokenizer;

/// Parses address strings and street type keywords.
#[derive(Clone, Debug, Default)]
pub struct AddressParser {
    tokenizer: Tokenizer,
}

impl AddressParser {
    /// Creates a parser with the standard tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom tokenizer.
    #[must_use]
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// The tokenizer in use.
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Parses a full address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::unparseable`] when the input is blank or does not
    /// start with a street followed by a house.
    pub fn parse(&self, raw: &str) -> Result<AddressFact> {
        if is_blank(raw) {
            return Err(Error::unparseable(raw));
        }
        let tokens = self.tokenizer.tokenize(raw);
        trace!(input = raw, tokens = tokens.len(), "tokenized address");

        let Some(m) = rules::address().match_prefix(&tokens) else {
            debug!(input = raw, "address grammar did not match");
            return Err(Error::unparseable(raw));
        };
        if m.len < tokens.len() {
            trace!(
                input = raw,
                ignored = tokens.len() - m.len,
                "trailing tokens ignored"
            );
        }
        Ok(AddressFact::from_match(&m, &tokens))
    }

    /// Parses a street type keyword into its canonical short form (`УЛ.`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::unrecognized_street_type`] unless the whole input is
    /// one type keyword.
    pub fn parse_street_type(&self, raw: &str) -> Result<&'static str> {
        let tokens = self.tokenizer.tokenize(raw);
        rules::street_type_keyword()
            .match_exact(&tokens)
            .and_then(|m| m.get(AddressSlot::StreetType).and_then(|c| c.value))
            .ok_or_else(|| Error::unrecognized_street_type(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetlink_foundation::ErrorKind;

    fn parse(input: &str) -> AddressFact {
        AddressParser::new().parse(input).unwrap()
    }

    fn street(fact: &AddressFact) -> (&str, Option<&str>) {
        let street = fact.street.as_ref().unwrap();
        (street.name.as_str(), street.street_type.as_deref())
    }

    #[test]
    fn parse_simple() {
        let fact = parse("ул. Ленина, д. 5");
        assert_eq!(street(&fact), ("Ленина", Some("УЛ.")));
        assert_eq!(fact.house.as_deref(), Some("5"));
        assert_eq!(fact.flat, None);
    }

    #[test]
    fn parse_house_and_flat() {
        let fact = parse("Металлургов 2 48");
        assert_eq!(street(&fact), ("Металлургов", None));
        assert_eq!(fact.house.as_deref(), Some("2"));
        assert_eq!(fact.flat_number(), Ok(Some(48)));
    }

    #[test]
    fn parse_type_after_name() {
        let fact = parse("Ленина ул 10 кв 3");
        assert_eq!(street(&fact), ("Ленина", Some("УЛ.")));
        assert_eq!(fact.flat.as_deref(), Some("3"));
    }

    #[test]
    fn parse_house_letter() {
        let fact = parse("Советский пр-кт 64а");
        assert_eq!(street(&fact), ("Советский", Some("ПР-КТ")));
        assert_eq!(fact.house.as_deref(), Some("64а"));
    }

    #[test]
    fn parse_compound_house() {
        let fact = parse("ул Ленина 10А/5Б");
        assert_eq!(fact.house.as_deref(), Some("10А/5Б"));
    }

    #[test]
    fn parse_corpus_and_stroenie() {
        let fact = parse("ул Ленина д 10 корп 2 стр 1");
        assert_eq!(fact.full_house().as_deref(), Some("10 К. 2 СТР. 1"));
        let fact = parse("ул Ленина д 10 стр 1 к 2");
        assert_eq!(fact.full_house().as_deref(), Some("10 К. 2 СТР. 1"));
    }

    #[test]
    fn marked_flat_takes_any_integer() {
        let fact = parse("ул. Ленина, д. 5, кв. 1200");
        assert_eq!(fact.flat_number(), Ok(Some(1200)));
        let fact = parse("ул. Ленина, д. 5, кв. 5000000000");
        assert_eq!(fact.flat.as_deref(), Some("5000000000"));
        assert!(fact.flat_number().is_err());
    }

    #[test]
    fn parse_highlevel_prefix() {
        let fact = parse("162600, Россия, Вологодская обл., г. Череповец, ул. Ленина, д. 5, кв. 7");
        assert_eq!(fact.index.as_deref(), Some("162600"));
        assert_eq!(fact.country.as_deref(), Some("Россия"));
        assert_eq!(fact.region.as_deref(), Some("Вологодская"));
        assert_eq!(fact.city.as_deref(), Some("Череповец"));
        assert_eq!(street(&fact), ("Ленина", Some("УЛ.")));
        assert_eq!(fact.flat_number(), Ok(Some(7)));
    }

    #[test]
    fn parse_city_only_prefix() {
        let fact = parse("Череповец, Металлургов 2");
        assert_eq!(fact.city.as_deref(), Some("Череповец"));
        assert_eq!(street(&fact), ("Металлургов", None));
    }

    #[test]
    fn parse_named_after() {
        let fact = parse("ул. имени Карла Маркса 12");
        assert_eq!(street(&fact), ("имени Карла Маркса", Some("УЛ.")));
    }

    #[test]
    fn parse_ordinal_street() {
        let fact = parse("50-летия Октября ул 3");
        assert_eq!(street(&fact), ("50-летия Октября", Some("УЛ.")));
    }

    #[test]
    fn parse_territory_prefix() {
        let fact = parse("территор Промзона 4");
        assert_eq!(street(&fact), ("Промзона", Some("ТЕР.")));
    }

    #[test]
    fn parse_flat_before_house() {
        let fact = parse("Ленина кв 5 д 10");
        assert_eq!(fact.house.as_deref(), Some("10"));
        assert_eq!(fact.flat_number(), Ok(Some(5)));
    }

    #[test]
    fn parse_flat_after_dash() {
        let fact = parse("Ленина 10-5");
        assert_eq!(fact.house.as_deref(), Some("10"));
        assert_eq!(fact.flat_number(), Ok(Some(5)));
    }

    #[test]
    fn reject_non_address() {
        let err = AddressParser::new().parse("просто текст").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unparseable { .. }));
    }

    #[test]
    fn reject_blank() {
        let err = AddressParser::new().parse("   ").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unparseable { .. }));
    }

    #[test]
    fn parse_street_type() {
        let parser = AddressParser::new();
        assert_eq!(parser.parse_street_type("ул.").unwrap(), "УЛ.");
        assert_eq!(parser.parse_street_type("площадь").unwrap(), "ПЛ.");
        let err = parser.parse_street_type("аллея").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnrecognizedStreetType { .. }));
    }
}
