//! Addresses.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use streetlink_foundation::{Error, Result, is_blank};
use streetlink_parser::{AddressFact, AddressParser};

use crate::street::Street;
use crate::street_type::StreetType;

static PARSER: LazyLock<AddressParser> = LazyLock::new(AddressParser::new);

/// A street, a house and an optional flat.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// The street.
    pub street: Street,
    /// House number with corpus and stroenie folded in: `10А К. 2`.
    pub house: String,
    /// Flat number.
    pub flat: Option<u32>,
}

impl Address {
    /// Creates an address.
    #[must_use]
    pub fn new(street: Street, house: impl Into<String>, flat: Option<u32>) -> Self {
        Self {
            street,
            house: house.into(),
            flat,
        }
    }

    /// Returns a copy with the street replaced.
    #[must_use]
    pub fn with_street(&self, street: Street) -> Self {
        Self {
            street,
            house: self.house.clone(),
            flat: self.flat,
        }
    }

    /// Returns a copy with the flat replaced.
    #[must_use]
    pub fn with_flat(&self, flat: Option<u32>) -> Self {
        Self {
            street: self.street.clone(),
            house: self.house.clone(),
            flat,
        }
    }

    /// Builds an address from a parse.
    ///
    /// # Errors
    ///
    /// [`Error::incomplete_address`] if the fact has no street or no house,
    /// [`Error::unparseable`] if the flat does not fit a `u32`, and the
    /// street type errors of [`StreetType::parse_with`].
    pub fn from_fact(parser: &AddressParser, fact: &AddressFact) -> Result<Self> {
        let street_fact = fact
            .street
            .as_ref()
            .ok_or_else(|| Error::incomplete_address("street"))?;
        let house = fact
            .full_house()
            .ok_or_else(|| Error::incomplete_address("house"))?;
        let street_type = street_fact
            .street_type
            .as_deref()
            .map(|t| StreetType::parse_with(parser, t))
            .transpose()?;

        Ok(Self::new(
            Street::new(street_fact.name.clone(), street_type),
            house,
            fact.flat_number()?,
        ))
    }

    /// Parses raw text with the given parser.
    ///
    /// # Errors
    ///
    /// [`Error::unparseable`] for blank input or text the grammar rejects.
    pub fn parse_with(parser: &AddressParser, raw: &str) -> Result<Self> {
        if is_blank(raw) {
            return Err(Error::unparseable(raw));
        }
        let fact = parser.parse(raw)?;
        Self::from_fact(parser, &fact)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(&PARSER, s)
    }
}

/// `УЛ., Ленина, 5, 7`: street, house, then the flat if any.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.house)?;
        if let Some(flat) = self.flat {
            write!(f, ", {flat}")?;
        }
        Ok(())
    }
}
