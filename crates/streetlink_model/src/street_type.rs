//! Street types of the city.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use streetlink_foundation::{Error, Result};
use streetlink_parser::AddressParser;

static PARSER: LazyLock<AddressParser> = LazyLock::new(AddressParser::new);

/// Kind of a street. Each variant has a full spelling and a unique short
/// form; the short form is what the reference dataset stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreetType {
    /// бульвар, `Б-Р`
    #[cfg_attr(feature = "serde", serde(rename = "Б-Р"))]
    Boulevard,
    /// улица, `УЛ.`
    #[cfg_attr(feature = "serde", serde(rename = "УЛ."))]
    Street,
    /// линия, `ЛН.`
    #[cfg_attr(feature = "serde", serde(rename = "ЛН."))]
    Line,
    /// переулок, `ПЕР.`
    #[cfg_attr(feature = "serde", serde(rename = "ПЕР."))]
    Lane,
    /// площадь, `ПЛ.`
    #[cfg_attr(feature = "serde", serde(rename = "ПЛ."))]
    Square,
    /// проезд, `ПР-Д`
    #[cfg_attr(feature = "serde", serde(rename = "ПР-Д"))]
    Passage,
    /// проспект, `ПР-КТ`
    #[cfg_attr(feature = "serde", serde(rename = "ПР-КТ"))]
    Avenue,
    /// шоссе, `Ш.`
    #[cfg_attr(feature = "serde", serde(rename = "Ш."))]
    Highway,
    /// территория, `ТЕР.`
    #[cfg_attr(feature = "serde", serde(rename = "ТЕР."))]
    Territory,
}

impl StreetType {
    /// Every street type in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Boulevard,
        Self::Street,
        Self::Line,
        Self::Lane,
        Self::Square,
        Self::Passage,
        Self::Avenue,
        Self::Highway,
        Self::Territory,
    ];

    /// Full spelling, lower case.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Boulevard => "бульвар",
            Self::Street => "улица",
            Self::Line => "линия",
            Self::Lane => "переулок",
            Self::Square => "площадь",
            Self::Passage => "проезд",
            Self::Avenue => "проспект",
            Self::Highway => "шоссе",
            Self::Territory => "территория",
        }
    }

    /// Short form as stored in the reference dataset.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Boulevard => "Б-Р",
            Self::Street => "УЛ.",
            Self::Line => "ЛН.",
            Self::Lane => "ПЕР.",
            Self::Square => "ПЛ.",
            Self::Passage => "ПР-Д",
            Self::Avenue => "ПР-КТ",
            Self::Highway => "Ш.",
            Self::Territory => "ТЕР.",
        }
    }

    /// Looks a variant up by its exact short form.
    #[must_use]
    pub fn from_short_name(short: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.short_name() == short)
    }

    /// Short forms in declaration order.
    pub fn short_names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::short_name)
    }

    /// Full spellings in declaration order.
    pub fn full_names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::full_name)
    }

    /// Parses a type keyword with the given parser.
    ///
    /// # Errors
    ///
    /// [`Error::unrecognized_street_type`] if `raw` is not a type keyword,
    /// [`Error::unmapped_street_type`] if the keyword's canonical form has
    /// no variant.
    pub fn parse_with(parser: &AddressParser, raw: &str) -> Result<Self> {
        let short = parser.parse_street_type(raw)?;
        Self::from_short_name(short).ok_or_else(|| Error::unmapped_street_type(short))
    }
}

impl FromStr for StreetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(&PARSER, s)
    }
}

impl fmt::Display for StreetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
