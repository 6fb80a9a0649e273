//! Streets.

use std::fmt;

use crate::street_type::StreetType;

/// A street: a name and an optional type.
///
/// Equality compares both fields, so an untyped street never equals a typed
/// one. During resolution a missing type means "any type".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    /// Full street name.
    pub name: String,
    /// Street type, if known.
    pub street_type: Option<StreetType>,
}

impl Street {
    /// Creates a street.
    #[must_use]
    pub fn new(name: impl Into<String>, street_type: Option<StreetType>) -> Self {
        Self {
            name: name.into(),
            street_type,
        }
    }

    /// Creates a street of the given type.
    #[must_use]
    pub fn typed(name: impl Into<String>, street_type: StreetType) -> Self {
        Self::new(name, Some(street_type))
    }

    /// Creates a street without a type.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Returns true if the name is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        streetlink_foundation::is_blank(&self.name)
    }
}

/// `УЛ., Ленина`, or just `Ленина` without a type.
impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.street_type {
            Some(street_type) => write!(f, "{street_type}, {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
