//! Domain model for Streetlink: street types, streets and addresses.
//!
//! Both [`StreetType`] and [`Address`] implement [`std::str::FromStr`]
//! through the grammar in `streetlink_parser`, and render back to text that
//! parses to an equal value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod street;
pub mod street_type;

pub use address::Address;
pub use street::Street;
pub use street_type::StreetType;
