//! Resolution of parsed addresses to reference keys.

use streetlink_foundation::{Error, Result, is_blank};
use streetlink_model::Address;
use streetlink_parser::AddressParser;
use tracing::{debug, info, trace};

use crate::config::LinkerConfig;
use crate::finder::StreetsFinder;
use crate::reference::{Key, ReferenceRow, ReferenceTable, Table};

/// A resolved address and its key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Canonical street and house from the reference row, with the flat
    /// taken from the input.
    pub address: Address,
    /// Key of the reference row.
    pub key: Key,
}

/// Links addresses to rows of a reference dataset.
///
/// A street name is first normalized to the canonical streets whose
/// spelling is closest to it, then each canonical address is looked up by
/// name and house, narrowed by street type and flat range.
#[derive(Clone, Debug)]
pub struct Linker {
    table: ReferenceTable,
    finder: StreetsFinder,
    config: LinkerConfig,
    parser: AddressParser,
}

impl Linker {
    /// Loads a reference table with the default configuration.
    ///
    /// # Errors
    ///
    /// [`Error::malformed_reference`] if the table is missing a column or
    /// holds an unreadable cell.
    pub fn load(table: &Table) -> Result<Self> {
        Self::load_with_config(table, LinkerConfig::default())
    }

    /// Loads a reference table.
    ///
    /// # Errors
    ///
    /// See [`Linker::load`].
    pub fn load_with_config(table: &Table, config: LinkerConfig) -> Result<Self> {
        let reference = ReferenceTable::load(table)?;
        Ok(Self::from_reference(reference, config))
    }

    /// Builds a linker from typed rows.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = ReferenceRow>, config: LinkerConfig) -> Self {
        Self::from_reference(ReferenceTable::from_rows(rows), config)
    }

    fn from_reference(table: ReferenceTable, config: LinkerConfig) -> Self {
        let mut finder = StreetsFinder::new(&config);
        for row in table.rows() {
            finder.append(&row.street());
        }
        info!(
            rows = table.len(),
            spellings = finder.len(),
            "reference dataset loaded"
        );
        Self {
            table,
            finder,
            config,
            parser: AddressParser::new(),
        }
    }

    /// Key of the reference row for `address`.
    ///
    /// # Errors
    ///
    /// - [`Error::incomplete_address`] for a blank street name or house
    /// - [`Error::normalization_failed`] if no known spelling is close enough
    /// - [`Error::not_in_reference`] if no row matches, or
    ///   [`Error::no_suitable_flat_range`] if rows match but none holds the flat
    /// - [`Error::unresolved_ambiguity`] if several rows match
    pub fn link(&self, address: &Address, require_flat_check: bool) -> Result<Key> {
        if address.street.is_blank() {
            return Err(Error::incomplete_address("street"));
        }
        if is_blank(&address.house) {
            return Err(Error::incomplete_address("house"));
        }

        let candidates = self.finder.find(&address.street, self.config.case_policy);
        debug!(
            street = %address.street,
            candidates = candidates.len(),
            "normalized street"
        );

        match candidates.as_slice() {
            [] => Err(Error::normalization_failed(&address.street.name)),
            [street] => {
                let canonical = address.with_street(street.clone());
                let rows = self.matching_rows(&canonical);
                let matched = !rows.is_empty();
                let keys = keys(filter_flats(rows, canonical.flat, require_flat_check));
                match keys.as_slice() {
                    [] => Err(not_found(canonical.flat, matched)),
                    [key] => Ok(*key),
                    _ => Err(Error::unresolved_ambiguity(keys.len())),
                }
            }
            streets => {
                // Several canonical streets: keep those that pin down exactly
                // one row, and accept the result only if one street does.
                let mut flat_miss = false;
                let keys: Vec<Key> = streets
                    .iter()
                    .filter_map(|street| {
                        let canonical = address.with_street(street.clone());
                        let rows = self.matching_rows(&canonical);
                        let matched = !rows.is_empty();
                        let rows = filter_flats(rows, canonical.flat, require_flat_check);
                        flat_miss |= matched && rows.is_empty();
                        match rows.as_slice() {
                            [row] => Some(row.key),
                            _ => None,
                        }
                    })
                    .collect();
                trace!(candidates = streets.len(), unique = keys.len(), "disambiguated");
                match keys.as_slice() {
                    [] => Err(not_found(address.flat, flat_miss)),
                    [key] => Ok(*key),
                    _ => Err(Error::unresolved_ambiguity(keys.len())),
                }
            }
        }
    }

    /// Keys of the rows matching a canonical address, in load order and
    /// with duplicates kept.
    ///
    /// Rows must carry the address's name and house, in the dataset's case.
    /// A typed address keeps only rows of its type. With a flat and
    /// `require_flat_check`, rows whose range does not hold the flat are
    /// dropped.
    #[must_use]
    pub fn match_with_db(&self, address: &Address, require_flat_check: bool) -> Vec<Key> {
        keys(filter_flats(
            self.matching_rows(address),
            address.flat,
            require_flat_check,
        ))
    }

    fn matching_rows(&self, address: &Address) -> Vec<&ReferenceRow> {
        let case = self.config.case_policy;
        let mut rows = self
            .table
            .lookup(&case.apply(&address.street.name), &case.apply(address.house.trim()));
        if let Some(street_type) = address.street.street_type {
            rows.retain(|row| row.street_type == Some(street_type));
        }
        rows
    }

    /// Like [`Linker::link`], but `None` on any failure.
    #[must_use]
    pub fn get_key(&self, address: &Address, require_flat_check: bool) -> Option<Key> {
        self.link(address, require_flat_check).ok()
    }

    /// Like [`Linker::link`], but `default` on any failure.
    #[must_use]
    pub fn get_key_or(&self, address: &Address, require_flat_check: bool, default: Key) -> Key {
        self.get_key(address, require_flat_check).unwrap_or(default)
    }

    /// Canonical address of the single row carrying `key`. `None` when no
    /// row or several rows carry it.
    #[must_use]
    pub fn get_value(&self, key: Key) -> Option<Address> {
        let mut rows = self.table.rows_with_key(key);
        match (rows.next(), rows.next()) {
            (Some(row), None) => Some(row.address()),
            _ => None,
        }
    }

    /// Like [`Linker::get_value`], but `default` when there is no single row.
    #[must_use]
    pub fn get_value_or(&self, key: Key, default: Address) -> Address {
        self.get_value(key).unwrap_or(default)
    }

    /// Parses raw text into an address.
    ///
    /// # Errors
    ///
    /// [`Error::unparseable`] if the text is not an address.
    pub fn parse(&self, raw: &str) -> Result<Address> {
        Address::parse_with(&self.parser, raw)
    }

    /// Parses, links and canonicalizes raw text.
    ///
    /// # Errors
    ///
    /// Any error of [`Linker::parse`] or [`Linker::link`].
    pub fn resolve(&self, raw: &str, require_flat_check: bool) -> Result<Resolution> {
        let address = self.parse(raw)?;
        let key = self.link(&address, require_flat_check)?;
        let canonical = self
            .get_value(key)
            .unwrap_or_else(|| address.clone())
            .with_flat(address.flat);
        Ok(Resolution {
            address: canonical,
            key,
        })
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &LinkerConfig {
        &self.config
    }

    /// The reference rows.
    #[must_use]
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// The spelling bank.
    #[must_use]
    pub fn finder(&self) -> &StreetsFinder {
        &self.finder
    }

    /// The spelling bank, for adding or removing spellings.
    pub fn finder_mut(&mut self) -> &mut StreetsFinder {
        &mut self.finder
    }
}

fn filter_flats(
    rows: Vec<&ReferenceRow>,
    flat: Option<u32>,
    require_flat_check: bool,
) -> Vec<&ReferenceRow> {
    match flat {
        Some(flat) if require_flat_check && !rows.is_empty() => rows
            .into_iter()
            .filter(|row| row.contains_flat(flat))
            .collect(),
        _ => rows,
    }
}

/// `NoSuitableFlatRange` when rows matched but none held the flat.
fn not_found(flat: Option<u32>, matched: bool) -> Error {
    match flat {
        Some(flat) if matched => Error::no_suitable_flat_range(flat),
        _ => Error::not_in_reference(),
    }
}

fn keys(rows: Vec<&ReferenceRow>) -> Vec<Key> {
    rows.into_iter().map(|row| row.key).collect()
}
