//! The reference dataset: canonical rows keyed by a stable integer.
//!
//! Adapters read a spreadsheet or a database query into a neutral [`Table`];
//! [`ReferenceTable::load`] validates it and indexes the rows by street name
//! and house, and by key.

use std::fmt;

use im::{OrdMap, Vector};
use streetlink_foundation::{Error, ErrorContext, Result};
use streetlink_model::{Address, Street, StreetType};

/// Stable identifier of a reference row.
pub type Key = i64;

/// Column names a reference table must carry.
pub const COLUMNS: [&str; 6] = ["Type", "Name", "House", "Flat_start", "Flat_end", "Key"];

static EMPTY: Cell = Cell::Empty;

/// One cell of a [`Table`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// An integer value.
    Int(i64),
    /// A text value.
    Text(String),
}

impl Cell {
    /// Text content, with integers rendered in decimal. Blank text is `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Int(n) => Some(n.to_string()),
            Self::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
        }
    }

    /// Integer content. Blank cells are `Ok(None)`; text that is not an
    /// integer is an error message.
    fn as_int(&self) -> std::result::Result<Option<i64>, String> {
        match self {
            Self::Empty => Ok(None),
            Self::Int(n) => Ok(Some(*n)),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| format!("{s:?} is not an integer")),
        }
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Named columns and rows of cells, as read by an adapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names.
    pub columns: Vec<String>,
    /// Rows; a short row reads as empty cells past its end.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given columns.
    #[must_use]
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    #[must_use]
    pub fn with_row(mut self, row: impl IntoIterator<Item = Cell>) -> Self {
        self.rows.push(row.into_iter().collect());
        self
    }

    /// Position of a column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// One canonical row of the reference dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceRow {
    /// Street type; `None` when the dataset leaves it blank.
    #[cfg_attr(feature = "serde", serde(rename = "Type"))]
    pub street_type: Option<StreetType>,
    /// Street name, in the dataset's case convention.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,
    /// House, in the dataset's case convention.
    #[cfg_attr(feature = "serde", serde(rename = "House"))]
    pub house: String,
    /// First flat of the range.
    #[cfg_attr(feature = "serde", serde(rename = "Flat_start"))]
    pub flat_start: Option<i64>,
    /// Last flat of the range, inclusive.
    #[cfg_attr(feature = "serde", serde(rename = "Flat_end"))]
    pub flat_end: Option<i64>,
    /// Row key.
    #[cfg_attr(feature = "serde", serde(rename = "Key"))]
    pub key: Key,
}

impl ReferenceRow {
    /// Creates a row without a flat range.
    #[must_use]
    pub fn new(
        street_type: Option<StreetType>,
        name: impl Into<String>,
        house: impl Into<String>,
        key: Key,
    ) -> Self {
        Self {
            street_type,
            name: name.into(),
            house: house.into(),
            flat_start: None,
            flat_end: None,
            key,
        }
    }

    /// Builder method to set the flat range.
    #[must_use]
    pub fn with_flats(mut self, start: i64, end: i64) -> Self {
        self.flat_start = Some(start);
        self.flat_end = Some(end);
        self
    }

    /// The canonical street of this row.
    #[must_use]
    pub fn street(&self) -> Street {
        Street::new(self.name.clone(), self.street_type)
    }

    /// The canonical address of this row, without a flat.
    #[must_use]
    pub fn address(&self) -> Address {
        Address::new(self.street(), self.house.clone(), None)
    }

    /// Returns true if `flat` lies in the inclusive flat range. A row
    /// missing either bound holds no flat.
    #[must_use]
    pub fn contains_flat(&self, flat: u32) -> bool {
        match (self.flat_start, self.flat_end) {
            (Some(start), Some(end)) => (start..=end).contains(&i64::from(flat)),
            _ => false,
        }
    }
}

/// Indexed reference rows.
#[derive(Clone, Debug, Default)]
pub struct ReferenceTable {
    rows: Vector<ReferenceRow>,
    by_street_house: OrdMap<(String, String), Vec<usize>>,
    by_key: OrdMap<Key, Vec<usize>>,
}

impl ReferenceTable {
    /// Indexes typed rows.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = ReferenceRow>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.push(row);
        }
        table
    }

    fn push(&mut self, row: ReferenceRow) {
        let index = self.rows.len();
        file(
            &mut self.by_street_house,
            (row.name.clone(), row.house.clone()),
            index,
        );
        file(&mut self.by_key, row.key, index);
        self.rows.push_back(row);
    }

    /// Validates and indexes a table.
    ///
    /// # Errors
    ///
    /// [`Error::malformed_reference`] if a column of [`COLUMNS`] is missing
    /// or a cell cannot be read; the context names the row and column.
    pub fn load(table: &Table) -> Result<Self> {
        let mut positions = [0; COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            *slot = table.column_index(column).ok_or_else(|| {
                malformed(format!("missing column {column:?}"), None, column)
            })?;
        }
        let [type_at, name_at, house_at, start_at, end_at, key_at] = positions;

        let mut reference = Self::default();
        for (i, cells) in table.rows.iter().enumerate() {
            let row = i + 1;
            let cell = |at: usize| cells.get(at).unwrap_or(&EMPTY);

            let street_type = match cell(type_at) {
                Cell::Int(_) => {
                    return Err(malformed("street type is a number", Some(row), "Type"));
                }
                other => other
                    .as_text()
                    .map(|t| t.parse::<StreetType>())
                    .transpose()
                    .map_err(|e| malformed(e.to_string(), Some(row), "Type"))?,
            };
            let name = cell(name_at)
                .as_text()
                .ok_or_else(|| malformed("empty street name", Some(row), "Name"))?;
            let house = cell(house_at)
                .as_text()
                .ok_or_else(|| malformed("empty house", Some(row), "House"))?;
            let flat_start = cell(start_at)
                .as_int()
                .map_err(|e| malformed(e, Some(row), "Flat_start"))?;
            let flat_end = cell(end_at)
                .as_int()
                .map_err(|e| malformed(e, Some(row), "Flat_end"))?;
            let key = cell(key_at)
                .as_int()
                .map_err(|e| malformed(e, Some(row), "Key"))?
                .ok_or_else(|| malformed("empty key", Some(row), "Key"))?;

            reference.push(ReferenceRow {
                street_type,
                name,
                house,
                flat_start,
                flat_end,
                key,
            });
        }
        Ok(reference)
    }

    /// Rows with exactly this name and house.
    #[must_use]
    pub fn lookup(&self, name: &str, house: &str) -> Vec<&ReferenceRow> {
        self.by_street_house
            .get(&(name.to_string(), house.to_string()))
            .into_iter()
            .flatten()
            .filter_map(|&i| self.rows.get(i))
            .collect()
    }

    /// Rows carrying `key`.
    pub fn rows_with_key(&self, key: Key) -> impl Iterator<Item = &ReferenceRow> {
        self.by_key
            .get(&key)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.rows.get(i))
    }

    /// All rows in load order.
    pub fn rows(&self) -> impl Iterator<Item = &ReferenceRow> {
        self.rows.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn file<K: Ord + Clone>(index: &mut OrdMap<K, Vec<usize>>, key: K, row: usize) {
    match index.get_mut(&key) {
        Some(rows) => rows.push(row),
        None => {
            index.insert(key, vec![row]);
        }
    }
}

fn malformed(reason: impl Into<String>, row: Option<usize>, column: &str) -> Error {
    let mut context = ErrorContext::new()
        .with_source("reference dataset")
        .with_column(column)
        .with_frame("load");
    if let Some(row) = row {
        context = context.with_row(row);
    }
    Error::malformed_reference(reason).with_context(context)
}
