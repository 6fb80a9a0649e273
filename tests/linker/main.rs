//! Integration tests for Layer 3: Linker
//!
//! Tests resolution of raw addresses against a reference dataset:
//! - Round trips of canonical rows
//! - Flat range containment and disambiguation
//! - Abbreviated spellings
//! - Dataset validation
//! - Batch runs

mod batches;
mod datasets;
mod resolution;
mod spellings;

use streetlink_linker::{COLUMNS, Cell, Linker, Table};

/// The two Металлургов rows plus a few ordinary streets.
pub fn city_table() -> Table {
    let row = |t: &str, name: &str, house: &str, flats: Option<(i64, i64)>, key: i64| {
        vec![
            Cell::from(t),
            Cell::from(name),
            Cell::from(house),
            Cell::from(flats.map(|f| f.0)),
            Cell::from(flats.map(|f| f.1)),
            Cell::Int(key),
        ]
    };
    let mut table = Table::new(COLUMNS);
    table.rows = vec![
        row("УЛ.", "МЕТАЛЛУРГОВ", "2", Some((1, 48)), 101),
        row("ПЛ.", "МЕТАЛЛУРГОВ", "5", Some((1, 60)), 202),
        row("УЛ.", "ЛЕНИНА", "5", Some((1, 20)), 301),
        row("УЛ.", "ЛЕНИНА", "5", Some((21, 40)), 302),
        row("ПР-КТ", "ПОБЕДЫ", "10А/5Б", Some((1, 90)), 401),
        row("УЛ.", "ИМЕНИ КАРЛА МАРКСА", "12 К. 2", Some((1, 30)), 501),
        row("ТЕР.", "ПРОМЗОНА", "4", None, 601),
    ];
    table
}

pub fn city() -> Linker {
    Linker::load(&city_table()).unwrap()
}
