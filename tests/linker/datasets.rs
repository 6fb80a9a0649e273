//! Reference dataset validation tests.

use streetlink_foundation::{ErrorCategory, ErrorKind};
use streetlink_linker::{COLUMNS, Cell, Linker, LinkerConfig, Table};
use streetlink_model::StreetType;

use crate::city_table;

#[test]
fn load_indexes_every_row() {
    let linker = Linker::load(&city_table()).unwrap();
    assert_eq!(linker.table().len(), 7);
    assert!(linker.finder().len() >= 6);
    let row = linker.table().rows_with_key(601).next().unwrap();
    assert_eq!(row.street_type, Some(StreetType::Territory));
    assert_eq!((row.flat_start, row.flat_end), (None, None));
}

#[test]
fn each_missing_column_is_rejected() {
    for missing in COLUMNS {
        let columns: Vec<_> = COLUMNS.iter().filter(|c| **c != missing).copied().collect();
        let err = Linker::load(&Table::new(columns)).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MalformedReference { .. }),
            "{missing}"
        );
        assert_eq!(err.category(), ErrorCategory::MalformedReference);
        assert_eq!(err.context.unwrap().column.as_deref(), Some(missing));
    }
}

#[test]
fn bad_cells_are_rejected_before_any_lookup() {
    let mut table = city_table();
    table.rows[3][5] = Cell::from("301a");
    let err = Linker::load_with_config(&table, LinkerConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedReference { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.row, Some(4));
    assert_eq!(context.column.as_deref(), Some("Key"));
}

#[test]
fn unknown_street_type_is_rejected() {
    let mut table = city_table();
    table.rows[0][0] = Cell::from("АЛЛЕЯ");
    let err = Linker::load(&table).unwrap_err();
    assert_eq!(err.context.unwrap().column.as_deref(), Some("Type"));
}

#[test]
fn empty_table_links_nothing() {
    let linker = Linker::load(&Table::new(COLUMNS)).unwrap();
    assert!(linker.table().is_empty());
    assert!(linker.finder().is_empty());
    assert!(linker.resolve("Металлургов 2 48", true).is_err());
}
