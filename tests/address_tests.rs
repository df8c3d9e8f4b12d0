//! Address conversion tests
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use panegrid::{ElementIndex, FlatAddress, LogicalAddress};
use test_case::test_case;

#[test_case(0, 3, 2, 5, 17 ; "scenario cell")]
#[test_case(0, 0, 0, 5, 0 ; "origin")]
#[test_case(1, 0, 4, 5, 4 ; "end of the first row")]
#[test_case(2, 1, 0, 5, 5 ; "start of the second row")]
#[test_case(0, 7, 0, 1, 7 ; "single column")]
fn test_logical_to_flat(section: usize, row: usize, column: usize, columns: usize, item: usize) {
    let flat = LogicalAddress::new(section, row, column).to_flat(columns);
    assert_eq!(flat, FlatAddress::new(section, item));
    assert_eq!(flat.to_logical(columns), LogicalAddress::new(section, row, column));
}

#[test_case(17, 5, 3, 2 ; "scenario item")]
#[test_case(24, 8, 3, 0 ; "row boundary")]
#[test_case(23, 8, 2, 7 ; "last in row")]
fn test_flat_row_and_column(item: usize, columns: usize, row: usize, column: usize) {
    let flat = FlatAddress::new(0, item);
    assert_eq!(flat.row(columns), row);
    assert_eq!(flat.column(columns), column);
}

#[test]
fn test_section_is_carried_through() {
    let flat = LogicalAddress::new(9, 2, 1).to_flat(3);
    assert_eq!(flat.section, 9);
    assert_eq!(flat.to_logical(3).section, 9);
}

#[test]
fn test_tuple_conversion() {
    let address: LogicalAddress = (1, 2, 3).into();
    assert_eq!(address, LogicalAddress::new(1, 2, 3));
    assert_eq!(ElementIndex::Cell(address).cell_address(), Some(address));
    assert_eq!(ElementIndex::column(1, 3).cell_address(), None);
}

#[test]
fn test_address_serializes_by_field() {
    let json = serde_json::to_value(LogicalAddress::new(0, 3, 2)).unwrap();
    assert_eq!(json["row"], 3);
    assert_eq!(json["column"], 2);
}
