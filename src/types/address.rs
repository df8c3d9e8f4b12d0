use serde::{Deserialize, Serialize};

/// A grid cell identified in domain terms: section, row within the section,
/// and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogicalAddress {
    pub section: usize,
    pub row: usize,
    pub column: usize,
}

/// The `(section, item)` address used by a single-dimension item container,
/// where `item = row * column_count + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FlatAddress {
    pub section: usize,
    pub item: usize,
}

impl LogicalAddress {
    /// Create a logical address
    pub fn new(section: usize, row: usize, column: usize) -> Self {
        Self {
            section,
            row,
            column,
        }
    }

    /// Convert to the flat address space.
    ///
    /// `column_count` must be non-zero; an empty grid never asks for geometry.
    pub fn to_flat(self, column_count: usize) -> FlatAddress {
        debug_assert!(column_count > 0, "flat conversion requires columns");
        FlatAddress {
            section: self.section,
            item: self
                .row
                .saturating_mul(column_count)
                .saturating_add(self.column),
        }
    }
}

impl FlatAddress {
    /// Create a flat address
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Convert back to `(section, row, column)`.
    ///
    /// With `column_count == 0` release builds return row 0, column 0.
    pub fn to_logical(self, column_count: usize) -> LogicalAddress {
        debug_assert!(column_count > 0, "logical conversion requires columns");
        LogicalAddress {
            section: self.section,
            row: self.item.checked_div(column_count).unwrap_or(0),
            column: self.item.checked_rem(column_count).unwrap_or(0),
        }
    }

    /// Row of this item for the given column count
    pub fn row(self, column_count: usize) -> usize {
        self.item.checked_div(column_count).unwrap_or(0)
    }

    /// Column of this item for the given column count
    pub fn column(self, column_count: usize) -> usize {
        self.item.checked_rem(column_count).unwrap_or(0)
    }

    /// First item of the row following this item's row.
    pub fn next_row_start(self, column_count: usize) -> usize {
        self.row(column_count)
            .saturating_add(1)
            .saturating_mul(column_count)
    }
}

impl From<(usize, usize, usize)> for LogicalAddress {
    fn from((section, row, column): (usize, usize, usize)) -> Self {
        Self::new(section, row, column)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_to_flat() {
        let flat = LogicalAddress::new(0, 3, 2).to_flat(5);
        assert_eq!(flat, FlatAddress::new(0, 17));
    }

    #[test]
    fn test_to_logical() {
        let logical = FlatAddress::new(2, 17).to_logical(5);
        assert_eq!(logical, LogicalAddress::new(2, 3, 2));
    }

    #[test]
    fn test_round_trip() {
        for column_count in 1..8 {
            for row in 0..12 {
                for column in 0..column_count {
                    let address = LogicalAddress::new(1, row, column);
                    assert_eq!(address.to_flat(column_count).to_logical(column_count), address);
                }
            }
        }
    }

    #[test]
    fn test_next_row_start() {
        assert_eq!(FlatAddress::new(0, 7).next_row_start(5), 10);
        assert_eq!(FlatAddress::new(0, 10).next_row_start(5), 15);
        assert_eq!(FlatAddress::new(0, 0).next_row_start(1), 1);
    }
}
