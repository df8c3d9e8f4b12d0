use serde::{Deserialize, Serialize};

/// Inclusive range of columns spanned by a grouped header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnGrouping {
    pub start: usize,
    pub end: usize,
}

impl ColumnGrouping {
    /// Create a grouping, returning `None` for a reversed range
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Build a grouping from a raw `[start, end]` index list.
    ///
    /// Lists that do not hold exactly two indices, or whose indices are
    /// reversed, yield `None`.
    pub fn from_indices(indices: &[usize]) -> Option<Self> {
        match indices {
            [start, end] => Self::new(*start, *end),
            _ => None,
        }
    }

    /// True if `column` lies inside the grouping
    pub fn contains(&self, column: usize) -> bool {
        (self.start..=self.end).contains(&column)
    }

    /// Number of columns spanned, at least one
    pub fn column_span(&self) -> usize {
        self.end - self.start + 1
    }
}
