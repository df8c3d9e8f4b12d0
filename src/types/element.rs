use serde::Serialize;

use super::{LogicalAddress, Rect};

/// Kind of element positioned by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Data cell
    Cell,
    /// Per-column header pinned to the top of the grid
    GridHeader,
    /// Per-column footer pinned to the bottom of the viewport
    GridFooter,
    /// Per-column header of a section
    SectionHeader,
    /// Per-column footer of a section
    SectionFooter,
    /// Banner spanning a column grouping, above the grid headers
    GroupedHeader,
}

impl ElementKind {
    /// True for every kind except [`ElementKind::Cell`]
    pub fn is_supplementary(self) -> bool {
        !matches!(self, Self::Cell)
    }
}

/// Which element of a kind an attribute record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ElementIndex {
    /// A cell
    Cell(LogicalAddress),
    /// A per-column supplementary element. Grid headers and footers use section 0.
    Column { section: usize, column: usize },
    /// A grouped header, by position in the validated grouping list
    Grouping { index: usize },
}

impl ElementIndex {
    pub fn column(section: usize, column: usize) -> Self {
        Self::Column { section, column }
    }

    /// Cell address, if this is a cell index
    pub fn cell_address(&self) -> Option<LogicalAddress> {
        match self {
            Self::Cell(address) => Some(*address),
            Self::Column { .. } | Self::Grouping { .. } => None,
        }
    }
}

/// Computed geometry for one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementAttributes {
    pub kind: ElementKind,
    pub index: ElementIndex,
    pub frame: Rect,
    /// Paint order; higher values paint on top
    pub z_index: i32,
}
