//! Frozen panes: leading columns pinned to the left edge and leading rows of
//! each section pinned below the sticky headers.
//!
//! Also owns the paint order of every element, since frozen panes are what
//! make elements overlap in the first place.

use crate::types::{ElementKind, LogicalAddress};

/// Clamp a requested frozen count to what actually exists.
pub fn clamp_frozen_count(requested: usize, available: usize) -> usize {
    requested.min(available)
}

/// x of a column after frozen-pane adjustment.
///
/// Frozen columns ride along with horizontal scroll so they stay at the
/// leading edge; overscroll past 0 does not move them.
pub fn frozen_column_offset(static_offset: f32, scroll_x: f32) -> f32 {
    static_offset + scroll_x.max(0.0)
}

/// Inputs for placing a frozen row.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrozenRowContext {
    /// Vertical scroll offset of the viewport
    pub scroll_y: f32,
    pub grid_header_height: f32,
    pub section_header_height: f32,
    pub section_footer_height: f32,
    /// Whether section headers are sticky. When they are not, frozen rows
    /// pin directly below the grid header.
    pub sticky_section_headers: bool,
    /// Sum of the heights of the rows above this one in its section
    pub row_offset: f32,
    /// Header + rows + footer of the section
    pub section_height: f32,
    /// Sum of the heights of every frozen row of the section
    pub frozen_block_height: f32,
}

/// y of a frozen row.
///
/// The row stays at its static offset until scrolling would carry it under
/// the pinned headers; from then on it follows the scroll offset, but never
/// further than the point where the frozen block touches the section footer.
pub fn frozen_row_offset(static_offset: f32, ctx: &FrozenRowContext) -> f32 {
    let header_offset = if ctx.sticky_section_headers {
        ctx.section_header_height
    } else {
        0.0
    };
    let pinned = ctx.scroll_y + ctx.grid_header_height + header_offset + ctx.row_offset;
    if pinned <= static_offset {
        return static_offset;
    }

    let max_offset = static_offset + ctx.section_height
        - ctx.section_header_height
        - ctx.section_footer_height
        - ctx.frozen_block_height;
    pinned.min(max_offset)
}

fn z(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Paint order policy.
///
/// Layers, top to bottom:
/// 1. supplementary elements of frozen columns
/// 2. cells in a frozen column and a frozen row
/// 3. cells in a frozen column only
/// 4. supplementary elements of scrolling columns
/// 5. cells in a frozen row only
/// 6. all other cells, ascending by section
///
/// Within a supplementary layer lower columns stack higher, and for a column
/// grid headers/footers stack over section headers, which stack over section
/// footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrder {
    frozen_columns: usize,
}

/// z-index slots reserved per column in a supplementary layer
const SUPPLEMENTARY_SLOTS: usize = 3;

impl ZOrder {
    pub fn new(frozen_columns: usize) -> Self {
        Self { frozen_columns }
    }

    fn slot(kind: ElementKind) -> i32 {
        match kind {
            ElementKind::GridHeader | ElementKind::GridFooter | ElementKind::GroupedHeader => 0,
            ElementKind::SectionHeader => 1,
            ElementKind::SectionFooter | ElementKind::Cell => 2,
        }
    }

    fn frozen_cell_top(&self) -> i32 {
        i32::MAX.saturating_sub(z(SUPPLEMENTARY_SLOTS.saturating_mul(self.frozen_columns)))
    }

    fn scrolling_supplementary_top(&self) -> i32 {
        self.frozen_cell_top()
            .saturating_sub(z(self.frozen_columns.saturating_mul(2)))
    }

    /// z-index of a supplementary element anchored at `column`. Grouped
    /// headers use their first column.
    pub fn supplementary(&self, kind: ElementKind, column: usize) -> i32 {
        debug_assert!(kind.is_supplementary(), "cells are ordered by ZOrder::cell");
        let (top, position) = if column < self.frozen_columns {
            (i32::MAX, column)
        } else {
            (
                self.scrolling_supplementary_top(),
                column - self.frozen_columns,
            )
        };
        top.saturating_sub(z(SUPPLEMENTARY_SLOTS.saturating_mul(position)))
            .saturating_sub(Self::slot(kind))
    }

    /// z-index of a cell
    pub fn cell(&self, address: LogicalAddress, in_frozen_row: bool) -> i32 {
        if address.column < self.frozen_columns {
            let tier = if in_frozen_row { 0 } else { self.frozen_columns };
            self.frozen_cell_top()
                .saturating_sub(z(tier))
                .saturating_sub(z(address.column))
        } else {
            let base = z(address.section).saturating_mul(2);
            if in_frozen_row {
                base.saturating_add(1)
            } else {
                base
            }
        }
    }
}
