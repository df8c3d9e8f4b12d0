//! Column groupings and the grouped header banners drawn above them.

use log::warn;

use super::grid_layout::GridLayout;
use super::sections::visible_height;
use crate::provider::LayoutDataProvider;
use crate::types::{ColumnGrouping, ElementAttributes, ElementIndex, ElementKind, Rect};

/// Validated column groupings plus the flattened set of grouped columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroups {
    groupings: Vec<ColumnGrouping>,
    /// Every grouped column, ascending
    grouped: Vec<usize>,
}

impl ColumnGroups {
    /// Validate raw `[start, end]` pairs.
    ///
    /// Entries are dropped (with a warning) when they do not hold exactly two
    /// indices, are reversed, run past the last column, or start at or before
    /// the end of the previously kept grouping. What remains is ascending and
    /// non-overlapping.
    pub fn from_raw(raw: &[Vec<usize>], column_count: usize) -> Self {
        let mut groupings: Vec<ColumnGrouping> = Vec::with_capacity(raw.len());

        for (position, indices) in raw.iter().enumerate() {
            let Some(grouping) = ColumnGrouping::from_indices(indices) else {
                warn!("dropping column grouping {position} {indices:?}: expected ascending [start, end]");
                continue;
            };
            if grouping.end >= column_count {
                warn!(
                    "dropping column grouping {position} {indices:?}: only {column_count} columns"
                );
                continue;
            }
            if let Some(previous) = groupings.last() {
                if grouping.start <= previous.end {
                    warn!(
                        "dropping column grouping {position} {indices:?}: overlaps [{}, {}]",
                        previous.start, previous.end
                    );
                    continue;
                }
            }
            groupings.push(grouping);
        }

        let span: usize = groupings.iter().map(ColumnGrouping::column_span).sum();
        let mut grouped = Vec::with_capacity(span);
        grouped.extend(
            groupings
                .iter()
                .flat_map(|grouping| grouping.start..=grouping.end),
        );

        Self { groupings, grouped }
    }

    pub fn groupings(&self) -> &[ColumnGrouping] {
        &self.groupings
    }

    pub fn get(&self, index: usize) -> Option<ColumnGrouping> {
        self.groupings.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.groupings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }

    /// Columns covered by some grouping, ascending
    pub fn grouped_columns(&self) -> &[usize] {
        &self.grouped
    }

    /// True if `column` sits under a grouped header
    pub fn is_grouped(&self, column: usize) -> bool {
        self.grouped.binary_search(&column).is_ok()
    }
}

/// Width of a grouped header whose first column is frozen and whose last is
/// not.
///
/// While the frozen columns ride over the group, the banner must not reach
/// past the group's own right edge (`group_end`), but it never shrinks to
/// less than the right edge of the last frozen column (`frozen_edge`).
pub fn clip_group_width(x: f32, width: f32, group_end: f32, frozen_edge: f32) -> f32 {
    if x + width <= group_end {
        return width;
    }
    let clipped = group_end - x;
    if x + clipped < frozen_edge {
        frozen_edge - x
    } else {
        clipped
    }
}

impl<P: LayoutDataProvider> GridLayout<P> {
    /// True if `column` has a grouped header above it
    pub fn is_column_grouped(&mut self, column: usize) -> bool {
        self.column_groups().is_grouped(column)
    }

    /// Geometry of the grouped header at `index` in the validated grouping
    /// list, or `None` if there is no such grouping.
    pub fn grouped_header_attributes(&mut self, index: usize) -> Option<ElementAttributes> {
        let grouping = self.column_groups().get(index)?;

        let x = self.horizontal_offset(grouping.start);
        let y = self.viewport.scroll_y.max(0.0);
        let height = visible_height(self.provider.grid_header_height()) / 2.0;
        let mut width: f32 = (grouping.start..=grouping.end)
            .map(|column| self.column_width(column))
            .sum();

        let frozen_columns = self.frozen_column_count();
        // Only a grouping straddling the frozen edge is clipped
        if frozen_columns > grouping.start && grouping.contains(frozen_columns) {
            let last_frozen = frozen_columns - 1;
            let group_end =
                self.horizontal_offset(grouping.end) + self.column_width(grouping.end);
            let frozen_edge =
                self.horizontal_offset(last_frozen) + self.column_width(last_frozen);
            width = clip_group_width(x, width, group_end, frozen_edge);
        }

        let z_index = self
            .z_order()
            .supplementary(ElementKind::GroupedHeader, grouping.start);

        Some(ElementAttributes {
            kind: ElementKind::GroupedHeader,
            index: ElementIndex::Grouping { index },
            frame: Rect::new(x, y, width, height),
            z_index,
        })
    }
}
