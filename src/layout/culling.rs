//! Viewport culling: which elements intersect a rectangle.
//!
//! Output order is fixed: grid headers, grouped headers, then per section
//! its headers, frozen-row cells, remaining cells and footers, and finally
//! grid footers. Within each group elements come in column (or item) order.

use log::trace;

use super::grid_layout::GridLayout;
use crate::provider::LayoutDataProvider;
use crate::types::{ElementAttributes, FlatAddress, LogicalAddress, Rect};

/// First row at or after `first` whose bottom edge lies below `target`.
///
/// `offsets` holds row tops plus the final edge and must be non-decreasing.
pub(crate) fn first_row_below(offsets: &[f32], first: usize, target: f32) -> usize {
    let bottoms = offsets.get(first.saturating_add(1)..).unwrap_or_default();
    first + bottoms.partition_point(|bottom| *bottom <= target)
}

impl<P: LayoutDataProvider> GridLayout<P> {
    /// Every element whose frame intersects `rect` (content coordinates).
    pub fn elements_in_rect(&mut self, rect: Rect) -> Vec<ElementAttributes> {
        let mut elements = Vec::new();
        if self.column_count() == 0 || rect.is_empty() {
            return elements;
        }

        if self.sections().grid_header_height() > 0.0 {
            self.scan_columns(&mut elements, rect, |layout, column| {
                layout.grid_header_attributes(column)
            });
            self.scan_grouped_headers(&mut elements, rect);
        }

        for section in 0..self.section_count() {
            self.scan_section(&mut elements, rect, section);
        }

        if self.sections().grid_footer_height() > 0.0 {
            self.scan_columns(&mut elements, rect, |layout, column| {
                layout.grid_footer_attributes(column)
            });
        }

        trace!(
            "{} elements in rect ({}, {}, {}x{})",
            elements.len(),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        elements
    }

    /// Scan one row of per-column elements. Scrolling columns are laid out
    /// left to right, so the scan ends at the first one past the right edge.
    fn scan_columns(
        &mut self,
        elements: &mut Vec<ElementAttributes>,
        rect: Rect,
        mut attributes_for: impl FnMut(&mut Self, usize) -> ElementAttributes,
    ) {
        let frozen_columns = self.frozen_column_count();
        for column in 0..self.column_count() {
            let attributes = attributes_for(self, column);
            if attributes.frame.intersects(&rect) {
                elements.push(attributes);
            } else if column >= frozen_columns && attributes.frame.x >= rect.max_x() {
                break;
            }
        }
    }

    fn scan_grouped_headers(&mut self, elements: &mut Vec<ElementAttributes>, rect: Rect) {
        let frozen_columns = self.frozen_column_count();
        for index in 0..self.column_groups().len() {
            let Some(attributes) = self.grouped_header_attributes(index) else {
                break;
            };
            let starts_scrolling = self
                .column_groups()
                .get(index)
                .is_some_and(|grouping| grouping.start >= frozen_columns);
            if attributes.frame.intersects(&rect) {
                elements.push(attributes);
            } else if starts_scrolling && attributes.frame.x >= rect.max_x() {
                break;
            }
        }
    }

    fn scan_section(&mut self, elements: &mut Vec<ElementAttributes>, rect: Rect, section: usize) {
        // Every element of a section, sticky or frozen, stays inside the
        // section's own vertical range.
        let (top, bottom) = {
            let mut sections = self.sections();
            (
                sections.offset_before_section(section),
                sections.offset_before_section(section + 1),
            )
        };
        if bottom <= rect.y || top >= rect.max_y() {
            return;
        }

        if self.sections().section_header_height(section) > 0.0 {
            self.scan_columns(elements, rect, |layout, column| {
                layout.section_header_attributes(section, column)
            });
        }

        let column_count = self.column_count();
        let row_count = self.row_count(section);
        let frozen_rows = self.frozen_row_count(section);
        let frozen_items = frozen_rows.saturating_mul(column_count);
        self.scan_items(elements, rect, section, 0, frozen_items);

        let first_row = {
            let mut sections = self.sections();
            let target = rect.y - sections.section_content_top(section);
            first_row_below(sections.row_offsets(section), frozen_rows, target)
        };
        self.scan_items(
            elements,
            rect,
            section,
            first_row.saturating_mul(column_count),
            row_count.saturating_mul(column_count),
        );

        let footer_height = self.sections().section_footer_height(section);
        if footer_height > 0.0 && bottom - footer_height < rect.max_y() {
            self.scan_columns(elements, rect, |layout, column| {
                layout.section_footer_attributes(section, column)
            });
        }
    }

    /// Scan cell items `start..end` of `section`.
    ///
    /// Rows are visited top to bottom, so the first row starting at or below
    /// the rectangle's bottom ends the scan; a scrolling cell past the right
    /// edge skips the rest of its row.
    fn scan_items(
        &mut self,
        elements: &mut Vec<ElementAttributes>,
        rect: Rect,
        section: usize,
        start: usize,
        end: usize,
    ) {
        let column_count = self.column_count();
        let frozen_columns = self.frozen_column_count();
        let mut item = start;

        while item < end {
            let flat = FlatAddress::new(section, item);
            let address: LogicalAddress = flat.to_logical(column_count);
            let attributes = self.attributes_for_item(address);
            let frame = attributes.frame;

            if frame.intersects(&rect) {
                elements.push(attributes);
                item += 1;
            } else if frame.y >= rect.max_y() {
                break;
            } else if address.column >= frozen_columns && frame.x >= rect.max_x() {
                item = flat.next_row_start(column_count);
            } else {
                item += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_below() {
        let offsets = [0.0, 40.0, 80.0, 120.0, 160.0];
        assert_eq!(first_row_below(&offsets, 0, -10.0), 0);
        assert_eq!(first_row_below(&offsets, 0, 0.0), 0);
        assert_eq!(first_row_below(&offsets, 0, 40.0), 1);
        assert_eq!(first_row_below(&offsets, 0, 95.0), 2);
        assert_eq!(first_row_below(&offsets, 2, 10.0), 2);
        assert_eq!(first_row_below(&offsets, 0, 500.0), 4);
    }

    #[test]
    fn test_first_row_below_skips_zero_height_rows() {
        let offsets = [0.0, 40.0, 40.0, 40.0, 80.0];
        assert_eq!(first_row_below(&offsets, 0, 40.0), 3);
    }
}
