//! Contract between the layout engine and the grid that hosts it.
//!
//! The host answers counts and sizes; the engine turns them into geometry.
//! Optional hooks have default implementations so a host only overrides what
//! it actually supports.

/// Counts and sizes the layout engine asks of its host.
///
/// Every method must be a pure function of its arguments for the duration of
/// one layout pass. Culling binary-searches row offsets and recomputes frames
/// afterwards; a provider whose heights change between those calls gets
/// undefined culling results.
pub trait LayoutDataProvider {
    /// Number of sections in the grid
    fn section_count(&self) -> usize;

    /// Number of columns, shared by all sections
    fn column_count(&self) -> usize;

    /// Number of rows in `section`
    fn row_count(&self, section: usize) -> usize;

    /// Unzoomed width of a column. Must be positive for visible columns.
    fn column_width(&self, column: usize) -> f32;

    /// Height of `row` in `section`
    fn row_height(&self, section: usize, row: usize) -> f32;

    /// Number of leading columns pinned to the left edge
    fn frozen_column_count(&self) -> usize {
        0
    }

    /// Number of leading rows of `section` pinned below its header
    fn frozen_row_count(&self, _section: usize) -> usize {
        0
    }

    /// Height of the grid header; 0 suppresses it
    fn grid_header_height(&self) -> f32 {
        0.0
    }

    /// Height of the grid footer; 0 suppresses it
    fn grid_footer_height(&self) -> f32 {
        0.0
    }

    /// Height of the header of `section`; 0 suppresses it
    fn section_header_height(&self, _section: usize) -> f32 {
        0.0
    }

    /// Height of the footer of `section`; 0 suppresses it
    fn section_footer_height(&self, _section: usize) -> f32 {
        0.0
    }

    /// Raw `[start, end]` column groupings. Malformed entries are dropped by
    /// the engine, not reported.
    fn column_groupings(&self) -> Vec<Vec<usize>> {
        Vec::new()
    }

    /// Sum of all unzoomed column widths
    fn total_column_width(&self) -> f32 {
        (0..self.column_count())
            .map(|column| self.column_width(column))
            .sum()
    }
}

impl<P: LayoutDataProvider + ?Sized> LayoutDataProvider for Box<P> {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn row_count(&self, section: usize) -> usize {
        (**self).row_count(section)
    }

    fn column_width(&self, column: usize) -> f32 {
        (**self).column_width(column)
    }

    fn row_height(&self, section: usize, row: usize) -> f32 {
        (**self).row_height(section, row)
    }

    fn frozen_column_count(&self) -> usize {
        (**self).frozen_column_count()
    }

    fn frozen_row_count(&self, section: usize) -> usize {
        (**self).frozen_row_count(section)
    }

    fn grid_header_height(&self) -> f32 {
        (**self).grid_header_height()
    }

    fn grid_footer_height(&self) -> f32 {
        (**self).grid_footer_height()
    }

    fn section_header_height(&self, section: usize) -> f32 {
        (**self).section_header_height(section)
    }

    fn section_footer_height(&self, section: usize) -> f32 {
        (**self).section_footer_height(section)
    }

    fn column_groupings(&self) -> Vec<Vec<usize>> {
        (**self).column_groupings()
    }

    fn total_column_width(&self) -> f32 {
        (**self).total_column_width()
    }
}
