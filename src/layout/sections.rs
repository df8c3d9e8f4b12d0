//! Section heights and cumulative vertical offsets.
//!
//! Row heights are not assumed uniform. Each section's row tops are summed
//! once into a prefix array kept in the [`GeometryCache`], which turns every
//! `row_height_sum` into two lookups.

use super::cache::GeometryCache;
use crate::provider::LayoutDataProvider;

/// Supplementary heights below zero (or NaN) mean "suppressed".
pub(crate) fn visible_height(height: f32) -> f32 {
    if height > 0.0 {
        height
    } else {
        0.0
    }
}

/// Vertical metrics over a provider, memoized in a [`GeometryCache`].
pub struct SectionMetrics<'a, P: ?Sized> {
    provider: &'a P,
    cache: &'a mut GeometryCache,
}

impl<'a, P: LayoutDataProvider + ?Sized> SectionMetrics<'a, P> {
    pub fn new(provider: &'a P, cache: &'a mut GeometryCache) -> Self {
        Self { provider, cache }
    }

    /// Grid header height, 0 when suppressed
    pub fn grid_header_height(&self) -> f32 {
        visible_height(self.provider.grid_header_height())
    }

    /// Grid footer height, 0 when suppressed
    pub fn grid_footer_height(&self) -> f32 {
        visible_height(self.provider.grid_footer_height())
    }

    /// Section header height, 0 when suppressed
    pub fn section_header_height(&self, section: usize) -> f32 {
        visible_height(self.provider.section_header_height(section))
    }

    /// Section footer height, 0 when suppressed
    pub fn section_footer_height(&self, section: usize) -> f32 {
        visible_height(self.provider.section_footer_height(section))
    }

    /// Row tops relative to the section's first row; the last entry is the
    /// total row height of the section.
    pub fn row_offsets(&mut self, section: usize) -> &[f32] {
        let provider = self.provider;
        self.cache.row_offsets.entry(section).or_insert_with(|| {
            let row_count = provider.row_count(section);
            let mut offsets = Vec::with_capacity(row_count + 1);
            let mut y: f32 = 0.0;
            for row in 0..row_count {
                offsets.push(y);
                y += provider.row_height(section, row);
            }
            offsets.push(y); // Final edge
            offsets
        })
    }

    /// Sum of the heights of rows `0..row`.
    pub fn row_offset(&mut self, section: usize, row: usize) -> f32 {
        let offsets = self.row_offsets(section);
        offsets
            .get(row)
            .or_else(|| offsets.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of the heights of rows `from_row..to_row` (exclusive end).
    pub fn row_height_sum(&mut self, section: usize, from_row: usize, to_row: usize) -> f32 {
        if to_row <= from_row {
            return 0.0;
        }
        self.row_offset(section, to_row) - self.row_offset(section, from_row)
    }

    /// Total height of all rows of `section`
    pub fn rows_height(&mut self, section: usize) -> f32 {
        self.row_offsets(section).last().copied().unwrap_or(0.0)
    }

    /// Section header + rows + section footer
    pub fn height_of_section(&mut self, section: usize) -> f32 {
        self.section_header_height(section)
            + self.rows_height(section)
            + self.section_footer_height(section)
    }

    /// Section tops relative to the bottom of the grid header; the last entry
    /// is the combined height of all sections.
    pub fn section_offsets(&mut self) -> &[f32] {
        if !self.cache.section_offsets.is_computed() {
            let section_count = self.provider.section_count();
            let mut offsets = Vec::with_capacity(section_count + 1);
            let mut y: f32 = 0.0;
            for section in 0..section_count {
                offsets.push(y);
                y += self.height_of_section(section);
            }
            offsets.push(y);
            self.cache.section_offsets.set(offsets);
        }
        self.cache
            .section_offsets
            .get()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sum of the heights of sections `0..section`, without the grid header
    pub fn sections_height_before(&mut self, section: usize) -> f32 {
        let offsets = self.section_offsets();
        offsets
            .get(section)
            .or_else(|| offsets.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Content y of the top of `section` (its header, if any): the grid
    /// header plus every earlier section.
    pub fn offset_before_section(&mut self, section: usize) -> f32 {
        self.grid_header_height() + self.sections_height_before(section)
    }

    /// Content y of the first row of `section`
    pub fn section_content_top(&mut self, section: usize) -> f32 {
        self.offset_before_section(section) + self.section_header_height(section)
    }

    /// Grid header + every section + grid footer
    pub fn content_height(&mut self) -> f32 {
        let sections = self.section_offsets().last().copied().unwrap_or(0.0);
        self.grid_header_height() + sections + self.grid_footer_height()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    /// Two sections with variable row heights
    struct Stepped;

    impl LayoutDataProvider for Stepped {
        fn section_count(&self) -> usize {
            2
        }
        fn column_count(&self) -> usize {
            1
        }
        fn row_count(&self, section: usize) -> usize {
            if section == 0 {
                3
            } else {
                2
            }
        }
        fn column_width(&self, _column: usize) -> f32 {
            10.0
        }
        fn row_height(&self, _section: usize, row: usize) -> f32 {
            10.0 * (row as f32 + 1.0)
        }
        fn grid_header_height(&self) -> f32 {
            50.0
        }
        fn grid_footer_height(&self) -> f32 {
            -5.0
        }
        fn section_header_height(&self, section: usize) -> f32 {
            if section == 1 {
                15.0
            } else {
                0.0
            }
        }
        fn section_footer_height(&self, _section: usize) -> f32 {
            5.0
        }
    }

    #[test]
    fn test_row_offsets() {
        let mut cache = GeometryCache::new();
        let mut metrics = SectionMetrics::new(&Stepped, &mut cache);
        assert_eq!(metrics.row_offsets(0), &[0.0, 10.0, 30.0, 60.0]);
        assert_eq!(metrics.row_height_sum(0, 1, 3), 50.0);
        assert_eq!(metrics.row_height_sum(0, 2, 2), 0.0);
        assert_eq!(metrics.row_height_sum(0, 3, 1), 0.0);
    }

    #[test]
    fn test_height_of_section_is_additive() {
        let mut cache = GeometryCache::new();
        let mut metrics = SectionMetrics::new(&Stepped, &mut cache);
        assert_eq!(metrics.height_of_section(0), 0.0 + 60.0 + 5.0);
        assert_eq!(metrics.height_of_section(1), 15.0 + 30.0 + 5.0);
    }

    #[test]
    fn test_cumulative_offsets() {
        let mut cache = GeometryCache::new();
        let mut metrics = SectionMetrics::new(&Stepped, &mut cache);
        assert_eq!(metrics.section_offsets(), &[0.0, 65.0, 115.0]);
        assert_eq!(metrics.offset_before_section(0), 50.0);
        assert_eq!(metrics.offset_before_section(1), 115.0);
        assert_eq!(metrics.section_content_top(1), 130.0);
    }

    #[test]
    fn test_negative_footer_is_suppressed() {
        let mut cache = GeometryCache::new();
        let mut metrics = SectionMetrics::new(&Stepped, &mut cache);
        assert_eq!(metrics.grid_footer_height(), 0.0);
        assert_eq!(metrics.content_height(), 50.0 + 115.0);
    }

    #[test]
    fn test_offsets_are_cached() {
        let mut cache = GeometryCache::new();
        SectionMetrics::new(&Stepped, &mut cache).content_height();
        assert!(cache.section_offsets.is_computed());
        assert_eq!(cache.row_offsets.len(), 2);
        assert_eq!(cache.row_offsets[&1], vec![0.0, 10.0, 30.0]);
    }
}
