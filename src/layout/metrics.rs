//! Per-instance layout state that is derived lazily from the provider.

use super::cache::Memo;
use super::grouping::ColumnGroups;
use crate::types::Size;

/// Lazily computed layout metrics plus the engine's own settings.
///
/// Derived values are recomputed on first access after construction or
/// after [`LayoutMetrics::reset`].
#[derive(Debug, Clone)]
pub struct LayoutMetrics {
    pub(crate) content_size: Memo<Size>,
    pub(crate) frozen_column_count: Memo<usize>,
    pub(crate) frozen_row_counts: Memo<Vec<usize>>,
    pub(crate) column_groups: Memo<ColumnGroups>,
    pub(crate) zoom_scale: f32,
    pub(crate) sticky_section_headers: bool,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self {
            content_size: Memo::new(),
            frozen_column_count: Memo::new(),
            frozen_row_counts: Memo::new(),
            column_groups: Memo::new(),
            zoom_scale: 1.0,
            sticky_section_headers: true,
        }
    }

    /// Forget every derived value. With `reset_zoom` the zoom scale also
    /// returns to 1.0.
    pub fn reset(&mut self, reset_zoom: bool) {
        if reset_zoom {
            self.zoom_scale = 1.0;
        }
        self.content_size.invalidate();
        self.frozen_column_count.invalidate();
        self.frozen_row_counts.invalidate();
        self.column_groups.invalidate();
    }

    /// True if no derived value is cached
    pub fn is_reset(&self) -> bool {
        !self.content_size.is_computed()
            && !self.frozen_column_count.is_computed()
            && !self.frozen_row_counts.is_computed()
            && !self.column_groups.is_computed()
    }

    /// Current zoom scale
    pub fn zoom_scale(&self) -> f32 {
        self.zoom_scale
    }

    /// Whether section headers float while their section scrolls
    pub fn sticky_section_headers(&self) -> bool {
        self.sticky_section_headers
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_zoom_unless_asked() {
        let mut metrics = LayoutMetrics::new();
        metrics.zoom_scale = 2.0;
        metrics.frozen_column_count.set(3);
        metrics.reset(false);
        assert!(metrics.is_reset());
        assert_eq!(metrics.zoom_scale(), 2.0);
        metrics.reset(true);
        assert_eq!(metrics.zoom_scale(), 1.0);
    }
}
