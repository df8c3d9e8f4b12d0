//! Memoized geometry for the layout engine.
//!
//! Everything here is derived from the provider and the zoom scale. The
//! caches fill on first access and are cleared wholesale by
//! [`GeometryCache::invalidate`]; there is no incremental update.

use std::collections::HashMap;

use super::zoom::zoom_modified;
use crate::provider::LayoutDataProvider;
use crate::types::FlatAddress;

/// A lazily computed value with an explicit invalidation point.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    value: Option<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    /// Create an empty memo
    pub fn new() -> Self {
        Self { value: None }
    }

    /// The cached value, if computed
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Return the cached value, computing it first if needed.
    pub fn get_or_compute(&mut self, compute: impl FnOnce() -> T) -> &T {
        self.value.get_or_insert_with(compute)
    }

    /// Store a freshly computed value
    pub fn set(&mut self, value: T) -> &T {
        self.value.insert(value)
    }

    /// Forget the cached value
    pub fn invalidate(&mut self) {
        self.value = None;
    }

    /// True once a value has been computed and not invalidated since
    pub fn is_computed(&self) -> bool {
        self.value.is_some()
    }
}

/// Offset caches owned by one layout engine instance.
#[derive(Debug, Default, Clone)]
pub struct GeometryCache {
    /// Zoomed left edge of each column, plus the final right edge
    column_offsets: Memo<Vec<f32>>,
    /// Static (scroll independent) y of each cell
    pub(crate) vertical_offsets: HashMap<FlatAddress, f32>,
    /// Per section: top of each row relative to the section's first row,
    /// plus the bottom of the last row
    pub(crate) row_offsets: HashMap<usize, Vec<f32>>,
    /// Top of each section relative to the end of the grid header, plus the
    /// bottom of the last section
    pub(crate) section_offsets: Memo<Vec<f32>>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cached offset
    pub fn invalidate(&mut self) {
        self.column_offsets.invalidate();
        self.vertical_offsets.clear();
        self.row_offsets.clear();
        self.section_offsets.invalidate();
    }

    /// True if nothing is cached
    pub fn is_empty(&self) -> bool {
        !self.column_offsets.is_computed()
            && self.vertical_offsets.is_empty()
            && self.row_offsets.is_empty()
            && !self.section_offsets.is_computed()
    }

    /// Cumulative zoomed column edges (`offsets[i]` = x of column i's left edge)
    pub fn column_offsets<P: LayoutDataProvider + ?Sized>(
        &mut self,
        provider: &P,
        zoom_scale: f32,
    ) -> &[f32] {
        self.column_offsets.get_or_compute(|| {
            let column_count = provider.column_count();
            let mut offsets = Vec::with_capacity(column_count + 1);
            let mut x: f32 = 0.0;
            for column in 0..column_count {
                offsets.push(x);
                x += zoom_modified(provider.column_width(column), zoom_scale);
            }
            offsets.push(x); // Final edge
            offsets
        })
    }

    /// Static x of `column`'s left edge. Columns past the end map to the
    /// final edge.
    pub fn column_offset<P: LayoutDataProvider + ?Sized>(
        &mut self,
        provider: &P,
        zoom_scale: f32,
        column: usize,
    ) -> f32 {
        let offsets = self.column_offsets(provider, zoom_scale);
        offsets
            .get(column)
            .or_else(|| offsets.last())
            .copied()
            .unwrap_or(0.0)
    }
}
