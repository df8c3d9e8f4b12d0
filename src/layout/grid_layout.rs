//! The grid layout engine.
//!
//! [`GridLayout`] owns a [`LayoutDataProvider`] plus the viewport, and turns
//! the provider's counts and sizes into [`ElementAttributes`]. It owns no
//! content, only geometry. Headers and footers live in `sticky.rs`, grouped
//! headers in `grouping.rs` and rectangle queries in `culling.rs`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cache::GeometryCache;
use super::frozen::{self, FrozenRowContext, ZOrder};
use super::grouping::ColumnGroups;
use super::metrics::LayoutMetrics;
use super::sections::SectionMetrics;
use super::viewport::Viewport;
use super::zoom::zoom_modified;
use crate::provider::LayoutDataProvider;
use crate::types::{
    ColumnGrouping, ElementAttributes, ElementIndex, ElementKind, FlatAddress, LogicalAddress,
    Point, Rect, Size,
};

/// Where a scrolled-to cell should land vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalScrollPosition {
    /// Just below the pinned headers and frozen rows
    #[default]
    Top,
    Center,
    Bottom,
}

/// Where a scrolled-to cell should land horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalScrollPosition {
    /// Just right of the frozen columns
    #[default]
    Left,
    Center,
    Right,
}

/// Alignment used by [`GridLayout::rect_for_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub vertical: VerticalScrollPosition,
    pub horizontal: HorizontalScrollPosition,
}

impl ScrollPosition {
    pub fn new(vertical: VerticalScrollPosition, horizontal: HorizontalScrollPosition) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Serializable result of one layout query
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub content_size: Size,
    pub zoom_scale: f32,
    pub rect: Rect,
    pub elements: Vec<ElementAttributes>,
}

/// Layout engine for one grid.
///
/// Queries take `&mut self` because geometry is memoized on first use.
/// Every structural change goes through [`GridLayout::update_provider`],
/// [`GridLayout::reload_data`], [`GridLayout::set_zoom_scale`] or
/// [`GridLayout::reset_cached_parameters`], all of which clear the caches
/// before the next query.
#[derive(Debug)]
pub struct GridLayout<P> {
    pub(crate) provider: P,
    pub(crate) viewport: Viewport,
    pub(crate) metrics: LayoutMetrics,
    pub(crate) cache: GeometryCache,
}

impl<P: LayoutDataProvider> GridLayout<P> {
    /// Create a layout with the default viewport
    pub fn new(provider: P) -> Self {
        Self::with_viewport(provider, Viewport::new())
    }

    pub fn with_viewport(provider: P, viewport: Viewport) -> Self {
        Self {
            provider,
            viewport,
            metrics: LayoutMetrics::new(),
            cache: GeometryCache::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Mutate the provider, then reload so no stale geometry survives.
    pub fn update_provider<R>(&mut self, update: impl FnOnce(&mut P) -> R) -> R {
        let result = update(&mut self.provider);
        self.reload_data(false);
        result
    }

    /// Structural reload.
    ///
    /// Clears every cache (and the zoom, with `reset_size`), then pulls the
    /// vertical offset up if the content no longer reaches the bottom of the
    /// viewport.
    pub fn reload_data(&mut self, reset_size: bool) {
        self.reset_cached_parameters(reset_size);

        let content = self.content_size();
        if content.height - self.viewport.scroll_y < self.viewport.height {
            self.viewport.scroll_y = (content.height - self.viewport.height).max(0.0);
        }
        debug!(
            "reloaded grid: {} sections, {} columns, content {}x{}",
            self.provider.section_count(),
            self.provider.column_count(),
            content.width,
            content.height
        );
    }

    /// Forget every derived value. With `reset_size` the zoom returns to 1.0.
    pub fn reset_cached_parameters(&mut self, reset_size: bool) {
        self.metrics.reset(reset_size);
        self.cache.invalidate();
        debug!("layout caches reset (reset_size={reset_size})");
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    pub fn zoom_scale(&self) -> f32 {
        self.metrics.zoom_scale
    }

    pub fn sticky_section_headers(&self) -> bool {
        self.metrics.sticky_section_headers
    }

    /// Toggle floating section headers
    pub fn set_sticky_section_headers(&mut self, sticky: bool) {
        if self.metrics.sticky_section_headers != sticky {
            self.metrics.sticky_section_headers = sticky;
            self.reset_cached_parameters(false);
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport as-is. Hosts with their own scroll physics may
    /// overscroll; frozen panes and sticky headers ignore negative offsets.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the content offset without clamping
    pub fn set_content_offset(&mut self, x: f32, y: f32) {
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Scroll by a delta, clamped to the content. Returns true if the offset
    /// changed.
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) -> bool {
        let content = self.content_size();
        let before = (self.viewport.scroll_x, self.viewport.scroll_y);
        self.viewport.scroll_by(delta_x, delta_y, content);
        (self.viewport.scroll_x - before.0).abs() > f32::EPSILON
            || (self.viewport.scroll_y - before.1).abs() > f32::EPSILON
    }

    // ------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------

    pub fn column_count(&self) -> usize {
        self.provider.column_count()
    }

    pub fn section_count(&self) -> usize {
        self.provider.section_count()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.provider.row_count(section)
    }

    /// Frozen leading columns, clamped to the column count
    pub fn frozen_column_count(&mut self) -> usize {
        let provider = &self.provider;
        *self.metrics.frozen_column_count.get_or_compute(|| {
            frozen::clamp_frozen_count(provider.frozen_column_count(), provider.column_count())
        })
    }

    /// Frozen leading rows of `section`, clamped to its row count
    pub fn frozen_row_count(&mut self, section: usize) -> usize {
        let provider = &self.provider;
        self.metrics
            .frozen_row_counts
            .get_or_compute(|| {
                (0..provider.section_count())
                    .map(|s| frozen::clamp_frozen_count(provider.frozen_row_count(s), provider.row_count(s)))
                    .collect()
            })
            .get(section)
            .copied()
            .unwrap_or(0)
    }

    /// Validated column groupings
    pub fn column_groups(&mut self) -> &ColumnGroups {
        let provider = &self.provider;
        self.metrics.column_groups.get_or_compute(|| {
            ColumnGroups::from_raw(&provider.column_groupings(), provider.column_count())
        })
    }

    /// Groupings that survived validation, in ascending order
    pub fn column_groupings(&mut self) -> &[ColumnGrouping] {
        self.column_groups().groupings()
    }

    /// Every column covered by a valid grouping, ascending, without duplicates
    pub fn grouped_columns(&mut self) -> &[usize] {
        self.column_groups().grouped_columns()
    }

    // ------------------------------------------------------------------
    // Sizes and offsets
    // ------------------------------------------------------------------

    pub(crate) fn sections(&mut self) -> SectionMetrics<'_, P> {
        SectionMetrics::new(&self.provider, &mut self.cache)
    }

    /// Section header + rows + section footer
    pub fn height_of_section(&mut self, section: usize) -> f32 {
        self.sections().height_of_section(section)
    }

    /// Sum of the heights of rows `from_row..to_row` of `section`
    pub fn row_height_sum(&mut self, section: usize, from_row: usize, to_row: usize) -> f32 {
        self.sections().row_height_sum(section, from_row, to_row)
    }

    /// Content y where `section` begins
    pub fn offset_before_section(&mut self, section: usize) -> f32 {
        self.sections().offset_before_section(section)
    }

    /// Total scrollable size of the grid
    pub fn content_size(&mut self) -> Size {
        if let Some(size) = self.metrics.content_size.get() {
            return *size;
        }
        let width = self.provider.total_column_width() * self.metrics.zoom_scale;
        let height = self.sections().content_height();
        *self.metrics.content_size.set(Size::new(width, height))
    }

    /// Zoomed width of a column
    pub fn column_width(&self, column: usize) -> f32 {
        zoom_modified(self.provider.column_width(column), self.metrics.zoom_scale)
    }

    /// x of a column ignoring scroll
    pub fn static_column_offset(&mut self, column: usize) -> f32 {
        self.cache
            .column_offset(&self.provider, self.metrics.zoom_scale, column)
    }

    /// x of a column, with frozen columns pinned to the leading edge
    pub fn horizontal_offset(&mut self, column: usize) -> f32 {
        let offset = self.static_column_offset(column);
        if column < self.frozen_column_count() {
            frozen::frozen_column_offset(offset, self.viewport.scroll_x)
        } else {
            offset
        }
    }

    /// y of a cell ignoring scroll
    pub fn static_vertical_offset(&mut self, address: LogicalAddress) -> f32 {
        let key = address.to_flat(self.column_count());
        if let Some(offset) = self.cache.vertical_offsets.get(&key) {
            return *offset;
        }
        let mut sections = self.sections();
        let offset = sections.section_content_top(address.section)
            + sections.row_offset(address.section, address.row);
        self.cache.vertical_offsets.insert(key, offset);
        offset
    }

    /// y of a cell, with frozen rows pinned below the sticky headers
    pub fn vertical_offset(&mut self, address: LogicalAddress) -> f32 {
        let static_offset = self.static_vertical_offset(address);
        let frozen_rows = self.frozen_row_count(address.section);
        if address.row >= frozen_rows {
            return static_offset;
        }

        let section = address.section;
        let scroll_y = self.viewport.scroll_y;
        let sticky_section_headers = self.metrics.sticky_section_headers;
        let mut sections = self.sections();
        let ctx = FrozenRowContext {
            scroll_y,
            grid_header_height: sections.grid_header_height(),
            section_header_height: sections.section_header_height(section),
            section_footer_height: sections.section_footer_height(section),
            sticky_section_headers,
            row_offset: sections.row_offset(section, address.row),
            section_height: sections.height_of_section(section),
            frozen_block_height: sections.row_offset(section, frozen_rows),
        };
        frozen::frozen_row_offset(static_offset, &ctx)
    }

    pub(crate) fn z_order(&mut self) -> ZOrder {
        ZOrder::new(self.frozen_column_count())
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Geometry of one cell. The address must be in range.
    pub fn attributes_for_item(&mut self, address: LogicalAddress) -> ElementAttributes {
        let frame = Rect::new(
            self.horizontal_offset(address.column),
            self.vertical_offset(address),
            self.column_width(address.column),
            self.provider.row_height(address.section, address.row),
        );
        let in_frozen_row = address.row < self.frozen_row_count(address.section);
        let z_index = self.z_order().cell(address, in_frozen_row);

        ElementAttributes {
            kind: ElementKind::Cell,
            index: ElementIndex::Cell(address),
            frame,
            z_index,
        }
    }

    /// Geometry of one cell addressed in the flat item space
    pub fn attributes_for_flat(&mut self, address: FlatAddress) -> ElementAttributes {
        let logical = address.to_logical(self.column_count());
        self.attributes_for_item(logical)
    }

    /// Geometry of a supplementary element.
    ///
    /// `item` is the column for header-class kinds and the grouping index for
    /// grouped headers; `section` is ignored by grid headers, footers and
    /// grouped headers. Returns `None` for [`ElementKind::Cell`] and for a
    /// grouping index that does not exist.
    pub fn attributes_for_supplementary(
        &mut self,
        kind: ElementKind,
        section: usize,
        item: usize,
    ) -> Option<ElementAttributes> {
        match kind {
            ElementKind::Cell => None,
            ElementKind::GridHeader => Some(self.grid_header_attributes(item)),
            ElementKind::GridFooter => Some(self.grid_footer_attributes(item)),
            ElementKind::SectionHeader => Some(self.section_header_attributes(section, item)),
            ElementKind::SectionFooter => Some(self.section_footer_attributes(section, item)),
            ElementKind::GroupedHeader => self.grouped_header_attributes(item),
        }
    }

    // ------------------------------------------------------------------
    // Scroll targets and hit testing
    // ------------------------------------------------------------------

    /// Content offset that brings `address` into view at `position`.
    ///
    /// With the default top/left position the cell lands just below the
    /// pinned headers and frozen rows and just right of the frozen columns.
    /// Bottom/right add the cell's size; center adds half of it.
    pub fn rect_for_item(&mut self, address: LogicalAddress, position: ScrollPosition) -> Rect {
        let frozen_columns = self.frozen_column_count();
        let width = self.column_width(address.column);
        let mut x = if address.column > frozen_columns {
            self.static_column_offset(address.column) - self.static_column_offset(frozen_columns)
        } else {
            0.0
        };
        match position.horizontal {
            HorizontalScrollPosition::Left => {}
            HorizontalScrollPosition::Center => x += width / 2.0,
            HorizontalScrollPosition::Right => x += width,
        }

        let section = address.section;
        let height = self.provider.row_height(section, address.row);
        let frozen_rows = self.frozen_row_count(section);
        let mut sections = self.sections();
        let mut y = sections.sections_height_before(section)
            + sections.row_offset(section, address.row)
            - sections.row_offset(section, address.row.min(frozen_rows));
        match position.vertical {
            VerticalScrollPosition::Top => {}
            VerticalScrollPosition::Center => y += height / 2.0,
            VerticalScrollPosition::Bottom => y += height,
        }

        Rect::new(x, y, width, height)
    }

    /// Scroll so `address` is shown at `position`, without letting the
    /// viewport run past the end of the content on either axis. Returns the
    /// new offset.
    pub fn scroll_to_item(&mut self, address: LogicalAddress, position: ScrollPosition) -> Point {
        let target = self.rect_for_item(address, position);
        let content = self.content_size();
        let max = self.viewport.max_scroll(content);
        let x = target.x.min(max.x).max(0.0);
        let y = target.y.min(max.y).max(0.0);
        self.set_content_offset(x, y);
        Point::new(x, y)
    }

    /// Topmost element whose frame contains `point` (content coordinates)
    pub fn element_at_point(&mut self, point: Point) -> Option<ElementAttributes> {
        let pixel = Rect::new(point.x, point.y, 1.0, 1.0);
        self.elements_in_rect(pixel)
            .into_iter()
            .filter(|attributes| attributes.frame.contains(point))
            .max_by_key(|attributes| attributes.z_index)
    }

    /// Elements intersecting the current viewport
    pub fn visible_elements(&mut self) -> Vec<ElementAttributes> {
        let rect = self.viewport.visible_rect();
        self.elements_in_rect(rect)
    }

    /// Content size, zoom and the elements intersecting `rect`
    pub fn snapshot(&mut self, rect: Rect) -> LayoutSnapshot {
        let elements = self.elements_in_rect(rect);
        LayoutSnapshot {
            content_size: self.content_size(),
            zoom_scale: self.metrics.zoom_scale,
            rect,
            elements,
        }
    }
}
