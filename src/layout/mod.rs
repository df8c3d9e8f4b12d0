//! Layout engine for sectioned grids.
//!
//! This module handles:
//! - Memoized column, row and section offsets
//! - Frozen leading columns and rows
//! - Sticky grid and section headers, pinned grid footers
//! - Grouped column headers
//! - Binary search culling of the elements inside a rectangle
//! - Zoomed column widths
//!
//! [`GridLayout`] is the entry point; everything else hangs off it.

mod cache;
mod culling;
mod frozen;
mod grid_layout;
mod grouping;
mod metrics;
mod sections;
mod sticky;
mod viewport;
mod zoom;

pub use cache::{GeometryCache, Memo};
pub use frozen::{clamp_frozen_count, frozen_column_offset, frozen_row_offset, FrozenRowContext, ZOrder};
pub use grid_layout::{
    GridLayout, HorizontalScrollPosition, LayoutSnapshot, ScrollPosition, VerticalScrollPosition,
};
pub use grouping::{clip_group_width, ColumnGroups};
pub use metrics::LayoutMetrics;
pub use sections::SectionMetrics;
pub use sticky::{grid_footer_offset, grid_header_offset, section_footer_offset, section_header_offset};
pub use viewport::Viewport;
pub use zoom::{zoom_modified, ZoomController, MAX_PINCH_SCALE, MIN_PINCH_SCALE};
